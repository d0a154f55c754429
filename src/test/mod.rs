pub mod test_util;

#[cfg(test)]
mod test_grid;
