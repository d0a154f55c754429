pub mod console_interface;
pub mod core;
pub mod models;
pub mod test;
