use crate::core::{AgentId, Direction, GameState, Grid, Occupant, Vec2};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

/// Level literals: '#' obstacle, '$' movable block, ' ' floor, '1' agent A,
/// '2' agent B. Short rows are padded with floor.
pub fn parse_level(s: &str) -> GameState {
    let mut rows: Vec<Vec<Occupant>> = Vec::new();
    let mut pos_a = Vec2 { x: 0, y: 0 };
    let mut pos_b = Vec2 { x: 0, y: 0 };
    let max_width = s.lines().map(|line| line.len()).max().unwrap_or(0);

    let mut y = 0;
    for line in s.lines() {
        let line = line.trim_matches('\n');
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for (x, ch) in line.chars().enumerate() {
            let occupant = match ch {
                '#' => Occupant::Obstacle,
                '$' => Occupant::Movable,
                '1' => {
                    pos_a = Vec2 { x: x as i32, y };
                    Occupant::Floor
                }
                '2' => {
                    pos_b = Vec2 { x: x as i32, y };
                    Occupant::Floor
                }
                _ => Occupant::Floor,
            };
            row.push(occupant);
        }
        while row.len() < max_width {
            row.push(Occupant::Floor);
        }
        rows.push(row);
        y += 1;
    }

    let height = rows.len() as i32;
    let grid = Grid::from_fn(max_width as i32, height, |pos| {
        rows[pos.y as usize][pos.x as usize]
    });

    GameState::new(grid, pos_a, pos_b)
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_text = render_game_to_string(&state.game);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Dual Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = "Agent A: WASD | Agent B: Arrow keys | Q to quit";

        let instructions = if let Some(err) = &state.error {
            format!("{} | Error: {}", instructions, err)
        } else {
            instructions.to_string()
        };

        let instructions = if let Some(change) = &state.last_change {
            format!("{} | Last: A {:?}, B {:?}", instructions, change.a, change.b)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn render_game_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for y in 0..game.grid.height() {
        for x in 0..game.grid.width() {
            let pos = Vec2 { x, y };
            let ch = if pos == game.agent_pos(AgentId::A) {
                '1'
            } else if pos == game.agent_pos(AgentId::B) {
                '2'
            } else {
                match game.grid[&pos] {
                    Occupant::Obstacle => '#',
                    Occupant::Movable => '$',
                    Occupant::Floor => ' ',
                }
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    Steer(AgentId, Direction),
    Quit,
    Timeout,
    Unknown,
}

/// WASD steers agent A, arrow keys steer agent B, matching the dual
/// keyboard split of the two-player original.
pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') => {
                    ConsoleInput::Steer(AgentId::A, Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    ConsoleInput::Steer(AgentId::A, Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') => {
                    ConsoleInput::Steer(AgentId::A, Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') => {
                    ConsoleInput::Steer(AgentId::A, Direction::Right)
                }
                KeyCode::Up => ConsoleInput::Steer(AgentId::B, Direction::Up),
                KeyCode::Down => ConsoleInput::Steer(AgentId::B, Direction::Down),
                KeyCode::Left => ConsoleInput::Steer(AgentId::B, Direction::Left),
                KeyCode::Right => ConsoleInput::Steer(AgentId::B, Direction::Right),
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
