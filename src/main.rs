// Two-player CLI Sokoban with ratatui
// Agent A: W/A/S/D. Agent B: arrow keys. Q to quit. Both agents move once per
// tick; contested moves cancel for the tick.
// Tiles: '#' obstacle, '$' movable block, '1' agent A, '2' agent B, ' ' floor.
// `script` mode instead reads one "<dirA> <dirB>" line per tick from stdin
// (letters U D L R, '.' for stay) and prints a JSON snapshot per tick.

use std::io::{self, BufRead};
use std::time::{Duration, Instant};

use DualSokoban::console_interface::ConsoleInput::*;
use DualSokoban::console_interface::{
    cleanup_terminal, handle_input, parse_level, render_game, render_game_to_string, setup_terminal,
};
use DualSokoban::core::{
    AgentId, Direction, GameState, TickChange, TickCommands, TickUpdate, resolve_tick,
};
use DualSokoban::models::GameRenderState;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use serde::Serialize;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let switch = std::env::args().nth(1).unwrap_or("interactive".to_string());

    let level = r#"
##########################
#                        #
#   $$       ##          #
#    $        #    $$    #
#             #          #
#     ###          $     #
#                        #
#         $  $           #
#   ##          ##       #
#                        #
#     1            2     #
#                        #
#    $      ##     $     #
#           ##           #
#    ##            ##    #
#            $           #
#      $        $        #
#   #              #     #
#                        #
##########################
"#;
    //     let level = r#"
    // ########
    // #1 $ 2 #
    // #  $$  #
    // ########
    // "#;

    let game = parse_level(level);

    match switch.as_str() {
        "script" => {
            run_scripted(game)?;
        }
        "interactive" => {
            let mut terminal = setup_terminal()?;
            let result = run_interactive(game, &mut terminal);
            cleanup_terminal()?;
            result?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive' or 'script'. defaulting to interactive",
                switch
            );
            let mut terminal = setup_terminal()?;
            let result = run_interactive(game, &mut terminal);
            cleanup_terminal()?;
            result?;
        }
    }

    Ok(())
}

fn run_interactive(
    game: GameState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = GameRenderState {
        game,
        error: None,
        last_change: None,
    };
    let mut pending = TickCommands::idle();
    let mut last_tick = Instant::now();

    loop {
        render_game(terminal, &state)?;

        match handle_input()? {
            Quit => break,
            Steer(id, dir) => pending.set(id, dir),
            Timeout | Unknown => {}
        }

        // The most recent key per agent within the window becomes that
        // agent's direction for the tick; no key means stay.
        if last_tick.elapsed() >= TICK_INTERVAL {
            apply_tick(&mut state, pending);
            pending = TickCommands::idle();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn apply_tick(state: &mut GameRenderState, commands: TickCommands) {
    match resolve_tick(&state.game, commands) {
        TickUpdate::NextState(next, change) => {
            state.game = next;
            state.last_change = Some(change);
            state.error = None;
        }
        TickUpdate::Error(err) => {
            state.error = Some(err.to_string());
        }
    }
}

#[derive(Serialize)]
struct AgentSnapshot {
    id: AgentId,
    x: i32,
    y: i32,
}

#[derive(Serialize)]
struct TickSnapshot {
    tick: usize,
    agents: [AgentSnapshot; 2],
    outcomes: TickChange,
    grid: Vec<String>,
}

impl TickSnapshot {
    fn capture(tick: usize, game: &GameState, change: TickChange) -> TickSnapshot {
        TickSnapshot {
            tick,
            agents: game.agents.map(|a| AgentSnapshot {
                id: a.id,
                x: a.pos.x,
                y: a.pos.y,
            }),
            outcomes: change,
            grid: render_game_to_string(game)
                .lines()
                .map(str::to_string)
                .collect(),
        }
    }
}

fn run_scripted(mut game: GameState) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut tick = 0usize;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let commands = match parse_command_line(line) {
            Ok(commands) => commands,
            Err(msg) => {
                eprintln!("skipping line: {msg}");
                continue;
            }
        };

        match resolve_tick(&game, commands) {
            TickUpdate::NextState(next, change) => {
                game = next;
                tick += 1;
                println!("{}", serde_json::to_string(&TickSnapshot::capture(tick, &game, change))?);
            }
            TickUpdate::Error(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}

fn parse_direction(token: &str) -> Result<Direction, String> {
    match token {
        "U" | "u" => Ok(Direction::Up),
        "D" | "d" => Ok(Direction::Down),
        "L" | "l" => Ok(Direction::Left),
        "R" | "r" => Ok(Direction::Right),
        "." => Ok(Direction::Stay),
        _ => Err(format!("unknown direction token: {token}")),
    }
}

fn parse_command_line(line: &str) -> Result<TickCommands, String> {
    let mut tokens = line.split_whitespace();
    let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(format!("expected two direction tokens, got: {line}"));
    };

    Ok(TickCommands {
        a: parse_direction(a)?,
        b: parse_direction(b)?,
    })
}
