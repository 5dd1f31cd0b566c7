//! DSI protocol implementation

use std::io::{self, Write};
use anyhow::{bail, ensure, Context, Result};
use junglr::{
    core::{Move, Side},
    engine::Engine,
};

/// Handle a DSI command
pub fn handle_command(cmd: &str, engine: &mut Engine) -> Result<()> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(());
    }

    match parts[0] {
        "dsi" => {
            println!("id name Junglr author Ritam Nag");
            println!("option name strategy type string default lookahead");
            println!("option name strictmode type bool default false");
            println!("dsiok");
            io::stdout().flush()?;
        }
        "isready" => {
            println!("readyok");
            io::stdout().flush()?;
        }
        "setoption" => {
            ensure!(
                parts.len() == 5 && parts[1] == "name" && parts[3] == "value",
                "invalid setoption command"
            );

            engine.set_option(parts[2], parts[4])?;
        }
        "newgame" => {
            let seed = match parts.get(1) {
                Some(s) => Some(s.parse::<u64>().context("invalid seed")?),
                None => None,
            };

            engine.new_game(seed);
        }
        "click" => {
            ensure!(parts.len() == 3, "click requires x and y");

            let x = parts[1].parse::<i32>().context("invalid x coordinate")?;
            let y = parts[2].parse::<i32>().context("invalid y coordinate")?;

            engine.click(x, y);
        }
        "move" | "reveal" => {
            let mv: Move = cmd.parse()?;
            engine.play(mv)?;
        }
        "go" => {
            let mv = engine.go()?;
            println!("bestmove {}", mv);

            if let Some(outcome) = engine.outcome() {
                println!("info result {}", outcome);
            }
        }
        "display" => {
            engine.display();
        }
        "turn" => {
            println!("turn {}", engine.turn());
        }
        "result" => {
            let score = engine.final_score();
            println!("result {} {}", score[Side::Red], score[Side::Blue]);

            if let Some(outcome) = engine.outcome() {
                println!("info result {}", outcome);
            }
        }
        "quit" => {
            std::process::exit(0);
        }
        cmd => {
            bail!("Unknown command: {}", cmd);
        }
    }

    Ok(())
}
