use junglr::{core::GameConfig, Engine};
use std::io::{self, BufRead};

mod dsi;
use dsi::command::parse_command;
use dsi::protocol::handle_command;

fn main() {
    println!("Junglr - Jungle Chess Engine");

    let stdin = io::stdin();
    let config = GameConfig::default();
    let mut engine = Engine::new(config);

    for line in stdin.lock().lines() {
        let input = match line {
            Ok(input) => input,
            Err(_) => break,
        };

        if let Some(cmd) = parse_command(&input) {
            if let Err(err) = handle_command(&cmd, &mut engine) {
                if engine.options.strict_mode {
                    panic!("{}", err);
                } else {
                    eprintln!("{}", err);
                }
            }
        }
    }
}
