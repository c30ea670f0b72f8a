use hangman::cli::{CliInterface, parse_cli};
use hangman::config::{GameConfig, InterfaceKind};
use hangman::logging;
use hangman::run_games;
use hangman::tui::TuiInterface;
use std::io;

fn main() {
    let cli = parse_cli();
    let config = GameConfig::from_cli(&cli);
    logging::init(Some(config.log_path.as_path()));
    log::info!("Starting hangman with {:?} interface", config.interface);

    let summary = match config.interface {
        InterfaceKind::Cli => {
            let stdin = io::stdin();
            let mut interface = CliInterface::new(stdin.lock());
            run_games(&config, &mut interface)
        }
        InterfaceKind::Tui => {
            let mut interface = match TuiInterface::new() {
                Ok(interface) => interface,
                Err(e) => {
                    eprintln!("Terminal init failed: {e}");
                    return;
                }
            };
            let summary = run_games(&config, &mut interface);
            if let Err(e) = interface.cleanup() {
                eprintln!("Terminal cleanup failed: {e}");
            }
            summary
        }
    };

    println!("Thanks for playing! {summary}");
}
