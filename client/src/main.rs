mod config;
mod console;

use clap::Parser;
use tictactoe_common::games::tictactoe::{SessionCommand, TicTacToeSession};
use tictactoe_common::log;
use tictactoe_common::logger::{self, LogTarget};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use config::Validate;
use console::{ConsoleBroadcaster, HELP_TEXT, InputCommand};

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    /// Overrides the computer's thinking delay from the config.
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = config::get_config_manager(&args.config).get_config()?;
    if let Some(delay_ms) = args.delay_ms {
        config.game.computer_delay_ms = delay_ms;
    }
    config.validate()?;

    let prefix = (args.use_log_prefix || config.use_log_prefix).then(|| "Client".to_string());
    logger::init_logger(prefix, LogTarget::Stderr);
    log!("Computer delay is {} ms", config.game.computer_delay_ms);

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let session = TicTacToeSession::new(config.game);
    let session_handle = tokio::spawn(session.run(command_rx, ConsoleBroadcaster));

    println!("{}", HELP_TEXT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match console::parse_input(&line) {
            Ok(InputCommand::Help) => println!("{}", HELP_TEXT),
            Ok(InputCommand::Session(command)) => {
                if command_tx.send(command).is_err() || command == SessionCommand::Shutdown {
                    break;
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    drop(command_tx);
    let final_state = session_handle.await?;
    log!(
        "Left at ply {} of {}: {}",
        final_state.ply(),
        final_state.history_len() - 1,
        final_state.status_text()
    );

    Ok(())
}
