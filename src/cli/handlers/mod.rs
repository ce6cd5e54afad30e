mod replay;
pub use replay::{ReplayReport, Skipped, cmd_replay, replay_actions};

use crate::cli::commands::{Cli, Commands};
use crate::model::Config;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        None => crate::tui::run(config),
        Some(Commands::Replay(args)) => Ok(cmd_replay(&args, config)?),
    }
}
