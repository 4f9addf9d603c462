pub mod interactive;
pub mod predict;

pub use interactive::{parse_line, run_repl, InteractiveCommand, ReplCommand};
pub use predict::PredictCommand;
