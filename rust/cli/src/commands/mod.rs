//! Command handler modules for the blackjack CLI.
//!
//! Each command lives in its own module and exposes one
//! `handle_COMMAND_command(...) -> Result<(), CliError>` function. Output
//! streams (and stdin for `play`) are passed in so handlers can be driven from
//! tests.

mod cfg;
mod eval;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
