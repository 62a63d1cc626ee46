//! Interactive contact book on top of [chain_table::ChainTable].
//!
//! Commands are read line by line, see [command::HELP] for the available commands.

pub mod command;
pub mod session;

pub use command::{Command, CommandError};
pub use session::Session;
