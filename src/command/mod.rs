//! Text command surface over [`VideoPlayer`](crate::player::VideoPlayer)

mod parser;
mod session;

pub use parser::{Command, CommandError, HELP_TEXT};
pub use session::Session;
