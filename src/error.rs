//! Errors raised around the tree: validating keys typed by a user and
//! parsing host commands. The tree itself never fails.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong before a key reaches the [`Tree`][crate::tree::Tree].
#[derive(Error, Debug)]
pub enum Error {
    /// Nothing was entered where a key was expected.
    #[error("no key given")]
    Empty,

    /// The input contained something other than ASCII digits.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// The input was all digits but does not fit in a key.
    #[error("number out of range: {0}")]
    OutOfRange(String),

    /// The first word of a command line isn't a known command.
    #[error("unknown command: {0:?} (try `help`)")]
    UnknownCommand(String),

    /// A command that needs a key was given none.
    #[error("`{0}` needs a key")]
    MissingArgument(&'static str),

    /// The layout spread has to be a positive, finite number.
    #[error("invalid spread: {0}")]
    InvalidSpread(f64),
}
