//! Error types
//!
//! Fatal conditions are carried up to the binary as [`GameError`], which
//! reports them and exits. Capacity overflows are asserted instead, since
//! the fixed enumerations can never reach them.

use thiserror::Error;

/// Map generation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("unable to place the RANSOMWARE within {max_steps} traverser steps")]
    BossPlacement { max_steps: u32 },

    #[error("no system type left to hold the RANSOMWARE")]
    PoolExhausted,
}

/// Failures reading the player's input stream
#[derive(Error, Debug)]
pub enum InputError {
    #[error("encountered EOF reading stdin")]
    Eof,

    #[error("encountered error reading stdin: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration file errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

/// Any error that ends the process
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Options(#[from] OptionsError),
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(InputError::Eof.to_string(), "encountered EOF reading stdin");
        assert_eq!(
            OptionsError::InvalidValue("move_chance".into(), "200".into()).to_string(),
            "Invalid value '200' for option 'move_chance'"
        );
        let err: GameError = GenerationError::BossPlacement { max_steps: 100 }.into();
        assert_eq!(
            err.to_string(),
            "unable to place the RANSOMWARE within 100 traverser steps"
        );
    }
}
