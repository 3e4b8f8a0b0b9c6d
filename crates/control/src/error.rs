use sdf::SdfError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    #[error("malformed message {0:?}: expected `command:value`")]
    Malformed(String),
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("invalid argument for {command}: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
    #[error(transparent)]
    Scene(#[from] SdfError),
}
