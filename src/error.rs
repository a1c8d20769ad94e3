use thiserror::Error;

/// Errors raised by the exact number types and the expansion algorithms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid arguments were given to a constructor
    #[error("invalid initialization: {0}")]
    Initialization(String),

    /// The reciprocal of an exact zero was requested
    #[error("division by zero")]
    DivisionByZero,

    /// Neither operand order supports the requested binary operation
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A bounded algorithm ran out of steps before finishing
    #[error("step limit of {0} exceeded")]
    StepLimitExceeded(usize),
}

impl Error {
    #[inline]
    pub(crate) fn init<S: Into<String>>(msg: S) -> Self {
        Error::Initialization(msg.into())
    }
}
