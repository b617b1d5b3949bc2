use core::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A token in the raw input did not parse as an integer.
    InvalidValue(String),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidValue(token) => write!(fmt, "not a valid integer: {:?}", token),
        }
    }
}
