//! Definition of errors.

use std::error::Error;
use std::fmt;

/// Errors in acmatch.
#[derive(Debug)]
pub enum AcmatchError {
    /// Contains [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),

    /// Contains [`PatternScaleError`].
    PatternScale(PatternScaleError),

    /// Contains [`AutomatonScaleError`].
    AutomatonScale(AutomatonScaleError),
}

impl AcmatchError {
    pub(crate) fn invalid_argument<T>(arg: &'static str, op: &'static str, value: T) -> Self
    where
        T: fmt::Display,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: format!("must be {op} {value}"),
        })
    }

    pub(crate) fn empty_pattern(index: usize) -> Self {
        Self::InvalidArgument(InvalidArgumentError {
            arg: "pattern.len()",
            msg: format!("must be >= 1, but the pattern at index {index} is empty"),
        })
    }

    pub(crate) fn pattern_scale<T>(arg: &'static str, max_value: T) -> Self
    where
        T: fmt::Display,
    {
        Self::PatternScale(PatternScaleError {
            msg: format!("{arg} must be <= {max_value}"),
        })
    }

    pub(crate) fn automaton_scale<T>(arg: &'static str, max_value: T) -> Self
    where
        T: fmt::Display,
    {
        Self::AutomatonScale(AutomatonScaleError {
            msg: format!("{arg} must be <= {max_value}"),
        })
    }
}

impl fmt::Display for AcmatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => fmt::Display::fmt(e, f),
            Self::PatternScale(e) => fmt::Display::fmt(e, f),
            Self::AutomatonScale(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl Error for AcmatchError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl InvalidArgumentError {
    /// Name of the offending argument.
    pub const fn arg(&self) -> &'static str {
        self.arg
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when the scale of input patterns exceeds the expected one.
#[derive(Debug)]
pub struct PatternScaleError {
    pub(crate) msg: String,
}

impl fmt::Display for PatternScaleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PatternScaleError: {}", self.msg)
    }
}

impl Error for PatternScaleError {}

/// Error used when the scale of the automaton exceeds the expected one.
#[derive(Debug)]
pub struct AutomatonScaleError {
    pub(crate) msg: String,
}

impl fmt::Display for AutomatonScaleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AutomatonScaleError: {}", self.msg)
    }
}

impl Error for AutomatonScaleError {}

/// A specialized Result type for acmatch.
pub type Result<T, E = AcmatchError> = core::result::Result<T, E>;
