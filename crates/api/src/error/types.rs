//! Error type definitions for modulus construction and element encoding

/// Primary error type for the arithmetic engine
///
/// The arithmetic itself cannot fail on well-formed fixed-width inputs, so
/// every variant here describes a rejected *input to set-up code*: a modulus
/// that cannot support Montgomery arithmetic, or a malformed encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Value is not below the modulus it is meant to be reduced by
    NotCanonical {
        context: &'static str,
    },

    /// Encoding could not be parsed
    InvalidEncoding {
        context: &'static str,
    },
}

/// Result type for engine set-up operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::NotCanonical { .. } => Self::NotCanonical { context },
            Self::InvalidEncoding { .. } => Self::InvalidEncoding { context },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::NotCanonical { context } => {
                write!(f, "{}: value is not reduced modulo p", context)
            }
            Self::InvalidEncoding { context } => {
                write!(f, "Invalid encoding: {}", context)
            }
        }
    }
}
