//! Error type definitions for field, curve and signature operations

use thiserror::Error;

/// Result type for bitecc operations
pub type Result<T> = core::result::Result<T, Error>;

/// Coarse classification of an [`Error`], independent of where it arose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A value constructed outside its valid domain
    Range,
    /// Coordinates that fail the curve equation
    Curve,
    /// An undefined algebraic operation (e.g. inverse of zero)
    Domain,
    /// Malformed DER signature bytes
    SignatureFormat,
    /// Wrong buffer length
    Length,
    /// Malformed text or prefix encoding (hex, Base58, SEC prefix, WIF)
    Encoding,
}

/// Primary error type for bitecc operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field element or scalar outside its valid domain
    #[error("{context}: value out of range: {message}")]
    Range {
        context: &'static str,
        message: String,
    },

    /// Coordinates that do not satisfy the curve equation, or points on
    /// different curves combined
    #[error("{context}: {message}")]
    Curve {
        context: &'static str,
        message: String,
    },

    /// Division by zero or another undefined algebraic operation
    #[error("{context}: undefined operation: {message}")]
    Domain {
        context: &'static str,
        message: String,
    },

    /// Malformed DER signature
    #[error("{context}: bad signature encoding: {message}")]
    SignatureFormat {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Malformed textual or prefix encoding
    #[error("{context}: encoding error: {message}")]
    Encoding {
        context: &'static str,
        message: String,
    },

    /// An error raised while decoding externally supplied bytes or strings
    #[error("malformed input to {context}: {source}")]
    MalformedInput {
        context: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Shorthand to create a Range error
    pub fn range(context: &'static str, message: impl Into<String>) -> Self {
        Self::Range {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a Curve error
    pub fn curve(context: &'static str, message: impl Into<String>) -> Self {
        Self::Curve {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a Domain error
    pub fn domain(context: &'static str, message: impl Into<String>) -> Self {
        Self::Domain {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a SignatureFormat error
    pub fn signature_format(context: &'static str, message: impl Into<String>) -> Self {
        Self::SignatureFormat {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Self::Encoding {
            context,
            message: message.into(),
        }
    }

    /// Mark this error as arising from externally supplied input.
    ///
    /// Wrapping is idempotent: an error that is already marked keeps its
    /// original context.
    pub fn into_malformed(self, context: &'static str) -> Self {
        match self {
            Self::MalformedInput { .. } => self,
            other => Self::MalformedInput {
                context,
                source: Box::new(other),
            },
        }
    }

    /// True if the error was raised while parsing external bytes or text
    /// rather than by an internal invariant violation.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    /// The classification of this error, looking through the
    /// malformed-input wrapper.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Range { .. } => ErrorKind::Range,
            Self::Curve { .. } => ErrorKind::Curve,
            Self::Domain { .. } => ErrorKind::Domain,
            Self::SignatureFormat { .. } => ErrorKind::SignatureFormat,
            Self::InvalidLength { .. } => ErrorKind::Length,
            Self::Encoding { .. } => ErrorKind::Encoding,
            Self::MalformedInput { source, .. } => source.kind(),
        }
    }
}
