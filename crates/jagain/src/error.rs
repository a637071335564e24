//! Error types for jagain.
//!
//! [`UnwrapError`] describes misuse of the extracting accessors
//! ([`Maybe::unwrap`](crate::Maybe::unwrap), [`Outcome::unwrap`](crate::Outcome::unwrap),
//! [`Outcome::unwrap_error`](crate::Outcome::unwrap_error)). The panicking
//! accessors use its rendering as the panic message; the `try_*` accessors
//! hand it back as an ordinary value.

/// Boxed error used as the default failure type of [`Outcome`](crate::Outcome).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Misuse of an extracting accessor on a container in the wrong state.
///
/// All variants are marked with `#[non_exhaustive]` to allow
/// adding new misuse kinds without breaking changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum UnwrapError {
    /// A value was requested from an absent `Maybe`.
    #[error("called `unwrap()` on an absent value")]
    Absent,

    /// A success value was requested from a failed `Outcome`.
    #[error("called `unwrap()` on a failure: {message}")]
    Failure {
        /// Rendering of the wrapped error
        message: String,
    },

    /// An error was requested from a successful `Outcome`.
    #[error("called `unwrap_error()` on a success")]
    Success,
}

/// Convenience `Result` type alias for the non-panicking accessors.
pub type Result<T> = std::result::Result<T, UnwrapError>;

impl UnwrapError {
    /// Creates a failure misuse carrying the wrapped error's rendering.
    pub fn failure<S: Into<String>>(message: S) -> Self {
        UnwrapError::Failure {
            message: message.into(),
        }
    }

    /// Short machine-friendly name of the misuse kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            UnwrapError::Absent => "absent",
            UnwrapError::Failure { .. } => "failure",
            UnwrapError::Success => "success",
        }
    }

    /// Logs the misuse and aborts the current operation.
    #[allow(clippy::panic)]
    pub(crate) fn raise(self) -> ! {
        tracing::error!(kind = self.kind(), "{self}");
        panic!("{self}")
    }
}
