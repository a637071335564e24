//! Success-or-failure container.

use std::fmt;

use crate::error::{self, BoxError, UnwrapError};
use crate::maybe::Maybe;

/// The outcome of an operation: a value of type `T`, or an error.
///
/// Failures are ordinary values. They flow through [`map`](Self::map) and
/// [`flat_map`](Self::flat_map) chains untouched, short-circuiting the
/// remaining steps, and only become fatal when a caller insists on
/// [`unwrap`](Self::unwrap).
///
/// [`unwrap`](Self::unwrap) and [`try_unwrap`](Self::try_unwrap) embed the
/// error's [`Display`](fmt::Display) rendering in their diagnostic, so they
/// require `E: Display`. An error type with only `Debug` can still be
/// consumed through [`unwrap_or_else`](Self::unwrap_or_else),
/// [`match_with`](Self::match_with) or [`map_error`](Self::map_error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E = BoxError> {
    /// The operation succeeded.
    Success(T),

    /// The operation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Creates a failed outcome.
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Returns `true` if the outcome is `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Extracts the error, panicking on success.
    ///
    /// # Panics
    ///
    /// Panics with the rendering of [`UnwrapError::Success`] if the outcome
    /// is `Success`.
    pub fn unwrap_error(self) -> E {
        match self {
            Outcome::Success(_) => UnwrapError::Success.raise(),
            Outcome::Failure(error) => error,
        }
    }

    /// Extracts the error, or reports the misuse as an error.
    pub fn try_unwrap_error(self) -> error::Result<E> {
        match self {
            Outcome::Success(_) => Err(UnwrapError::Success),
            Outcome::Failure(error) => Ok(error),
        }
    }

    /// Returns the success value, or a default on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    ///
    /// The closure runs only on failure.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Maps an `Outcome<T, E>` to `Outcome<U, E>` by applying a function to the success value.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the error of a failure, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use jagain::Outcome;
    ///
    /// let lookup: Outcome<u32, String> = Outcome::failure("user with ID 999 not found".into());
    /// let wrapped = lookup.map_error(|e| format!("while getting user email: {e}"));
    /// assert_eq!(
    ///     wrapped.unwrap_error(),
    ///     "while getting user email: user with ID 999 not found"
    /// );
    /// ```
    pub fn map_error<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a fallible computation on the success value.
    ///
    /// A failure is returned as-is without calling `f`.
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Invokes exactly one of the two branches and returns its result.
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Converts to a [`Maybe`], discarding any error.
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Outcome::Success(value) => Maybe::Present(value),
            Outcome::Failure(_) => Maybe::Absent,
        }
    }

    /// Borrows the error, if any.
    pub fn error(&self) -> Maybe<&E> {
        match self {
            Outcome::Success(_) => Maybe::Absent,
            Outcome::Failure(error) => Maybe::Present(error),
        }
    }

    /// Converts into the standard library's [`Result`], so `?` can take over
    /// at a boundary.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E: fmt::Display> Outcome<T, E> {
    /// Extracts the success value, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics with the rendering of [`UnwrapError::Failure`], which embeds
    /// the wrapped error, if the outcome is `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jagain::Outcome;
    ///
    /// let parsed: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(parsed.unwrap(), 42);
    /// ```
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => UnwrapError::failure(error.to_string()).raise(),
        }
    }

    /// Extracts the success value, or reports the misuse as an error.
    pub fn try_unwrap(self) -> error::Result<T> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(UnwrapError::failure(error.to_string())),
        }
    }
}

/// Maps the success value of `outcome` into a different type.
///
/// Standalone form of [`Outcome::map`]; a failure comes back as a failure of
/// the new type carrying the original error.
pub fn map_to<T, U, E, F>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> U,
{
    outcome.map(f)
}

/// Chains a fallible computation that changes the success type.
///
/// Standalone form of [`Outcome::flat_map`].
///
/// # Examples
///
/// ```
/// use jagain::{flat_map_to, Outcome};
///
/// let raw: Outcome<&str, String> = Outcome::success("17");
/// let id = flat_map_to(raw, |s| match s.parse::<u32>() {
///     Ok(n) => Outcome::success(n),
///     Err(e) => Outcome::failure(format!("invalid user ID format: {e}")),
/// });
/// assert_eq!(id, Outcome::success(17));
/// ```
pub fn flat_map_to<T, U, E, F>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    outcome.flat_map(f)
}

/// Invokes exactly one of the two branches and returns its result.
///
/// Standalone form of [`Outcome::match_with`].
pub fn match_to<T, E, R, S, F>(outcome: Outcome<T, E>, on_success: S, on_failure: F) -> R
where
    S: FnOnce(T) -> R,
    F: FnOnce(E) -> R,
{
    outcome.match_with(on_success, on_failure)
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({value})"),
            Outcome::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}
