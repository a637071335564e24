//! Optional value container.

use std::fmt;

use crate::error::{self, UnwrapError};
use crate::outcome::Outcome;

/// A value of type `T`, or nothing.
///
/// `Maybe` replaces sentinel values and nullable references at API
/// boundaries: the absent case is part of the type, and every way of
/// consuming the value forces the caller to say what happens without it.
///
/// # Examples
///
/// ```
/// use jagain::Maybe;
///
/// let port = Maybe::present(8080);
/// assert_eq!(port.map(|p| p + 1).unwrap_or(80), 8081);
///
/// let missing: Maybe<u16> = Maybe::absent();
/// assert_eq!(missing.unwrap_or(80), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value.
    ///
    /// Declared first so that `Absent` orders below every `Present`, as
    /// `None` does for [`Option`].
    Absent,

    /// A value is present.
    Present(T),
}

impl<T> Maybe<T> {
    /// Creates a `Maybe` holding `value`.
    pub fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Creates an empty `Maybe`.
    pub fn absent() -> Self {
        Maybe::Absent
    }

    /// Returns `true` if a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if no value is present.
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Extracts the held value, panicking if absent.
    ///
    /// Only call this once presence has been established; use
    /// [`try_unwrap`](Self::try_unwrap) or one of the fallbacks otherwise.
    ///
    /// # Panics
    ///
    /// Panics with the rendering of [`UnwrapError::Absent`] if absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use jagain::Maybe;
    ///
    /// assert_eq!(Maybe::present(42).unwrap(), 42);
    /// ```
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => UnwrapError::Absent.raise(),
        }
    }

    /// Extracts the held value, or reports the misuse as an error.
    pub fn try_unwrap(self) -> error::Result<T> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(UnwrapError::Absent),
        }
    }

    /// Returns the held value, or `default` if absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// Returns the held value, or computes one from a closure.
    ///
    /// The closure runs only when absent.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => f(),
        }
    }

    /// Maps a `Maybe<T>` to `Maybe<U>` by applying a function to the held value.
    ///
    /// `f` is never invoked when absent.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chains a computation that may itself produce nothing.
    ///
    /// Returns `f(value)` when present, and `Absent` without calling `f`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use jagain::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::present(n / 2) } else { Maybe::absent() };
    /// assert_eq!(Maybe::present(8).flat_map(half), Maybe::present(4));
    /// assert_eq!(Maybe::present(3).flat_map(half), Maybe::absent());
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Invokes exactly one of the two branches and returns its result.
    pub fn match_with<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    /// Converts to an [`Outcome`], using `error` for the absent case.
    ///
    /// # Examples
    ///
    /// ```
    /// use jagain::{Maybe, Outcome};
    ///
    /// let email: Maybe<&str> = Maybe::absent();
    /// let outcome: Outcome<&str, &str> = email.to_outcome("user has no email");
    /// assert_eq!(outcome.unwrap_error(), "user has no email");
    /// ```
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Maybe::Present(value) => Outcome::Success(value),
            Maybe::Absent => Outcome::Failure(error),
        }
    }

    /// Converts to an [`Outcome`], producing the error lazily.
    ///
    /// The closure runs only when absent.
    pub fn to_outcome_with<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Present(value) => Outcome::Success(value),
            Maybe::Absent => Outcome::Failure(f()),
        }
    }

    /// Borrows the held value.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Converts into the standard library's [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: Clone> Maybe<T> {
    /// Bridges from a nullable reference, copying the referent.
    ///
    /// `None` becomes `Absent`.
    pub fn from_ref(value: Option<&T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value.clone()),
            None => Maybe::Absent,
        }
    }

    /// Bridges to a nullable owned pointer holding a fresh copy of the value.
    ///
    /// Mutating through the returned box never changes this container.
    pub fn to_boxed(&self) -> Option<Box<T>> {
        match self {
            Maybe::Present(value) => Some(Box::new(value.clone())),
            Maybe::Absent => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(value) => write!(f, "Present({value})"),
            Maybe::Absent => write!(f, "Absent"),
        }
    }
}
