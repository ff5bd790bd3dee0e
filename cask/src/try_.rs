use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use thiserror::Error;

use crate::access::AccessError;
use crate::option::Option;

/// The normalized failure payload of a [`Try`]: a boxed error object.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A panic raised by a wrapped computation, normalized into an error value.
///
/// Produced when a captured panic payload is not already an error object: the usual string
/// payloads of `panic!` keep their message, anything else becomes an opaque message.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("caught panic: {message}")]
pub struct CaughtPanic {
  message: String,
}
impl CaughtPanic {
  #[inline]
  fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }

  #[inline]
  pub fn message(&self) -> &str {
    &self.message
  }
}

/// A success or a captured failure: the boundary container for computations that may panic.
///
/// Where [`Result`](crate::result::Result) carries failure as explicit data, `Try` captures
/// it: a panic inside `f` at any combinator boundary ([`map`](Self::map),
/// [`flat_map`](Self::flat_map), [`recover`](Self::recover)) is caught and converted into a
/// new `Failure` instead of unwinding through the caller.
///
/// To raise a typed error from inside a wrapped computation, panic with a [`BoxError`]
/// payload via `panic_any`; capture restores it identically. This is exactly what
/// [`unwrap`](Self::unwrap) does on `Failure`, so unwrapping one `Try` inside another
/// re-captures the original error unchanged.
#[derive(Debug)]
pub enum Try<T> {
  Success(T),
  Failure(BoxError),
}
impl<T> Try<T> {
  #[inline]
  pub fn success(value: T) -> Self {
    Self::Success(value)
  }

  #[inline]
  pub fn failure(error: impl Into<BoxError>) -> Self {
    Self::Failure(error.into())
  }

  #[inline]
  pub fn is_success(&self) -> bool {
    matches!(self, Self::Success(_))
  }

  #[inline]
  pub fn is_failure(&self) -> bool {
    matches!(self, Self::Failure(_))
  }


  /// Transform the success value, capturing a panic inside `f` as a new `Failure`.
  /// `Failure` passes through without invoking `f`.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Try<U> {
    match self {
      Self::Success(value) => sync_try(move || f(value)),
      Self::Failure(error) => Try::Failure(error),
    }
  }

  /// Chain a computation that itself produces a `Try`. A panic while running `f` becomes a
  /// `Failure`; the `Try` returned by `f` is passed through as-is. `Failure` passes through
  /// without invoking `f`.
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Try<U>) -> Try<U> {
    match self {
      Self::Success(value) => match panic::catch_unwind(AssertUnwindSafe(move || f(value))) {
        Ok(produced) => produced,
        Err(payload) => {
          let error = normalize_panic(payload);
          note_captured(&error);
          Try::Failure(error)
        }
      },
      Self::Failure(error) => Try::Failure(error),
    }
  }

  /// Turn a `Failure` back into a `Success` by computing a replacement value from the error.
  /// Subject to the same capture rule: a panic inside `f` produces a new `Failure` rather
  /// than unwinding. No-op on `Success`.
  #[inline]
  pub fn recover(self, f: impl FnOnce(BoxError) -> T) -> Try<T> {
    match self {
      Self::Success(value) => Try::Success(value),
      Self::Failure(error) => sync_try(move || f(error)),
    }
  }

  /// Exhaustive case dispatch: exactly one of the two closures runs.
  #[inline]
  pub fn fold<U>(self, on_success: impl FnOnce(T) -> U, on_failure: impl FnOnce(BoxError) -> U) -> U {
    match self {
      Self::Success(value) => on_success(value),
      Self::Failure(error) => on_failure(error),
    }
  }


  /// Return the success value.
  ///
  /// # Panics
  ///
  /// On `Failure`, re-raises the captured error: panics with the stored [`BoxError`] as
  /// typed payload, identity-preserved rather than wrapped again.
  #[inline]
  pub fn unwrap(self) -> T {
    match self {
      Self::Success(value) => value,
      Self::Failure(error) => panic::panic_any(error),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Success(value) => value,
      Self::Failure(_) => default,
    }
  }


  /// Convert to an [`Option`], discarding the captured error.
  #[inline]
  pub fn to_option(self) -> Option<T> {
    match self {
      Self::Success(value) => Option::Some(value),
      Self::Failure(_) => Option::None,
    }
  }
}

/// Run a computation, capturing a panic as `Failure`.
pub fn sync_try<T>(thunk: impl FnOnce() -> T) -> Try<T> {
  match panic::catch_unwind(AssertUnwindSafe(thunk)) {
    Ok(value) => Try::Success(value),
    Err(payload) => {
      let error = normalize_panic(payload);
      note_captured(&error);
      Try::Failure(error)
    }
  }
}

/// Await a pending computation, capturing a panic as `Failure` once it settles.
///
/// Cancellation semantics are inherited from `future`; no timeout or cancellation of its own.
pub async fn async_try<F: Future>(future: F) -> Try<F::Output> {
  match AssertUnwindSafe(future).catch_unwind().await {
    Ok(value) => Try::Success(value),
    Err(payload) => {
      let error = normalize_panic(payload);
      note_captured(&error);
      Try::Failure(error)
    }
  }
}

/// Normalize a panic payload into an error object before storage.
///
/// A payload that already is a [`BoxError`] (re-raised by [`Try::unwrap`]) is restored
/// identically; an [`AccessError`] (raised by the `unwrap` of the other containers) is boxed
/// as-is; string payloads keep their message; anything else becomes opaque.
fn normalize_panic(payload: Box<dyn std::any::Any + Send>) -> BoxError {
  match payload.downcast::<BoxError>() {
    Ok(error) => *error,
    Err(payload) => match payload.downcast::<AccessError>() {
      Ok(error) => error,
      Err(payload) => match payload.downcast::<String>() {
        Ok(message) => CaughtPanic::new(*message).into(),
        Err(payload) => match payload.downcast::<&'static str>() {
          Ok(message) => CaughtPanic::new(*message).into(),
          Err(_) => CaughtPanic::new("panic with a non-string payload").into(),
        },
      },
    },
  }
}

fn note_captured(error: &BoxError) {
  #[cfg(feature = "tracing")]
  tracing::debug!(error = %error, "captured panic as failure");
  #[cfg(not(feature = "tracing"))]
  let _ = error;
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Try<T> {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
    match self {
      Self::Success(value) => serializer.serialize_newtype_variant("Try", 0, "Success", value),
      Self::Failure(error) => serializer.serialize_newtype_variant("Try", 1, "Failure", &error.to_string()),
    }
  }
}
