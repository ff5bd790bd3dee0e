use crate::option::Option;

/// A success or a typed error: [`Ok`](Self::Ok) holding a value, or [`Err`](Self::Err) holding
/// a caller-chosen error.
///
/// Shadows the prelude `Result` on purpose; refer to it as `cask::Result`. `E` is open: this
/// crate never inspects or constrains its shape, and it need not be an error type at all.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Result<T, E> {
  Ok(T),
  Err(E),
}
impl<T, E> Result<T, E> {
  #[inline]
  pub fn ok(value: T) -> Self {
    Self::Ok(value)
  }

  #[inline]
  pub fn err(error: E) -> Self {
    Self::Err(error)
  }

  #[inline]
  pub fn is_ok(&self) -> bool {
    matches!(self, Self::Ok(_))
  }

  #[inline]
  pub fn is_err(&self) -> bool {
    matches!(self, Self::Err(_))
  }


  /// Transform the success payload; `Err` passes through with the same error, without
  /// invoking `f`.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
    match self {
      Self::Ok(value) => Result::Ok(f(value)),
      Self::Err(error) => Result::Err(error),
    }
  }

  /// Transform the error payload; `Ok` passes through unchanged, without invoking `f`.
  #[inline]
  pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
    match self {
      Self::Ok(value) => Result::Ok(value),
      Self::Err(error) => Result::Err(f(error)),
    }
  }

  /// Exhaustive case dispatch: exactly one of the two closures runs.
  #[inline]
  pub fn fold<U>(self, on_ok: impl FnOnce(T) -> U, on_err: impl FnOnce(E) -> U) -> U {
    match self {
      Self::Ok(value) => on_ok(value),
      Self::Err(error) => on_err(error),
    }
  }


  /// Return the success value.
  ///
  /// # Panics
  ///
  /// Panics on `Err` with the stored error value itself as typed payload; the error is the
  /// failure signal, never wrapped.
  #[inline]
  pub fn unwrap(self) -> T where
    E: Send + 'static,
  {
    match self {
      Self::Ok(value) => value,
      Self::Err(error) => std::panic::panic_any(error),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Ok(value) => value,
      Self::Err(_) => default,
    }
  }


  /// Convert to an [`Option`], discarding the error. This is the only operation that loses
  /// error information; use it when callers only care about presence.
  #[inline]
  pub fn to_option(self) -> Option<T> {
    match self {
      Self::Ok(value) => Option::Some(value),
      Self::Err(_) => Option::None,
    }
  }
}
