use crate::access::AccessError;
use crate::either::Either;
use crate::result::Result;
use crate::try_::{BoxError, Try};

/// An optionally present value: either [`Some`](Self::Some) holding a value, or the empty
/// [`None`](Self::None).
///
/// Shadows the prelude `Option` on purpose; refer to it as `cask::Option`. Unlike the prelude
/// type it converts into the other containers of this crate via [`to_result`](Self::to_result),
/// [`to_try`](Self::to_try) and [`to_either`](Self::to_either).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Option<T> {
  Some(T),
  #[default]
  None,
}
impl<T> Option<T> {
  #[inline]
  pub fn some(value: T) -> Self {
    Self::Some(value)
  }

  /// The empty value. Zero-sized per instantiated `T`; freely copyable.
  #[inline]
  pub fn none() -> Self {
    Self::None
  }

  #[inline]
  pub fn is_some(&self) -> bool {
    matches!(self, Self::Some(_))
  }

  #[inline]
  pub fn is_none(&self) -> bool {
    matches!(self, Self::None)
  }


  /// Transform the present value; `None` passes through without invoking `f`.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
    match self {
      Self::Some(value) => Option::Some(f(value)),
      Self::None => Option::None,
    }
  }

  /// Chain a computation that may itself come up empty. `None` passes through without
  /// invoking `f`.
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
    match self {
      Self::Some(value) => f(value),
      Self::None => Option::None,
    }
  }

  /// Keep the value only when `predicate` holds for it.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Some(value) if predicate(&value) => Self::Some(value),
      _ => Self::None,
    }
  }

  /// Return `self` when present, `alternative` otherwise.
  #[inline]
  pub fn or(self, alternative: Self) -> Self {
    match self {
      Self::Some(value) => Self::Some(value),
      Self::None => alternative,
    }
  }

  /// Exhaustive case dispatch: exactly one of the two closures runs.
  #[inline]
  pub fn fold<U>(self, on_some: impl FnOnce(T) -> U, on_none: impl FnOnce() -> U) -> U {
    match self {
      Self::Some(value) => on_some(value),
      Self::None => on_none(),
    }
  }


  /// Return the present value.
  ///
  /// # Panics
  ///
  /// Panics with [`AccessError::EmptyValueAccess`] as typed payload when called on `None`.
  #[inline]
  pub fn unwrap(self) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => std::panic::panic_any(AccessError::EmptyValueAccess),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => default,
    }
  }

  /// Like [`unwrap_or`](Self::unwrap_or), but `f` is only evaluated on the `None` path.
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => f(),
    }
  }


  /// Convert to a [`Result`], with `Some` becoming `Ok`. `error_if_none` is used only when
  /// the source is empty.
  #[inline]
  pub fn to_result<E>(self, error_if_none: E) -> Result<T, E> {
    match self {
      Self::Some(value) => Result::Ok(value),
      Self::None => Result::Err(error_if_none),
    }
  }

  /// Convert to a [`Try`], with `Some` becoming `Success`. `error_if_none` is used only when
  /// the source is empty.
  #[inline]
  pub fn to_try(self, error_if_none: impl Into<BoxError>) -> Try<T> {
    match self {
      Self::Some(value) => Try::Success(value),
      Self::None => Try::Failure(error_if_none.into()),
    }
  }

  /// Convert to an [`Either`], with `Some` becoming `Right`. `left_if_none` is used only when
  /// the source is empty.
  #[inline]
  pub fn to_either<L>(self, left_if_none: L) -> Either<L, T> {
    match self {
      Self::Some(value) => Either::Right(value),
      Self::None => Either::Left(left_if_none),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::panic;

  use crate::access::AccessError;
  use crate::either::Either;
  use crate::option::Option;
  use crate::result::Result;

  #[test]
  fn map_applies_to_present_value() {
    assert_eq!(Option::some(2).map(|v| v * 21), Option::some(42));
  }

  #[test]
  fn map_identity_law() {
    assert_eq!(Option::some(5).map(|v| v), Option::some(5));
  }

  #[test]
  fn map_short_circuits_on_none() {
    let mut calls = 0;
    let mapped = Option::<i32>::none().map(|v| {
      calls += 1;
      v * 2
    });
    assert_eq!(mapped, Option::none());
    assert_eq!(calls, 0);
  }

  #[test]
  fn flat_map_chains_and_short_circuits() {
    let chained = Option::some(4).flat_map(|v| if v > 3 { Option::some(v + 1) } else { Option::none() });
    assert_eq!(chained, Option::some(5));
    assert_eq!(Option::some(1).flat_map(|_| Option::<i32>::none()), Option::none());

    let mut calls = 0;
    let from_none = Option::<i32>::none().flat_map(|v| {
      calls += 1;
      Option::some(v)
    });
    assert_eq!(from_none, Option::none());
    assert_eq!(calls, 0);
  }

  #[test]
  fn filter_keeps_matching_values_only() {
    assert_eq!(Option::some(4).filter(|v| v % 2 == 0), Option::some(4));
    assert_eq!(Option::some(3).filter(|v| v % 2 == 0), Option::none());
    assert_eq!(Option::<i32>::none().filter(|_| true), Option::none());
  }

  #[test]
  fn or_falls_back_only_when_empty() {
    assert_eq!(Option::some(1).or(Option::some(2)), Option::some(1));
    assert_eq!(Option::none().or(Option::some(2)), Option::some(2));
  }

  #[test]
  fn fold_runs_exactly_one_branch() {
    assert_eq!(Option::some(3).fold(|v| v + 1, || 0), 4);
    assert_eq!(Option::<i32>::none().fold(|v| v + 1, || 0), 0);
  }

  #[test]
  fn unwrap_panics_with_empty_value_access_on_none() {
    let payload = panic::catch_unwind(|| Option::<i32>::none().unwrap()).unwrap_err();
    let error = payload.downcast::<AccessError>().unwrap();
    assert_eq!(*error, AccessError::EmptyValueAccess);
  }

  #[test]
  fn unwrap_or_else_is_lazy() {
    let mut calls = 0;
    let value = Option::some(1).unwrap_or_else(|| {
      calls += 1;
      9
    });
    assert_eq!(value, 1);
    assert_eq!(calls, 0);
    assert_eq!(Option::<i32>::none().unwrap_or_else(|| 9), 9);
  }

  #[test]
  fn to_result_uses_error_only_when_empty() {
    assert_eq!(Option::some(1).to_result("gone"), Result::ok(1));
    assert_eq!(Option::<i32>::none().to_result("gone"), Result::err("gone"));
  }

  #[test]
  fn to_try_uses_error_only_when_empty() {
    assert!(Option::some(1).to_try(AccessError::EmptyValueAccess).is_success());
    let failed = Option::<i32>::none().to_try(AccessError::EmptyValueAccess);
    assert!(failed.is_failure());
  }

  #[test]
  fn to_either_puts_present_values_on_the_right() {
    assert_eq!(Option::some(1).to_either("empty"), Either::right(1));
    assert_eq!(Option::<i32>::none().to_either("empty"), Either::left("empty"));
  }
}
