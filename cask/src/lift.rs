//! Lift operations over collections of containers: combine many containers into one
//! container of many values, short-circuiting on the first failure or absence.
//!
//! No [`Either`](crate::either::Either) lifter: a symmetric container has no failure side to
//! short-circuit on.

use crate::option::Option;
use crate::result::Result;
use crate::try_::Try;

/// Combine an ordered sequence of containers into one container of an ordered `Vec`.
///
/// Walks front-to-back and returns the first `None`/`Err`/`Failure` immediately, dropping
/// the successes seen so far and never examining later items. When every item is on the good
/// side, returns the unwrapped values in their original order.
pub mod sequence {
  use super::{Option, Result, Try};

  pub fn option<T>(items: impl IntoIterator<Item = Option<T>>) -> Option<Vec<T>> {
    let mut values = Vec::new();
    for item in items {
      match item {
        Option::Some(value) => values.push(value),
        Option::None => return Option::None,
      }
    }
    Option::Some(values)
  }

  pub fn result<T, E>(items: impl IntoIterator<Item = Result<T, E>>) -> Result<Vec<T>, E> {
    let mut values = Vec::new();
    for item in items {
      match item {
        Result::Ok(value) => values.push(value),
        Result::Err(error) => return Result::Err(error),
      }
    }
    Result::Ok(values)
  }

  pub fn try_<T>(items: impl IntoIterator<Item = Try<T>>) -> Try<Vec<T>> {
    let mut values = Vec::new();
    for item in items {
      match item {
        Try::Success(value) => values.push(value),
        Try::Failure(error) => return Try::Failure(error),
      }
    }
    Try::Success(values)
  }
}

/// Map a function over items and combine the produced containers in one pass.
///
/// Fused [`sequence`]: same short-circuit and ordering behavior, and `f` is never invoked on
/// items past the one that produced the first failure.
pub mod traverse {
  use super::{sequence, Option, Result, Try};

  pub fn option<T, U>(items: impl IntoIterator<Item = T>, f: impl FnMut(T) -> Option<U>) -> Option<Vec<U>> {
    sequence::option(items.into_iter().map(f))
  }

  pub fn result<T, U, E>(items: impl IntoIterator<Item = T>, f: impl FnMut(T) -> Result<U, E>) -> Result<Vec<U>, E> {
    sequence::result(items.into_iter().map(f))
  }

  pub fn try_<T, U>(items: impl IntoIterator<Item = T>, f: impl FnMut(T) -> Try<U>) -> Try<Vec<U>> {
    sequence::try_(items.into_iter().map(f))
  }
}

impl<T> FromIterator<Option<T>> for Option<Vec<T>> {
  #[inline]
  fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
    sequence::option(iter)
  }
}
impl<T, E> FromIterator<Result<T, E>> for Result<Vec<T>, E> {
  #[inline]
  fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
    sequence::result(iter)
  }
}
impl<T> FromIterator<Try<T>> for Try<Vec<T>> {
  #[inline]
  fn from_iter<I: IntoIterator<Item = Try<T>>>(iter: I) -> Self {
    sequence::try_(iter)
  }
}
