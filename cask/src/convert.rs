//! Conversions between the containers of this crate, and interop with the prelude types.
//!
//! Only datum-free conversions live here as `From` impls; the ones that need a fallback
//! value (`to_result`, `to_try`, `to_either`) are methods on [`Option`], and the
//! error-discarding direction is `to_option` on [`Result`](crate::result::Result) and
//! [`Try`]. `Either` stays out: it encodes no success/failure meaning to convert along.

use crate::option::Option;
use crate::result::Result;
use crate::try_::{BoxError, Try};

impl<T> From<core::option::Option<T>> for Option<T> {
  #[inline]
  fn from(option: core::option::Option<T>) -> Self {
    match option {
      Some(value) => Self::Some(value),
      None => Self::None,
    }
  }
}
impl<T> From<Option<T>> for core::option::Option<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    option.fold(Some, || None)
  }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
  #[inline]
  fn from(result: core::result::Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Ok(value),
      Err(error) => Self::Err(error),
    }
  }
}
impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    result.fold(Ok, Err)
  }
}

/// A captured failure surfaces as an ordinary error value.
impl<T> From<Try<T>> for Result<T, BoxError> {
  #[inline]
  fn from(outcome: Try<T>) -> Self {
    match outcome {
      Try::Success(value) => Self::Ok(value),
      Try::Failure(error) => Self::Err(error),
    }
  }
}
/// An error value becomes a captured failure, normalized into a [`BoxError`].
impl<T, E: Into<BoxError>> From<Result<T, E>> for Try<T> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Result::Ok(value) => Self::Success(value),
      Result::Err(error) => Self::Failure(error.into()),
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::access::AccessError;
  use crate::option::Option;
  use crate::result::Result;
  use crate::try_::{BoxError, Try};

  #[test]
  fn std_option_interop_preserves_payloads() {
    assert_eq!(Option::from(Some(1)), Option::some(1));
    assert_eq!(Option::<i32>::from(None), Option::none());
    assert_eq!(core::option::Option::from(Option::some(1)), Some(1));
    assert_eq!(core::option::Option::<i32>::from(Option::none()), None);
  }

  #[test]
  fn std_result_interop_preserves_payloads() {
    assert_eq!(Result::<_, &str>::from(Ok(1)), Result::ok(1));
    assert_eq!(Result::<i32, _>::from(Err("no")), Result::err("no"));
    assert_eq!(core::result::Result::from(Result::<_, &str>::ok(1)), Ok(1));
  }

  #[test]
  fn try_converts_to_result_keeping_the_error() {
    let converted: Result<i32, BoxError> = Try::<i32>::failure(AccessError::WrongSideAccess).into();
    let error = match converted {
      Result::Err(error) => error,
      Result::Ok(_) => panic!("expected an error"),
    };
    assert_eq!(*error.downcast::<AccessError>().unwrap(), AccessError::WrongSideAccess);
    assert_eq!(Result::<i32, BoxError>::from(Try::success(1)).unwrap_or(0), 1);
  }

  #[test]
  fn result_converts_to_try_normalizing_the_error() {
    let converted: Try<i32> = Result::<i32, AccessError>::err(AccessError::WrongSideAccess).into();
    assert!(converted.is_failure());
    assert_eq!(Try::from(Result::<_, AccessError>::ok(1)).unwrap(), 1);
  }
}
