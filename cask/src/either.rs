use crate::access::AccessError;

/// A value that is one of two possibilities, with no success/failure connotation.
///
/// Fully symmetric: `Right` being "success" is a caller convention, not a property of the
/// type. For an error-carrying container use [`Result`](crate::result::Result) instead.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Either<L, R> {
  Left(L),
  Right(R),
}
impl<L, R> Either<L, R> {
  #[inline]
  pub fn left(value: L) -> Self {
    Self::Left(value)
  }

  #[inline]
  pub fn right(value: R) -> Self {
    Self::Right(value)
  }

  #[inline]
  pub fn is_left(&self) -> bool {
    matches!(self, Self::Left(_))
  }

  #[inline]
  pub fn is_right(&self) -> bool {
    matches!(self, Self::Right(_))
  }


  /// Transform the right value; `Left` passes through without invoking `f`.
  #[inline]
  pub fn map<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
    match self {
      Self::Left(value) => Either::Left(value),
      Self::Right(value) => Either::Right(f(value)),
    }
  }

  /// Transform the left value; `Right` passes through without invoking `f`.
  #[inline]
  pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
    match self {
      Self::Left(value) => Either::Left(f(value)),
      Self::Right(value) => Either::Right(value),
    }
  }

  /// Exhaustive case dispatch: exactly one of the two closures runs.
  #[inline]
  pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
    match self {
      Self::Left(value) => on_left(value),
      Self::Right(value) => on_right(value),
    }
  }


  /// Return the right value.
  ///
  /// # Panics
  ///
  /// Panics with [`AccessError::WrongSideAccess`] as typed payload when called on `Left`.
  #[inline]
  pub fn unwrap(self) -> R {
    match self {
      Self::Left(_) => std::panic::panic_any(AccessError::WrongSideAccess),
      Self::Right(value) => value,
    }
  }

  /// Return the left value.
  ///
  /// # Panics
  ///
  /// Panics with [`AccessError::WrongSideAccess`] as typed payload when called on `Right`.
  #[inline]
  pub fn unwrap_left(self) -> L {
    match self {
      Self::Left(value) => value,
      Self::Right(_) => std::panic::panic_any(AccessError::WrongSideAccess),
    }
  }
}
