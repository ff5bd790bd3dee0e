use thiserror::Error;

/// Failure signal raised by `unwrap` calls on the non-matching variant of a container.
///
/// Raised as a typed panic payload via `panic_any`, so callers that catch the unwind can
/// downcast to this type instead of matching on a message string.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum AccessError {
  #[error("unwrap called on an absent value")]
  EmptyValueAccess,
  #[error("unwrap called on the wrong side of a two-sided value")]
  WrongSideAccess,
}
