pub mod access;
pub mod convert;
pub mod either;
pub mod lift;
pub mod option;
pub mod result;
pub mod try_;

pub use access::AccessError;
pub use either::Either;
pub use lift::{sequence, traverse};
pub use option::Option;
pub use result::Result;
pub use try_::{async_try, sync_try, BoxError, CaughtPanic, Try};
