mod call;
mod call_error;
mod rejection;
mod reply;

pub use call::Call;
pub use call_error::CallError;
pub use rejection::Rejection;
pub use reply::Reply;

pub(crate) use reply::Settle;
