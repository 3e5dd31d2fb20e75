//! The request descriptor and response envelope exchanged with the proxy
//! integration in front of the gateway.

mod envelope;
mod types;

pub use envelope::{error, success, ERROR_TYPE};
pub use types::{ErrorBody, ProxyRequest, ProxyResponse};
