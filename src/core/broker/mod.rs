//! Client side of the broker HTTP management API.
//!
//! - `request.rs` - request model and path-segment encoding
//! - `client.rs` - [`ManagementClient`] trait and the `reqwest` implementation
//! - `error.rs` - transport failures
//!
//! Nothing here knows about tools. The tools domain builds a
//! [`BrokerRequest`] and hands it to whichever client the server was built with.

mod client;
mod error;
mod request;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{HttpManagementClient, ManagementClient};
pub use error::BrokerError;
pub use request::{BrokerRequest, HttpMethod, build_path, encode_segment};
