//! Domain types.

mod credential;
mod remote;

pub use credential::Credential;
pub use remote::Remote;
