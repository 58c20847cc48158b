//! IC-ID Protocol Types
//!
//! Shape declarations for protocol-native and OAuth2 wire messages.

pub mod bearer;
pub mod message;
pub mod request;
pub mod response;
pub mod scope;

pub use bearer::*;
pub use message::*;
pub use request::*;
pub use response::*;
pub use scope::*;
