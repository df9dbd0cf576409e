//! ddsnip — generates ready-to-run Go programs for the Datadog API.
//!
//! The library is a pure string-template generator: a [`GenerationRequest`]
//! goes in, a complete Go program comes out as a [`Snippet`]. Nothing is
//! compiled, executed, or sent anywhere.

mod error;
mod naming;
mod params;
mod request;
mod version;

pub mod generate;

pub use error::RequestError;
pub use generate::{Snippet, generate};
pub use naming::{camel_case, entry_point_name};
pub use request::GenerationRequest;
pub use version::ClientVersion;
