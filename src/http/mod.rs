//! Minimal HTTP contracts consumed and produced by the kernel.
//!
//! # Data Flow
//! ```text
//! Transport (out of scope)
//!     → request.rs (method, path, multi-valued query, headers)
//!     → Kernel::handle
//!     → response.rs (status, headers, body bytes)
//!     → Transport (out of scope)
//! ```
//!
//! # Design Decisions
//! - Built on the `http` crate primitives (Method, StatusCode, HeaderMap)
//! - Query strings parsed once at construction, multi-valued
//! - No body on the request side: this kernel binds from path and query only

pub mod request;
pub mod response;

pub use request::Request;
pub use response::Response;
