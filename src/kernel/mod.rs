//! The dispatch kernel.
//!
//! # Data Flow
//! ```text
//! Request
//!     → dispatch.rs (Received → Matched → Resolved → Invoked → Responded)
//!     → arguments.rs (bind formal parameters by name)
//!     → Response (total: every failure becomes an error response)
//! ```
//!
//! # Design Decisions
//! - One synchronous pass per request; no suspension, no timeouts here
//! - All shared state (routes, registry) is read-only after boot
//! - Events fire before leaving Matched, Resolved and Responded, plus on
//!   every transition into the error state

pub mod arguments;
pub mod dispatch;

pub use arguments::resolve_arguments;
pub use dispatch::{DispatchState, Kernel};
