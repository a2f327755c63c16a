//! Lifecycle events and the synchronous subscriber bus.
//!
//! # Design Decisions
//! - Events are published synchronously, in subscription order, on the
//!   request's own call stack
//! - Subscribers receive `&mut Event` and may replace the in-flight value
//!   (match, invocable, response, or error response) for the remainder of
//!   the pipeline; this is the only integration seam collaborators get
//! - A failing subscriber aborts the pipeline exactly like a failing
//!   controller body

pub mod bus;
pub mod subscribers;

pub use bus::{Event, EventBus, EventKind};
pub use subscribers::RequestLogger;
