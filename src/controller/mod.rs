//! Controller references and their resolution to invocable units.
//!
//! # Data Flow
//! ```text
//! ControllerReference (Direct | TypeAndMethod | QualifiedName)
//!     → reference.rs (parse "Type::method" strings)
//!     → registry.rs (type name → zero-argument factory)
//!     → resolver.rs (instantiate, bind method)
//!     → Return: Invocable + declared parameter list
//! ```
//!
//! # Design Decisions
//! - No runtime reflection: the `Controller` trait is the explicit
//!   signature-introspection seam, implemented natively per type
//! - Resolution happens per request; controller instances are
//!   request-scoped and never cached
//! - The registry's factories stand in for dependency-injection wiring,
//!   which is an external collaborator's concern

pub mod invocable;
pub mod reference;
pub mod registry;
pub mod resolver;

pub use invocable::{ArgValue, Invocable, Outcome, ParamSpec, ParamType};
pub use reference::ControllerReference;
pub use registry::{Controller, ControllerRegistry};
pub use resolver::resolve;
