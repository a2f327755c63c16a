//! Declarative route configuration.
//!
//! # Data Flow
//! ```text
//! routes.toml
//!     → loader.rs (read, TOML parse)
//!     → validation.rs (semantic checks, all errors reported)
//!     → RouteTable (compiled, immutable)
//! ```
//!
//! # Design Decisions
//! - Controllers in config are `"Type::method"` qualified names; inline
//!   invocables can only be registered in code
//! - Validation is a pure function over the parsed config and reports
//!   every problem, not just the first
//! - Any configuration error is fatal to startup, never recovered

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{build_table, load_routes, ConfigError};
pub use schema::{KernelConfig, RouteConfig};
pub use validation::{validate_config, ValidationError};
