//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (ordered table scan)
//!     → matcher.rs (anchored regex match, named captures)
//!     → Return: MatchResult or RouteNotFound
//!
//! Route Compilation (at boot):
//!     name + pattern + constraints + defaults
//!     → matcher.rs (compile `{name}` placeholders to named groups)
//!     → route.rs (validate constraint/default keys against placeholders)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Patterns compiled once at boot, immutable at runtime
//! - Matching is anchored: full-path, trailing slash significant
//! - Deterministic: first registered match wins, no specificity scoring
//! - Registration-time failures (bad pattern, duplicate name) are fatal

pub mod matcher;
pub mod route;
pub mod router;

pub use matcher::CompiledPattern;
pub use route::Route;
pub use router::{MatchResult, RouteTable};
