//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration: the ordered route declarations.
///
/// Declaration order in the file is the match-priority order.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct KernelConfig {
    /// Route definitions, in match-priority order.
    pub routes: Vec<RouteConfig>,
}

/// One declared route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Unique route name (used for reverse lookup and logging).
    pub name: String,

    /// Path template with `{name}` placeholders.
    pub pattern: String,

    /// Controller qualified name, `"Type::method"`.
    pub controller: String,

    /// Per-placeholder regular-expression constraints.
    #[serde(default)]
    pub constraints: HashMap<String, String>,

    /// Per-placeholder fallback values.
    #[serde(default)]
    pub defaults: HashMap<String, String>,
}
