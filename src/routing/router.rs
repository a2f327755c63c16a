//! Route table: ordered lookup with first-match-wins semantics.
//!
//! # Responsibilities
//! - Hold routes in registration order
//! - Answer "first matching route for this path"
//! - Reverse lookup by name, for link generation by collaborators
//!
//! # Design Decisions
//! - Immutable after boot (safe for concurrent reads without locks)
//! - O(n) ordered scan; declaration order is the tie-break, not specificity
//! - Explicit RouteNotFound rather than a silent default route

use std::collections::HashMap;

use crate::error::KernelError;
use crate::routing::route::Route;

/// The matched route plus the values captured from the path.
///
/// Created fresh per request and discarded once the response is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    route_name: String,
    params: HashMap<String, String>,
}

impl MatchResult {
    /// Build a match result. Public so event subscribers can substitute
    /// their own (e.g. rerouting to a fallback route).
    pub fn new(route_name: impl Into<String>, params: HashMap<String, String>) -> Self {
        Self {
            route_name: route_name.into(),
            params,
        }
    }

    /// Name of the matched route.
    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    /// All captured path parameters.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// A single captured path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered registry of routes. Built once at boot, read-only afterwards.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Registration order is the match-priority order.
    pub fn add(&mut self, route: Route) -> Result<(), KernelError> {
        if self.routes.iter().any(|r| r.name() == route.name()) {
            return Err(KernelError::DuplicateRouteName(route.name().to_string()));
        }
        self.routes.push(route);
        Ok(())
    }

    /// First route (in registration order) whose pattern matches `path`.
    pub fn match_path(&self, path: &str) -> Result<MatchResult, KernelError> {
        for route in &self.routes {
            if let Some(params) = route.matches(path) {
                tracing::debug!(route = route.name(), path, "Route matched");
                return Ok(MatchResult::new(route.name(), params));
            }
        }
        Err(KernelError::RouteNotFound {
            path: path.to_string(),
        })
    }

    /// Reverse lookup by route name.
    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name() == name)
    }

    /// Generate a URL for the named route (reverse of matching).
    pub fn generate(
        &self,
        name: &str,
        params: &HashMap<&str, &str>,
    ) -> Result<String, KernelError> {
        let route = self
            .find_by_name(name)
            .ok_or_else(|| KernelError::RouteNotFound {
                path: name.to_string(),
            })?;
        route.generate(params)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ControllerReference, Invocable, Outcome};

    fn noop() -> ControllerReference {
        ControllerReference::Direct(Invocable::new(vec![], |_| {
            Ok(Outcome::Body(String::new()))
        }))
    }

    fn table(routes: &[(&str, &str)]) -> RouteTable {
        let mut t = RouteTable::new();
        for (name, pattern) in routes {
            t.add(Route::new(name, pattern, noop()).unwrap()).unwrap();
        }
        t
    }

    #[test]
    fn test_first_registered_route_wins() {
        let t = table(&[("exact", "/x"), ("catch_all", "/{any}")]);
        let m = t.match_path("/x").unwrap();
        assert_eq!(m.route_name(), "exact");
        // The later route still matches everything else
        let m = t.match_path("/y").unwrap();
        assert_eq!(m.route_name(), "catch_all");
        assert_eq!(m.param("any"), Some("y"));
    }

    #[test]
    fn test_matching_is_deterministic() {
        let t = table(&[("a", "/{first}"), ("b", "/{second}")]);
        for _ in 0..3 {
            assert_eq!(t.match_path("/v").unwrap().route_name(), "a");
        }
    }

    #[test]
    fn test_no_match_is_route_not_found() {
        let t = table(&[("blog", "/blog/{id}")]);
        let err = t.match_path("/about").unwrap_err();
        assert!(matches!(err, KernelError::RouteNotFound { path } if path == "/about"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut t = table(&[("home", "/")]);
        let err = t
            .add(Route::new("home", "/elsewhere", noop()).unwrap())
            .unwrap_err();
        assert!(matches!(err, KernelError::DuplicateRouteName(name) if name == "home"));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_find_by_name() {
        let t = table(&[("home", "/"), ("blog", "/blog/{id}")]);
        assert_eq!(t.find_by_name("blog").unwrap().pattern(), "/blog/{id}");
        assert!(t.find_by_name("missing").is_none());
    }

    #[test]
    fn test_generate_by_name() {
        let t = table(&[("blog", "/blog/{id}")]);
        let mut params = HashMap::new();
        params.insert("id", "42");
        assert_eq!(t.generate("blog", &params).unwrap(), "/blog/42");
        assert!(t.generate("missing", &params).is_err());
    }
}
