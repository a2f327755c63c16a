//! A single route definition.
//!
//! # Responsibilities
//! - Tie a unique name and a compiled pattern to a controller reference
//! - Validate constraint/default keys against the pattern's placeholders
//! - Generate URLs for this route (reverse of matching)
//!
//! # Design Decisions
//! - Routes are immutable once constructed and owned by the RouteTable
//! - Defaults fill placeholders the match did not capture (or captured
//!   empty); they never make a missing path segment legal
//! - Constraint regexes are precompiled anchored for URL generation

use std::collections::HashMap;

use regex::Regex;

use crate::controller::ControllerReference;
use crate::error::KernelError;
use crate::routing::matcher::CompiledPattern;

/// An immutable mapping from a URL pattern to a controller reference.
#[derive(Debug, Clone)]
pub struct Route {
    name: String,
    pattern: CompiledPattern,
    controller: ControllerReference,
    constraints: HashMap<String, Regex>,
    defaults: HashMap<String, String>,
}

impl Route {
    /// Create a route without constraints or defaults.
    pub fn new(
        name: &str,
        pattern: &str,
        controller: ControllerReference,
    ) -> Result<Self, KernelError> {
        Self::with_options(name, pattern, controller, HashMap::new(), HashMap::new())
    }

    /// Create a route with placeholder constraints and defaults.
    ///
    /// Every key in `constraints` and `defaults` must name a placeholder
    /// that appears in `pattern`; anything else is an
    /// [`KernelError::InvalidRoutePattern`] at construction.
    pub fn with_options(
        name: &str,
        pattern: &str,
        controller: ControllerReference,
        constraints: HashMap<String, String>,
        defaults: HashMap<String, String>,
    ) -> Result<Self, KernelError> {
        let compiled = CompiledPattern::compile(pattern, &constraints)?;

        for key in constraints.keys().chain(defaults.keys()) {
            if !compiled.param_names().contains(key) {
                return Err(KernelError::InvalidRoutePattern {
                    pattern: pattern.to_string(),
                    reason: format!("`{key}` does not name a placeholder in the pattern"),
                });
            }
        }

        let mut anchored = HashMap::new();
        for (key, constraint) in &constraints {
            // Already validated by compile(); anchor for generation checks.
            let regex = Regex::new(&format!("^(?:{constraint})$")).map_err(|e| {
                KernelError::InvalidRoutePattern {
                    pattern: pattern.to_string(),
                    reason: format!("constraint for `{key}` does not compile: {e}"),
                }
            })?;
            anchored.insert(key.clone(), regex);
        }

        Ok(Self {
            name: name.to_string(),
            pattern: compiled,
            controller,
            constraints: anchored,
            defaults,
        })
    }

    /// The route's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The original pattern text.
    pub fn pattern(&self) -> &str {
        self.pattern.pattern()
    }

    /// The controller this route dispatches to.
    pub fn controller(&self) -> &ControllerReference {
        &self.controller
    }

    /// Declared default values for placeholders.
    pub fn defaults(&self) -> &HashMap<String, String> {
        &self.defaults
    }

    /// Test a path against this route. On success the captures are
    /// returned with defaults filled in for any placeholder the pattern
    /// did not capture or captured as the empty string.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let mut params = self.pattern.matches(path)?;
        for (key, value) in &self.defaults {
            let missing = params.get(key).map_or(true, |v| v.is_empty());
            if missing {
                params.insert(key.clone(), value.clone());
            }
        }
        Some(params)
    }

    /// Generate a URL for this route by substituting placeholders.
    ///
    /// Falls back to the route's defaults for placeholders not supplied in
    /// `params`. Fails with [`KernelError::MissingRequiredArgument`] when a
    /// placeholder has neither, and [`KernelError::ArgumentTypeMismatch`]
    /// when a value violates the placeholder's constraint.
    pub fn generate(&self, params: &HashMap<&str, &str>) -> Result<String, KernelError> {
        let mut url = String::new();
        let mut rest = self.pattern.pattern();

        while let Some(open) = rest.find('{') {
            url.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            // Compilation guarantees a matching close brace.
            let close = after.find('}').unwrap_or(after.len());
            let name = &after[..close];

            let value = params
                .get(name)
                .copied()
                .or_else(|| self.defaults.get(name).map(String::as_str))
                .ok_or_else(|| KernelError::MissingRequiredArgument(name.to_string()))?;

            if let Some(constraint) = self.constraints.get(name) {
                if !constraint.is_match(value) {
                    return Err(KernelError::ArgumentTypeMismatch {
                        name: name.to_string(),
                        value: value.to_string(),
                        expected: "value matching the placeholder constraint",
                    });
                }
            }
            url.push_str(value);
            rest = &after[close + 1..];
        }
        url.push_str(rest);
        Ok(url)
    }
}
