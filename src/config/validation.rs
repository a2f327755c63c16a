//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect duplicate route names before table construction
//! - Check controller references parse as `Type::method`
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: KernelConfig → Result<(), Vec<ValidationError>>
//! - Pattern compilation itself is checked later, when routes are built

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::KernelConfig;
use crate::controller::ControllerReference;

/// One semantic problem in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A route was declared without a name.
    #[error("route #{index} has an empty name")]
    EmptyName {
        /// Position in the declaration order.
        index: usize,
    },

    /// A route was declared without a pattern.
    #[error("route `{name}` has an empty pattern")]
    EmptyPattern {
        /// The offending route.
        name: String,
    },

    /// Two routes share a name.
    #[error("route name `{name}` is declared more than once")]
    DuplicateName {
        /// The duplicated name.
        name: String,
    },

    /// The controller string is not a `Type::method` qualified name.
    #[error("route `{name}`: controller `{controller}` is not of the form `Type::method`")]
    BadControllerReference {
        /// The offending route.
        name: String,
        /// The unparseable controller string.
        controller: String,
    },
}

/// Validate a parsed configuration, reporting every problem found.
pub fn validate_config(config: &KernelConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName { index });
        }
        if route.pattern.is_empty() {
            errors.push(ValidationError::EmptyPattern {
                name: route.name.clone(),
            });
        }
        if !route.name.is_empty() && !seen.insert(route.name.clone()) {
            errors.push(ValidationError::DuplicateName {
                name: route.name.clone(),
            });
        }
        if ControllerReference::parse_qualified(&route.controller).is_err() {
            errors.push(ValidationError::BadControllerReference {
                name: route.name.clone(),
                controller: route.controller.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;
    use std::collections::HashMap;

    fn route(name: &str, pattern: &str, controller: &str) -> RouteConfig {
        RouteConfig {
            name: name.into(),
            pattern: pattern.into(),
            controller: controller.into(),
            constraints: HashMap::new(),
            defaults: HashMap::new(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let config = KernelConfig {
            routes: vec![
                route("home", "/", "Site::home"),
                route("blog", "/blog/{id}", "Blog::show"),
            ],
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_all_errors_are_reported() {
        let config = KernelConfig {
            routes: vec![
                route("", "", "Site::home"),
                route("blog", "/blog", "Blog"),
                route("blog", "/blog/{id}", "Blog::show"),
            ],
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyName { index: 0 }));
        assert!(errors.contains(&ValidationError::DuplicateName {
            name: "blog".into()
        }));
    }
}
