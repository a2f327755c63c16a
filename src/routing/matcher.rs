//! Route pattern compilation and matching.
//!
//! # Responsibilities
//! - Compile a `{name}` placeholder pattern into an anchored regex
//! - Apply per-placeholder constraints, defaulting to "one or more non-slash"
//! - Extract named captures from a concrete path
//!
//! # Design Decisions
//! - Literal segments are regex-escaped and matched verbatim
//! - Matching is full-path (`^…$`), never prefix-based
//! - Placeholder identifiers follow `[A-Za-z_][A-Za-z0-9_]*`
//! - Compilation failures are fatal at boot, never deferred to request time

use std::collections::HashMap;

use regex::Regex;

use crate::error::KernelError;

/// Default capture for an unconstrained placeholder: one or more
/// non-slash characters.
const DEFAULT_SEGMENT: &str = "[^/]+";

/// A route pattern compiled to an anchored regex with named captures.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl CompiledPattern {
    /// Compile a pattern, substituting each `{name}` with a named capture
    /// group. `constraints` restricts the text a placeholder may capture;
    /// unconstrained placeholders match one or more non-slash characters.
    pub fn compile(
        pattern: &str,
        constraints: &HashMap<String, String>,
    ) -> Result<Self, KernelError> {
        let invalid = |reason: String| KernelError::InvalidRoutePattern {
            pattern: pattern.to_string(),
            reason,
        };

        let mut regex_src = String::from("^");
        let mut param_names = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars();

        while let Some(ch) = chars.next() {
            match ch {
                '{' => {
                    regex_src.push_str(&regex::escape(&literal));
                    literal.clear();

                    let mut name = String::new();
                    let mut closed = false;
                    for inner in chars.by_ref() {
                        match inner {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => {
                                return Err(invalid("unbalanced braces".to_string()));
                            }
                            other => name.push(other),
                        }
                    }
                    if !closed {
                        return Err(invalid("unbalanced braces".to_string()));
                    }
                    if !is_valid_identifier(&name) {
                        return Err(invalid(format!("invalid placeholder name `{name}`")));
                    }
                    if param_names.contains(&name) {
                        return Err(invalid(format!("duplicate placeholder `{name}`")));
                    }

                    let segment = match constraints.get(&name) {
                        Some(constraint) => {
                            // Validate the constraint on its own so the
                            // failure names the constraint, not the
                            // assembled pattern.
                            Regex::new(constraint).map_err(|e| {
                                invalid(format!("constraint for `{name}` does not compile: {e}"))
                            })?;
                            constraint.clone()
                        }
                        None => DEFAULT_SEGMENT.to_string(),
                    };
                    regex_src.push_str(&format!("(?P<{name}>{segment})"));
                    param_names.push(name);
                }
                '}' => {
                    return Err(invalid("unbalanced braces".to_string()));
                }
                other => literal.push(other),
            }
        }
        regex_src.push_str(&regex::escape(&literal));
        regex_src.push('$');

        let regex = Regex::new(&regex_src)
            .map_err(|e| invalid(format!("pattern does not compile: {e}")))?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            param_names,
        })
    }

    /// Test a concrete path. On success, returns the placeholder captures.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let captures = self.regex.captures(path)?;
        let mut params = HashMap::new();
        for name in &self.param_names {
            if let Some(value) = captures.name(name) {
                params.insert(name.clone(), value.as_str().to_string());
            }
        }
        Some(params)
    }

    /// The original pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Placeholder names, in the order they appear in the pattern.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(pattern: &str) -> CompiledPattern {
        CompiledPattern::compile(pattern, &HashMap::new()).unwrap()
    }

    #[test]
    fn test_literal_pattern() {
        let p = compile("/about");
        assert!(p.matches("/about").is_some());
        assert!(p.matches("/about/us").is_none());
    }

    #[test]
    fn test_placeholder_captures_segment() {
        let p = compile("/greet/{name}");
        let params = p.matches("/greet/Ada").unwrap();
        assert_eq!(params["name"], "Ada");
    }

    #[test]
    fn test_placeholder_does_not_cross_slash() {
        let p = compile("/greet/{name}");
        assert!(p.matches("/greet/Ada/Lovelace").is_none());
    }

    #[test]
    fn test_constraint_restricts_capture() {
        let mut constraints = HashMap::new();
        constraints.insert("id".to_string(), r"\d+".to_string());
        let p = CompiledPattern::compile("/blog/{id}", &constraints).unwrap();

        assert_eq!(p.matches("/blog/42").unwrap()["id"], "42");
        assert!(p.matches("/blog/forty-two").is_none());
    }

    #[test]
    fn test_matching_is_anchored() {
        let p = compile("/blog/{id}");
        assert!(p.matches("/prefix/blog/42").is_none());
        assert!(p.matches("/blog/42/suffix").is_none());
    }

    #[test]
    fn test_trailing_slash_is_significant() {
        let p = compile("/blog");
        assert!(p.matches("/blog").is_some());
        assert!(p.matches("/blog/").is_none());
    }

    #[test]
    fn test_literal_segments_are_escaped() {
        let p = compile("/v1.0/status");
        assert!(p.matches("/v1.0/status").is_some());
        // `.` must not act as a regex wildcard
        assert!(p.matches("/v1x0/status").is_none());
    }

    #[test]
    fn test_unbalanced_braces_rejected() {
        for bad in ["/blog/{id", "/blog/id}", "/blog/{i{d}}"] {
            let err = CompiledPattern::compile(bad, &HashMap::new()).unwrap_err();
            assert!(matches!(err, KernelError::InvalidRoutePattern { .. }), "{bad}");
        }
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let err = CompiledPattern::compile("/blog/{}", &HashMap::new()).unwrap_err();
        assert!(matches!(err, KernelError::InvalidRoutePattern { .. }));
    }

    #[test]
    fn test_invalid_placeholder_identifier_rejected() {
        let err = CompiledPattern::compile("/blog/{9id}", &HashMap::new()).unwrap_err();
        assert!(matches!(err, KernelError::InvalidRoutePattern { .. }));
    }

    #[test]
    fn test_bad_constraint_rejected() {
        let mut constraints = HashMap::new();
        constraints.insert("id".to_string(), r"(\d+".to_string());
        let err = CompiledPattern::compile("/blog/{id}", &constraints).unwrap_err();
        assert!(matches!(err, KernelError::InvalidRoutePattern { .. }));
    }

    #[test]
    fn test_multiple_placeholders() {
        let p = compile("/{year}/{month}/{slug}");
        let params = p.matches("/2026/08/hello-world").unwrap();
        assert_eq!(params["year"], "2026");
        assert_eq!(params["month"], "08");
        assert_eq!(params["slug"], "hello-world");
        assert_eq!(p.param_names(), &["year", "month", "slug"]);
    }
}
