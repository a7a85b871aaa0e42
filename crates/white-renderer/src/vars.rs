//! Variable bindings and `{name}` substitution.

use std::collections::HashMap;

/// Name to string bindings for one compilation session.
///
/// Bindings are created only by the `var` directive and read by every
/// text-bearing directive. Unbound lookups are not errors: the `{name}`
/// token passes through unchanged.
#[derive(Debug, Default)]
pub struct Variables {
    bindings: HashMap<String, String>,
}

impl Variables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.bindings.insert(name.into(), value.into());
    }

    /// Get a bound value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    /// Replace every `{identifier}` token in `text` with its bound value.
    ///
    /// Identifiers are runs of alphanumerics and underscores. Unbound
    /// identifiers are left wrapped in their braces; a `{` without a valid
    /// identifier and closing `}` is literal text.
    #[must_use]
    pub fn substitute(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];

            match after_open.find('}') {
                Some(close) if is_identifier(&after_open[..close]) => {
                    let name = &after_open[..close];
                    match self.get(name) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push('{');
                            result.push_str(name);
                            result.push('}');
                        }
                    }
                    rest = &after_open[close + 1..];
                }
                _ => {
                    result.push('{');
                    rest = after_open;
                }
            }
        }

        result.push_str(rest);
        result
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_substitute_bound() {
        let mut vars = Variables::new();
        vars.set("name", "Ahmed");
        assert_eq!(vars.substitute("hi {name}"), "hi Ahmed");
    }

    #[test]
    fn test_substitute_unbound_passes_through() {
        let mut vars = Variables::new();
        vars.set("name", "Ahmed");
        assert_eq!(vars.substitute("hi {name}, {age}"), "hi Ahmed, {age}");
    }

    #[test]
    fn test_substitute_multiple_occurrences() {
        let mut vars = Variables::new();
        vars.set("x", "1");
        assert_eq!(vars.substitute("{x}{x} {x}"), "11 1");
    }

    #[test]
    fn test_rebinding_replaces_value() {
        let mut vars = Variables::new();
        vars.set("x", "old");
        vars.set("x", "new");
        assert_eq!(vars.substitute("{x}"), "new");
    }

    #[test]
    fn test_non_identifier_braces_are_literal() {
        let vars = Variables::new();
        assert_eq!(vars.substitute("{not a var}"), "{not a var}");
        assert_eq!(vars.substitute("a { b"), "a { b");
        assert_eq!(vars.substitute("{}"), "{}");
    }

    #[test]
    fn test_underscore_identifier() {
        let mut vars = Variables::new();
        vars.set("user_name", "sam");
        assert_eq!(vars.substitute("{user_name}"), "sam");
    }
}
