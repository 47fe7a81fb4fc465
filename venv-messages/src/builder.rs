//! Placeholder substitution for message templates.
//!
//! Values are usually filesystem paths, which may themselves contain
//! braces, so substitution is a single pass over the template: text coming
//! from a value is never scanned for placeholders again.

use std::fmt::Display;

pub struct MessageBuilder {
    template: &'static str,
    vars: Vec<(&'static str, String)>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: Vec::new(),
        }
    }

    /// Bind `{key}` to `value`. A later binding of the same key wins.
    pub fn var(mut self, key: &'static str, value: impl Display) -> Self {
        self.vars.retain(|(k, _)| *k != key);
        self.vars.push((key, value.to_string()));
        self
    }

    pub fn build(self) -> String {
        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let bound = after
                .find('}')
                .and_then(|close| self.lookup(&after[..close]).map(|value| (close, value)));

            match bound {
                Some((close, value)) => {
                    result.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    result.push('{');
                    rest = after;
                }
            }
        }

        result.push_str(rest);
        result
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}
