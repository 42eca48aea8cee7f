//! Placeholder substitution for activity templates.
//!
//! Pure string templating - no I/O. A template such as
//! `"{action} {filename}"` is resolved against a `PlaceholderContext` built
//! for the current editor event. Tokens the context does not know are kept
//! verbatim.

use std::collections::BTreeMap;

/// Built-in placeholder tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Action,
    Filename,
    Workspace,
    Editor,
    Language,
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Placeholder::Action,
        Placeholder::Filename,
        Placeholder::Workspace,
        Placeholder::Editor,
        Placeholder::Language,
    ];

    /// The literal marker as written in templates.
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Action => "{action}",
            Placeholder::Filename => "{filename}",
            Placeholder::Workspace => "{workspace}",
            Placeholder::Editor => "{editor}",
            Placeholder::Language => "{language}",
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Token → value mapping for a single event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderContext {
    values: BTreeMap<String, String>,
}

impl PlaceholderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, placeholder: Placeholder, value: impl Into<String>) -> &mut Self {
        self.insert_token(placeholder.token(), value)
    }

    /// Register an arbitrary `{name}` token.
    pub fn insert_token(
        &mut self,
        token: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.values.insert(token.into(), value.into());
        self
    }

    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.insert(placeholder, value);
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.values.contains_key(placeholder.token())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Replace every known token in `format` with its value.
///
/// Single left-to-right scan: substituted values are never rescanned, so the
/// result does not depend on the order tokens were registered in.
pub fn substitute(format: &str, context: &PlaceholderContext) -> String {
    if context.is_empty() || !format.contains('{') {
        return format.to_string();
    }

    let mut out = String::with_capacity(format.len());
    let mut rest = format;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        let Some(close) = candidate.find('}') else {
            // Unterminated brace, nothing left to replace
            out.push_str(candidate);
            return out;
        };

        let token = &candidate[..=close];
        match context.get(token) {
            Some(value) => {
                out.push_str(value);
                rest = &candidate[close + 1..];
            }
            None => {
                // Keep the brace and resume right after it; a known token may
                // still start inside (e.g. "{{action}")
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
