//! Type resolution
//!
//! Turns raw DDL type-use tokens into canonical, cross-linkable display
//! types. Resolution canonicalizes well-known tokens, unwraps container
//! types recursively, and decides the link target: a structure declared in
//! the current tree shadows a same-named common type, otherwise the common
//! type table supplies a wiki link. Resolution never fails; an unknown token
//! simply passes through as plain text.

use std::collections::HashSet;
use std::fmt;

use crate::registry;

/// A resolved display type.
///
/// Derived on demand from a raw token and the current tree's structure
/// symbol set; never cached across trees, since that set can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    /// Canonical list wrapping of an element type
    List(Box<ResolvedType>),
    /// A leaf type name with an optional link target
    Named {
        text: String,
        link: Option<String>,
    },
}

impl ResolvedType {
    /// Markdown fragment with entity-escaped text and hyperlinks applied.
    pub fn to_markdown(&self) -> String {
        match self {
            ResolvedType::List(element) => {
                let label = match registry::link_target(registry::LIST_DISPLAY) {
                    Some(target) => format!("[{}]({})", registry::LIST_DISPLAY, target),
                    None => registry::LIST_DISPLAY.to_string(),
                };
                format!("{}&lt;{}&gt;", label, element.to_markdown())
            }
            ResolvedType::Named { text, link } => {
                let escaped = escape_html(text);
                match link {
                    Some(target) => format!("[{escaped}]({target})"),
                    None => escaped,
                }
            }
        }
    }
}

impl fmt::Display for ResolvedType {
    /// Plain display text, e.g. `List<Uint8>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedType::List(element) => {
                write!(f, "{}<{}>", registry::LIST_DISPLAY, element)
            }
            ResolvedType::Named { text, .. } => write!(f, "{text}"),
        }
    }
}

/// Resolves raw type tokens against the current tree's structure symbol set.
pub struct TypeResolver<'a> {
    structures: &'a HashSet<String>,
}

impl<'a> TypeResolver<'a> {
    /// Create a resolver for one tree's structure symbol set
    pub fn new(structures: &'a HashSet<String>) -> Self {
        Self { structures }
    }

    /// Resolve a raw type token into its display type.
    ///
    /// Recursion depth is bounded by the actual container nesting in the
    /// source; there is no artificial limit.
    pub fn resolve(&self, raw: &str) -> ResolvedType {
        let token = raw.trim();
        let working = match registry::canonical_name(token) {
            Some(canonical) => canonical.to_string(),
            None => token.to_string(),
        };

        if let Some(element) = parse_container(&working) {
            return ResolvedType::List(Box::new(self.resolve(element)));
        }

        // Local structures shadow same-named common types
        let link = if self.structures.contains(&working) {
            Some(format!("#{}", working.to_lowercase()))
        } else {
            registry::link_target(&working)
        };

        ResolvedType::Named {
            text: working,
            link,
        }
    }
}

/// Split a recognized container token into its element-type substring.
///
/// Matches `Name<Element>` where `Name` is one of the recognized container
/// spellings. Only the first `<` and the final `>` delimit the element, so a
/// nested container substring stays intact and recursion parses it whole.
fn parse_container(token: &str) -> Option<&str> {
    let open = token.find('<')?;
    if !token.ends_with('>') || token.len() < open + 2 {
        return None;
    }
    let name = &token[..open];
    if !registry::CONTAINER_SPELLINGS.contains(&name) {
        return None;
    }
    Some(token[open + 1..token.len() - 1].trim())
}

/// Escape HTML-sensitive characters before embedding text in a document
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
