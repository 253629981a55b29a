//! Field paths.
//!
//! A [`FieldPath`] names a sub-field of an option item. It uses dot notation
//! for record keys and bracket notation for list indices, for example
//! `"id"`, `"owner.name"` or `"tags[0]"`.

use std::fmt;

/// A parsed, dotted accessor into an option item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    parts: Vec<PathPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PathPart {
    Key(String),
    Index(usize),
}

impl FieldPath {
    /// Parses a path.
    ///
    /// Returns `None` for an empty path, which means "the item itself".
    pub fn parse(path: &str) -> Option<Self> {
        let parts = parse_parts(path);
        if parts.is_empty() {
            return None;
        }
        Some(Self {
            raw: path.to_string(),
            parts,
        })
    }

    /// The path as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Follows this path through `value`.
    ///
    /// Returns `None` if any step is missing or the value has the wrong shape.
    pub fn resolve<'a>(&self, value: &'a serde_json::Value) -> Option<&'a serde_json::Value> {
        let mut current = value;
        for part in &self.parts {
            current = match part {
                PathPart::Key(key) => current.get(key.as_str())?,
                PathPart::Index(idx) => current.get(*idx)?,
            };
        }
        Some(current)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Splits a path string into components.
///
/// Examples: "foo.bar", "users[0].name", "data[0][1].value"
fn parse_parts(path: &str) -> Vec<PathPart> {
    let mut parts = Vec::new();
    let mut current_key_start = 0;
    let mut chars = path.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '.' => {
                if i > current_key_start {
                    parts.push(PathPart::Key(path[current_key_start..i].to_string()));
                }
                current_key_start = i + 1;
            }
            '[' => {
                if i > current_key_start {
                    parts.push(PathPart::Key(path[current_key_start..i].to_string()));
                }

                let idx_start = i + 1;
                let mut idx_end = path.len();
                while let Some(&(j, ch)) = chars.peek() {
                    chars.next();
                    if ch == ']' {
                        idx_end = j;
                        break;
                    }
                }

                if let Ok(idx) = path[idx_start..idx_end].trim().parse::<usize>() {
                    parts.push(PathPart::Index(idx));
                }

                if let Some(&(_, '.')) = chars.peek() {
                    chars.next();
                }
                current_key_start = chars.peek().map(|(i, _)| *i).unwrap_or(path.len());
            }
            _ => {}
        }
    }

    if current_key_start < path.len() {
        parts.push(PathPart::Key(path[current_key_start..].to_string()));
    }

    parts
}
