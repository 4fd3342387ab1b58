//! Placeholder substitution for the built-in prompt templates.
//!
//! # Syntax
//!
//! - `{name}` - replaced with the value bound to `name`
//! - `{{` - a literal `{`
//! - `}}` - a literal `}`
//!
//! Substituted values are copied verbatim and never scanned again, so a value
//! that itself contains `{task}` or `}}` ends up in the output unchanged.
//!
//! Rendering is strict: a placeholder with no bound value is an error rather
//! than an empty string.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A placeholder names a variable that was not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable {
        /// The variable name as written (trimmed).
        name: String,
        /// Byte offset of the opening `{`.
        position: usize,
    },

    /// A `{` was never closed.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace {
        /// Byte offset of the opening `{`.
        position: usize,
    },

    /// A placeholder with nothing between the braces (`{}` or `{  }`).
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName {
        /// Byte offset of the opening `{`.
        position: usize,
    },
}

/// Render `template`, replacing each `{name}` with `variables[name]`.
///
/// # Examples
///
/// ```
/// use aiprompt::prompt::{render_template, vars};
///
/// let rendered = render_template(
///     "# Tips\n{tips}\n",
///     &vars([("tips", "<tips>\n</tips>")]),
/// )
/// .unwrap();
/// assert_eq!(rendered, "# Tips\n<tips>\n</tips>\n");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut raw = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    raw.push(c);
                }
                if !closed {
                    return Err(TemplateError::UnmatchedBrace { position: pos });
                }

                let name = raw.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                let value = variables
                    .get(name)
                    .ok_or_else(|| TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position: pos,
                    })?;
                out.push_str(value);
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` is kept as-is.
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

/// Build a variables map from key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
