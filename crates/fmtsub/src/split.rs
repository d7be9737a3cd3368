//! `{}` placeholder splitting.
//!
//! This file is compiled into both `fmtsub` (runtime `Fmt::parse`) and
//! `fmtsub-macros` (compile-time `fmt!`), so it must not depend on anything
//! outside `std`.

/// Why a template could not be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplitError {
    /// A `{` at the very end of the template.
    Unclosed { offset: usize },
    /// A `{` followed by something other than `}` or `{`.
    Invalid { offset: usize },
}

/// Splits `template` into the literal segments around its `{}` placeholders.
///
/// `{{` and `}}` are escaped braces and a lone `}` passes through. The result
/// always has one more segment than the template has placeholders.
pub(crate) fn split_placeholders(template: &str) -> Result<Vec<String>, SplitError> {
    let mut segments = Vec::new();
    let mut current = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '{' => match chars.peek() {
                Some((_, '{')) => {
                    chars.next();
                    current.push('{');
                }
                Some((_, '}')) => {
                    chars.next();
                    segments.push(std::mem::take(&mut current));
                }
                Some(_) => return Err(SplitError::Invalid { offset }),
                None => return Err(SplitError::Unclosed { offset }),
            },
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                current.push('}');
            }
            _ => current.push(ch),
        }
    }

    segments.push(current);
    Ok(segments)
}
