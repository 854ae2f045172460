//! Identifiers for generated methods and their parameters.

use rustc_hash::FxHashSet;

/// Used when a template has no letters at all.
pub const FALLBACK_IDENTIFIER: &str = "LogMessage";

/// Parameter names the generated method uses for its special parameters.
pub const LOGGER_PARAM: &str = "logger";
pub const LEVEL_PARAM: &str = "level";
pub const EXCEPTION_PARAM: &str = "exception";

/// Derive a method name from a template's literal characters.
///
/// Letters and digits are kept, everything else is dropped. Digits are
/// kept only after the first letter. A letter that starts the text or
/// follows a dropped character is upper-cased. Placeholders are not
/// parsed, so malformed templates still produce a name:
/// `"Hello {arg1:0"` becomes `HelloArg10`.
pub fn derive_identifier(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut at_boundary = true;

    for c in template.chars() {
        if c.is_alphabetic() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_boundary = false;
        } else if c.is_numeric() {
            if !out.is_empty() {
                out.push(c);
                at_boundary = false;
            }
        } else {
            at_boundary = true;
        }
    }

    if out.is_empty() {
        FALLBACK_IDENTIFIER.to_string()
    } else {
        out
    }
}

/// Whether `name` can be used verbatim as a parameter name.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Names for `count` template arguments.
///
/// The argument at position `i` takes the `i`-th placeholder name when it
/// is a valid identifier, not yet taken, does not start with
/// `reserved_prefix` and does not clash with a special parameter.
/// Otherwise it is called `arg{i}`.
pub fn parameter_names(placeholders: &[&str], count: usize, reserved_prefix: char) -> Vec<String> {
    let mut taken: FxHashSet<String> = [LOGGER_PARAM, LEVEL_PARAM, EXCEPTION_PARAM]
        .iter()
        .map(|s| (*s).to_string())
        .collect();

    (0..count)
        .map(|i| {
            let name = placeholders
                .get(i)
                .filter(|name| {
                    is_identifier(name) && !name.starts_with(reserved_prefix) && !taken.contains(**name)
                })
                .map_or_else(|| unique_positional(i, &taken), |name| (*name).to_string());
            taken.insert(name.clone());
            name
        })
        .collect()
}

fn unique_positional(index: usize, taken: &FxHashSet<String>) -> String {
    let base = format!("arg{index}");
    let mut candidate = base.clone();
    let mut n = 2;
    while taken.contains(&candidate) {
        candidate = format!("{base}_{n}");
        n += 1;
    }
    candidate
}

#[cfg(test)]
mod tests;
