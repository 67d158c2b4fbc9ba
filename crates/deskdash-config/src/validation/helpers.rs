//! Shared validation helpers used by all section validators.

use std::sync::OnceLock;

use regex::Regex;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range<T>(errors: &mut Vec<String>, name: &str, value: T, min: T, max: T)
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn window_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("window id regex is valid"))
}

/// Push an error if `id` is not a lowercase slug.
pub(crate) fn validate_window_id(errors: &mut Vec<String>, name: &str, id: &str) {
    if !window_id_regex().is_match(id) {
        errors.push(format!(
            "{name} = {id:?} is not a valid window id (lowercase letters, digits, '-' and '_')"
        ));
    }
}
