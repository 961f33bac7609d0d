//! Built-in validation rules.
//!
//! The messages are fixed strings so they line up with what existing
//! clients display.

use std::sync::LazyLock;

use regex::Regex;

use super::Rule;

/// Message produced by [`required`].
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Message produced by [`email`].
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Message produced by [`atleast_one_caps`].
pub const CAPS_MESSAGE: &str = "Please atleast one upper case.";

/// Longest address accepted by [`email`], in `char`s.
pub const EMAIL_MAX_LENGTH: usize = 254;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@.+\..+$").expect("email pattern is valid"));

fn char_len(value: Option<&str>) -> usize {
    value.map(|v| v.chars().count()).unwrap_or(0)
}

/// Fails when the value is absent or empty.
pub fn required(value: Option<&str>) -> Option<String> {
    match value {
        None | Some("") => Some(REQUIRED_MESSAGE.to_string()),
        Some(_) => None,
    }
}

/// Fails unless the value looks like `local@domain.tld` and is 1 to 254
/// `char`s long.
pub fn email(value: Option<&str>) -> Option<String> {
    let len = char_len(value);
    if !(1..=EMAIL_MAX_LENGTH).contains(&len) {
        return Some(EMAIL_MESSAGE.to_string());
    }

    match value {
        Some(v) if EMAIL_SHAPE.is_match(v) => None,
        _ => Some(EMAIL_MESSAGE.to_string()),
    }
}

/// Fails when the value is shorter than `min` characters.
///
/// Length is the number of Unicode scalar values (`str::chars`), not bytes
/// and not UTF-16 code units: `"😀"` has length 1 here, while a JavaScript
/// `.length` check would count 2. An absent value has length zero.
pub fn min_length(min: usize) -> impl Rule + Clone + 'static {
    move |value: Option<&str>| {
        (char_len(value) < min).then(|| format!("Please use {min} or more characters."))
    }
}

/// Fails when the value has no upper-case ASCII letter.
pub fn atleast_one_caps(value: Option<&str>) -> Option<String> {
    let has_caps = value.is_some_and(|v| v.chars().any(|c| c.is_ascii_uppercase()));
    (!has_caps).then(|| CAPS_MESSAGE.to_string())
}
