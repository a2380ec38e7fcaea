//! Name inflection for labels, headings and element ids.

use deunicode::deunicode;

/// Turns an attribute name into label text.
///
/// Underscores become spaces, a trailing `_id` is dropped and the first
/// letter is capitalized.
///
/// ```rust
/// use lrd_render::inflect::humanize;
///
/// assert_eq!(humanize("login"), "Login");
/// assert_eq!(humanize("first_name"), "First name");
/// assert_eq!(humanize("account_id"), "Account");
/// ```
pub fn humanize(name: &str) -> String {
    let trimmed = name.strip_suffix("_id").unwrap_or(name);
    let spaced = trimmed.replace('_', " ");
    let spaced = spaced.trim();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Capitalizes every word of a name.
///
/// ```rust
/// use lrd_render::inflect::titleize;
///
/// assert_eq!(titleize("cache"), "Cache");
/// assert_eq!(titleize("session_store"), "Session Store");
/// ```
pub fn titleize(name: &str) -> String {
    name.split(['_', ' ', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Makes an object name usable as an element id prefix.
///
/// Bracketed nesting flattens to underscores (`user[address]` becomes
/// `user_address`) and non-ASCII text is transliterated.
pub fn sanitize_id(name: &str) -> String {
    let ascii = deunicode(name).replace("][", "_");
    let mut out: String = ascii
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.ends_with('_') {
        out.pop();
    }
    out
}
