//! In-place per-element transforms applied by the fixture challenges.
//!
//! Every transform is a single pass over a mutable slice. Length and order are
//! preserved and elements never influence each other.

/// Replace every element of `items` with `f(element)`, in place.
pub fn map_in_place<T, F>(items: &mut [T], mut f: F) -> &mut [T]
where
    F: FnMut(&T) -> T,
{
    for item in &mut *items {
        *item = f(item);
    }
    items
}

/// Logically negate every boolean.
pub fn flip_bools(items: &mut [bool]) -> &mut [bool] {
    map_in_place(items, |value| !*value)
}

/// Upper-case every string using the single-codepoint uppercase mapping.
pub fn upper_strings(items: &mut [String]) -> &mut [String] {
    map_in_place(items, |value| upper_simple(value))
}

/// Upper-case `text` one codepoint at a time.
///
/// Characters whose uppercase form expands to more than one codepoint (for
/// example `ß`) are kept as-is, so the character count never changes.
pub fn upper_simple(text: &str) -> String {
    text.chars().map(upper_char).collect()
}

fn upper_char(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}
