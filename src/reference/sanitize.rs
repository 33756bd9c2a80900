//! Reference identifier sanitization.

/// Prefix for identifiers that would otherwise not start with a letter.
pub const DEFAULT_ID_PREFIX: &str = "img-";

/// Convert alt text into a reference identifier.
///
/// Lowercases and trims, maps `& + , / \ .` and spaces to hyphens, drops
/// anything outside `[a-z0-9-_]`, collapses hyphen runs and trims hyphens
/// at both ends. Identifiers that are empty or start with something other
/// than a letter get the `img-` prefix.
///
/// # Example
///
/// ```
/// use mdimage::sanitize_ref_id;
///
/// assert_eq!(sanitize_ref_id("Cat Photo"), "cat-photo");
/// assert_eq!(sanitize_ref_id("50% Off!"), "img-50-off");
/// ```
pub fn sanitize_ref_id(text: &str) -> String {
    sanitize_ref_id_with_prefix(text, DEFAULT_ID_PREFIX)
}

/// Same as [`sanitize_ref_id`] with a custom prefix.
pub fn sanitize_ref_id_with_prefix(text: &str, prefix: &str) -> String {
    let lowered = text.to_lowercase();
    let mut id = String::with_capacity(lowered.len());

    for c in lowered.trim().chars() {
        let c = match c {
            '&' | '+' | ',' | '/' | '\\' | '.' | ' ' => '-',
            c => c,
        };

        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_') {
            continue;
        }
        if c == '-' && id.ends_with('-') {
            continue;
        }
        id.push(c);
    }

    let id = id.trim_matches('-');
    if id.starts_with(|c: char| c.is_ascii_alphabetic()) {
        id.to_string()
    } else {
        format!("{}{}", prefix, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(sanitize_ref_id("Cat Photo"), "cat-photo");
        assert_eq!(sanitize_ref_id("  Hello World  "), "hello-world");
        assert_eq!(sanitize_ref_id("snake_case"), "snake_case");
    }

    #[test]
    fn test_punctuation_to_hyphen() {
        assert_eq!(sanitize_ref_id("R&D + QA"), "r-d-qa");
        assert_eq!(sanitize_ref_id("fig. 1/2"), "fig-1-2");
        assert_eq!(sanitize_ref_id(r"a\b,c"), "a-b-c");
    }

    #[test]
    fn test_leading_digit_gets_prefix() {
        let id = sanitize_ref_id("50% Off!");
        assert_eq!(id, "img-50-off");
        assert!(id.starts_with(|c: char| c.is_ascii_alphabetic()));
        assert!(!id.contains(['%', '!', ' ']));
        assert!(!id.starts_with('-') && !id.ends_with('-'));
    }

    #[test]
    fn test_nothing_left_gets_prefix() {
        assert_eq!(sanitize_ref_id("!!!"), "img-");
        assert_eq!(sanitize_ref_id("   "), "img-");
        assert_eq!(sanitize_ref_id("日本"), "img-");
    }

    #[test]
    fn test_collapse_and_trim_hyphens() {
        assert_eq!(sanitize_ref_id("--a -- b--"), "a-b");
        assert_eq!(sanitize_ref_id("a-%-b"), "a-b");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(sanitize_ref_id("Café Menu"), "caf-menu");
    }

    #[test]
    fn test_underscore_leading_gets_prefix() {
        assert_eq!(sanitize_ref_id("_hidden"), "img-_hidden");
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(sanitize_ref_id_with_prefix("2024", "fig-"), "fig-2024");
    }
}
