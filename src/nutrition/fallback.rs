//! Plural to singular correction for lookup keys

/// Singular form to retry with after a not-found, if it differs from `key`.
///
/// `"Blueberries"` → `"Blueberry"`, `"Apples"` → `"Apple"`. Keys that do not
/// end in `s`, or that would become empty, have no candidate.
pub fn singular_candidate(key: &str) -> Option<String> {
    let bytes = key.as_bytes();

    // suffixes are ASCII, so the byte offsets below are char boundaries
    let candidate = if bytes.len() > 3 && bytes[bytes.len() - 3..].eq_ignore_ascii_case(b"ies") {
        format!("{}y", &key[..key.len() - 3])
    } else if bytes.last().is_some_and(|b| b.eq_ignore_ascii_case(&b's')) {
        key[..key.len() - 1].to_string()
    } else {
        return None;
    };

    if candidate.trim().is_empty() {
        None
    } else {
        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ies_becomes_y() {
        assert_eq!(singular_candidate("Blueberries").as_deref(), Some("Blueberry"));
        assert_eq!(singular_candidate("elderberries").as_deref(), Some("elderberry"));
    }

    #[test]
    fn test_plain_s_is_stripped() {
        assert_eq!(singular_candidate("Apples").as_deref(), Some("Apple"));
        assert_eq!(singular_candidate("Figs").as_deref(), Some("Fig"));
    }

    #[test]
    fn test_uppercase_suffix() {
        assert_eq!(singular_candidate("CHERRIES").as_deref(), Some("CHERRy"));
        assert_eq!(singular_candidate("LIMES").as_deref(), Some("LIME"));
    }

    #[test]
    fn test_no_candidate() {
        assert_eq!(singular_candidate("Kiwi"), None);
        assert_eq!(singular_candidate("s"), None);
        assert_eq!(singular_candidate(""), None);
    }

    #[test]
    fn test_bare_ies_falls_back_to_strip_s() {
        assert_eq!(singular_candidate("ies").as_deref(), Some("ie"));
    }
}
