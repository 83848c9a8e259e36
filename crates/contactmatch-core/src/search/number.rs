use crate::domain::phone::normalize_number;
use serde::Serialize;

/// Byte range of a phone-mode match in the original haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberMatch {
    pub start: usize,
    pub end: usize,
}

/// True when `query` looks like something typed into a dialer.
pub fn is_phone_number(query: &str) -> bool {
    let mut digits = 0usize;
    for ch in query.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '*' | '#' | 'N' | '.' | ';' | '-' | '(' | ')' | ' ' => {}
            '+' if digits == 0 => {}
            _ => return false,
        }
    }
    digits > 0
}

/// Finds `needle`'s digits in `haystack`, skipping any formatting between them.
pub fn number_contains(haystack: &str, needle: &str) -> Option<NumberMatch> {
    let needle: Vec<char> = normalize_number(needle).chars().collect();
    if needle.is_empty() || haystack.chars().count() < needle.len() {
        return None;
    }

    haystack
        .char_indices()
        .filter(|(_, ch)| ch.is_ascii_digit())
        .find_map(|(start, _)| {
            match_digits_at(&haystack[start..], &needle).map(|len| NumberMatch {
                start,
                end: start + len,
            })
        })
}

fn match_digits_at(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut digits = haystack
        .char_indices()
        .filter(|(_, ch)| ch.is_ascii_digit());
    let mut end = 0;
    for &expected in needle {
        let (index, actual) = digits.next()?;
        if actual != expected {
            return None;
        }
        end = index + actual.len_utf8();
    }
    Some(end)
}

#[cfg(test)]
mod tests {
    use super::{is_phone_number, number_contains, NumberMatch};

    #[test]
    fn phone_number_classification() {
        assert!(!is_phone_number(""));
        assert!(is_phone_number("+1-800-555-1234"));
        assert!(!is_phone_number("abc"));
        assert!(!is_phone_number("1+800"));
        assert!(is_phone_number("*67 (555) 123.4567;N#"));
    }

    #[test]
    fn phone_number_requires_a_digit() {
        assert!(!is_phone_number("+-()"));
        assert!(!is_phone_number("   "));
    }

    #[test]
    fn phone_number_rejects_newlines() {
        assert!(!is_phone_number("555\n1234"));
    }

    #[test]
    fn number_contains_skips_formatting() {
        let haystack = "(555) 123-4567";
        let found = number_contains(haystack, "5551234").expect("match");
        assert_eq!(found, NumberMatch { start: 1, end: 11 });
        assert_eq!(&haystack[found.start..found.end], "555) 123-4");
    }

    #[test]
    fn number_contains_normalizes_needle() {
        let found = number_contains("tel: 555-123-4567", "(123) 45").expect("match");
        assert_eq!(found.start, 9);
        assert_eq!(found.end, 15);
    }

    #[test]
    fn number_contains_requires_consecutive_digits() {
        assert!(number_contains("(555) 123-4567", "5551235").is_none());
        assert!(number_contains("(555) 123-4567", "5554567").is_none());
    }

    #[test]
    fn number_contains_empty_needle() {
        assert!(number_contains("555-1234", "").is_none());
        assert!(number_contains("555-1234", "--").is_none());
    }

    #[test]
    fn number_contains_plus_never_matches_a_digit() {
        assert!(number_contains("+1 555 1234", "+1555").is_none());
    }
}
