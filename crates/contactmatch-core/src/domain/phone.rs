/// Separates dialable segments that are sent after the call connects.
pub const WAIT: char = ';';

/// Splits a number on the wait separator.
///
/// Trailing empty segments are dropped, so `"123;"` has the same shape as `"123"`.
/// A value without any separator is always a single segment, even when empty.
pub fn split_wait_segments(value: &str) -> Vec<&str> {
    if !value.contains(WAIT) {
        return vec![value];
    }
    let mut segments: Vec<&str> = value.split(WAIT).collect();
    while segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }
    segments
}

fn keypad_digit(ch: char) -> Option<char> {
    let digit = match ch.to_ascii_uppercase() {
        'A' | 'B' | 'C' => '2',
        'D' | 'E' | 'F' => '3',
        'G' | 'H' | 'I' => '4',
        'J' | 'K' | 'L' => '5',
        'M' | 'N' | 'O' => '6',
        'P' | 'Q' | 'R' | 'S' => '7',
        'T' | 'U' | 'V' => '8',
        'W' | 'X' | 'Y' | 'Z' => '9',
        _ => return None,
    };
    Some(digit)
}

/// Replaces ASCII letters with their keypad digit, leaving everything else untouched.
pub fn convert_keypad_letters_to_digits(value: &str) -> String {
    value
        .chars()
        .map(|ch| keypad_digit(ch).unwrap_or(ch))
        .collect()
}

/// Reduces a dialable string to digits, keeping a `+` only in leading position.
///
/// Keypad letters are converted to digits; any other character is dropped.
pub fn normalize_number(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if ch == '+' && out.is_empty() {
            out.push(ch);
        } else if let Some(digit) = keypad_digit(ch) {
            out.push(digit);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{convert_keypad_letters_to_digits, normalize_number, split_wait_segments};

    #[test]
    fn split_keeps_single_segment_without_separator() {
        assert_eq!(split_wait_segments("4155551212"), vec!["4155551212"]);
        assert_eq!(split_wait_segments(""), vec![""]);
    }

    #[test]
    fn split_drops_trailing_empty_segments() {
        assert_eq!(split_wait_segments("123;456"), vec!["123", "456"]);
        assert_eq!(split_wait_segments("123;;"), vec!["123"]);
        assert_eq!(split_wait_segments(";456"), vec!["", "456"]);
    }

    #[test]
    fn keypad_letters_map_to_digits() {
        let value = convert_keypad_letters_to_digits("1-800-FLOWERS");
        assert_eq!(value, "1-800-3569377");
    }

    #[test]
    fn keypad_conversion_is_case_insensitive() {
        assert_eq!(convert_keypad_letters_to_digits("pqrs wxyz"), "7777 9999");
    }

    #[test]
    fn normalize_strips_formatting() {
        assert_eq!(normalize_number("  (415) 555-1212  "), "4155551212");
    }

    #[test]
    fn normalize_preserves_leading_plus_only() {
        assert_eq!(normalize_number("+1 (415) 555-1212"), "+14155551212");
        assert_eq!(normalize_number("1+415"), "1415");
    }

    #[test]
    fn normalize_converts_letters() {
        assert_eq!(normalize_number("1-800-GOOG-411"), "18004664411");
    }
}
