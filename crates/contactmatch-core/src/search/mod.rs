//! Substring search over contact fields, reporting where to highlight.
//!
//! Offsets are byte offsets into the searched `&str` and always fall on `char`
//! boundaries, so callers can slice with them directly.

mod number;
mod token;

use serde::Serialize;
use token::find_folded;

pub use number::{is_phone_number, number_contains, NumberMatch};
pub use token::{
    clean_start_and_end_of_search_query, contains_token_prefix, find_next_token_start,
    is_token_char, TokenStarts,
};

/// The line of a multi-line snippet that holds a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedLine {
    pub line: String,
    /// Offset of the match within `line`.
    pub start: usize,
    /// End of the matched text within `line`; never past the line end.
    pub end: usize,
}

impl MatchedLine {
    pub fn before(&self) -> &str {
        &self.line[..self.start]
    }

    pub fn matched(&self) -> &str {
        &self.line[self.start..self.end]
    }

    pub fn after(&self) -> &str {
        &self.line[self.end..]
    }
}

/// Locates `substring` in newline-delimited `contents` and isolates its line.
///
/// Contents that look like a phone number are searched digit-wise, ignoring
/// formatting; everything else uses case-insensitive text search.
pub fn find_matching_line(contents: &str, substring: &str) -> Option<MatchedLine> {
    let (index, match_end) = if is_phone_number(contents) {
        number_contains(contents, substring).map(|found| (found.start, found.end))
    } else {
        find_folded(contents, substring)
    }?;

    let line_start = contents[..index].rfind('\n').map_or(0, |pos| pos + 1);
    let after_first = index + contents[index..].chars().next().map_or(0, char::len_utf8);
    let line_end = contents[after_first..]
        .find('\n')
        .map_or(contents.len(), |pos| after_first + pos);

    Some(MatchedLine {
        line: contents[line_start..line_end].to_string(),
        start: index - line_start,
        end: match_end.min(line_end) - line_start,
    })
}

/// A cleaned search query with its classification precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery<'a> {
    cleaned: &'a str,
    phone_number: bool,
}

impl<'a> SearchQuery<'a> {
    pub fn new(raw: &'a str) -> Self {
        let cleaned = clean_start_and_end_of_search_query(raw);
        Self {
            cleaned,
            phone_number: is_phone_number(raw),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.cleaned
    }

    pub fn is_empty(&self) -> bool {
        self.cleaned.is_empty()
    }

    pub fn is_phone_number(&self) -> bool {
        self.phone_number
    }

    pub fn code_points(&self) -> impl Iterator<Item = char> + 'a {
        self.cleaned.chars()
    }

    pub fn find_in(&self, contents: &str) -> Option<MatchedLine> {
        if self.is_empty() {
            return None;
        }
        find_matching_line(contents, self.cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::{find_matching_line, MatchedLine, SearchQuery};

    #[test]
    fn matching_line_in_multiline_contents() {
        let matched = find_matching_line("John\n555-1234\nAlice", "1234").expect("match");
        assert_eq!(
            matched,
            MatchedLine {
                line: "555-1234".to_string(),
                start: 4,
                end: 8,
            }
        );
        assert_eq!(matched.matched(), "1234");
    }

    #[test]
    fn matching_line_first_and_last_lines() {
        let first = find_matching_line("Ada\nBob", "ad").expect("first");
        assert_eq!(first.line, "Ada");
        assert_eq!(first.start, 0);
        assert_eq!(first.matched(), "Ad");

        let last = find_matching_line("Ada\nBob", "OB").expect("last");
        assert_eq!(last.line, "Bob");
        assert_eq!(last.start, 1);
    }

    #[test]
    fn matching_line_phone_contents() {
        let matched = find_matching_line("+1 (415) 555-1212", "5551212").expect("match");
        assert_eq!(matched.line, "+1 (415) 555-1212");
        assert_eq!(matched.before(), "+1 (415) ");
        assert_eq!(matched.matched(), "555-1212");
        assert_eq!(matched.after(), "");
    }

    #[test]
    fn matching_line_none() {
        assert!(find_matching_line("John\nAlice", "bob").is_none());
        assert!(find_matching_line("", "bob").is_none());
    }

    #[test]
    fn matching_line_offsets_after_supplementary_plane() {
        let contents = "😀😀\n𝒜da 𝒜nn";
        let matched = find_matching_line(contents, "𝒜NN").expect("match");
        assert_eq!(matched.line, "𝒜da 𝒜nn");
        assert_eq!(matched.matched(), "𝒜nn");
        assert_eq!(matched.before(), "𝒜da ");
    }

    #[test]
    fn matching_line_clamps_match_spanning_lines() {
        let matched = find_matching_line("Ada\nBob", "a\nb").expect("match");
        assert_eq!(matched.line, "Ada");
        assert_eq!(matched.matched(), "a");
    }

    #[test]
    fn query_is_cleaned_and_classified() {
        let query = SearchQuery::new(" (555) ");
        assert_eq!(query.as_str(), "555");
        assert!(query.is_phone_number());
        assert_eq!(query.code_points().count(), 3);

        let query = SearchQuery::new("--ada!");
        assert_eq!(query.as_str(), "ada");
        assert!(!query.is_phone_number());
    }

    #[test]
    fn empty_query_never_matches() {
        assert!(SearchQuery::new("??").find_in("anything").is_none());
    }
}
