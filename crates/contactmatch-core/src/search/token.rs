/// Letters and digits form tokens; everything else delimits them.
pub fn is_token_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

fn fold_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Returns the byte offset of the first case-insensitive occurrence of `needle`.
///
/// Comparison is one code point against one code point, so every returned offset lies
/// on a `char` boundary.
pub fn contains_token_prefix(haystack: &str, needle: &str) -> Option<usize> {
    find_folded(haystack, needle).map(|(start, _)| start)
}

/// Like [`contains_token_prefix`], also returning the end of the matched text.
pub(crate) fn find_folded(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().collect();
    if haystack.chars().count() < needle.len() {
        return None;
    }

    haystack.char_indices().find_map(|(start, _)| {
        let mut rest = haystack[start..].char_indices();
        let mut end = start;
        for &expected in &needle {
            let (offset, actual) = rest.next()?;
            if !fold_eq(actual, expected) {
                return None;
            }
            end = start + offset + actual.len_utf8();
        }
        Some((start, end))
    })
}

/// Finds the start of the token after the one at `start`.
///
/// Returns `line.len()` when no further token exists or `start` is not a valid
/// boundary.
pub fn find_next_token_start(line: &str, start: usize) -> usize {
    let Some(rest) = line.get(start..) else {
        return line.len();
    };
    let token_end = rest.find(|ch: char| !is_token_char(ch)).unwrap_or(rest.len());
    let delimiters = &rest[token_end..];
    let next = delimiters.find(is_token_char).unwrap_or(delimiters.len());
    start + token_end + next
}

/// Trims leading and trailing delimiters from a query; inner punctuation is kept.
pub fn clean_start_and_end_of_search_query(query: &str) -> &str {
    query.trim_matches(|ch: char| !is_token_char(ch))
}

/// Iterates the byte offsets at which tokens start in a line.
#[derive(Debug, Clone)]
pub struct TokenStarts<'a> {
    line: &'a str,
    next: Option<usize>,
}

impl<'a> TokenStarts<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            next: line.find(is_token_char),
        }
    }
}

impl Iterator for TokenStarts<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        let following = find_next_token_start(self.line, current);
        self.next = (following < self.line.len()).then_some(following);
        Some(current)
    }
}
