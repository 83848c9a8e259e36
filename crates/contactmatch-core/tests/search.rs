use contactmatch_core::search::{
    contains_token_prefix, find_matching_line, find_next_token_start, number_contains,
    SearchQuery, TokenStarts,
};

#[test]
fn highlight_every_query_token_in_a_snippet() {
    let line = "Ada Lovelace, Countess of Lovelace";
    let query = SearchQuery::new("  ada count!! ");
    let mut highlights = Vec::new();

    let query_text = query.as_str();
    let mut cursor = 0;
    while cursor < query_text.len() {
        let end = query_text[cursor..]
            .find(' ')
            .map_or(query_text.len(), |pos| cursor + pos);
        let token = &query_text[cursor..end];
        if let Some(start) = contains_token_prefix(line, token) {
            highlights.push(&line[start..start + token.len()]);
        }
        cursor = find_next_token_start(query_text, cursor);
    }

    assert_eq!(highlights, vec!["Ada", "Count"]);
}

#[test]
fn token_starts_match_next_token_walk() {
    let line = "  Émile—Zola (writer)  ";
    let starts: Vec<usize> = TokenStarts::new(line).collect();
    let words: Vec<&str> = starts
        .iter()
        .map(|&start| {
            let rest = &line[start..];
            let end = rest
                .find(|ch: char| !ch.is_alphanumeric())
                .unwrap_or(rest.len());
            &rest[..end]
        })
        .collect();
    assert_eq!(words, vec!["Émile", "Zola", "writer"]);
}

#[test]
fn phone_snippet_matches_regardless_of_query_formatting() {
    let contents = "(415) 555-1212";
    for query in ["4155551212", "415-555-1212", "(415) 555 1212", "555.12"] {
        let matched = find_matching_line(contents, query).expect(query);
        assert_eq!(matched.line, contents);
    }
    let found = number_contains(contents, "555.12").expect("match");
    assert_eq!(&contents[found.start..found.end], "555-12");
}

#[test]
fn text_snippet_with_digits_uses_text_search() {
    let contents = "Suite 100\n1 Infinite Loop";
    let matched = find_matching_line(contents, "infinite").expect("match");
    assert_eq!(matched.line, "1 Infinite Loop");
    assert_eq!(matched.start, 2);
}
