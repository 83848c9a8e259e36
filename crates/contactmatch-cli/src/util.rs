use anyhow::{anyhow, Context as _, Result};
use contactmatch_core::domain::resolve_mimetype;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .with_context(|| "read stdin")?;
            Ok(buf)
        }
    }
}

pub fn non_empty_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
}

pub fn parse_mimetype(raw: &str) -> Result<String> {
    let resolved = resolve_mimetype(raw);
    if resolved.is_empty() {
        return Err(anyhow!("mimetype cannot be empty"));
    }
    Ok(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::{non_empty_lines, parse_mimetype};
    use contactmatch_core::domain::mimetype::PHONE;

    #[test]
    fn non_empty_lines_skips_blanks_and_carriage_returns() {
        let lines: Vec<&str> = non_empty_lines("a\r\n\n  \nb\n").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn parse_mimetype_resolves_aliases() {
        assert_eq!(parse_mimetype("phone").unwrap(), PHONE);
        assert!(parse_mimetype("   ").is_err());
    }
}
