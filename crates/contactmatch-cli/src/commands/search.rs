use crate::commands::{print_json, Context};
use crate::error::{invalid_input, no_match};
use crate::util::{non_empty_lines, read_input};
use anyhow::Result;
use clap::Args;
use contactmatch_config::HighlightConfig;
use contactmatch_core::search::{MatchedLine, SearchQuery};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub query: String,
    #[arg(long, help = "Read candidates from this file instead of stdin")]
    pub file: Option<PathBuf>,
    #[arg(
        long,
        help = "Treat the whole input as one multi-line snippet instead of one candidate per line"
    )]
    pub snippet: bool,
}

pub fn search(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let query = SearchQuery::new(&args.query);
    if query.is_empty() {
        return Err(invalid_input("search query has no letters or digits"));
    }
    debug!(
        query = query.as_str(),
        phone_number = query.is_phone_number(),
        code_points = query.code_points().count(),
        "searching"
    );

    let input = read_input(args.file.as_deref())?;
    let matches: Vec<MatchedLine> = if args.snippet {
        query.find_in(&input).into_iter().collect()
    } else {
        non_empty_lines(&input)
            .filter_map(|candidate| query.find_in(candidate))
            .collect()
    };

    if matches.is_empty() {
        return Err(no_match(format!("nothing matches {:?}", query.as_str())));
    }

    if ctx.json {
        return print_json(&matches);
    }

    for matched in &matches {
        println!("{}", highlight(matched, &ctx.config.highlight));
    }
    Ok(())
}

fn highlight(matched: &MatchedLine, markers: &HighlightConfig) -> String {
    format!(
        "{}{}{}{}{}",
        matched.before(),
        markers.open,
        matched.matched(),
        markers.close,
        matched.after()
    )
}

#[cfg(test)]
mod tests {
    use super::highlight;
    use contactmatch_config::HighlightConfig;
    use contactmatch_core::search::find_matching_line;

    #[test]
    fn highlight_wraps_the_match() {
        let matched = find_matching_line("Ada Lovelace", "love").expect("match");
        let markers = HighlightConfig {
            open: "<".to_string(),
            close: ">".to_string(),
        };
        assert_eq!(highlight(&matched, &markers), "Ada <Love>lace");
    }
}
