use crate::commands::{print_json, Context};
use crate::util::{non_empty_lines, parse_mimetype, read_input};
use anyhow::Result;
use clap::Args;
use contactmatch_core::domain::DataItem;
use contactmatch_core::rules::collapse_items;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct DedupArgs {
    #[arg(long, help = "Read values from this file instead of stdin")]
    pub file: Option<PathBuf>,
    #[arg(long, help = "Mimetype of every value (alias or full mimetype)")]
    pub mimetype: Option<String>,
}

pub fn dedup(ctx: &Context<'_>, args: DedupArgs) -> Result<()> {
    let mimetype = match args.mimetype.as_deref() {
        Some(raw) => parse_mimetype(raw)?,
        None => ctx.config.default_mimetype.clone(),
    };
    let input = read_input(args.file.as_deref())?;

    let items: Vec<DataItem> = non_empty_lines(&input)
        .map(|value| DataItem::new(mimetype.as_str(), value.trim()))
        .collect();
    let kept = collapse_items(ctx.oracle, &items);
    debug!(
        read = items.len(),
        kept = kept.len(),
        mimetype = mimetype.as_str(),
        "collapsed values"
    );

    let values: Vec<&str> = kept.iter().filter_map(DataItem::value).collect();
    if ctx.json {
        return print_json(&values);
    }

    for value in values {
        println!("{}", value);
    }
    Ok(())
}
