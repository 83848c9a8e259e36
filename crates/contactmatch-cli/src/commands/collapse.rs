use crate::commands::{print_json, Context};
use crate::util::parse_mimetype;
use anyhow::Result;
use clap::Args;
use contactmatch_core::rules::should_collapse;
use contactmatch_core::PhoneNumberOracle as _;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CollapseArgs {
    pub first: String,
    pub second: String,
    #[arg(long, help = "Mimetype of both values (alias or full mimetype)")]
    pub mimetype: Option<String>,
    #[arg(long, help = "Mimetype of the second value, when it differs")]
    pub mimetype_b: Option<String>,
}

#[derive(Debug, Args)]
pub struct MatchTypeArgs {
    pub first: String,
    pub second: String,
}

#[derive(Debug, Serialize)]
struct CollapseDto {
    first: String,
    second: String,
    mimetype: String,
    mimetype_b: String,
    collapse: bool,
}

pub fn collapse(ctx: &Context<'_>, args: CollapseArgs) -> Result<()> {
    let mimetype = match args.mimetype.as_deref() {
        Some(raw) => parse_mimetype(raw)?,
        None => ctx.config.default_mimetype.clone(),
    };
    let mimetype_b = match args.mimetype_b.as_deref() {
        Some(raw) => parse_mimetype(raw)?,
        None => mimetype.clone(),
    };

    let collapse = should_collapse(
        ctx.oracle,
        Some(mimetype.as_str()),
        Some(args.first.as_str()),
        Some(mimetype_b.as_str()),
        Some(args.second.as_str()),
    );
    debug!(%mimetype, %mimetype_b, collapse, "compared values");

    if ctx.json {
        return print_json(&CollapseDto {
            first: args.first,
            second: args.second,
            mimetype,
            mimetype_b,
            collapse,
        });
    }

    println!("{}", if collapse { "collapse" } else { "distinct" });
    Ok(())
}

pub fn match_type(ctx: &Context<'_>, args: MatchTypeArgs) -> Result<()> {
    let result = ctx.oracle.match_type(&args.first, &args.second);

    if ctx.json {
        return print_json(&serde_json::json!({
            "first": args.first,
            "second": args.second,
            "match_type": result,
        }));
    }

    println!("{}", result.as_str());
    Ok(())
}
