use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use contactmatch_core::search::{clean_start_and_end_of_search_query, is_phone_number};

#[derive(Debug, Args)]
pub struct QueryArgs {
    pub query: String,
}

pub fn clean_query(ctx: &Context<'_>, args: QueryArgs) -> Result<()> {
    let cleaned = clean_start_and_end_of_search_query(&args.query);
    if ctx.json {
        return print_json(&serde_json::json!({ "query": args.query, "cleaned": cleaned }));
    }
    println!("{}", cleaned);
    Ok(())
}

pub fn is_phone(ctx: &Context<'_>, args: QueryArgs) -> Result<()> {
    let phone_number = is_phone_number(&args.query);
    if ctx.json {
        return print_json(&serde_json::json!({
            "query": args.query,
            "phone_number": phone_number,
        }));
    }
    println!("{}", phone_number);
    Ok(())
}
