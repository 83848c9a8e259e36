use anyhow::Result;
use contactmatch_config::AppConfig;
use contactmatch_core::PhoneNumberOracle;
use serde::Serialize;
use std::io::{self, Write};

pub mod collapse;
pub mod completions;
pub mod dedup;
pub mod query;
pub mod search;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub oracle: &'a dyn PhoneNumberOracle,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
