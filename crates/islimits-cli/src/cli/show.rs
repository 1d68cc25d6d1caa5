//! `islimits show`: print one stored override record.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use islimits_core::ports::OverrideStore;
use islimits_infra::store::JsonFileOverrideStore;
use islimits_types::ids::IslandId;

use super::output::records_table;

pub fn show_record(island: &str, store_dir: &Path, json: bool) -> Result<()> {
    let store = JsonFileOverrideStore::open(store_dir)
        .with_context(|| format!("failed to open store at {}", store_dir.display()))?;
    let island = IslandId::new(island);
    let record = store.get(&island)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    match record {
        Some(record) => {
            println!();
            println!(
                "  {} {} ({} limits)",
                style("Island").bold(),
                style(island.as_str()).cyan(),
                record.len()
            );
            println!();
            println!("{}", records_table(std::slice::from_ref(&record)));
            println!();
        }
        None => {
            println!();
            println!(
                "  {} No override record for island '{}'",
                style("i").blue().bold(),
                island
            );
            println!();
        }
    }

    Ok(())
}
