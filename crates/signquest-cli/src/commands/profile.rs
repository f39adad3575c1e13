//! The `signquest profile` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use signquest_core::model::Identity;
use signquest_store::config::load_config_from;
use signquest_store::create_store;

pub async fn execute(email: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = create_store(&config.store)?;
    let identity = Identity::new(email);

    let profile = match store.fetch_profile(&identity).await {
        Ok(profile) => profile,
        Err(e) if e.is_missing_profile() => {
            println!("No stored profile for {identity} ({} store).", store.name());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut table = Table::new();
    table.set_header(vec!["Player", "Points", "Streak", "Evolution"]);
    table.add_row(vec![
        Cell::new(&identity),
        Cell::new(profile.points()),
        Cell::new(profile.streak()),
        Cell::new(format!(
            "{} ({})",
            profile.evolution_tier(),
            profile.evolution_tier().artwork()
        )),
    ]);

    println!("{table}");
    Ok(())
}
