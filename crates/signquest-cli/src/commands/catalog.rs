//! The `signquest catalog` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use signquest_store::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = config.asset_catalog();

    if catalog.is_empty() {
        println!("The catalog is empty. Add images to `catalog` in signquest.toml.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Image", "Answer"]);
    for (i, asset) in catalog.assets().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(asset),
            Cell::new(asset.answer()),
        ]);
    }

    println!("{table}");
    println!("{} images", catalog.len());

    Ok(())
}
