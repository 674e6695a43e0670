//! Catalog listing.

use anyhow::Result;

use crate::context::Context;
use crate::output::truncate;

/// Run the catalog command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&catalog);
        return Ok(());
    }

    ctx.output.header("Guitar Collection");

    if catalog.is_empty() {
        ctx.output.info("The catalog is empty.");
        return Ok(());
    }

    let widths = [4, 12, 10, 48];
    ctx.output
        .table_header(&["ID", "NAME", "PRICE", "DESCRIPTION"], &widths);
    for item in &catalog {
        ctx.output.table_row(
            &[
                &item.id.to_string(),
                &item.name,
                &item.price.to_string(),
                &truncate(&item.description, 48),
            ],
            &widths,
        );
    }

    println!();
    ctx.output.info("Add a guitar with `guitarla add <id>`.");
    Ok(())
}
