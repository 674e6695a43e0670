//! Cart commands.

use anyhow::Result;
use dialoguer::Confirm;
use guitarla_commerce::cart::{Cart, CartIntent, CartTotals, MAX_ITEMS, MIN_ITEMS};
use guitarla_commerce::catalog::Catalog;
use guitarla_commerce::ItemId;
use serde::Serialize;

use super::{ClearArgs, ItemArgs};
use crate::context::{Context, Engine};
use crate::output::quantity_gauge;

/// Run the cart command.
pub fn show(ctx: &Context) -> Result<()> {
    let engine = ctx.engine()?;
    render(engine.cart(), ctx)
}

/// Run the add command.
pub fn add(args: ItemArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let intent = add_intent(&catalog, args.id)?;
    apply(intent, ctx)
}

/// Run the remove command.
pub fn remove(args: ItemArgs, ctx: &Context) -> Result<()> {
    apply(CartIntent::Remove(args.id), ctx)
}

/// Run the increase command.
pub fn increase(args: ItemArgs, ctx: &Context) -> Result<()> {
    apply(CartIntent::Increase(args.id), ctx)
}

/// Run the decrease command.
pub fn decrease(args: ItemArgs, ctx: &Context) -> Result<()> {
    apply(CartIntent::Decrease(args.id), ctx)
}

/// Run the clear command.
pub fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut engine = ctx.engine()?;

    if engine.cart().is_empty() {
        ctx.output.info("Cart is already empty.");
        return Ok(());
    }

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} guitar(s) from the cart?",
                engine.cart().item_count()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    engine.clear_cart();
    ctx.output.success("Cart cleared");
    warn_if_unsaved(&engine, ctx);
    render(engine.cart(), ctx)
}

fn add_intent(catalog: &Catalog, id: ItemId) -> Result<CartIntent> {
    let item = catalog.require(id)?;
    Ok(CartIntent::Add(item.clone()))
}

fn apply(intent: CartIntent, ctx: &Context) -> Result<()> {
    let mut engine = ctx.engine()?;
    let before = engine.cart().clone();
    engine.dispatch(intent.clone());

    if let Some(note) = describe(&intent, &before, engine.cart()) {
        ctx.output.warn(&note);
    } else {
        ctx.output.success(&format!("Applied {intent}"));
    }
    warn_if_unsaved(&engine, ctx);

    render(engine.cart(), ctx)
}

fn warn_if_unsaved(engine: &Engine, ctx: &Context) {
    if engine.is_dirty() {
        ctx.output.warn(&format!(
            "Cart could not be saved to {}; run with --verbose for details",
            ctx.store_dir().display()
        ));
    }
}

/// Explain why an intent left the cart unchanged.
fn describe(intent: &CartIntent, before: &Cart, after: &Cart) -> Option<String> {
    if before != after {
        return None;
    }
    let id = intent.item_id()?;
    let note = match (intent, before.line(id)) {
        (_, None) => format!("Item {id} is not in the cart"),
        (CartIntent::Add(_) | CartIntent::Increase(_), Some(_)) => {
            format!("Item {id} is already at the maximum of {MAX_ITEMS}")
        }
        (CartIntent::Decrease(_), Some(_)) => format!(
            "Item {id} is already at the minimum of {MIN_ITEMS}; use `guitarla remove {id}` to drop it"
        ),
        _ => return None,
    };
    Some(note)
}

#[derive(Serialize)]
struct CartView<'a> {
    lines: &'a Cart,
    item_count: u32,
    total: f64,
}

fn render(cart: &Cart, ctx: &Context) -> Result<()> {
    let totals = cart.totals()?;

    if ctx.output.is_json() {
        ctx.output.json(&CartView {
            lines: cart,
            item_count: totals.item_count,
            total: totals.total.as_decimal(),
        });
        return Ok(());
    }

    ctx.output.header("Cart");

    if totals.is_empty() {
        ctx.output.info("The cart is empty.");
        return Ok(());
    }

    let widths = [4, 12, 10, 12, 10];
    ctx.output
        .table_header(&["ID", "NAME", "PRICE", "QTY", "SUBTOTAL"], &widths);
    for line in &totals.lines {
        ctx.output.table_row(
            &[
                &line.id.to_string(),
                &line.name,
                &line.unit_price.to_string(),
                &format!("{} {}", line.quantity, quantity_gauge(line.quantity, MAX_ITEMS)),
                &line.subtotal.to_string(),
            ],
            &widths,
        );
    }

    println!();
    for (label, value) in summary(&totals) {
        ctx.output.kv(label, &value);
    }
    Ok(())
}

/// Footer rows under the cart table.
fn summary(totals: &CartTotals) -> [(&'static str, String); 2] {
    [
        ("Items", totals.item_count.to_string()),
        ("Total", totals.total.to_string()),
    ]
}
