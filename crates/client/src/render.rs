//! Plain-text rendering of a [`StorefrontView`].

use std::fmt::Write as _;

use crate::state::StorefrontView;

const TITLE_WIDTH: usize = 44;

/// Render the listing (and the cart, when the panel is open) as text.
pub fn render(view: &StorefrontView) -> String {
    let mut out = String::new();

    if view.loading {
        out.push_str("Loading products...\n");
        return out;
    }

    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "! {notice}");
    }

    if !view.categories.is_empty() {
        let _ = writeln!(out, "Categories: {}", view.categories.join(", "));
    }

    let _ = writeln!(out, "Products ({})", view.product_count_label);
    for product in &view.products {
        let _ = writeln!(
            out,
            "  #{:<4} {:<width$} {:<18} {:>10}",
            product.id,
            truncate(&product.title, TITLE_WIDTH),
            product.category,
            product.price.to_string(),
            width = TITLE_WIDTH,
        );
    }

    if view.cart_open {
        let _ = writeln!(out, "Cart ({} items)", view.cart_item_count);
        if view.cart_lines.is_empty() {
            out.push_str("  Your cart is empty\n");
        }
        for line in &view.cart_lines {
            let _ = writeln!(
                out,
                "  {} x {:<width$} {:>10}",
                line.quantity,
                truncate(&line.product.title, TITLE_WIDTH),
                line.subtotal.to_string(),
                width = TITLE_WIDTH,
            );
        }
        let _ = writeln!(out, "  Total: {}", view.cart_total);
    }

    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
