//! 1mg extractor. The site A/B-tests two page templates (a grid of product
//! boxes and a horizontal-card list), so the rule table exists once per
//! layout and extraction picks whichever layout actually rendered.

use std::sync::LazyLock;

use pharmscan_core::{ProductRecord, LINK_NOT_FOUND, NAME_NOT_FOUND, QUANTITY_NOT_FOUND};
use scraper::{Html, Selector};

use super::FieldRules;
use crate::parse::{absolutize_link, normalize_price};

const ORIGIN: &str = "https://www.1mg.com";

struct LayoutRules {
    card: Selector,
    name: FieldRules,
    quantity: FieldRules,
    price: FieldRules,
    mrp: FieldRules,
    link: FieldRules,
}

static LAYOUT_GRID: LazyLock<LayoutRules> = LazyLock::new(|| LayoutRules {
    card: Selector::parse(r#"div[class*="style__product-box"]"#).expect("valid card selector"),
    name: FieldRules::new(&[r#"div[class*="style__pro-title"]"#]),
    quantity: FieldRules::new(&[r#"div[class*="style__pack-size"]"#]),
    price: FieldRules::new(&[r#"div[class*="style__price-tag"]"#]),
    mrp: FieldRules::new(&[r#"div[class*="style__mrp-tag"]"#]),
    link: FieldRules::new(&["a[href]"]),
});

static LAYOUT_HORIZONTAL: LazyLock<LayoutRules> = LazyLock::new(|| LayoutRules {
    card: Selector::parse(r#"div[class*="style__horizontal-card"]"#).expect("valid card selector"),
    name: FieldRules::new(&[r#"span[class*="style__pro-title"]"#]),
    quantity: FieldRules::new(&[r#"div[class*="style__pack-size"]"#]),
    price: FieldRules::new(&[r#"div[class*="style__price-tag"]"#]),
    mrp: FieldRules::new(&[r#"div[class*="style__mrp-tag"]"#]),
    link: FieldRules::new(&["a[href]"]),
});

/// Extracts up to `cap` product records from a rendered 1mg search page,
/// preferring the grid layout when both templates left markup behind.
pub(crate) fn extract(html: &str, cap: usize) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);

    let grid_cards: Vec<_> = document.select(&LAYOUT_GRID.card).take(cap).collect();
    let (layout, cards) = if grid_cards.is_empty() {
        let horizontal_cards: Vec<_> = document
            .select(&LAYOUT_HORIZONTAL.card)
            .take(cap)
            .collect();
        (&*LAYOUT_HORIZONTAL, horizontal_cards)
    } else {
        (&*LAYOUT_GRID, grid_cards)
    };

    (1u32..)
        .zip(cards)
        .map(|(number, card)| {
            let medicine = layout
                .name
                .text(card)
                .unwrap_or_else(|| NAME_NOT_FOUND.to_owned());
            let quantity = layout
                .quantity
                .text(card)
                .unwrap_or_else(|| QUANTITY_NOT_FOUND.to_owned());
            let price = normalize_price(&layout.price.text(card).unwrap_or_default());
            // List price is parsed for diagnostics only; the record shape is
            // uniform across sources and carries the selling price alone.
            if let Some(mrp) = layout.mrp.text(card) {
                tracing::debug!(%mrp, number, "1mg list price ignored");
            }
            let link = layout.link.href(card).map_or_else(
                || LINK_NOT_FOUND.to_owned(),
                |href| absolutize_link(ORIGIN, &href),
            );

            ProductRecord {
                number,
                medicine,
                quantity,
                price,
                link,
            }
        })
        .collect()
}
