//! Netmeds extractor. Stable semantic class names, but the product title
//! folds the pack size into one string and the price box nests the current
//! price among MRP/discount children, so both get normalization passes.

use std::sync::LazyLock;

use pharmscan_core::{
    ProductRecord, LINK_NOT_FOUND, NAME_NOT_FOUND, PRICE_NOT_FOUND, QUANTITY_NOT_FOUND,
};
use scraper::{ElementRef, Html, Selector};

use super::{element_text, FieldRules};
use crate::parse::{absolutize_link, price_token, split_name_quantity};

const ORIGIN: &str = "https://www.netmeds.com";

struct NetmedsRules {
    item: Selector,
    name: FieldRules,
    price_box: Selector,
    price_children: Selector,
    link: FieldRules,
}

static RULES: LazyLock<NetmedsRules> = LazyLock::new(|| NetmedsRules {
    item: Selector::parse("div.cat-item").expect("valid item selector"),
    name: FieldRules::new(&["h3.clsgetname"]),
    price_box: Selector::parse("span.price-box").expect("valid price box selector"),
    price_children: Selector::parse("span, div, p").expect("valid price child selector"),
    link: FieldRules::new(&["a[href]"]),
});

/// Extracts up to `cap` product records from a rendered Netmeds search page.
pub(crate) fn extract(html: &str, cap: usize) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);
    (1u32..)
        .zip(document.select(&RULES.item).take(cap))
        .map(|(number, item)| {
            let (medicine, quantity) = match RULES.name.text(item) {
                Some(raw) => {
                    let (name, quantity) = split_name_quantity(&raw);
                    (
                        name,
                        quantity.unwrap_or_else(|| QUANTITY_NOT_FOUND.to_owned()),
                    )
                }
                None => (NAME_NOT_FOUND.to_owned(), QUANTITY_NOT_FOUND.to_owned()),
            };
            let price = extract_price(item);
            let link = RULES.link.href(item).map_or_else(
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

/// Scans the price box's child elements in document order for the first
/// currency token; falls back to matching against the container's full
/// text, then to the sentinel.
fn extract_price(item: ElementRef<'_>) -> String {
    let Some(container) = item.select(&RULES.price_box).next() else {
        return PRICE_NOT_FOUND.to_owned();
    };

    for child in container.select(&RULES.price_children) {
        if let Some(token) = price_token(&element_text(child)) {
            return token;
        }
    }

    price_token(&element_text(container)).unwrap_or_else(|| PRICE_NOT_FOUND.to_owned())
}
