//! Apollo Pharmacy extractor. Single layout; hashed utility class names, so
//! the card marker matches on a class-name substring.

use std::sync::LazyLock;

use pharmscan_core::{ProductRecord, LINK_NOT_FOUND, NAME_NOT_FOUND, QUANTITY_NOT_FOUND};
use scraper::{Html, Selector};

use super::FieldRules;
use crate::parse::{absolutize_link, normalize_price};

const ORIGIN: &str = "https://www.apollopharmacy.in";

struct ApolloRules {
    card: Selector,
    name: FieldRules,
    quantity: FieldRules,
    price: FieldRules,
    link: FieldRules,
}

static RULES: LazyLock<ApolloRules> = LazyLock::new(|| ApolloRules {
    card: Selector::parse(r#"div[class*="ProductCard_productCard"]"#).expect("valid card selector"),
    name: FieldRules::new(&["h2.Rb", "h2"]),
    quantity: FieldRules::new(&["h2:not(.Rb)"]),
    price: FieldRules::new(&["p.Pb.wf", r#"div[class*="Ob"] p"#]),
    link: FieldRules::new(&["a[href]"]),
});

/// Extracts up to `cap` product records from a rendered Apollo search page.
pub(crate) fn extract(html: &str, cap: usize) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);
    (1u32..)
        .zip(document.select(&RULES.card).take(cap))
        .map(|(number, card)| {
            let medicine = RULES
                .name
                .text(card)
                .unwrap_or_else(|| NAME_NOT_FOUND.to_owned());
            let quantity = RULES
                .quantity
                .text(card)
                .unwrap_or_else(|| QUANTITY_NOT_FOUND.to_owned());
            let price = normalize_price(&RULES.price.text(card).unwrap_or_default());
            let link = RULES.link.href(card).map_or_else(
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
