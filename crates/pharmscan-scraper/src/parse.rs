//! Shared text normalization for the per-source extractors: price-token
//! matching, link absolutization, and the Netmeds name/quantity splitter.

use std::sync::LazyLock;

use pharmscan_core::PRICE_NOT_FOUND;
use regex::Regex;

/// Currency-prefixed numeric token: rupee symbol, optional whitespace,
/// digits, optional decimal fraction.
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"₹\s*\d+\.?\d*").expect("valid price regex"));

/// End-anchored pack-size suffix: an optional count followed by a unit,
/// dosage-form, or packaging keyword and whatever trails it. Netmeds folds
/// the pack size into the product title, e.g.
/// `"Dolo 650mg Tablet 15'S"` or `"Volini Spray 100 gm"`.
static QUANTITY_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s+((?:\d+\s*)?(?:gm|g|ml|l|tablets?|capsules?|strips?|sachets?|units?|pc|pkt|kit|pair|each|bottles?|tubes?|packs?|suspension|syrup|cream|ointment|gel|solution|drops|injection|vial|jar|can|box|blister|spray|pouch|wipe|pad|roll|sheet|disc|patch|combipack|applicator|cartridge|refill|ampoule|aerosol|pessary|suppository|lozenge|pastille|powder|granule|flake|pellet|wafer|film|implant|insert|ring|coil|sponge|tampon|diaphragm|condom|pump|inhaler|nebulizer|syringe|needle|catheter|bag|pack of)\b.*)$",
    )
    .expect("valid quantity suffix regex")
});

/// Returns the first currency-prefixed numeric token in `raw`, if any.
pub(crate) fn price_token(raw: &str) -> Option<String> {
    PRICE_RE.find(raw).map(|m| m.as_str().to_owned())
}

/// Normalizes raw price text to its first currency token, or the sentinel.
pub(crate) fn normalize_price(raw: &str) -> String {
    price_token(raw).unwrap_or_else(|| PRICE_NOT_FOUND.to_owned())
}

/// Absolutizes an extracted `href` against the source origin.
///
/// Already-absolute links pass through; protocol-relative links get a
/// scheme; root-relative paths get the origin prefixed.
pub(crate) fn absolutize_link(origin: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_owned()
    } else if let Some(rest) = href.strip_prefix("//") {
        format!("https://{rest}")
    } else if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}

/// Splits a raw Netmeds product title into `(medicine, quantity)`.
///
/// When the title ends in a recognized pack-size phrase the suffix becomes
/// the quantity descriptor and the prefix the cleaned medicine name;
/// otherwise the quantity is `None` and the name is the full raw text.
pub(crate) fn split_name_quantity(raw: &str) -> (String, Option<String>) {
    match QUANTITY_SUFFIX_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
    {
        Some(suffix) => {
            let quantity = suffix.as_str().trim().to_owned();
            let name = raw[..suffix.start()].trim().to_owned();
            (name, Some(quantity))
        }
        None => (raw.trim().to_owned(), None),
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
