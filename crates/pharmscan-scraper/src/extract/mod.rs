//! Per-source record extractors over rendered page content.
//!
//! Each source module owns a static rule table of CSS selectors and a
//! card-walking `extract` function. Field lookups go through [`FieldRules`]:
//! an ordered selector list applied first-match-wins, degrading to the
//! caller's sentinel when nothing matches. Extraction never fails: a
//! missing element costs one field, not the record or the source.

pub(crate) mod apollo;
pub(crate) mod netmeds;
pub(crate) mod onemg;

use scraper::{ElementRef, Selector};

/// Ordered field-extraction rule set: selectors are tried against the card
/// scope in priority order and the first element found wins.
pub(crate) struct FieldRules {
    selectors: Vec<Selector>,
}

impl FieldRules {
    /// Compiles a priority-ordered selector list.
    ///
    /// Panics on malformed selectors, which are all compile-time string
    /// literals in the per-source rule tables.
    pub(crate) fn new(selectors: &[&str]) -> Self {
        let selectors = selectors
            .iter()
            .map(|raw| Selector::parse(raw).expect("valid field selector"))
            .collect();
        Self { selectors }
    }

    /// First element under `scope` matched by any rule, in rule order.
    pub(crate) fn select_first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|selector| scope.select(selector).next())
    }

    /// Trimmed text of the first matched element, if any is non-empty.
    pub(crate) fn text(&self, scope: ElementRef<'_>) -> Option<String> {
        self.select_first(scope)
            .map(element_text)
            .filter(|text| !text.is_empty())
    }

    /// `href` attribute of the first matched element.
    pub(crate) fn href(&self, scope: ElementRef<'_>) -> Option<String> {
        self.select_first(scope)
            .and_then(|el| el.value().attr("href"))
            .map(str::to_owned)
    }
}

/// Concatenated, whitespace-trimmed text content of an element.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_owned()
}
