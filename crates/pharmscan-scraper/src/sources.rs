//! The three fixed pharmacy storefronts and their site-coupled facts.
//!
//! Every selector string in the crate lives either here (result-container
//! probe markers) or in the per-source rule tables under [`crate::extract`],
//! so markup churn on a storefront is a one-table change that never touches
//! fetch or aggregation logic.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use pharmscan_core::ProductRecord;

use crate::extract;

/// Characters percent-escaped in the search query before URL templating.
/// Space is the one that matters in practice; the rest keep the path/query
/// segment well-formed for queries pasted with punctuation.
const QUERY_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// One of the three scraped pharmacy storefronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceSite {
    Apollo,
    Netmeds,
    OneMg,
}

impl SourceSite {
    /// All sources, in response key order.
    pub const ALL: [Self; 3] = [Self::Apollo, Self::Netmeds, Self::OneMg];

    /// Fixed display name, used as the response key for this source.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Apollo => "Apollo Pharmacy",
            Self::Netmeds => "Netmeds",
            Self::OneMg => "1mg",
        }
    }

    /// Scheme+host origin used to absolutize relative product links.
    #[must_use]
    pub fn origin(self) -> &'static str {
        match self {
            Self::Apollo => "https://www.apollopharmacy.in",
            Self::Netmeds => "https://www.netmeds.com",
            Self::OneMg => "https://www.1mg.com",
        }
    }

    /// Search page URL for an already-escaped query.
    #[must_use]
    pub fn search_url(self, escaped_query: &str) -> String {
        match self {
            Self::Apollo => format!("{}/search-medicines/{escaped_query}", self.origin()),
            Self::Netmeds => format!(
                "{}/catalogsearch/result/{escaped_query}/all",
                self.origin()
            ),
            Self::OneMg => format!("{}/search/all?name={escaped_query}", self.origin()),
        }
    }

    /// CSS marker whose presence means the search page rendered results.
    ///
    /// 1mg A/B-tests two page templates, so its probe lists both card
    /// markers; either one appearing satisfies the probe.
    #[must_use]
    pub fn probe_selector(self) -> &'static str {
        match self {
            Self::Apollo => r#"div[class*="ProductCard_productCard"]"#,
            Self::Netmeds => "div.cat-item",
            Self::OneMg => {
                r#"div[class*="style__product-box"], div[class*="style__horizontal-card"]"#
            }
        }
    }

    /// Runs this source's extractor over rendered page content.
    #[must_use]
    pub fn extract(self, html: &str, cap: usize) -> Vec<ProductRecord> {
        match self {
            Self::Apollo => extract::apollo::extract(html, cap),
            Self::Netmeds => extract::netmeds::extract(html, cap),
            Self::OneMg => extract::onemg::extract(html, cap),
        }
    }
}

/// Lowercases and percent-escapes a raw user query for use in
/// [`SourceSite::search_url`].
#[must_use]
pub fn escape_query(raw: &str) -> String {
    utf8_percent_encode(&raw.trim().to_lowercase(), QUERY_ESCAPE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_query_lowercases_and_escapes_spaces() {
        assert_eq!(escape_query("Crocin Advance"), "crocin%20advance");
    }

    #[test]
    fn escape_query_trims_surrounding_whitespace() {
        assert_eq!(escape_query("  dolo 650  "), "dolo%20650");
    }

    #[test]
    fn escape_query_passes_plain_terms_through() {
        assert_eq!(escape_query("paracetamol"), "paracetamol");
    }

    #[test]
    fn search_urls_template_the_escaped_query() {
        let q = escape_query("benadryl syrup");
        assert_eq!(
            SourceSite::Apollo.search_url(&q),
            "https://www.apollopharmacy.in/search-medicines/benadryl%20syrup"
        );
        assert_eq!(
            SourceSite::Netmeds.search_url(&q),
            "https://www.netmeds.com/catalogsearch/result/benadryl%20syrup/all"
        );
        assert_eq!(
            SourceSite::OneMg.search_url(&q),
            "https://www.1mg.com/search/all?name=benadryl%20syrup"
        );
    }

    #[test]
    fn source_names_match_response_keys() {
        let names: Vec<&str> = SourceSite::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Apollo Pharmacy", "Netmeds", "1mg"]);
    }
}
