use serde::{Deserialize, Serialize};

/// Placeholder emitted when a card's name element cannot be located.
pub const NAME_NOT_FOUND: &str = "Name not found";
/// Placeholder emitted when no pack-size / quantity descriptor is found.
pub const QUANTITY_NOT_FOUND: &str = "Quantity not found";
/// Placeholder emitted when no currency-prefixed price token is found.
pub const PRICE_NOT_FOUND: &str = "Price not found";
/// Placeholder emitted when a card carries no product link.
pub const LINK_NOT_FOUND: &str = "Link not found";

/// One normalized product listing scraped from a pharmacy search page.
///
/// Every field is always populated: extraction misses degrade individual
/// fields to their `*_NOT_FOUND` placeholder, never to an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// 1-based position within the source's result list, matching page
    /// display order. Gapless per source.
    pub number: u32,
    /// Medicine display name, e.g. `"Dolo 650mg"`.
    pub medicine: String,
    /// Pack-size descriptor, e.g. `"Strip Of 15 Tablets"`.
    pub quantity: String,
    /// Currency-prefixed numeric price token, e.g. `"₹30.91"`.
    pub price: String,
    /// Absolute URL of the product page.
    pub link: String,
}

/// Search results grouped by source, keyed by the three fixed storefront
/// names. All keys are always present (a failed or empty source serializes
/// as an empty array) and key order is fixed regardless of which pipeline
/// finished first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResponse {
    #[serde(rename = "Apollo Pharmacy")]
    pub apollo: Vec<ProductRecord>,
    #[serde(rename = "Netmeds")]
    pub netmeds: Vec<ProductRecord>,
    #[serde(rename = "1mg")]
    pub one_mg: Vec<ProductRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(number: u32) -> ProductRecord {
        ProductRecord {
            number,
            medicine: "Dolo 650mg".to_owned(),
            quantity: "Strip Of 15 Tablets".to_owned(),
            price: "₹30.91".to_owned(),
            link: "https://www.netmeds.com/prescriptions/dolo-650mg-tablet-15-s".to_owned(),
        }
    }

    #[test]
    fn aggregate_response_serializes_fixed_source_keys_in_order() {
        let response = AggregateResponse {
            apollo: vec![make_record(1)],
            netmeds: vec![],
            one_mg: vec![],
        };
        // Serialized as a stream, so struct declaration order is the wire
        // key order regardless of completion order upstream.
        let json = serde_json::to_string(&response).expect("serialize");
        let apollo = json.find("\"Apollo Pharmacy\"").expect("apollo key");
        let netmeds = json.find("\"Netmeds\"").expect("netmeds key");
        let one_mg = json.find("\"1mg\"").expect("1mg key");
        assert!(apollo < netmeds && netmeds < one_mg);
    }

    #[test]
    fn aggregate_response_keeps_empty_sources_present() {
        let json = serde_json::to_value(AggregateResponse::default()).expect("serialize");
        assert_eq!(json["Apollo Pharmacy"], serde_json::json!([]));
        assert_eq!(json["Netmeds"], serde_json::json!([]));
        assert_eq!(json["1mg"], serde_json::json!([]));
    }

    #[test]
    fn product_record_round_trips_field_names() {
        let json = serde_json::to_value(make_record(2)).expect("serialize");
        assert_eq!(json["number"], 2);
        assert_eq!(json["medicine"], "Dolo 650mg");
        assert_eq!(json["quantity"], "Strip Of 15 Tablets");
        assert_eq!(json["price"], "₹30.91");
        assert!(json["link"]
            .as_str()
            .expect("link string")
            .starts_with("https://www.netmeds.com/"));
    }
}
