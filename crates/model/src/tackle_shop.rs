use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::{ExampleData, Location};

/// A standalone tackle shop listing.
///
/// Opening hours are an ordered day-to-hours map so the wire representation
/// keeps the order records were entered in (Monday first).
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TackleShop {
    /// May be left out of admin payloads; an empty slug is derived from the
    /// name on create/update.
    #[serde(default)]
    pub slug: String,
    pub name: String,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub opening_hours: IndexMap<String, String>,
    pub location: Option<Location>,
}

impl HasId for TackleShop {
    type IdType = String;
}

impl ExampleData for TackleShop {
    fn example_data() -> Self {
        Self {
            slug: "medway-angling-supplies".to_owned(),
            name: "Medway Angling Supplies".to_owned(),
            address: Some("14 High Street, Rochester".to_owned()),
            postcode: Some("ME1 1PY".to_owned()),
            phone: Some("01634 555123".to_owned()),
            email: Some("shop@medwayangling.example".to_owned()),
            website: Some("https://medwayangling.example".to_owned()),
            brands: vec!["Korda".to_owned(), "Drennan".to_owned(), "Shimano".to_owned()],
            opening_hours: IndexMap::from([
                ("Monday".to_owned(), "9:00-17:30".to_owned()),
                ("Saturday".to_owned(), "8:00-16:00".to_owned()),
                ("Sunday".to_owned(), "Closed".to_owned()),
            ]),
            location: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TackleShop;

    #[test]
    fn create_payload_without_slug_deserializes() {
        let shop: TackleShop = serde_json::from_str(
            r#"{"name": "Medway Angling Supplies", "postcode": "ME1 1PY"}"#,
        )
        .unwrap();

        assert_eq!(shop.slug, "");
        assert!(shop.brands.is_empty());
        assert!(shop.opening_hours.is_empty());
    }
}
