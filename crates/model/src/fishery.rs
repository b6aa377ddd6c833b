use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::{ExampleData, Location};

/// A bookable angling venue; the central listing entity.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Fishery {
    /// May be left out of admin payloads; an empty slug is derived from the
    /// name on create/update.
    #[serde(default)]
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub rules: Option<String>,
    pub image: Option<String>,
    pub district: Option<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub fishing_types: Vec<String>,
    #[serde(default)]
    pub booking_types: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
    pub day_ticket_price: Option<String>,
    pub wifi_signal: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub location: Option<Location>,
    #[serde(flatten)]
    pub amenities: Amenities,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_fishery_of_the_week: bool,
    #[serde(default)]
    pub has_accommodation: bool,
}

impl HasId for Fishery {
    type IdType = String;
}

/// The per-venue amenity flags. Raw storage keeps these nullable; by the
/// time a `Fishery` exists they are concrete booleans.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Amenities {
    pub night_fishing: bool,
    pub match_fishing_friendly: bool,
    pub disabled_access: bool,
    pub dog_friendly: bool,
    pub fire_pits_allowed: bool,
    pub parking_close_to_pegs: bool,
    pub camping: bool,
    pub tackle_shop_on_site: bool,
    pub private_hire: bool,
    pub tackle_hire: bool,
    pub coaching: bool,
    pub keepnets_allowed: bool,
    pub twenty_four_hour_access: bool,
    pub guests_allowed: bool,
    pub under_18s_welcome: bool,
}

impl ExampleData for Fishery {
    fn example_data() -> Self {
        Self {
            slug: "willow-pool-fisheries".to_owned(),
            name: "Willow Pool Fisheries".to_owned(),
            description: Some("Three mature lakes set in Kent parkland.".to_owned()),
            rules: Some("Barbless hooks only. No braided main line.".to_owned()),
            image: Some("/images/willow-pool.jpg".to_owned()),
            district: Some("Kent".to_owned()),
            species: vec!["Carp".to_owned(), "Tench".to_owned(), "Bream".to_owned()],
            fishing_types: vec!["Coarse".to_owned(), "Specimen".to_owned()],
            booking_types: vec!["Day ticket".to_owned(), "Club water".to_owned()],
            features: vec!["Island margins".to_owned(), "Lily pads".to_owned()],
            facilities: vec!["Toilets".to_owned(), "Cafe".to_owned()],
            day_ticket_price: Some("£10 per rod".to_owned()),
            wifi_signal: Some("Good 4G".to_owned()),
            phone: Some("01234 567890".to_owned()),
            email: Some("bookings@willowpool.example".to_owned()),
            website: Some("https://willowpool.example".to_owned()),
            location: Some(Location {
                latitude: 51.17,
                longitude: 0.55,
                address: Some("Willow Lane, Maidstone".to_owned()),
            }),
            amenities: Amenities {
                night_fishing: true,
                dog_friendly: true,
                parking_close_to_pegs: true,
                keepnets_allowed: true,
                ..Default::default()
            },
            is_featured: true,
            is_fishery_of_the_week: false,
            has_accommodation: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Fishery;

    #[test]
    fn create_payload_without_slug_deserializes() {
        // admin create bodies may omit the slug; it is derived from the
        // name downstream.
        let fishery: Fishery = serde_json::from_str(
            r#"{
                "name": "Willow Pool Fisheries",
                "district": "Kent",
                "species": ["Carp"]
            }"#,
        )
        .unwrap();

        assert_eq!(fishery.slug, "");
        assert_eq!(fishery.name, "Willow Pool Fisheries");
        assert_eq!(fishery.species, vec!["Carp".to_owned()]);
    }

    #[test]
    fn minimal_payload_defaults_collections_and_flags() {
        let fishery: Fishery =
            serde_json::from_str(r#"{"name": "Bluebell Lakes"}"#).unwrap();

        assert!(fishery.fishing_types.is_empty());
        assert!(fishery.facilities.is_empty());
        assert!(!fishery.amenities.dog_friendly);
        assert!(!fishery.is_featured);
        assert!(!fishery.has_accommodation);
    }
}
