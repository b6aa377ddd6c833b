use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{fishery::Fishery, WithId};

/// The directory's filter criteria as one structured record.
///
/// Every field is an independent criterion; a record matches when it
/// satisfies ALL active criteria. A text criterion is inactive while empty
/// or whitespace, a boolean criterion is inactive while `false`, so the
/// default value matches everything and "reset all filters" is a single
/// assignment of `FisheryFilter::default()`.
///
/// Text criteria use case-insensitive substring containment. The
/// list-membership criteria (`species`, `fishing_type`, `booking_type`)
/// match one whole element of the target list, compared case-insensitively.
/// `district` is an equality facet, not a substring.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FisheryFilter {
    /// Free-text search over the venue name and district.
    pub search: Option<String>,
    pub district: Option<String>,
    pub species: Option<String>,
    pub fishing_type: Option<String>,
    pub booking_type: Option<String>,
    pub features: Option<String>,
    pub facilities: Option<String>,
    pub price: Option<String>,
    pub wifi: Option<String>,

    pub accommodation: bool,
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

impl FisheryFilter {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True if any criterion would exclude at least some record.
    pub fn is_active(&self) -> bool {
        let text_active = [
            &self.search,
            &self.district,
            &self.species,
            &self.fishing_type,
            &self.booking_type,
            &self.features,
            &self.facilities,
            &self.price,
            &self.wifi,
        ]
        .into_iter()
        .any(|criterion| matches!(criterion.as_deref(), Some(s) if !s.trim().is_empty()));

        text_active
            || self.accommodation
            || self.night_fishing
            || self.match_fishing_friendly
            || self.disabled_access
            || self.dog_friendly
            || self.fire_pits_allowed
            || self.parking_close_to_pegs
            || self.camping
            || self.tackle_shop_on_site
            || self.private_hire
            || self.tackle_hire
            || self.coaching
            || self.keepnets_allowed
            || self.twenty_four_hour_access
            || self.guests_allowed
            || self.under_18s_welcome
    }

    /// Conjunction of all active criteria. Pure, no side effects.
    pub fn matches(&self, fishery: &Fishery) -> bool {
        let amenities = &fishery.amenities;

        text_criterion(&self.search, |needle| {
            contains_ci(&fishery.name, needle)
                || fishery
                    .district
                    .as_deref()
                    .is_some_and(|district| contains_ci(district, needle))
        }) && text_criterion(&self.district, |needle| {
            fishery
                .district
                .as_deref()
                .is_some_and(|district| district.eq_ignore_ascii_case(needle))
        }) && text_criterion(&self.species, |needle| member_ci(&fishery.species, needle))
            && text_criterion(&self.fishing_type, |needle| {
                member_ci(&fishery.fishing_types, needle)
            })
            && text_criterion(&self.booking_type, |needle| {
                member_ci(&fishery.booking_types, needle)
            })
            && text_criterion(&self.features, |needle| {
                any_contains_ci(&fishery.features, needle)
            })
            && text_criterion(&self.facilities, |needle| {
                any_contains_ci(&fishery.facilities, needle)
            })
            && text_criterion(&self.price, |needle| {
                fishery
                    .day_ticket_price
                    .as_deref()
                    .is_some_and(|price| contains_ci(price, needle))
            })
            && text_criterion(&self.wifi, |needle| {
                fishery
                    .wifi_signal
                    .as_deref()
                    .is_some_and(|signal| contains_ci(signal, needle))
            })
            && bool_criterion(self.accommodation, fishery.has_accommodation)
            && bool_criterion(self.night_fishing, amenities.night_fishing)
            && bool_criterion(
                self.match_fishing_friendly,
                amenities.match_fishing_friendly,
            )
            && bool_criterion(self.disabled_access, amenities.disabled_access)
            && bool_criterion(self.dog_friendly, amenities.dog_friendly)
            && bool_criterion(self.fire_pits_allowed, amenities.fire_pits_allowed)
            && bool_criterion(
                self.parking_close_to_pegs,
                amenities.parking_close_to_pegs,
            )
            && bool_criterion(self.camping, amenities.camping)
            && bool_criterion(self.tackle_shop_on_site, amenities.tackle_shop_on_site)
            && bool_criterion(self.private_hire, amenities.private_hire)
            && bool_criterion(self.tackle_hire, amenities.tackle_hire)
            && bool_criterion(self.coaching, amenities.coaching)
            && bool_criterion(self.keepnets_allowed, amenities.keepnets_allowed)
            && bool_criterion(
                self.twenty_four_hour_access,
                amenities.twenty_four_hour_access,
            )
            && bool_criterion(self.guests_allowed, amenities.guests_allowed)
            && bool_criterion(self.under_18s_welcome, amenities.under_18s_welcome)
    }

    /// Stable filter over a fully materialized record set. Source order is
    /// preserved; the full set is re-scanned on every call.
    pub fn apply(&self, fisheries: Vec<WithId<Fishery>>) -> Vec<WithId<Fishery>> {
        fisheries
            .into_iter()
            .filter(|fishery| self.matches(&fishery.content))
            .collect()
    }
}

fn text_criterion<F>(criterion: &Option<String>, predicate: F) -> bool
where
    F: FnOnce(&str) -> bool,
{
    match criterion.as_deref().map(str::trim) {
        Some(needle) if !needle.is_empty() => predicate(needle),
        _ => true,
    }
}

fn bool_criterion(criterion: bool, value: bool) -> bool {
    !criterion || value
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn member_ci(list: &[String], needle: &str) -> bool {
    list.iter().any(|item| item.eq_ignore_ascii_case(needle))
}

fn any_contains_ci(list: &[String], needle: &str) -> bool {
    list.iter().any(|item| contains_ci(item, needle))
}

#[cfg(test)]
mod tests {
    use utility::id::Id;

    use super::*;
    use crate::fishery::Amenities;

    fn venue(id: &str, name: &str, district: &str) -> WithId<Fishery> {
        WithId::new(
            Id::new(id.to_owned()),
            Fishery {
                slug: utility::id::slug_from_name(name),
                name: name.to_owned(),
                description: None,
                rules: None,
                image: None,
                district: Some(district.to_owned()),
                species: vec!["Carp".to_owned(), "Tench".to_owned()],
                fishing_types: vec!["Coarse".to_owned()],
                booking_types: vec!["Day ticket".to_owned()],
                features: vec!["Island margins".to_owned()],
                facilities: vec!["Toilets".to_owned(), "Cafe".to_owned()],
                day_ticket_price: Some("£10 per rod".to_owned()),
                wifi_signal: Some("Good 4G".to_owned()),
                phone: None,
                email: None,
                website: None,
                location: None,
                amenities: Amenities::default(),
                is_featured: false,
                is_fishery_of_the_week: false,
                has_accommodation: false,
            },
        )
    }

    fn ids(fisheries: &[WithId<Fishery>]) -> Vec<String> {
        fisheries.iter().map(|f| f.id.raw()).collect()
    }

    fn sample_set() -> Vec<WithId<Fishery>> {
        let mut a = venue("a", "Willow Pool", "Kent");
        a.content.amenities.dog_friendly = true;
        let mut b = venue("b", "Badgers Rest", "Kent");
        b.content.amenities.night_fishing = true;
        let mut c = venue("c", "Orchard Lakes", "Essex");
        c.content.species.push("Pike".to_owned());
        c.content.has_accommodation = true;
        vec![a, b, c]
    }

    #[test]
    fn default_filter_matches_everything_in_order() {
        let filter = FisheryFilter::default();
        assert!(!filter.is_active());
        assert_eq!(ids(&filter.apply(sample_set())), ["a", "b", "c"]);
    }

    #[test]
    fn output_is_always_a_subset_of_the_source() {
        let filter = FisheryFilter {
            district: Some("Kent".to_owned()),
            dog_friendly: true,
            ..Default::default()
        };
        let source = sample_set();
        let source_ids = ids(&source);
        for fishery in filter.apply(source) {
            assert!(source_ids.contains(&fishery.id.raw()));
        }
    }

    #[test]
    fn criteria_combine_conjunctively() {
        // district=Kent AND dogFriendly=true keeps exactly the Kent venue
        // that allows dogs.
        let filter = FisheryFilter {
            district: Some("Kent".to_owned()),
            dog_friendly: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample_set())), ["a"]);
    }

    #[test]
    fn reset_restores_the_full_source_set() {
        let mut filter = FisheryFilter {
            search: Some("willow".to_owned()),
            night_fishing: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample_set())), Vec::<String>::new());

        filter.reset();
        assert_eq!(ids(&filter.apply(sample_set())), ["a", "b", "c"]);
    }

    #[test]
    fn species_membership_is_case_insensitive() {
        let filter = FisheryFilter {
            species: Some("CARP".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample_set())), ["a", "b", "c"]);

        let filter = FisheryFilter {
            species: Some("pike".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample_set())), ["c"]);
    }

    #[test]
    fn species_membership_is_whole_element_not_substring() {
        let filter = FisheryFilter {
            species: Some("car".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample_set())), Vec::<String>::new());
    }

    #[test]
    fn search_covers_name_and_district() {
        let filter = FisheryFilter {
            search: Some("essex".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample_set())), ["c"]);

        let filter = FisheryFilter {
            search: Some("badger".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample_set())), ["b"]);
    }

    #[test]
    fn empty_or_whitespace_text_criteria_are_skipped() {
        let filter = FisheryFilter {
            search: Some("".to_owned()),
            features: Some("   ".to_owned()),
            ..Default::default()
        };
        assert!(!filter.is_active());
        assert_eq!(ids(&filter.apply(sample_set())), ["a", "b", "c"]);
    }

    #[test]
    fn toggling_a_boolean_twice_restores_the_previous_view() {
        let mut filter = FisheryFilter {
            district: Some("Kent".to_owned()),
            ..Default::default()
        };
        let before = ids(&filter.apply(sample_set()));

        filter.night_fishing = true;
        assert_eq!(ids(&filter.apply(sample_set())), ["b"]);

        filter.night_fishing = false;
        assert_eq!(ids(&filter.apply(sample_set())), before);
    }

    #[test]
    fn accommodation_criterion_uses_the_derived_flag() {
        let filter = FisheryFilter {
            accommodation: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample_set())), ["c"]);
    }

    #[test]
    fn price_and_facility_criteria_are_substring_matches() {
        let filter = FisheryFilter {
            price: Some("per rod".to_owned()),
            facilities: Some("cafe".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample_set())), ["a", "b", "c"]);

        let filter = FisheryFilter {
            price: Some("£25".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample_set())), Vec::<String>::new());
    }

    // the wire contract: filters arrive as camelCase query strings, the
    // same encoding axum's Query extractor feeds through serde_urlencoded.

    #[test]
    fn deserializes_from_a_camel_case_query_string() {
        let filter: FisheryFilter =
            serde_urlencoded::from_str("search=carp&dogFriendly=true&nightFishing=false")
                .unwrap();

        assert_eq!(filter.search.as_deref(), Some("carp"));
        assert!(filter.dog_friendly);
        assert!(!filter.night_fishing);
        assert!(filter.district.is_none());
    }

    #[test]
    fn empty_query_string_is_the_default_filter() {
        let filter: FisheryFilter = serde_urlencoded::from_str("").unwrap();
        assert!(!filter.is_active());
    }

    #[test]
    fn query_string_criteria_drive_matching() {
        let filter: FisheryFilter =
            serde_urlencoded::from_str("district=Kent&dogFriendly=true").unwrap();
        assert_eq!(ids(&filter.apply(sample_set())), ["a"]);
    }
}
