use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{fishery::Fishery, ExampleData};

/// On-site lodging belonging to exactly one fishery.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub fishery_id: Id<Fishery>,
    pub name: String,
    pub accommodation_type: String,
    pub sleeps: Option<i32>,
    pub price_per_night: Option<f64>,
    pub notes: Option<String>,
}

impl HasId for Accommodation {
    type IdType = String;
}

impl ExampleData for Accommodation {
    fn example_data() -> Self {
        Self {
            fishery_id: Id::new("b8f2".to_owned()),
            name: "Lakeside Lodge 1".to_owned(),
            accommodation_type: "Lodge".to_owned(),
            sleeps: Some(4),
            price_per_night: Some(95.0),
            notes: Some("Sleeps four, private swim included.".to_owned()),
        }
    }
}
