use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{fishery::Fishery, ExampleData};

/// A named body of water belonging to exactly one fishery.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lake {
    pub fishery_id: Id<Fishery>,
    pub name: String,
    #[serde(default)]
    pub species: Vec<String>,
    pub size_acres: Option<f64>,
    pub max_depth_feet: Option<f64>,
    pub peg_count: Option<i32>,
    pub notes: Option<String>,
}

impl HasId for Lake {
    type IdType = String;
}

impl ExampleData for Lake {
    fn example_data() -> Self {
        Self {
            fishery_id: Id::new("b8f2".to_owned()),
            name: "Specimen Lake".to_owned(),
            species: vec!["Carp".to_owned(), "Catfish".to_owned()],
            size_acres: Some(4.5),
            max_depth_feet: Some(12.0),
            peg_count: Some(22),
            notes: Some("Deepest water along the dam wall.".to_owned()),
        }
    }
}
