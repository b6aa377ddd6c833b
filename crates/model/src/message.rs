use chrono::{DateTime, TimeZone, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::ExampleData;

/// A contact-form submission with its inbox read flag.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl HasId for Message {
    type IdType = String;
}

impl ExampleData for Message {
    fn example_data() -> Self {
        Self {
            name: "Dave Pearson".to_owned(),
            email: "dave@example.com".to_owned(),
            subject: Some("Night fishing availability".to_owned()),
            body: "Are there pegs free for a 48 hour session next weekend?".to_owned(),
            read: false,
            created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
        }
    }
}
