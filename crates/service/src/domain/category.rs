use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryApiRequest {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub category_type: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryApiResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub category_type: String,
    pub title: String,
}
