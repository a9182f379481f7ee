use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
