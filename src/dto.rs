use serde::{Deserialize, Deserializer, Serialize};

// Missing or null `emailContent` becomes an empty string, nothing is validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReplyRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email_content: String,
    #[serde(default)]
    pub tone: Option<String>,
}

impl GenerateReplyRequest {
    pub fn tone(&self) -> Option<&str> {
        self.tone.as_deref().filter(|t| !t.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
