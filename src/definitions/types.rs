use serde::{Deserialize, Serialize};

/// Request sent to the definition service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionRequest {
    pub term: String,
}

/// Response returned by the definition service. An unknown term comes
/// back as an empty list, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionResponse {
    pub definitions: Vec<String>,
}

impl DefinitionResponse {
    /// The first definition, the one shown to the user.
    pub fn first(&self) -> Option<&str> {
        self.definitions.first().map(String::as_str)
    }
}
