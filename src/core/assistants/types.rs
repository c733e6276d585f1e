//! Assistant and user records as they arrive from the backend.

use serde::{Deserialize, Serialize};

/// Owner of a user-created assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantOwner {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assistant {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<AssistantOwner>,
    /// Built-in assistant shipped with the deployment (never user-owned).
    #[serde(default)]
    pub default_persona: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Assistant ids in the order the user wants them shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_assistants: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
}

impl User {
    /// The user's preferred assistant order, if any was stored.
    pub fn chosen_assistants(&self) -> Option<&[i64]> {
        self.preferences
            .as_ref()?
            .chosen_assistants
            .as_deref()
            .filter(|ids| !ids.is_empty())
    }
}
