use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub alerts: bool,

    #[serde(default)]
    pub auto_pay: bool,

    #[serde(default)]
    pub data_alerts: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            alerts: true,
            auto_pay: false,
            data_alerts: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default)]
    pub preferences: Preferences,
}

impl User {
    /// Avatar URL in the style the web portal generated for new signups.
    pub fn avatar_url(name: &str) -> String {
        format!(
            "https://ui-avatars.com/api/?name={}&background=0D8ABC&color=fff",
            name.replace(' ', "+")
        )
    }
}
