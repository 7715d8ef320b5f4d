use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Contact {
    pub fn new(id: &str, name: &str, role: Option<&str>) -> Self {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            role: role.map(str::to_string),
        }
    }

    /// First letter of the first two words, uppercased ("Marie Dupont" → "MD").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
