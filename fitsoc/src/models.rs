use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    SuperAdmin,
    CenterAdmin,
    Staff,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::CenterAdmin => "Center Admin",
            Role::Staff => "Staff",
            Role::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A fitness society. Read-only from the console's point of view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Society {
    pub society_id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        let role: Role = serde_json::from_str("\"center_admin\"").unwrap();
        assert_eq!(role, Role::CenterAdmin);

        let role: Role = serde_json::from_str("\"super_admin\"").unwrap();
        assert_eq!(role, Role::SuperAdmin);

        assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"staff\"");
    }

    #[test]
    fn test_unrecognised_role_is_unknown() {
        let role: Role = serde_json::from_str("\"night_janitor\"").unwrap();
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn test_user_full_name() {
        let user = User {
            id: "u1".to_string(),
            first_name: "Asha".to_string(),
            last_name: "".to_string(),
            email: "asha@example.com".to_string(),
            role: Role::Staff,
        };

        assert_eq!(user.full_name(), "Asha");
    }
}
