use chrono::NaiveDate;
use fitsoc::{Role, Society, User};
use serde::{Deserialize, Serialize};

/// Response body for successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests and logout
    pub token: String,
    /// Session expiration time in seconds from now
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: UserResponse,
}

impl From<LoginResponse> for fitsoc::AuthGrant {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user: response.user.into(),
        }
    }
}

/// Response body for logout
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl From<UserResponse> for User {
    fn from(user: UserResponse) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietyResponse {
    pub society_id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl From<SocietyResponse> for Society {
    fn from(society: SocietyResponse) -> Self {
        Self {
            society_id: society.society_id,
            name: society.name,
            city: society.city,
            address: society.address,
            contact_email: society.contact_email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub membership_name: Option<String>,
    #[serde(default)]
    pub joined_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub specialization: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipResponse {
    pub id: String,
    pub name: String,
    pub duration_days: u32,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlanResponse {
    pub id: String,
    pub name: String,
    pub goal: String,
    pub calories_per_day: u32,
    #[serde(default)]
    pub description: Option<String>,
}

// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_into_grant() {
        let body = json!({
            "token": "abc",
            "user": {
                "id": "7",
                "first_name": "Nisha",
                "last_name": "Rao",
                "email": "nisha@example.com",
                "role": "center_admin"
            }
        });

        let response: LoginResponse = serde_json::from_value(body).unwrap();
        let grant: fitsoc::AuthGrant = response.into();

        assert_eq!(grant.token, "abc");
        assert_eq!(grant.user.role, Role::CenterAdmin);
        assert_eq!(grant.user.full_name(), "Nisha Rao");
    }

    #[test]
    fn test_user_without_role_defaults_to_super_admin() {
        let user: UserResponse = serde_json::from_value(json!({
            "id": "1",
            "first_name": "Root",
            "last_name": "User"
        }))
        .unwrap();

        assert_eq!(user.role, Role::SuperAdmin);
    }

    #[test]
    fn test_society_optional_fields() {
        let society: Society = serde_json::from_value::<SocietyResponse>(json!({
            "society_id": "s1",
            "name": "Iron Works",
            "city": "Pune"
        }))
        .unwrap()
        .into();

        assert_eq!(society.society_id, "s1");
        assert!(society.address.is_none());
    }
}
