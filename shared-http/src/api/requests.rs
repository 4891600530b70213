use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for login endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<&fitsoc::Credentials> for LoginRequest {
    fn from(credentials: &fitsoc::Credentials) -> Self {
        Self {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        }
    }
}

// === Society resource models ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTrainerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub specialization: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMembershipRequest {
    pub name: String,
    pub duration_days: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDietPlanRequest {
    pub name: String,
    pub goal: String,
    pub calories_per_day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
