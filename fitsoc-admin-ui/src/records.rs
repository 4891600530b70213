//! Table rows and create forms for the society resources.

use crate::api::{ApiClient, ApiError};
use chrono::NaiveDate;
use fitsoc::SocietyResource;
use shared_http::api::{
    CreateDietPlanRequest, CreateEventRequest, CreateMemberRequest, CreateMembershipRequest,
    CreateTrainerRequest, DietPlanResponse, EventResponse, MemberResponse, MembershipResponse,
    TrainerResponse,
};
use std::collections::BTreeMap;
use thiserror::Error;

/// Field values typed into a create form, keyed by field name.
pub type Draft = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub id: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, kind: &'static str, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind,
        required,
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be a number")]
    InvalidNumber(&'static str),

    #[error("{0} must be a date (YYYY-MM-DD)")]
    InvalidDate(&'static str),

    #[error("Could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

trait IntoRow {
    fn into_row(self) -> RecordRow;
}

fn or_dash(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "—".to_string())
}

impl IntoRow for MemberResponse {
    fn into_row(self) -> RecordRow {
        RecordRow {
            id: self.id,
            cells: vec![
                format!("{} {}", self.first_name, self.last_name),
                self.email,
                or_dash(self.phone),
                or_dash(self.membership_name),
                or_dash(self.joined_on.map(|d| d.to_string())),
            ],
        }
    }
}

impl IntoRow for TrainerResponse {
    fn into_row(self) -> RecordRow {
        RecordRow {
            id: self.id,
            cells: vec![
                format!("{} {}", self.first_name, self.last_name),
                self.email,
                or_dash(self.phone),
                self.specialization,
            ],
        }
    }
}

impl IntoRow for MembershipResponse {
    fn into_row(self) -> RecordRow {
        RecordRow {
            id: self.id,
            cells: vec![
                self.name,
                format!("{} days", self.duration_days),
                format!("{:.2}", self.price),
                or_dash(self.description),
            ],
        }
    }
}

impl IntoRow for EventResponse {
    fn into_row(self) -> RecordRow {
        RecordRow {
            id: self.id,
            cells: vec![
                self.title,
                self.date.to_string(),
                self.location,
                or_dash(self.capacity.map(|c| c.to_string())),
            ],
        }
    }
}

impl IntoRow for DietPlanResponse {
    fn into_row(self) -> RecordRow {
        RecordRow {
            id: self.id,
            cells: vec![
                self.name,
                self.goal,
                format!("{} kcal", self.calories_per_day),
                or_dash(self.description),
            ],
        }
    }
}

pub fn columns(resource: SocietyResource) -> &'static [&'static str] {
    match resource {
        SocietyResource::Members => &["Name", "Email", "Phone", "Membership", "Joined"],
        SocietyResource::Trainers => &["Name", "Email", "Phone", "Specialization"],
        SocietyResource::Memberships => &["Plan", "Duration", "Price", "Description"],
        SocietyResource::Events => &["Title", "Date", "Location", "Capacity"],
        SocietyResource::DietPlans => &["Plan", "Goal", "Calories", "Description"],
    }
}

const MEMBER_FIELDS: &[FieldSpec] = &[
    field("first_name", "First name", "text", true),
    field("last_name", "Last name", "text", true),
    field("email", "Email", "email", true),
    field("phone", "Phone", "tel", false),
    field("membership_id", "Membership ID", "text", false),
];

const TRAINER_FIELDS: &[FieldSpec] = &[
    field("first_name", "First name", "text", true),
    field("last_name", "Last name", "text", true),
    field("email", "Email", "email", true),
    field("phone", "Phone", "tel", false),
    field("specialization", "Specialization", "text", true),
];

const MEMBERSHIP_FIELDS: &[FieldSpec] = &[
    field("name", "Name", "text", true),
    field("duration_days", "Duration (days)", "number", true),
    field("price", "Price", "number", true),
    field("description", "Description", "text", false),
];

const EVENT_FIELDS: &[FieldSpec] = &[
    field("title", "Title", "text", true),
    field("date", "Date", "date", true),
    field("location", "Location", "text", true),
    field("capacity", "Capacity", "number", false),
];

const DIET_PLAN_FIELDS: &[FieldSpec] = &[
    field("name", "Name", "text", true),
    field("goal", "Goal", "text", true),
    field("calories_per_day", "Calories per day", "number", true),
    field("description", "Description", "text", false),
];

pub fn form_fields(resource: SocietyResource) -> &'static [FieldSpec] {
    match resource {
        SocietyResource::Members => MEMBER_FIELDS,
        SocietyResource::Trainers => TRAINER_FIELDS,
        SocietyResource::Memberships => MEMBERSHIP_FIELDS,
        SocietyResource::Events => EVENT_FIELDS,
        SocietyResource::DietPlans => DIET_PLAN_FIELDS,
    }
}

/// Reads draft values for one resource's form, looking up labels for errors.
struct DraftReader<'a> {
    draft: &'a Draft,
    fields: &'static [FieldSpec],
}

impl DraftReader<'_> {
    fn label(&self, name: &str) -> &'static str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.label)
            .unwrap_or("Field")
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.draft
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn required(&self, name: &str) -> Result<String, FormError> {
        self.optional(name)
            .ok_or_else(|| FormError::Missing(self.label(name)))
    }

    fn number<T: std::str::FromStr>(&self, name: &str) -> Result<T, FormError> {
        self.required(name)?
            .parse()
            .map_err(|_| FormError::InvalidNumber(self.label(name)))
    }

    fn optional_number<T: std::str::FromStr>(&self, name: &str) -> Result<Option<T>, FormError> {
        match self.optional(name) {
            Some(_) => self.number(name).map(Some),
            None => Ok(None),
        }
    }

    fn date(&self, name: &str) -> Result<NaiveDate, FormError> {
        NaiveDate::parse_from_str(&self.required(name)?, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(self.label(name)))
    }
}

/// Builds the JSON body for creating a `resource` record from a form draft.
pub fn build_request(
    resource: SocietyResource,
    draft: &Draft,
) -> Result<serde_json::Value, FormError> {
    let r = DraftReader {
        draft,
        fields: form_fields(resource),
    };

    let body = match resource {
        SocietyResource::Members => serde_json::to_value(CreateMemberRequest {
            first_name: r.required("first_name")?,
            last_name: r.required("last_name")?,
            email: r.required("email")?,
            phone: r.optional("phone"),
            membership_id: r.optional("membership_id"),
        })?,
        SocietyResource::Trainers => serde_json::to_value(CreateTrainerRequest {
            first_name: r.required("first_name")?,
            last_name: r.required("last_name")?,
            email: r.required("email")?,
            phone: r.optional("phone"),
            specialization: r.required("specialization")?,
        })?,
        SocietyResource::Memberships => serde_json::to_value(CreateMembershipRequest {
            name: r.required("name")?,
            duration_days: r.number("duration_days")?,
            price: r.number("price")?,
            description: r.optional("description"),
        })?,
        SocietyResource::Events => serde_json::to_value(CreateEventRequest {
            title: r.required("title")?,
            date: r.date("date")?,
            location: r.required("location")?,
            capacity: r.optional_number("capacity")?,
        })?,
        SocietyResource::DietPlans => serde_json::to_value(CreateDietPlanRequest {
            name: r.required("name")?,
            goal: r.required("goal")?,
            calories_per_day: r.number("calories_per_day")?,
            description: r.optional("description"),
        })?,
    };

    Ok(body)
}

async fn fetch<T>(api: &ApiClient, token: &str, path: &str) -> Result<Vec<RecordRow>, ApiError>
where
    T: IntoRow + serde::de::DeserializeOwned,
{
    let records: Vec<T> = api.list(token, path).await?;
    Ok(records.into_iter().map(IntoRow::into_row).collect())
}

/// Lists `resource` at the society-scoped `path` as table rows.
pub async fn fetch_rows(
    api: &ApiClient,
    token: &str,
    resource: SocietyResource,
    path: &str,
) -> Result<Vec<RecordRow>, ApiError> {
    match resource {
        SocietyResource::Members => fetch::<MemberResponse>(api, token, path).await,
        SocietyResource::Trainers => fetch::<TrainerResponse>(api, token, path).await,
        SocietyResource::Memberships => fetch::<MembershipResponse>(api, token, path).await,
        SocietyResource::Events => fetch::<EventResponse>(api, token, path).await,
        SocietyResource::DietPlans => fetch::<DietPlanResponse>(api, token, path).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(pairs: &[(&str, &str)]) -> Draft {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_member_request_skips_blank_optionals() {
        let body = build_request(
            SocietyResource::Members,
            &draft(&[
                ("first_name", "Kiran"),
                ("last_name", "Shah"),
                ("email", "kiran@example.com"),
                ("phone", "   "),
            ]),
        )
        .unwrap();

        assert_eq!(
            body,
            json!({
                "first_name": "Kiran",
                "last_name": "Shah",
                "email": "kiran@example.com"
            })
        );
    }

    #[test]
    fn test_missing_required_field_names_label() {
        let err = build_request(SocietyResource::Trainers, &draft(&[("first_name", "Dev")]))
            .unwrap_err();

        assert_eq!(err.to_string(), "Last name is required");
    }

    #[test]
    fn test_numbers_are_parsed() {
        let body = build_request(
            SocietyResource::Memberships,
            &draft(&[("name", "Gold"), ("duration_days", "90"), ("price", "149.5")]),
        )
        .unwrap();
        assert_eq!(body["duration_days"], 90);
        assert_eq!(body["price"], 149.5);

        let err = build_request(
            SocietyResource::DietPlans,
            &draft(&[("name", "Lean"), ("goal", "Cut"), ("calories_per_day", "lots")]),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Calories per day must be a number");
    }

    #[test]
    fn test_event_date_is_validated() {
        let ok = build_request(
            SocietyResource::Events,
            &draft(&[("title", "Open day"), ("date", "2026-11-01"), ("location", "Hall A")]),
        )
        .unwrap();
        assert_eq!(ok["date"], "2026-11-01");
        assert!(ok.get("capacity").is_none());

        let err = build_request(
            SocietyResource::Events,
            &draft(&[("title", "Open day"), ("date", "01/11/2026"), ("location", "Hall A")]),
        )
        .unwrap_err();
        assert!(matches!(err, FormError::InvalidDate("Date")));
    }

    #[test]
    fn test_rows_match_columns() {
        let member = MemberResponse {
            id: "m1".to_string(),
            first_name: "Leela".to_string(),
            last_name: "Das".to_string(),
            email: "leela@example.com".to_string(),
            phone: None,
            membership_name: Some("Gold".to_string()),
            joined_on: NaiveDate::from_ymd_opt(2026, 1, 5),
        };

        let row = member.into_row();

        assert_eq!(row.id, "m1");
        assert_eq!(row.cells.len(), columns(SocietyResource::Members).len());
        assert_eq!(row.cells[0], "Leela Das");
        assert_eq!(row.cells[2], "—");
        assert_eq!(row.cells[4], "2026-01-05");
    }

    #[test]
    fn test_every_resource_has_a_form() {
        for resource in SocietyResource::ALL {
            assert!(form_fields(resource).iter().any(|f| f.required));
            assert!(!columns(resource).is_empty());
        }
    }
}
