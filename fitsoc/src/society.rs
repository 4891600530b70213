use crate::models::Society;
use tracing::{debug, warn};

/// Per-society collections the console manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocietyResource {
    Members,
    Trainers,
    Memberships,
    Events,
    DietPlans,
}

impl SocietyResource {
    pub const ALL: [SocietyResource; 5] = [
        SocietyResource::Members,
        SocietyResource::Trainers,
        SocietyResource::Memberships,
        SocietyResource::Events,
        SocietyResource::DietPlans,
    ];

    pub fn segment(&self) -> &'static str {
        match self {
            SocietyResource::Members => "members",
            SocietyResource::Trainers => "trainers",
            SocietyResource::Memberships => "memberships",
            SocietyResource::Events => "events",
            SocietyResource::DietPlans => "diet-plans",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocietyResource::Members => "Members",
            SocietyResource::Trainers => "Trainers",
            SocietyResource::Memberships => "Memberships",
            SocietyResource::Events => "Events",
            SocietyResource::DietPlans => "Diet Plans",
        }
    }
}

/// The society currently filtering every society-dependent query.
///
/// A non-empty `selected_society_id` always names an entry of `societies`
/// after a list refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocietyScope {
    societies: Vec<Society>,
    selected_society_id: String,
    is_loading: bool,
}

impl SocietyScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn societies(&self) -> &[Society] {
        &self.societies
    }

    pub fn selected_society_id(&self) -> &str {
        &self.selected_society_id
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn selected(&self) -> Option<&Society> {
        if self.selected_society_id.is_empty() {
            return None;
        }
        self.societies
            .iter()
            .find(|s| s.society_id == self.selected_society_id)
    }

    /// Stores `id` as the active scope. Callers only offer ids taken from
    /// [`SocietyScope::societies`], so no membership check happens here.
    pub fn set_selected_society_id(&mut self, id: impl Into<String>) {
        self.selected_society_id = id.into();
        debug!(society_id = %self.selected_society_id, "Society scope changed");
    }

    pub fn begin_refresh(&mut self) {
        self.is_loading = true;
    }

    /// Installs a freshly fetched list, dropping a selection that no longer
    /// exists and defaulting to the first society when nothing is selected.
    pub fn replace_societies(&mut self, societies: Vec<Society>) {
        self.societies = societies;
        self.is_loading = false;

        let still_listed = self
            .societies
            .iter()
            .any(|s| s.society_id == self.selected_society_id);
        if !still_listed {
            if !self.selected_society_id.is_empty() {
                warn!(society_id = %self.selected_society_id, "Selected society no longer listed");
            }
            self.selected_society_id = self
                .societies
                .first()
                .map(|s| s.society_id.clone())
                .unwrap_or_default();
        }
    }

    /// Keeps the previous list after a failed fetch.
    pub fn fail_refresh(&mut self) {
        self.is_loading = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// API path of `resource` within the selected society, if one is selected.
    pub fn scoped_path(&self, resource: SocietyResource) -> Option<String> {
        if self.selected_society_id.is_empty() {
            return None;
        }
        Some(format!(
            "/societies/{}/{}",
            self.selected_society_id,
            resource.segment()
        ))
    }
}
