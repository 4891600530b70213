use dioxus::prelude::*;
use fitsoc::SocietyResource;

use super::resource_page::ResourcePage;

#[component]
pub fn DietPlans() -> Element {
    rsx! {
        ResourcePage {
            resource: SocietyResource::DietPlans,
            description: "Nutrition plans trainers hand out to members.",
        }
    }
}
