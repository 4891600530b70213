use dioxus::prelude::*;
use fitsoc::SocietyResource;

use super::resource_page::ResourcePage;

#[component]
pub fn Trainers() -> Element {
    rsx! {
        ResourcePage {
            resource: SocietyResource::Trainers,
            description: "Coaching staff and their specializations.",
        }
    }
}
