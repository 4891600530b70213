use dioxus::prelude::*;
use fitsoc::SocietyResource;

use super::resource_page::ResourcePage;

#[component]
pub fn Memberships() -> Element {
    rsx! {
        ResourcePage {
            resource: SocietyResource::Memberships,
            description: "Plans members can subscribe to.",
        }
    }
}
