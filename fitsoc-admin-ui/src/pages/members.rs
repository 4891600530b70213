use dioxus::prelude::*;
use fitsoc::SocietyResource;

use super::resource_page::ResourcePage;

#[component]
pub fn Members() -> Element {
    rsx! {
        ResourcePage {
            resource: SocietyResource::Members,
            description: "Everyone enrolled at the selected society.",
        }
    }
}
