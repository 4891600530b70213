use dioxus::prelude::*;
use fitsoc::SocietyResource;

use super::resource_page::ResourcePage;

#[component]
pub fn Events() -> Element {
    rsx! {
        ResourcePage {
            resource: SocietyResource::Events,
            description: "Classes, open days and competitions.",
        }
    }
}
