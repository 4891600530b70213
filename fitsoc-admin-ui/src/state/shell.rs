use dioxus::prelude::*;
use fitsoc::DocumentClasses;

/// The `<html>` element of the running page.
pub struct DocumentRoot;

impl DocumentClasses for DocumentRoot {
    fn set_class(&mut self, class: &str, present: bool) {
        let _ = document::eval(&format!(
            "document.documentElement.classList.toggle('{class}', {present});"
        ));
    }
}
