use crate::components::button::Button;
use crate::components::input::Input;
use crate::records::{Draft, build_request, form_fields};
use dioxus::prelude::*;
use fitsoc::SocietyResource;

/// Create form for one society resource. Emits the JSON body on submit.
#[component]
pub fn RecordForm(
    resource: SocietyResource,
    on_submit: EventHandler<serde_json::Value>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(Draft::new);
    let mut error = use_signal(|| Option::<String>::None);

    rsx! {
        form {
            class: "record-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                let request = build_request(resource, &draft.read());
                match request {
                    Ok(body) => {
                        error.set(None);
                        draft.set(Draft::new());
                        on_submit.call(body);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            },
            for field in form_fields(resource).iter().copied() {
                div { class: "form-group", key: "{field.name}",
                    label { r#for: field.name,
                        "{field.label}"
                        if field.required {
                            span { class: "required", "*" }
                        }
                    }
                    Input {
                        id: field.name,
                        kind: field.kind,
                        name: field.name,
                        value: draft.read().get(field.name).cloned().unwrap_or_default(),
                        oninput: move |e: FormEvent| {
                            draft.write().insert(field.name.to_string(), e.value());
                        },
                    }
                }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            div { class: "form-actions",
                Button { kind: "submit", "Save" }
                Button {
                    class: "btn-secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
