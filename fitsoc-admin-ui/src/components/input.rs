use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(into)] id: String,
    #[props(default = "text".to_string(), into)] kind: String,
    #[props(into)] name: String,
    #[props(default, into)] placeholder: String,
    #[props(into)] value: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "input",
            id: "{id}",
            r#type: "{kind}",
            name: "{name}",
            placeholder: "{placeholder}",
            value: "{value}",
            required,
            disabled,
            oninput: move |e| oninput.call(e),
        }
    }
}
