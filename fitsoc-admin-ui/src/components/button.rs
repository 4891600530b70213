use dioxus::prelude::*;

#[component]
pub fn Button(
    #[props(default = "button".to_string(), into)] kind: String,
    #[props(default = "btn".to_string(), into)] class: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "{kind}",
            class: "{class}",
            disabled,
            onclick: move |e| {
                if let Some(handler) = &onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}
