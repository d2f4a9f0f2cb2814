use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "form-label",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// Single-line controlled text input.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "form-input {class}",
            r#type: "text",
            placeholder: "{placeholder}",
            disabled: disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Multi-line controlled text input.
#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default = 4)] rows: u32,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "form-input form-textarea {class}",
            placeholder: "{placeholder}",
            rows: "{rows}",
            disabled: disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
