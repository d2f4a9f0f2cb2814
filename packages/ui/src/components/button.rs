use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Outline => "button button--outline",
            ButtonVariant::Ghost => "button button--ghost",
            ButtonVariant::Destructive => "button button--destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();

    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: "button",
            title: "{title}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
