use dioxus::prelude::*;

/// Centered modal card over a dimmed page.
///
/// Clicking the backdrop or pressing Escape triggers `on_close`; the caller
/// decides whether closing is allowed (e.g. not while a save is in flight).
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    /// Accessible name for the dialog.
    #[props(default)]
    label: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal-card",
                role: "dialog",
                aria_modal: "true",
                aria_label: label,
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                {children}
            }
        }
    }
}
