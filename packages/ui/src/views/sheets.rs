use api::Backend;
use dioxus::prelude::*;
use domain::Sheet;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPlus, FaTableCells};
use crate::{push_notice, use_backend, use_notices, Icon, NoticeLevel, SheetDialog, VIEWS_CSS};

/// List of the user's sheets with a "New Sheet" action.
///
/// Creating a sheet hands the saved sheet to `on_sheet_created`; the platform
/// package records it and navigates to its detail route.
#[component]
pub fn SheetsView(on_open_sheet: EventHandler<String>, on_sheet_created: EventHandler<Sheet>) -> Element {
    let backend = use_backend();
    let mut notices = use_notices();
    let mut sheets = use_signal(Vec::<Sheet>::new);
    let mut loading = use_signal(|| true);
    let mut show_dialog = use_signal(|| false);

    let _loader = use_resource(move || {
        let backend = backend.clone();
        async move {
            match backend.list_sheets().await {
                Ok(list) => sheets.set(list),
                Err(e) => {
                    tracing::warn!("Failed to list sheets: {e}");
                    push_notice(&mut notices, NoticeLevel::Warning, &format!("Could not load sheets: {e}"));
                }
            }
            loading.set(false);
        }
    });

    let handle_saved = move |sheet: Sheet| {
        show_dialog.set(false);
        sheets.write().insert(0, sheet.clone());
        on_sheet_created.call(sheet);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "Sheets" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| show_dialog.set(true),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "New Sheet"
                }
            }

            if loading() {
                p { class: "view-muted", "Loading sheets..." }
            } else if sheets().is_empty() {
                div {
                    class: "view-placeholder",
                    h2 { "No sheets yet" }
                    p { "Create a sheet to start collecting and enriching data." }
                }
            } else {
                ul {
                    class: "sheet-list",
                    for sheet in sheets() {
                        li {
                            key: "{sheet.uuid}",
                            class: "sheet-list-item",
                            onclick: {
                                let uuid = sheet.uuid.clone();
                                move |_| on_open_sheet.call(uuid.clone())
                            },
                            Icon { icon: FaTableCells, width: 14, height: 14 }
                            div {
                                class: "sheet-list-text",
                                span { class: "sheet-list-name", "{sheet.name}" }
                                if !sheet.description.is_empty() {
                                    span { class: "view-muted", "{sheet.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_dialog() {
            SheetDialog {
                on_saved: handle_saved,
                on_cancel: move |_| show_dialog.set(false),
            }
        }
    }
}
