use api::Backend;
use dioxus::prelude::*;
use domain::Sheet;
use tracing::warn;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPen, FaTrash};
use crate::{
    push_notice, render_markdown, use_backend, use_notices, Icon, NoticeLevel, SheetDialog,
    VIEWS_CSS,
};

/// Shared sheet detail view.
///
/// Loads a sheet by `uuid`, and lets the user edit its name and description
/// or delete it. Platform packages provide navigation callbacks.
#[component]
pub fn SheetDetailView(
    uuid: String,
    /// Sheet already held by the caller, shown while the fresh copy loads.
    #[props(default)]
    cached: Option<Sheet>,
    /// Called after an edit is saved.
    on_sheet_saved: EventHandler<Sheet>,
    /// Called after deleting the sheet; navigate back to the list.
    on_deleted: EventHandler<()>,
) -> Element {
    let backend = use_backend();
    let mut notices = use_notices();
    let mut sheet = use_signal(|| sheet_for_route(cached.clone(), &uuid));
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    // Track uuid in a signal so use_resource re-runs on route param change.
    // The previous sheet is dropped so it is never shown under the new uuid.
    let mut uuid_signal = use_signal(|| uuid.clone());
    if *uuid_signal.peek() != uuid {
        uuid_signal.set(uuid.clone());
        sheet.set(sheet_for_route(cached.clone(), &uuid));
        load_error.set(None);
        editing.set(false);
    }

    let loader_backend = backend.clone();
    let _loader = use_resource(move || {
        let uuid = uuid_signal();
        let backend = loader_backend.clone();
        async move {
            match backend.get_sheet(&uuid).await {
                Ok(fresh) => {
                    sheet.set(Some(fresh));
                    load_error.set(None);
                }
                Err(e) => {
                    warn!("Failed to load sheet {uuid}: {e}");
                    load_error.set(Some(e.to_string()));
                }
            }
        }
    });

    let handle_saved = move |saved: Sheet| {
        editing.set(false);
        sheet.set(Some(saved.clone()));
        push_notice(&mut notices, NoticeLevel::Success, &format!("Saved {}", saved.name));
        on_sheet_saved.call(saved);
    };

    let mut handle_delete = move |uuid: String| {
        if deleting() {
            return;
        }
        deleting.set(true);
        let backend = backend.clone();
        spawn(async move {
            match backend.delete_sheet(&uuid).await {
                Ok(()) => {
                    push_notice(&mut notices, NoticeLevel::Info, "Sheet deleted");
                    on_deleted.call(());
                }
                Err(e) => {
                    warn!("Failed to delete sheet {uuid}: {e}");
                    push_notice(&mut notices, NoticeLevel::Error, &format!("Could not delete sheet: {e}"));
                    deleting.set(false);
                }
            }
        });
    };

    let Some(current) = sheet() else {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "view-page",
                if let Some(error) = load_error() {
                    div {
                        class: "view-placeholder",
                        h2 { "Sheet unavailable" }
                        p { "{error}" }
                    }
                } else {
                    p { class: "view-muted", "Loading sheet..." }
                }
            }
        };
    };

    let description = render_markdown(&current.description);
    let updated = current
        .updated_at
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "{current.name}" }
                div {
                    class: "flex gap-2",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| editing.set(true),
                        Icon { icon: FaPen, width: 12, height: 12 }
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: deleting(),
                        onclick: {
                            let uuid = current.uuid.clone();
                            move |_| handle_delete(uuid.clone())
                        },
                        Icon { icon: FaTrash, width: 12, height: 12 }
                        if deleting() { "Deleting..." } else { "Delete" }
                    }
                }
            }

            if let Some(error) = load_error() {
                p { class: "form-error", "Could not refresh this sheet: {error}" }
            }

            if current.description.is_empty() {
                p { class: "view-muted", "No description." }
            } else {
                div {
                    class: "sheet-description",
                    dangerous_inner_html: "{description}",
                }
            }

            dl {
                class: "sheet-meta",
                div {
                    dt { "Rows" }
                    dd { "{current.total_rows}" }
                }
                if let Some(updated) = updated {
                    div {
                        dt { "Last updated" }
                        dd { "{updated}" }
                    }
                }
            }
        }

        if editing() {
            SheetDialog {
                sheet: Some(current.clone()),
                on_saved: handle_saved,
                on_cancel: move |_| editing.set(false),
            }
        }
    }
}

/// The caller's cached sheet, if it is the one this route shows.
fn sheet_for_route(cached: Option<Sheet>, uuid: &str) -> Option<Sheet> {
    cached.filter(|s| s.uuid == uuid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(uuid: &str) -> Sheet {
        serde_json::from_value(serde_json::json!({"uuid": uuid, "name": "Leads"})).unwrap()
    }

    #[test]
    fn test_cached_sheet_only_used_for_its_own_route() {
        assert_eq!(
            sheet_for_route(Some(sheet("abc-123")), "abc-123").map(|s| s.uuid),
            Some("abc-123".to_string())
        );
        assert!(sheet_for_route(Some(sheet("abc-123")), "def-456").is_none());
        assert!(sheet_for_route(None, "abc-123").is_none());
    }
}
