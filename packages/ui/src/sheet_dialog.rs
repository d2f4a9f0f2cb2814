use api::{send_sheet_request, settle_submit};
use dioxus::prelude::*;
use domain::{DialogMode, Sheet, SheetDialog as DialogState};
use tracing::debug;

use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::views::ModalOverlay;
use crate::{push_notice, use_backend, use_notices, NoticeLevel};

/// Modal form for creating a sheet, or editing `sheet` when given.
///
/// The caller mounts it to open it and unmounts it from `on_saved` or
/// `on_cancel`. Confirm sends at most one request at a time; a failed request
/// keeps the form open with the error shown so the user can retry.
#[component]
pub fn SheetDialog(
    /// Existing sheet to edit. `None` creates a new one.
    #[props(default)]
    sheet: Option<Sheet>,
    on_saved: EventHandler<Sheet>,
    on_cancel: EventHandler<()>,
) -> Element {
    let backend = use_backend();
    let mut notices = use_notices();
    let mut dialog = use_signal(move || match &sheet {
        Some(sheet) => DialogState::open_edit(sheet),
        None => DialogState::open_create(),
    });

    let handle_submit = move |_: MouseEvent| {
        let request = match dialog.write().begin_submit() {
            Ok(Some(request)) => request,
            Ok(None) => return,
            Err(e) => {
                debug!("Sheet form rejected: {e}");
                return;
            }
        };
        let backend = backend.clone();
        spawn(async move {
            let result = send_sheet_request(&backend, request).await;
            let outcome = {
                let mut state = dialog.write();
                settle_submit(&mut state, result)
            };
            match outcome {
                Ok(sheet) => on_saved.call(sheet),
                Err(e) => push_notice(
                    &mut notices,
                    NoticeLevel::Error,
                    &format!("Could not save sheet: {e}"),
                ),
            }
        });
    };

    let mut handle_cancel = move |_: ()| {
        if dialog.peek().is_submitting() {
            return;
        }
        dialog.write().cancel();
        on_cancel.call(());
    };

    let DialogState::Open(open) = dialog() else {
        return rsx! {};
    };

    let title = title_for(&open.mode);
    let confirm_label = if open.submitting {
        "Saving..."
    } else if open.mode == DialogMode::Create {
        "Create"
    } else {
        "Save"
    };

    rsx! {
        ModalOverlay {
            on_close: handle_cancel,
            label: title.to_string(),
            div {
                class: "p-6",
                h2 { class: "m-0 mb-5 text-lg font-semibold", "{title}" }

                div {
                    class: "mb-4",
                    Label { html_for: "sheet-name", "Name" }
                    Input {
                        id: "sheet-name",
                        placeholder: "Untitled",
                        disabled: open.submitting,
                        value: open.draft.name.clone(),
                        oninput: move |evt: FormEvent| {
                            if let Some(draft) = dialog.write().draft_mut() {
                                draft.name = evt.value();
                            }
                        },
                    }
                }

                div {
                    class: "mb-4",
                    Label { html_for: "sheet-description", "Description" }
                    Textarea {
                        id: "sheet-description",
                        placeholder: "What is this sheet for?",
                        rows: 4,
                        disabled: open.submitting,
                        value: open.draft.description.clone(),
                        oninput: move |evt: FormEvent| {
                            if let Some(draft) = dialog.write().draft_mut() {
                                draft.description = evt.value();
                            }
                        },
                    }
                }

                if let Some(error) = open.error.clone() {
                    p { class: "form-error", "{error}" }
                }

                div {
                    class: "flex gap-2 mt-5",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: open.submitting,
                        onclick: handle_submit,
                        "{confirm_label}"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: open.submitting,
                        onclick: move |_| handle_cancel(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

fn title_for(mode: &DialogMode) -> &'static str {
    match mode {
        DialogMode::Create => "Create Sheet",
        DialogMode::Edit { .. } => "Edit Sheet",
    }
}
