use api::SheetSelection;
use dioxus::prelude::*;
use domain::Sheet;
use ui::views::SheetsView;

use crate::Route;

#[component]
pub fn Sheets() -> Element {
    let nav = use_navigator();
    let mut selection = use_context::<Signal<SheetSelection>>();

    let on_open_sheet = move |uuid: String| {
        nav.push(Route::SheetDetail { uuid });
    };

    let on_sheet_created = move |sheet: Sheet| {
        let uuid = sheet.uuid.clone();
        tracing::info!("Created sheet {uuid}");
        selection.write().select(sheet);
        nav.push(Route::SheetDetail { uuid });
    };

    rsx! {
        SheetsView {
            on_open_sheet: on_open_sheet,
            on_sheet_created: on_sheet_created,
        }
    }
}
