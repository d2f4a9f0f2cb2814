use api::SheetSelection;
use dioxus::prelude::*;
use domain::Sheet;
use ui::views::SheetDetailView;

use crate::Route;

#[component]
pub fn SheetDetail(uuid: String) -> Element {
    let nav = use_navigator();
    let mut selection = use_context::<Signal<SheetSelection>>();
    let cached = selection.peek().current_sheet.clone();

    rsx! {
        SheetDetailView {
            uuid,
            cached,
            on_sheet_saved: move |sheet: Sheet| selection.write().select(sheet),
            on_deleted: move |_| {
                selection.write().clear();
                nav.push(Route::Sheets {});
            },
        }
    }
}
