use api::SheetSelection;
use dioxus::prelude::*;

use ui::{AccountProvider, BillingPortal, Navbar, NoticeList, Notices};
use views::{Billing, SheetDetail, Sheets};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/sheets")]
        Sheets {},
        #[route("/sheets/:uuid")]
        SheetDetail { uuid: String },
        #[route("/billing")]
        Billing {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ui::load_config);
    use_context_provider(|| ui::make_backend(&config));
    use_context_provider(|| BillingPortal::from_config(&config));
    use_context_provider(|| Signal::new(Notices::default()));
    use_context_provider(|| Signal::new(SheetSelection::default()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::components::COMPONENTS_CSS }

        AccountProvider {
            Router::<Route> {}
        }
    }
}

/// Navigation bar, routed page and notices.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Sheets {}, active_class: "active", "Sheets" }
            Link { to: Route::Billing {}, active_class: "active", "Billing" }
        }
        main {
            Outlet::<Route> {}
        }
        NoticeList {}
    }
}

/// Redirect `/` to `/sheets`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Sheets {});
    rsx! {}
}
