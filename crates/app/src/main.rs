use dioxus::prelude::*;

mod components;
mod feedback;
mod format_helpers;
mod routes;
mod session;
mod uploads;

use routes::Route;
use session::SessionContext;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Unauthenticated base client; `use_api` layers the session token on top.
    use_context_provider(|| api::ApiClient::new(api::load_client_config().clone()));
    use_context_provider(SessionContext::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
