use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { to: Route::Landing {},
                Button { variant: ButtonVariant::Primary, "Back to the front page" }
            }
        }
    }
}
