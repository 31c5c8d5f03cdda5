use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Inline card for a list or detail request that failed.
#[component]
pub fn LoadError(error: AppError, #[props(default)] on_retry: Option<EventHandler<()>>) -> Element {
    let message = error.friendly_message();

    rsx! {
        Card { class: "load-error",
            CardHeader {
                CardTitle { "Could not load this page" }
                CardDescription { "{message}" }
            }
            if let Some(retry) = on_retry {
                CardContent {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| retry.call(()),
                        "Try again"
                    }
                }
            }
        }
    }
}
