use dioxus::prelude::*;

/// Vertical list of label/value rows for detail screens.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

const DASH: &str = "\u{2014}";

/// One row of a [`DetailList`].
///
/// Pass `value` for plain text or children for rich content such as badges
/// and links. A missing or blank `value` renders a dash.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                match value {
                    Some(text) if !text.trim().is_empty() => rsx! { "{text}" },
                    Some(_) => rsx! { "{DASH}" },
                    None => rsx! { {children} },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn blank_value_shows_dash() {
        let html = render(|| rsx! {
            DetailList {
                DetailItem { label: "ISSN", value: Some(String::new()) }
                DetailItem { label: "Journal", value: Some("Widgets Quarterly".to_string()) }
            }
        });

        assert!(html.contains("\u{2014}"));
        assert!(html.contains("Widgets Quarterly"));
    }

    #[test]
    fn children_render_when_no_value() {
        let html = render(|| rsx! {
            DetailItem { label: "Status", span { class: "badge", "Accepted" } }
        });

        assert!(html.contains("Accepted"));
    }
}
