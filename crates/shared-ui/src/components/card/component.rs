use dioxus::prelude::*;

/// Bordered surface grouping related content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}

/// Headline number on a dashboard, e.g. "Journals: 12".
///
/// `value` is `None` while the count is loading; the card then shows a dash
/// instead of a misleading zero.
#[component]
pub fn StatCard(
    label: String,
    value: Option<usize>,
    #[props(default)] hint: String,
    children: Element,
) -> Element {
    let shown = value.map(|v| v.to_string()).unwrap_or_else(|| "\u{2013}".to_string());

    rsx! {
        Card { class: "stat-card",
            div { class: "stat-card-icon", {children} }
            div { class: "stat-card-body",
                span { class: "stat-card-label", "{label}" }
                span { class: "stat-card-value", "{shown}" }
                if !hint.is_empty() {
                    span { class: "stat-card-hint", "{hint}" }
                }
            }
        }
    }
}
