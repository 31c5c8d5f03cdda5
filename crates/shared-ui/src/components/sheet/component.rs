use dioxus::prelude::*;

/// Edge the sheet slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    #[default]
    Right,
    Left,
}

impl SheetSide {
    fn as_str(&self) -> &'static str {
        match self {
            SheetSide::Right => "right",
            SheetSide::Left => "left",
        }
    }
}

/// Sliding panel that hosts the create/edit forms of the management screens.
///
/// Clicking the backdrop or pressing Escape calls `on_close`; the caller
/// decides whether closing is allowed (e.g. to confirm discarding edits).
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: SheetSide,
    #[props(default = false)] wide: bool,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            tabindex: "-1",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                "data-side": side.as_str(),
                "data-wide": wide,
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn SheetContent(children: Element) -> Element {
    rsx! {
        div { class: "sheet-content", {children} }
    }
}

/// Title block with a close button.
#[component]
pub fn SheetHeader(
    title: String,
    #[props(default)] description: String,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "sheet-header",
            div {
                h2 { class: "sheet-title", "{title}" }
                if !description.is_empty() {
                    p { class: "sheet-description", "{description}" }
                }
            }
            button {
                class: "sheet-close",
                r#type: "button",
                "aria-label": "Close",
                onclick: move |_| on_close.call(()),
                "\u{2715}"
            }
        }
    }
}

#[component]
pub fn SheetFooter(children: Element) -> Element {
    rsx! {
        div { class: "sheet-footer", {children} }
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
    fn closed_sheet_renders_nothing() {
        let html = render(|| rsx! {
            Sheet { open: false, on_close: move |_| {}, "form body" }
        });

        assert!(!html.contains("form body"));
    }

    #[test]
    fn header_shows_title_and_description() {
        let html = render(|| rsx! {
            SheetHeader {
                title: "New category",
                description: "Categories group journals by discipline.",
                on_close: move |_| {},
            }
        });

        assert!(html.contains("New category"));
        assert!(html.contains("Categories group journals by discipline."));
        assert!(html.contains("aria-label=\"Close\""));
    }
}
