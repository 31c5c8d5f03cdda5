use dioxus::prelude::*;

/// Top bar shared by the public site and the dashboard shell.
#[component]
pub fn Navbar(
    #[props(default = false)] sticky: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar", "data-sticky": sticky,
            div { class: "navbar-bar", {children} }
        }
    }
}

/// Site name, usually wrapped in a link to the landing page.
#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        div { class: "navbar-brand", {children} }
    }
}

#[component]
pub fn NavbarLinks(children: Element) -> Element {
    rsx! {
        nav { class: "navbar-links", {children} }
    }
}

/// Pushes everything after it to the right edge.
#[component]
pub fn NavbarSpacer() -> Element {
    rsx! {
        div { class: "navbar-spacer" }
    }
}
