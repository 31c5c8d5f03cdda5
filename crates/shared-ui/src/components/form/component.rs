use dioxus::prelude::*;

/// Form wrapper that keeps the browser from navigating on submit.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Message rendered under a field the API (or local validation) rejected.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(text) if !text.is_empty() => rsx! {
            p { class: "field-error", role: "alert", "{text}" }
        },
        _ => rsx! {},
    }
}

/// File picker for resumes, cover images and manuscripts.
///
/// Reading the chosen file is left to `on_change`, which receives the raw
/// event so the caller can `read_bytes()` and apply its own size limit.
#[component]
pub fn FileInput(
    label: String,
    #[props(default)] accept: String,
    #[props(default)] file_name: Option<String>,
    #[props(default)] hint: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    on_change: EventHandler<FormEvent>,
) -> Element {
    let chosen = file_name.unwrap_or_else(|| "No file chosen".to_string());
    let invalid = error.as_deref().is_some_and(|e| !e.is_empty());

    rsx! {
        div { class: "file-input", "data-invalid": invalid,
            span { class: "file-input-label", "{label}" }
            label { class: "file-input-control",
                input {
                    r#type: "file",
                    accept: accept,
                    disabled: disabled,
                    onchange: move |evt| on_change.call(evt),
                }
                span { class: "button", "data-style": "outline", "Choose file" }
                span { class: "file-input-name", "{chosen}" }
            }
            if !hint.is_empty() {
                span { class: "file-input-hint", "{hint}" }
            }
            FieldError { message: error }
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
    fn field_error_renders_only_with_message() {
        let shown = render(|| rsx! { FieldError { message: Some("ISSN is invalid.".to_string()) } });
        let hidden = render(|| rsx! { FieldError { message: None } });

        assert!(shown.contains("ISSN is invalid."));
        assert!(!hidden.contains("field-error"));
    }

    #[test]
    fn file_input_shows_chosen_file_name() {
        let html = render(|| rsx! {
            FileInput {
                label: "Resume",
                accept: ".pdf",
                file_name: Some("cv.pdf".to_string()),
                on_change: move |_| {},
            }
        });

        assert!(html.contains("cv.pdf"));
        assert!(html.contains("accept=\".pdf\""));
    }
}
