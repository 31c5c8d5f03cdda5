use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// Labelled on/off field, used for the "active" flag on every record form.
#[component]
pub fn SwitchField(label: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "desk-switch-field",
            Switch {
                checked: Some(checked),
                on_checked_change: move |value: bool| on_change.call(value),
                SwitchThumb {}
            }
            span { "{label}" }
        }
    }
}
