use dioxus::prelude::*;

// Reusable loading spinner (BEM: c-loading)
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum AlertKind {
    Error,
    Success,
}

/// Inline message above a form; renders nothing without a message
#[component]
pub fn Alert(kind: AlertKind, #[props(!optional)] message: Option<String>) -> Element {
    let modifier = match kind {
        AlertKind::Error => "c-alert--error",
        AlertKind::Success => "c-alert--success",
    };

    rsx! {
        if let Some(message) = message {
            div { class: "c-alert {modifier}", role: "alert", "{message}" }
        }
    }
}

/// Labelled input bound to a string signal
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: Signal<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] disabled: bool,
    minlength: Option<u32>,
    hint: Option<String>,
) -> Element {
    let mut value = value;

    rsx! {
        div { class: "c-form__group",
            label { class: "c-form__label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: "c-form__input",
                r#type: "{input_type}",
                value: "{value}",
                required: true,
                minlength: minlength.map(|n| n.to_string()),
                disabled: disabled,
                oninput: move |evt| value.set(evt.value()),
            }
            if let Some(hint) = hint {
                small { class: "c-form__hint", "{hint}" }
            }
        }
    }
}
