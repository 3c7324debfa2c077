use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Outline => "c-button--outline",
        }
    }
}

/// Submit button that swaps its label while the form is loading
#[component]
pub fn SubmitButton(
    label: String,
    loading_label: String,
    loading: bool,
    #[props(default)] disabled: bool,
    #[props(default)] full_width: bool,
) -> Element {
    let variant_class = ButtonVariant::Primary.class();
    let width_class = if full_width { "c-button--block" } else { "" };

    rsx! {
        button {
            r#type: "submit",
            class: "c-button {variant_class} {width_class}",
            disabled: loading || disabled,
            if loading { "{loading_label}" } else { "{label}" }
        }
    }
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.unwrap_or(ButtonVariant::Primary).class();

    rsx! {
        button {
            r#type: "button",
            class: "c-button {variant_class}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
