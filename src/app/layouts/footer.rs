use chrono::Datelike;
use dioxus::prelude::*;

use crate::shared::constants::PRODUCT_NAME;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "c-footer",
            div { class: "c-container",
                p { "© {year} {PRODUCT_NAME}. Todos los derechos reservados." }
                p { class: "c-footer__tagline", "Plataforma de IA autónoma, escalable y ética" }
            }
        }
    }
}
