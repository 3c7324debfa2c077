use dioxus::prelude::*;

use crate::app::components::Card;
use crate::app::layouts::{Footer, PublicNavbar};
use crate::app::routes::Route;
use crate::shared::constants::PRODUCT_NAME;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "🚀",
        "Escalable",
        "Arquitectura diseñada para crecer desde pequeños proyectos hasta implementaciones globales con millones de usuarios.",
    ),
    (
        "🧩",
        "Modular",
        "Sistema de módulos extensible que permite agregar funcionalidades específicas para educación, empresas y gobiernos.",
    ),
    (
        "🛡️",
        "Ética y Segura",
        "Diseñada con seguridad y ética como prioridades fundamentales, cumpliendo con estándares internacionales de privacidad.",
    ),
    (
        "💡",
        "Inteligente",
        "Capacidades avanzadas de procesamiento de lenguaje natural y aprendizaje automático para resolver problemas complejos.",
    ),
    (
        "💰",
        "Monetización",
        "Módulos especializados para generar valor y oportunidades de negocio sostenibles a largo plazo.",
    ),
    (
        "📚",
        "Educación",
        "Herramientas diseñadas específicamente para el ámbito educativo, potenciando el aprendizaje y la enseñanza.",
    ),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        PublicNavbar { show_auth_links: true }
        main {
            div { class: "c-container",
                section { class: "c-hero",
                    h1 { class: "c-hero__title", "{PRODUCT_NAME}" }
                    p { class: "c-hero__subtitle",
                        "Plataforma central de inteligencia artificial matriz"
                        br {}
                        "Autónoma, escalable y ética para el futuro"
                    }
                    div { class: "c-hero__actions",
                        Link { to: Route::Register {}, class: "c-button c-button--primary", "Comenzar Ahora" }
                        Link { to: Route::Login {}, class: "c-button c-button--outline", "Iniciar Sesión" }
                    }
                }
                section { class: "c-features",
                    h2 { class: "c-features__title", "Características Principales" }
                    div { class: "c-grid c-grid--3",
                        for (icon, title, body) in FEATURES {
                            Card { key: "{title}", title: format!("{icon} {title}"),
                                p { "{body}" }
                            }
                        }
                    }
                }
            }
        }
        Footer {}
    }
}
