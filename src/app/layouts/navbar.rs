use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant};
use crate::app::routes::Route;
use crate::shared::constants::PRODUCT_NAME;
use crate::shared::hooks::use_api_client;

/// Header for visitors: logo plus optional login/register links
#[component]
pub fn PublicNavbar(#[props(default)] show_auth_links: bool) -> Element {
    rsx! {
        header { class: "c-header",
            div { class: "c-container c-header__content",
                Link { to: Route::Home {}, class: "c-header__logo", "{PRODUCT_NAME}" }
                if show_auth_links {
                    nav { class: "c-header__nav",
                        Link { to: Route::Login {}, class: "c-header__link", "Iniciar Sesión" }
                        Link { to: Route::Register {}, class: "c-button c-button--primary", "Registrarse" }
                    }
                }
            }
        }
    }
}

/// Header for authenticated pages, with the logout button
#[component]
pub fn AppNavbar() -> Element {
    let api = use_api_client();
    let navigator = use_navigator();

    rsx! {
        header { class: "c-header",
            div { class: "c-container c-header__content",
                Link { to: Route::Dashboard {}, class: "c-header__logo", "{PRODUCT_NAME}" }
                nav { class: "c-header__nav",
                    Link { to: Route::Dashboard {}, class: "c-header__link", "Dashboard" }
                    Link { to: Route::AiPlayground {}, class: "c-header__link", "AI Playground" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            api.logout();
                            navigator.push(Route::Home {});
                        },
                        "Cerrar Sesión"
                    }
                }
            }
        }
    }
}
