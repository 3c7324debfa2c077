use dioxus::prelude::*;

use crate::app::components::{Alert, AlertKind, SubmitButton, TextField};
use crate::app::layouts::PublicNavbar;
use crate::app::routes::Route;
use crate::domain::models::LoginCredentials;
use crate::shared::hooks::{use_api_client, use_form_state};
use crate::shared::services::ApiClient;

pub const LOGIN_FALLBACK: &str = "Error al iniciar sesión";

/// Run one login attempt; the error is the message to show under the title
pub async fn submit_login(api: &ApiClient, credentials: LoginCredentials) -> Result<(), String> {
    api.login(&credentials)
        .await
        .map(|_| ())
        .map_err(|e| e.user_message(LOGIN_FALLBACK))
}

#[component]
pub fn Login() -> Element {
    let api = use_api_client();
    let navigator = use_navigator();
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut form = use_form_state();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if form.is_loading() {
            return;
        }
        form.begin();

        let api = api.clone();
        let credentials = LoginCredentials::new(email(), password());
        spawn(async move {
            match submit_login(&api, credentials).await {
                Ok(()) => {
                    navigator.push(Route::Dashboard {});
                }
                Err(message) => form.fail(message),
            }
            form.finish();
        });
    };

    let loading = form.is_loading();

    rsx! {
        PublicNavbar {}
        main {
            div { class: "c-container c-container--narrow",
                div { class: "c-card",
                    h1 { class: "c-card__title c-card__title--center", "Iniciar Sesión" }
                    Alert { kind: AlertKind::Error, message: (form.error)() }
                    form { onsubmit: onsubmit,
                        TextField { id: "email", label: "Correo Electrónico", input_type: "email", value: email, disabled: loading }
                        TextField { id: "password", label: "Contraseña", input_type: "password", value: password, disabled: loading }
                        SubmitButton {
                            label: "Iniciar Sesión",
                            loading_label: "Iniciando sesión...",
                            loading: loading,
                            full_width: true,
                        }
                    }
                    p { class: "c-card__footer",
                        "¿No tienes cuenta? "
                        Link { to: Route::Register {}, "Regístrate aquí" }
                    }
                }
            }
        }
    }
}
