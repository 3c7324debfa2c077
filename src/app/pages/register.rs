use dioxus::prelude::*;

use crate::app::components::{Alert, AlertKind, SubmitButton, TextField};
use crate::app::layouts::PublicNavbar;
use crate::app::routes::Route;
use crate::domain::models::RegisterData;
use crate::shared::constants::REGISTER_REDIRECT_DELAY_MS;
use crate::shared::hooks::{use_api_client, use_form_state};
use crate::shared::services::ApiClient;
use crate::shared::utils::sleep_ms;

pub const REGISTER_FALLBACK: &str = "Error al registrarse";
pub const REGISTER_SUCCESS: &str = "Registro exitoso. Redirigiendo al login...";
const MIN_PASSWORD_LENGTH: u32 = 8;

/// Run one registration; `Ok` carries the success banner text
pub async fn submit_registration(api: &ApiClient, data: RegisterData) -> Result<String, String> {
    api.register(&data)
        .await
        .map(|_| REGISTER_SUCCESS.to_string())
        .map_err(|e| e.user_message(REGISTER_FALLBACK))
}

#[component]
pub fn Register() -> Element {
    let api = use_api_client();
    let navigator = use_navigator();
    let full_name = use_signal(String::new);
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
        let data = RegisterData {
            email: email(),
            password: password(),
            full_name: full_name(),
        };
        spawn(async move {
            let outcome = submit_registration(&api, data).await;
            form.finish();
            match outcome {
                Ok(message) => {
                    form.succeed(message);
                    sleep_ms(REGISTER_REDIRECT_DELAY_MS).await;
                    navigator.push(Route::Login {});
                }
                Err(message) => form.fail(message),
            }
        });
    };

    let loading = form.is_loading();

    rsx! {
        PublicNavbar {}
        main {
            div { class: "c-container c-container--narrow",
                div { class: "c-card",
                    h1 { class: "c-card__title c-card__title--center", "Crear Cuenta" }
                    Alert { kind: AlertKind::Error, message: (form.error)() }
                    Alert { kind: AlertKind::Success, message: (form.success)() }
                    form { onsubmit: onsubmit,
                        TextField { id: "fullName", label: "Nombre Completo", value: full_name, disabled: loading }
                        TextField { id: "email", label: "Correo Electrónico", input_type: "email", value: email, disabled: loading }
                        TextField {
                            id: "password",
                            label: "Contraseña",
                            input_type: "password",
                            value: password,
                            disabled: loading,
                            minlength: MIN_PASSWORD_LENGTH,
                            hint: "Mínimo 8 caracteres",
                        }
                        SubmitButton {
                            label: "Registrarse",
                            loading_label: "Creando cuenta...",
                            loading: loading,
                            full_width: true,
                        }
                    }
                    p { class: "c-card__footer",
                        "¿Ya tienes cuenta? "
                        Link { to: Route::Login {}, "Inicia sesión aquí" }
                    }
                }
            }
        }
    }
}
