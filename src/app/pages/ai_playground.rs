use dioxus::prelude::*;

use crate::app::components::{Alert, AlertKind, Card, LoadingSpinner, SubmitButton};
use crate::app::layouts::AppNavbar;
use crate::app::routes::RequireAuth;
use crate::domain::models::{AiModel, AiRequest, AiResponse, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::shared::hooks::{use_api_client, use_form_state};
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::ApiClient;

pub const PLAYGROUND_FALLBACK: &str = "Error al procesar la solicitud";
const MAX_TEMPERATURE: f32 = 2.0;

/// Submit is allowed once a non-blank prompt is typed and nothing is in flight
pub fn can_submit(prompt: &str, loading: bool) -> bool {
    !loading && !prompt.trim().is_empty()
}

/// Build the request from the raw form inputs, falling back to defaults on bad numbers
pub fn build_request(prompt: &str, max_tokens: &str, temperature: &str) -> AiRequest {
    let max_tokens = max_tokens
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_TOKENS);
    let temperature = temperature
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|t| (0.0..=MAX_TEMPERATURE).contains(t))
        .unwrap_or(DEFAULT_TEMPERATURE);

    AiRequest::new(prompt)
        .with_max_tokens(max_tokens)
        .with_temperature(temperature)
}

pub async fn submit_prompt(api: &ApiClient, request: AiRequest) -> Result<AiResponse, String> {
    api.ai_inference(&request)
        .await
        .map_err(|e| e.user_message(PLAYGROUND_FALLBACK))
}

/// Model list for the side card; empty when it can't be loaded
pub async fn load_models(api: &ApiClient) -> Vec<AiModel> {
    match api.get_ai_models().await {
        Ok(response) => response.models,
        Err(e) => {
            logging::log_background_load_error(LogOperation::Inference, "AI models", &e.to_string());
            Vec::new()
        }
    }
}

#[component]
pub fn AiPlayground() -> Element {
    rsx! {
        RequireAuth {
            PlaygroundContent {}
        }
    }
}

#[component]
fn PlaygroundContent() -> Element {
    let api = use_api_client();
    let mut prompt = use_signal(String::new);
    let mut max_tokens = use_signal(|| DEFAULT_MAX_TOKENS.to_string());
    let mut temperature = use_signal(|| DEFAULT_TEMPERATURE.to_string());
    let mut response = use_signal(|| None::<AiResponse>);
    let mut models = use_signal(Vec::<AiModel>::new);
    let mut form = use_form_state();

    let api_for_models = api.clone();
    use_effect(move || {
        let api = api_for_models.clone();
        spawn(async move {
            models.set(load_models(&api).await);
        });
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !can_submit(&prompt.read(), form.is_loading()) {
            return;
        }
        form.begin();
        response.set(None);

        let api = api.clone();
        let request = build_request(&prompt.read(), &max_tokens.read(), &temperature.read());
        spawn(async move {
            match submit_prompt(&api, request).await {
                Ok(result) => response.set(Some(result)),
                Err(message) => form.fail(message),
            }
            form.finish();
        });
    };

    let loading = form.is_loading();
    let submit_disabled = !can_submit(&prompt.read(), loading);

    rsx! {
        AppNavbar {}
        main {
            div { class: "c-container c-page",
                h1 { class: "c-page__title", "AI Playground" }

                Card { title: "Prueba la IA",
                    p { class: "c-muted",
                        "Ingresa un prompt para interactuar con el sistema de inteligencia artificial"
                    }
                    Alert { kind: AlertKind::Error, message: (form.error)() }
                    form { onsubmit: onsubmit,
                        div { class: "c-form__group",
                            label { class: "c-form__label", r#for: "prompt", "Prompt" }
                            textarea {
                                id: "prompt",
                                class: "c-form__input c-form__textarea",
                                value: "{prompt}",
                                placeholder: "Escribe tu consulta o instrucción para la IA...",
                                required: true,
                                disabled: loading,
                                oninput: move |evt| prompt.set(evt.value()),
                            }
                        }
                        div { class: "c-form__row",
                            div { class: "c-form__group",
                                label { class: "c-form__label", r#for: "max_tokens", "Tokens máximos" }
                                input {
                                    id: "max_tokens",
                                    class: "c-form__input",
                                    r#type: "number",
                                    min: "1",
                                    step: "1",
                                    value: "{max_tokens}",
                                    disabled: loading,
                                    oninput: move |evt| max_tokens.set(evt.value()),
                                }
                            }
                            div { class: "c-form__group",
                                label { class: "c-form__label", r#for: "temperature", "Temperatura" }
                                input {
                                    id: "temperature",
                                    class: "c-form__input",
                                    r#type: "number",
                                    min: "0",
                                    max: "2",
                                    step: "0.1",
                                    value: "{temperature}",
                                    disabled: loading,
                                    oninput: move |evt| temperature.set(evt.value()),
                                }
                            }
                        }
                        SubmitButton {
                            label: "Enviar",
                            loading_label: "Procesando...",
                            loading: loading,
                            disabled: submit_disabled,
                        }
                    }
                }

                if loading {
                    Card { LoadingSpinner {} }
                }

                if let Some(result) = response() {
                    Card { title: "Respuesta",
                        div { class: "c-response", "{result.result}" }
                        div { class: "c-response__meta",
                            span { strong { "Tokens: " } "{result.tokens_used}" }
                            span { strong { "Tiempo: " } {result.processing_time_label()} }
                            span { strong { "Modelo: " } "{result.model_version}" }
                        }
                    }
                }

                if !models.read().is_empty() {
                    Card { title: "Modelos Disponibles",
                        ul { class: "c-list",
                            for model in models() {
                                li { key: "{model.id}",
                                    strong { "{model.name}" }
                                    " ({model.kind}) · {model.status}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
