use chrono::Local;
use dioxus::prelude::*;

use crate::app::components::{Card, LoadingSpinner};
use crate::app::layouts::AppNavbar;
use crate::app::routes::{RequireAuth, Route};
use crate::domain::models::{AiCapability, HealthStatus, format_percent};
use crate::shared::hooks::use_api_client;
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::ApiClient;

/// Fetch the health snapshot; failures are logged and render as "not loaded"
pub async fn load_health(api: &ApiClient) -> Option<HealthStatus> {
    match api.get_health_status().await {
        Ok(status) => Some(status),
        Err(e) => {
            logging::log_background_load_error(LogOperation::Health, "health status", &e.to_string());
            None
        }
    }
}

/// Fetch the capability list, keeping the built-in one when the backend can't answer
pub async fn load_capabilities(api: &ApiClient) -> Vec<AiCapability> {
    match api.get_ai_capabilities().await {
        Ok(response) if !response.capabilities.is_empty() => response.capabilities,
        Ok(_) => default_capabilities(),
        Err(e) => {
            logging::log_background_load_error(LogOperation::Inference, "AI capabilities", &e.to_string());
            default_capabilities()
        }
    }
}

pub fn default_capabilities() -> Vec<AiCapability> {
    [
        ("Procesamiento de Lenguaje Natural", "active"),
        ("Análisis de Sentimientos", "active"),
        ("Clasificación de Texto", "active"),
        ("Reconocimiento de Entidades", "planned"),
        ("Traducción de Idiomas", "planned"),
    ]
    .into_iter()
    .map(|(name, status)| AiCapability {
        name: name.to_string(),
        description: String::new(),
        status: status.to_string(),
    })
    .collect()
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RequireAuth {
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let api = use_api_client();
    let mut health = use_signal(|| None::<HealthStatus>);
    let mut loading = use_signal(|| true);
    let mut checked_at = use_signal(|| None::<String>);
    let mut capabilities = use_signal(default_capabilities);

    // Load once on mount
    use_effect(move || {
        let api = api.clone();
        spawn(async move {
            health.set(load_health(&api).await);
            checked_at.set(Some(Local::now().format("%H:%M:%S").to_string()));
            loading.set(false);
            capabilities.set(load_capabilities(&api).await);
        });
    });

    rsx! {
        AppNavbar {}
        main {
            div { class: "c-container c-page",
                h1 { class: "c-page__title", "Dashboard" }
                if loading() {
                    LoadingSpinner {}
                } else {
                    div { class: "c-grid c-grid--2",
                        Card { title: "Estado del Sistema",
                            if let Some(status) = health() {
                                p {
                                    strong { "Estado: " }
                                    span { class: "c-status c-status--ok", "{status.status}" }
                                }
                                p { strong { "Servicio: " } "{status.service}" }
                                p { strong { "Versión: " } "{status.version}" }
                                if let Some(minutes) = status.uptime_minutes() {
                                    p { strong { "Tiempo activo: " } "{minutes} minutos" }
                                }
                                if let Some(at) = checked_at() {
                                    p { class: "c-muted", "Última actualización: {at}" }
                                }
                            }
                        }
                        Card { title: "Recursos del Sistema",
                            if let Some(system) = health().and_then(|status| status.system) {
                                p { strong { "CPU: " } {format_percent(system.cpu_percent)} }
                                p { strong { "Memoria: " } {format_percent(system.memory_percent)} }
                                p { strong { "Disco: " } {format_percent(system.disk_percent)} }
                            }
                        }
                        Card { title: "Acceso Rápido",
                            Link {
                                to: Route::AiPlayground {},
                                class: "c-button c-button--primary c-button--block",
                                "Probar AI Playground"
                            }
                        }
                        Card { title: "Módulos Disponibles",
                            ul { class: "c-list",
                                for capability in capabilities() {
                                    li { key: "{capability.name}",
                                        title: "{capability.description}",
                                        if capability.is_active() { "✅ " } else { "🔄 " }
                                        "{capability.name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::services::testing::{TestHarness, json_response};

    #[tokio::test]
    async fn test_load_health_network_failure_yields_none() {
        let harness = TestHarness::with_token("tok1");
        harness.transport.push_network_error("connection refused");

        assert_eq!(load_health(&harness.client).await, None);
        assert!(harness.client.is_authenticated());
        assert_eq!(harness.redirect.count(), 0);
    }

    #[tokio::test]
    async fn test_load_health_parses_snapshot() {
        let harness = TestHarness::with_token("tok1");
        harness.transport.push(json_response(
            200,
            r#"{"status": "healthy", "uptime_seconds": 600.0,
                "system": {"cpu_percent": 5.0, "memory_percent": 40.0, "disk_percent": 60.0}}"#,
        ));

        let status = load_health(&harness.client).await.unwrap();
        assert_eq!(status.uptime_minutes(), Some(10));
        assert_eq!(
            harness.transport.requests()[0].url,
            "http://localhost:8000/api/v1/health/status"
        );
    }

    #[tokio::test]
    async fn test_capabilities_fall_back_to_builtin_list() {
        let harness = TestHarness::with_token("tok1");
        harness.transport.push(json_response(503, "{}"));

        let capabilities = load_capabilities(&harness.client).await;
        assert_eq!(capabilities, default_capabilities());
        assert_eq!(capabilities.iter().filter(|c| c.is_active()).count(), 3);
    }

    #[tokio::test]
    async fn test_capabilities_from_backend() {
        let harness = TestHarness::with_token("tok1");
        harness.transport.push(json_response(
            200,
            r#"{"capabilities": [{"name": "Sentiment Analysis", "description": "Analyze sentiment", "status": "active"}],
                "modules": {"education": "Tutoring"}}"#,
        ));

        let capabilities = load_capabilities(&harness.client).await;
        assert_eq!(capabilities.len(), 1);
        assert_eq!(capabilities[0].name, "Sentiment Analysis");
    }
}
