// src/handlers/health.rs

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::db::Storage;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct HealthCheck {
    pub name: &'static str,
    pub status: HealthStatus,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub checks: Vec<HealthCheck>,
}

// GET /api/v1/Health/live
// Não toca em dependências: o processo respondeu, está vivo.
pub async fn live() -> Json<HealthReport> {
    Json(HealthReport {
        status: HealthStatus::Healthy,
        checks: vec![HealthCheck {
            name: "self",
            status: HealthStatus::Healthy,
            description: "API em execução.".to_string(),
            error: None,
        }],
    })
}

// GET /api/v1/Health/ready
pub async fn ready(State(storage): State<Storage>) -> (StatusCode, Json<HealthReport>) {
    let check = match storage.ping().await {
        Ok(()) => HealthCheck {
            name: storage.backend_name(),
            status: HealthStatus::Healthy,
            description: "Armazenamento respondeu à consulta.".to_string(),
            error: None,
        },
        Err(e) => {
            tracing::error!(backend = storage.backend_name(), error = %e, "verificação de prontidão falhou");
            HealthCheck {
                name: storage.backend_name(),
                status: HealthStatus::Unhealthy,
                description: "Falha ao consultar o armazenamento.".to_string(),
                error: Some(e.to_string()),
            }
        }
    };

    let status = check.status;
    let code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (code, Json(HealthReport { status, checks: vec![check] }))
}
