use crate::models::responses::HealthResponse;
use axum::response::Json;

pub const SERVICE_NAME: &str = "catalog-service";

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: SERVICE_NAME.to_string(),
        status: "running".to_string(),
    })
}
