use axum::{extract::State, http::StatusCode, response::Json};
use shared::{LogRequest, LogResponse};
use tracing::{debug, error, info, warn};

use crate::AppState;

/// Re-emit a browser log line on the server's subscriber
pub async fn log_message(
    State(_app_state): State<AppState>,
    Json(request): Json<LogRequest>,
) -> Result<Json<LogResponse>, StatusCode> {
    let component = request.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, request.message);

    match request.level.to_lowercase().as_str() {
        "debug" => debug!(target: "browser", "{}", message),
        "info" => info!(target: "browser", "{}", message),
        "warn" => warn!(target: "browser", "{}", message),
        "error" => error!(target: "browser", "{}", message),
        _ => info!(target: "browser", "{}", message),
    }

    Ok(Json(LogResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use crate::{create_router, initialize_backend};
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use shared::{LogRequest, LogResponse};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_log_message() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(initialize_backend()?)?;
        let request = LogRequest {
            level: "WARN".to_string(),
            message: "Chat endpoint unreachable".to_string(),
            component: Some("chat".to_string()),
        };

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/logs")
                    .method(Method::POST)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&request)?))?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let parsed: LogResponse = serde_json::from_slice(&body)?;
        assert!(parsed.success);
        Ok(())
    }
}
