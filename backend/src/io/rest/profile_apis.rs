use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use finance_domain::profile_service::random_profile;
use tracing::{error, info};
use shared::Profile;

use crate::AppState;

/// Current profile; the fallback profile until one has been generated
pub async fn get_profile(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/profile");

    match state.current_profile.lock() {
        Ok(profile) => (StatusCode::OK, Json(profile.clone())).into_response(),
        Err(e) => {
            error!("Profile lock poisoned: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Profile unavailable").into_response()
        }
    }
}

/// Draw a new random profile and make it the current one
pub async fn generate_profile(State(state): State<AppState>) -> impl IntoResponse {
    let profile = draw_profile();
    info!(
        "POST /api/profile/generate - income {}, {} categories",
        profile.income,
        profile.expenses.len()
    );

    match state.current_profile.lock() {
        Ok(mut current) => {
            *current = profile.clone();
            (StatusCode::OK, Json(profile)).into_response()
        }
        Err(e) => {
            error!("Profile lock poisoned: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Profile unavailable").into_response()
        }
    }
}

fn draw_profile() -> Profile {
    random_profile(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use crate::{create_router, initialize_backend};
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use finance_domain::fallback_profile;
    use shared::Profile;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_get_profile_defaults_to_fallback() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(initialize_backend()?)?;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/profile")
                    .method(Method::GET)
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let profile: Profile = serde_json::from_slice(&body)?;
        assert_eq!(profile, fallback_profile());
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_replaces_current_profile() -> Result<(), Box<dyn std::error::Error>> {
        let state = initialize_backend()?;
        let app = create_router(state.clone())?;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/profile/generate")
                    .method(Method::POST)
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let generated: Profile = serde_json::from_slice(&body)?;
        assert!(generated.income >= 30000.0 && generated.income < 100000.0);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/profile")
                    .method(Method::GET)
                    .body(Body::empty())?,
            )
            .await?;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let current: Profile = serde_json::from_slice(&body)?;
        assert_eq!(current, generated);
        Ok(())
    }
}
