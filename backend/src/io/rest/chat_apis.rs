use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use finance_domain::chat_service::rule_reply;
use tracing::info;
use shared::{ChatRequest, ChatResponse};

/// Keyword-rule reply to a chat message
pub async fn chat(Json(request): Json<ChatRequest>) -> impl IntoResponse {
    let message = request.message.trim();
    if message.is_empty() {
        return (StatusCode::BAD_REQUEST, "Message must not be empty").into_response();
    }

    info!("POST /api/chat - {} chars", message.chars().count());
    let response = ChatResponse {
        reply: rule_reply(message).to_string(),
        status: "success".to_string(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::chat;
    use crate::{create_router, initialize_backend};
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::response::{IntoResponse, Json};
    use shared::{ChatRequest, ChatResponse};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn chat_request(message: &str) -> Result<Request<Body>, Box<dyn std::error::Error>> {
        let body = serde_json::to_vec(&ChatRequest {
            message: message.to_string(),
        })?;
        Ok(Request::builder()
            .uri("/api/chat")
            .method(Method::POST)
            .header("content-type", "application/json")
            .body(Body::from(body))?)
    }

    #[tokio::test]
    async fn test_chat_replies_by_keyword() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(initialize_backend()?)?;

        let response = app.oneshot(chat_request("Should I INVEST?")?).await?;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let reply: ChatResponse = serde_json::from_slice(&body)?;
        assert_eq!(reply.status, "success");
        assert!(reply.reply.contains("index funds"));
        Ok(())
    }

    #[derive(Clone, Default)]
    struct EventCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_chat_request_reaches_tracing_subscriber() {
        let counter = EventCounter::default();
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(counter.clone()));

        let response = chat(Json(ChatRequest {
            message: "how do I save more".to_string(),
        }))
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(counter.0.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn test_chat_rejects_blank_message() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(initialize_backend()?)?;
        let response = app.oneshot(chat_request("   ")?).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }
}
