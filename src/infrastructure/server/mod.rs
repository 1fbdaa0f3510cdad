//! Web server - healthcheck and webhook endpoints

use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;

use crate::application::context::{BotContext, Commons};
use crate::application::errors::BotError;
use crate::application::messaging::Controller;
use crate::domain::entities::Message;
use crate::domain::traits::Bot;
use crate::infrastructure::config::HEALTHCHECK_PATH;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<BotContext>,
    pub controller: Arc<Controller>,
    pub bot: Arc<dyn Bot>,
}

impl AppState {
    pub fn new(context: Arc<BotContext>, controller: Arc<Controller>, bot: Arc<dyn Bot>) -> Self {
        Self {
            context,
            controller,
            bot,
        }
    }
}

/// Build the router. `webhook_path` must start with '/'.
pub fn router(state: AppState, webhook_path: &str) -> Router {
    Router::new()
        .route(HEALTHCHECK_PATH, get(healthcheck))
        .route(webhook_path, post(receive))
        .with_state(state)
}

/// Serve `app` on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), BotError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Listening on {}", addr);
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

/// GET /ping returns the commons
async fn healthcheck(State(state): State<AppState>) -> Json<Commons> {
    Json(state.context.commons().clone())
}

/// POST <webhook path> with a message event
async fn receive(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let message: Message = match serde_json::from_slice(&body) {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!("Rejecting malformed webhook payload: {}", e);
            return StatusCode::BAD_REQUEST;
        }
    };

    let reply = match state.controller.dispatch(&state.context, &message) {
        Ok(Some(reply)) => reply,
        Ok(None) => return StatusCode::OK,
        Err(e) => {
            tracing::warn!("Command failed for message {}: {}", message.id, e);
            return StatusCode::OK;
        }
    };

    let Some(room_id) = message.room_id.as_deref() else {
        tracing::warn!("Message {} has no room, dropping reply", message.id);
        return StatusCode::OK;
    };

    if let Err(e) = state.bot.send_message(room_id, &reply).await {
        tracing::error!("Failed to send message: {}", e);
    }
    StatusCode::OK
}
