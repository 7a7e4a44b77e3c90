//! Axum server for the component showcase.

use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use leptos::prelude::*;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::ui::showcase::ShowcasePage;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let app = router();
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(showcase_handler))
        .route("/healthz", get(healthz_handler))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
}

/// Generate the HTML shell around server-rendered page content.
fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Plinng Design System component showcase">
    <title>{title} - Plinng</title>

    <link rel="stylesheet" href="/static/app.css">
    <script defer src="/static/showcase.js"></script>
</head>
<body class="min-h-screen bg-white text-primary antialiased">
    <div id="app-shell" class="flex flex-col min-h-screen">
        <header class="sticky top-0 z-50 w-full border-b border-tertiary-border bg-white/95 backdrop-blur">
            <div class="container mx-auto flex h-14 items-center justify-between px-4 max-w-5xl">
                <a href="/" class="flex items-center gap-2 font-semibold">
                    <span class="text-lg">Plinng Design System</span>
                </a>
            </div>
        </header>

        <main id="app" class="flex-1 container mx-auto px-4 py-8 max-w-5xl">
            {content}
        </main>

        <footer class="border-t border-tertiary-border py-4">
            <div class="container mx-auto px-4 max-w-5xl">
                <p class="text-xs text-disabled text-center">
                    Rendered server-side with Axum + Leptos
                </p>
            </div>
        </footer>
    </div>
</body>
</html>"#
    )
}

/// GET / - the component showcase page.
async fn showcase_handler() -> impl IntoResponse {
    let body = view! { <ShowcasePage/> }.to_html();
    Html(html_shell("Components", &body))
}

/// GET /healthz - liveness probe.
async fn healthz_handler() -> StatusCode {
    StatusCode::OK
}
