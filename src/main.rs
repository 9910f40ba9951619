//src/main.rs

use axum::{
    routing::{get, patch, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod data;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas públicas da vitrine
    let delivery_routes = Router::new()
        .route("/wilayas", get(handlers::delivery::list_wilayas))
        .route("/wilayas/{id}/offices", get(handlers::delivery::list_offices))
        .route("/fee", get(handlers::delivery::quote_fee))
        .route(
            "/config/{carrier}",
            get(handlers::delivery::get_carrier_config)
                .put(handlers::delivery::put_carrier_config),
        );

    // Rotas administrativas (autenticação fica no proxy, fora deste serviço)
    let order_routes = Router::new()
        .route(
            "/",
            get(handlers::orders::list_orders),
        )
        .route("/refresh-statuses", post(handlers::orders::refresh_statuses))
        .route(
            "/{id}",
            get(handlers::orders::get_order).delete(handlers::orders::delete_order),
        )
        .route("/{id}/status", patch(handlers::orders::update_status))
        .route("/{id}/ship", post(handlers::orders::ship_order))
        .route("/{id}/sync", post(handlers::orders::sync_order));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/checkout", post(handlers::checkout::submit_order))
        .nest("/api/delivery", delivery_routes)
        .nest("/api/orders", order_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
