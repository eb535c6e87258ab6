mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = routes::port(std::env::var("PORT").ok()).expect("invalid PORT");
    let site_root = routes::site_dir(std::env::var("SITE_DIR").ok());

    let app = routes::app(&site_root);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, site = %site_root.display(), "perfect-circle listening");
    axum::serve(listener, app).await.expect("server failed");
}
