use run_coach::api::routes::create_routes;
use run_coach::config::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;

    // Create the application routes
    let app = create_routes(&config.data_dir, &config.jwt_secret);

    // Start the server
    let listener = TcpListener::bind(config.server_address()).await?;
    info!(
        "run-coach server starting on http://{}",
        config.server_address()
    );
    info!(
        "Health check available at http://{}/health",
        config.server_address()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
