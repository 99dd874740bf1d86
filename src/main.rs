use agrolynk::config::AppConfig;
use agrolynk::create_app;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Info by default, RUST_LOG overrides; keep the HTTP stack quiet
    use env_logger::{Builder, Env};
    use log::LevelFilter;

    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("hyper", LevelFilter::Warn)
        .init();

    println!("AgroLynk: crop recommendations and market insights");

    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let app = create_app(&config).await?;
    run_server(app, &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("AgroLynk server running on http://{}", bind_address);
    println!(
        "API documentation available at http://{}/docs",
        bind_address
    );
    if let Some(dir) = &config.server.static_dir {
        log::info!("Serving client from {}", dir);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
