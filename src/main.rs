use std::net::TcpListener;

use joblens::configuration::get_configuration;
use joblens::startup::run;
use joblens::store::Store;
use joblens::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_telemetry();

    tracing::info!("Starting application");

    // A readable signing secret is the one fatal startup requirement:
    // refuse to serve rather than sign tokens with a default.
    let configuration = match get_configuration() {
        Ok(config) => {
            tracing::info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            tracing::error!("Failed to read configuration: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Configuration error",
            ));
        }
    };

    if configuration.jwt.secret.trim().is_empty() {
        tracing::error!("Signing secret is empty; set APP_JWT__SECRET");
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Empty signing secret",
        ));
    }

    let address = configuration.application.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Server listening on: {}", address);

    let store = Store::new();
    let server = run(listener, store, configuration.jwt.clone())?;
    tracing::info!("Server started successfully");

    server.await
}
