use echoscope::config::ServerConfig;
use echoscope::http::HttpServer;
use echoscope::lifecycle::{self, Shutdown};
use echoscope::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "echoscope starting");

    let config = ServerConfig::from_env();
    tracing::info!(
        port = %config.port,
        read_timeout_secs = config.read_timeout_secs,
        write_timeout_secs = config.write_timeout_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    lifecycle::signals::spawn_listener(&shutdown);

    let server = HttpServer::new(&config);
    let handle = lifecycle::start(&config, server).await.map_err(fatal)?;

    lifecycle::await_stop(handle, &shutdown).await.map_err(fatal)?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn fatal(err: lifecycle::ServerError) -> Box<dyn std::error::Error> {
    tracing::error!(error = %err, "Server failed");
    err.into()
}
