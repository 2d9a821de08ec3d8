//! Server bootstrap
//!
//! Loads configuration, initializes logging, wires the infrastructure
//! adapters into the collection service, and either serves the HTTP API or
//! runs a single collection for the one-shot CLI mode.

use crate::api::{ApiState, SummaryResponse, api_rocket};
use acd_application::{CollectionService, CollectionStateMachine, CollectorLimits};
use acd_application::ports::infrastructure::SharedEventBus;
use acd_domain::ports::SharedMetricsClient;
use acd_infrastructure::config::{AppConfig, ConfigLoader, ServerConfig};
use acd_infrastructure::events::TokioBroadcastEventBus;
use acd_infrastructure::logging::init_logging;
use acd_infrastructure::UnisphereRestClient;
use rocket::config::{Config as RocketConfig, LogLevel};
use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Run the dashboard
///
/// * `config_path` - explicit configuration file, or None to search the
///   working directory and environment
/// * `once` - run a single collection, print the summary as JSON, and exit
///   instead of serving HTTP
pub async fn run(
    config_path: Option<&Path>,
    once: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let api_state = build_engine(&config)?;

    if once {
        let snapshot = api_state.service.collect_once(&api_state.array_id).await?;
        let summary = SummaryResponse::from_snapshot(&snapshot);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    serve(config, api_state).await
}

/// Wire the collection engine from configuration
fn build_engine(config: &AppConfig) -> Result<ApiState, Box<dyn std::error::Error>> {
    let client: SharedMetricsClient = Arc::new(UnisphereRestClient::new(&config.unisphere)?);
    let event_bus: SharedEventBus = TokioBroadcastEventBus::new_shared();
    let state = CollectionStateMachine::new_shared();
    let limits = CollectorLimits {
        volume_page_size: config.collector.volume_page_size,
        pool_concurrency: config.collector.pool_concurrency,
        page_concurrency: config.collector.page_concurrency,
    };
    let service = Arc::new(CollectionService::new(
        client,
        limits,
        Arc::clone(&state),
        Arc::clone(&event_bus),
    ));

    Ok(ApiState {
        service,
        state,
        event_bus,
        array_id: config.unisphere.array_id.clone(),
    })
}

/// Launch the HTTP API
async fn serve(config: AppConfig, state: ApiState) -> Result<(), Box<dyn std::error::Error>> {
    let rocket_config = rocket_config(&config.server);
    info!(
        "Capacity API listening on {}:{}",
        rocket_config.address, rocket_config.port
    );

    api_rocket(state)
        .configure(rocket_config)
        .launch()
        .await
        .map_err(|e| {
            Box::new(std::io::Error::other(format!("Rocket launch failed: {e}")))
                as Box<dyn std::error::Error>
        })?;

    Ok(())
}

/// Translate the server section into a Rocket configuration
fn rocket_config(server: &ServerConfig) -> RocketConfig {
    let address: IpAddr = server
        .host
        .parse()
        .unwrap_or_else(|_| "127.0.0.1".parse().expect("valid IP"));
    RocketConfig {
        address,
        port: server.port,
        log_level: LogLevel::Normal,
        ..RocketConfig::default()
    }
}
