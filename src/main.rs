use anyhow::{Context, Result};
use call_agent::cli::Args;
use call_agent::{create_router, AgentConfig, AppState, CallAgent, Config, SourceFactory, SourceKind};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut cfg = Config::load(&args.config)?;
    args.apply(&mut cfg);
    cfg.validate()?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!(
        "Simulation: tick {}ms, ring probability {:.2}, answer after {}ms",
        cfg.simulation.tick_interval_ms, cfg.simulation.ring_probability, cfg.simulation.answer_delay_ms
    );

    let source = SourceFactory::create(SourceKind::from_config(&cfg.simulation), &cfg.simulation);
    let agent = CallAgent::start(AgentConfig::from(&cfg), source).await;

    let router = create_router(AppState::new(agent.clone(), cfg.service.name.as_str())?);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
        .context("HTTP server failed")?;

    agent.shutdown().await;
    info!("Goodbye");

    Ok(())
}
