use dotenvy::dotenv;
use tracing::{error, info, warn};

use service::runtime::build_user_service;

async fn run(cfg: &configs::AppConfig) -> anyhow::Result<()> {
    let (svc, repo) = build_user_service(cfg)?;
    for seed in &cfg.seed_users {
        if svc.find_by_id(seed.id).await?.is_none() {
            warn!(user_id = seed.id, "seed_user_missing_after_wiring");
        }
    }
    info!(service = "server", event = "ready", users = repo.len()?, "user service wired");
    Ok(())
}

fn main() -> std::process::ExitCode {
    dotenv().ok();
    let (cfg, load_err) = configs::AppConfig::load_or_default();
    common::logging::init_logging(&cfg.logging);
    info!(service = "server", event = "logger_init", config = %configs::config_path(), "tracing subscriber initialized");
    if let Some(e) = load_err {
        warn!(service = "server", event = "config_fallback", error = ?e, "config unavailable; using defaults");
    }

    common::logging::install_panic_hook("server");
    let pid = std::process::id();

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "server service starting"
    );

    match rt.block_on(run(&cfg)) {
        Ok(()) => {
            info!(service = "server", event = "stop", "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "server", event = "run_failed", error = %e, "wiring failed");
            std::process::ExitCode::FAILURE
        }
    }
}
