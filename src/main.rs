use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Worker threads default to the CPU core count
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let cwd = std::env::current_dir()?;
    let listener = server::create_listener(addr)?;

    let state = Arc::new(config::AppState::new(cfg, &cwd));
    if !state.document_root().is_dir() {
        logger::log_warning(&format!(
            "Document root '{}' does not exist, every request will 404",
            state.document_root().display()
        ));
    }

    logger::log_server_start(&addr, state.site());
    server::run(listener, state, server::shutdown_signal()).await;
    logger::log_server_stopped();

    Ok(())
}
