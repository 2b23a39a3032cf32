//! Application entry point — CoDeb terminal session.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create [`tokio`] runtime (multi-thread, 2 workers).
//! 4. Build the generation client ([`GeminiClient`]) from config.
//! 5. Wire up [`CodebApp`] with the client and the speech backend — the
//!    terminal has no speech capability, so [`UnsupportedBackend`] is used
//!    and the voice toggle surfaces the unsupported notification.
//! 6. Run the interactive read-dispatch-pump loop until `quit` or EOF.

use std::io::{BufRead, Write};
use std::sync::Arc;

use codeb::{
    api::{GeminiClient, GenerationClient},
    app::{parse_line, CodebApp},
    config::AppConfig,
    voice::UnsupportedBackend,
};

// ---------------------------------------------------------------------------
// Session loop
// ---------------------------------------------------------------------------

/// Read one command per line until `quit` or EOF, pumping channel events
/// after every dispatch so transcripts and notifications land promptly.
async fn run_session(mut app: CodebApp) -> anyhow::Result<()> {
    println!("CoDeb — paste code, ask a question, get an analysis.");
    println!("Commands: code | lang | ask | key | languages | voice | submit | status | reset | quit");

    let stdin = std::io::stdin();
    let mut line = String::new();

    while app.is_running() {
        print!("codeb ({})> ", app.status_line());
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF — treat like quit.
            break;
        }

        match parse_line(&line) {
            Some(command) => app.dispatch(command).await,
            None if !line.trim().is_empty() => {
                println!("unrecognized command (try: code, lang, ask, key, languages, voice, submit, status, reset, quit)");
            }
            None => {}
        }

        app.pump_events();
        app.drain_notifications();
    }

    log::info!("session ended");
    Ok(())
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("CoDeb starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Tokio runtime (submission calls run here)
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    // 4. Generation client
    let client: Arc<dyn GenerationClient> = Arc::new(GeminiClient::from_config(&config.api));
    log::info!(
        "generation endpoint: {} (model {})",
        config.api.base_url,
        config.api.model
    );

    // 5. Application wiring — no speech capability on a plain terminal.
    let app = CodebApp::new(config, client, Box::new(UnsupportedBackend));

    // 6. Interactive loop (blocks until quit/EOF)
    rt.block_on(run_session(app))
}
