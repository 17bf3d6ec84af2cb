use clap::Parser;
use crossbeam_channel::bounded;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use backend_bridge::runtime::ProviderOptions;
use controller::events::UiEvent;
use ui::app::{FormApp, StartupConfig};

/// Dynamic form workbench: fetches a field schema for the selected form
/// type from a mock backend, renders it, and keeps a session-local ledger
/// of submissions.
#[derive(Debug, Parser)]
#[command(name = "form-workbench")]
struct Cli {
    /// Form type selected at startup (userInfo, addressInfo, paymentInfo).
    /// An unrecognized value demonstrates the fetch-error screen.
    #[arg(long, default_value = "userInfo")]
    form_type: String,

    /// Simulated schema fetch latency in milliseconds.
    #[arg(long, default_value_t = 300)]
    fetch_latency_ms: u64,

    /// Force every schema fetch to fail with a transport error.
    #[arg(long)]
    fail_fetches: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(
        ProviderOptions {
            fetch_latency_ms: cli.fetch_latency_ms,
            fail_fetches: cli.fail_fetches,
        },
        cmd_rx,
        ui_tx,
    );

    let startup = StartupConfig {
        initial_form_type: cli.form_type,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Dynamic Form Workbench")
            .with_inner_size([720.0, 860.0])
            .with_min_inner_size([520.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Dynamic Form Workbench",
        options,
        Box::new(move |_cc| Ok(Box::new(FormApp::new(cmd_tx, ui_rx, startup)))),
    )
}
