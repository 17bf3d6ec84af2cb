//! Backend worker: a dedicated thread owning a tokio runtime and the schema
//! provider. Commands arrive over the bounded queue; results go back to the
//! UI as events carrying their fence ticket.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use form_core::{MockSchemaProvider, SchemaProvider};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

#[derive(Debug, Clone, Copy)]
pub struct ProviderOptions {
    pub fetch_latency_ms: u64,
    pub fail_fetches: bool,
}

pub fn launch(options: ProviderOptions, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let provider = if options.fail_fetches {
                MockSchemaProvider::failing("simulated transport outage")
            } else {
                MockSchemaProvider::with_latency(Duration::from_millis(options.fetch_latency_ms))
            };

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchSchema { form_type, ticket } => {
                        let event = match provider.fetch_schema(&form_type).await {
                            Ok(schema) => UiEvent::SchemaLoaded { ticket, schema },
                            Err(error) => UiEvent::SchemaFetchFailed { ticket, error },
                        };
                        let _ = ui_tx.try_send(event);
                    }
                }
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    });
}
