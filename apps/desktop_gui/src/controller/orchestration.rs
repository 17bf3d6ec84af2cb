//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::FetchSchema { .. } => "fetch_schema",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker disconnected; restart the app".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use form_core::FormSession;

    fn fetch_command(session: &mut FormSession) -> BackendCommand {
        BackendCommand::FetchSchema {
            form_type: "userInfo".to_string(),
            ticket: session.begin_fetch("userInfo"),
        }
    }

    #[test]
    fn dispatch_leaves_status_untouched_on_success() {
        let (tx, rx) = bounded(4);
        let mut session = FormSession::new();
        let mut status = String::new();

        dispatch_backend_command(&tx, fetch_command(&mut session), &mut status);
        assert!(status.is_empty());
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn dispatch_reports_a_full_queue() {
        let (tx, _rx) = bounded(1);
        let mut session = FormSession::new();
        let mut status = String::new();

        dispatch_backend_command(&tx, fetch_command(&mut session), &mut status);
        dispatch_backend_command(&tx, fetch_command(&mut session), &mut status);
        assert!(status.contains("queue is full"));
    }

    #[test]
    fn dispatch_reports_a_disconnected_worker() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut session = FormSession::new();
        let mut status = String::new();

        dispatch_backend_command(&tx, fetch_command(&mut session), &mut status);
        assert!(status.contains("disconnected"));
    }
}
