//! Backend commands queued from UI to the backend worker.

use form_core::FetchTicket;

pub enum BackendCommand {
    FetchSchema {
        form_type: String,
        ticket: FetchTicket,
    },
}
