//! Headless core of the dynamic form workbench: schema provider boundary,
//! form session state machine, submission ledger, and notification payloads.
//! The GUI crate drives this from its event loop; nothing here touches egui.

pub mod ledger;
pub mod notify;
pub mod provider;
pub mod session;

pub use ledger::SubmissionLedger;
pub use notify::Notification;
pub use provider::{MockSchemaProvider, SchemaProvider};
pub use session::{FetchTicket, FormSession, SessionPhase, SubmitError};

#[cfg(test)]
mod tests;
