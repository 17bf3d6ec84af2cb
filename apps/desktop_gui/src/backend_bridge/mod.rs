//! Bridge between the UI thread and the backend worker that owns the
//! schema provider.

pub mod commands;
pub mod runtime;
