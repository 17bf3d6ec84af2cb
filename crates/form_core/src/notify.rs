//! User-visible acknowledgement payloads. Fire-and-forget: the GUI renders
//! them as dismissable toasts and nothing consumes a return value.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn submitted() -> Self {
        Self::new("Form Submitted", "Your form has been successfully submitted.")
    }

    pub fn edit_mode() -> Self {
        Self::new("Edit Mode", "You can now edit your submission.")
    }

    pub fn entry_deleted() -> Self {
        Self::new("Entry Deleted", "The selected entry has been deleted.")
    }

    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::new("Failed to Load Form", message)
    }
}
