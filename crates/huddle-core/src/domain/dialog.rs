//! Interactive dialog value objects

use serde::{Deserialize, Serialize};

/// One input element of an interactive dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogElement {
    pub display_name: String,
    pub name: String,
    /// Element kind, e.g. `"text"` or `"select"`.
    pub element_type: String,
    pub optional: bool,
}

/// The dialog body shown to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub callback_id: String,
    pub title: String,
    pub introduction_text: String,
    pub elements: Vec<DialogElement>,
    pub submit_label: String,
}

/// Request to open an interactive dialog for the user holding `trigger_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDialogRequest {
    /// Short-lived token minted by a user interaction.
    pub trigger_id: String,
    /// Integration endpoint the submission is delivered to.
    pub url: String,
    pub dialog: Dialog,
}
