//! Apology dialog state
//!
//! `forgiven` starts out true and only ever goes false: both answer buttons
//! sit in the same row, and any answer clears it. Once cleared, the dialog
//! shows the plea line every time it opens.

use super::links::APOLOGY_MESSAGE_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApologyDialog {
    open: bool,
    forgiven: bool,
}

impl Default for ApologyDialog {
    fn default() -> Self {
        Self {
            open: false,
            forgiven: true,
        }
    }
}

impl ApologyDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_forgiven(&self) -> bool {
        self.forgiven
    }

    /// Whether the plea line is shown under the title
    pub fn shows_plea(&self) -> bool {
        !self.forgiven
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// "I won't forgive you": the dialog stays up and starts pleading
    pub fn refuse(&mut self) {
        self.forgiven = false;
    }

    /// "I forgave you": closes the dialog, returns the chat link to open
    pub fn forgive(&mut self) -> &'static str {
        self.forgiven = false;
        self.open = false;
        APOLOGY_MESSAGE_URL
    }

    /// Close without answering
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let dialog = ApologyDialog::default();
        assert!(!dialog.is_open());
        assert!(dialog.is_forgiven());
        assert!(!dialog.shows_plea());
    }

    #[test]
    fn test_refuse_keeps_dialog_open() {
        let mut dialog = ApologyDialog::default();
        dialog.open();
        dialog.refuse();
        assert!(dialog.is_open());
        assert!(dialog.shows_plea());
    }

    #[test]
    fn test_forgive_closes_and_returns_link() {
        let mut dialog = ApologyDialog::default();
        dialog.open();
        let url = dialog.forgive();
        assert_eq!(url, APOLOGY_MESSAGE_URL);
        assert!(!dialog.is_open());
        assert!(!dialog.is_forgiven());
    }

    #[test]
    fn test_dismiss_leaves_flag_alone() {
        let mut dialog = ApologyDialog::default();
        dialog.open();
        dialog.dismiss();
        assert!(!dialog.is_open());
        assert!(dialog.is_forgiven());
    }

    #[test]
    fn test_plea_survives_reopen() {
        let mut dialog = ApologyDialog::default();
        dialog.open();
        dialog.refuse();
        dialog.dismiss();
        dialog.open();
        assert!(dialog.shows_plea());
    }
}
