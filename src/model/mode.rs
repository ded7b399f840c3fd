/// Application interaction modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Editing the form: fields and buttons.
    #[default]
    Form,
    /// File or folder picker overlay.
    Browse,
    /// An install is running on the worker thread.
    Installing,
    /// The worker is waiting for a yes/no on an existing file.
    ConfirmOverwrite,
    /// Result summary overlay.
    Report,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Form => "FORM",
            Mode::Browse => "BROWSE",
            Mode::Installing => "INSTALLING",
            Mode::ConfirmOverwrite => "CONFIRM",
            Mode::Report => "REPORT",
        }
    }
}
