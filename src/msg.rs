use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::mpsc;

use crate::install::{InstallError, InstallOutcome};

/// All possible messages that drive state transitions.
#[derive(Debug)]
pub enum Msg {
    // -- Input events (raw)
    Key(KeyEvent),
    Resize(u16, u16),

    // -- Install worker
    /// The worker hit an existing file and blocks until `reply` answers.
    ConfirmOverwrite {
        file_name: String,
        reply: mpsc::Sender<bool>,
    },
    InstallFinished(Result<InstallOutcome, InstallError>),

    // -- System
    Tick,
    Quit,
}

impl Msg {
    /// Translate a terminal event. Ctrl-C becomes `Quit` in every mode.
    pub fn from_event(event: Event) -> Option<Self> {
        match event {
            // Windows reports both press and release.
            Event::Key(k) if k.kind != KeyEventKind::Press => None,
            Event::Key(k)
                if k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c') =>
            {
                Some(Msg::Quit)
            }
            Event::Key(k) => Some(Msg::Key(k)),
            Event::Resize(w, h) => Some(Msg::Resize(w, h)),
            _ => None,
        }
    }
}
