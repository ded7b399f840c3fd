use std::sync::mpsc;
use std::thread;

use crate::install::{ConfirmOverwrite, InstallRequest, Installer};
use crate::msg::Msg;

/// Answers overwrite questions by asking the UI thread and blocking until it
/// replies. A UI that went away counts as "no".
pub struct ChannelPrompt {
    tx: mpsc::Sender<Msg>,
}

impl ChannelPrompt {
    pub fn new(tx: mpsc::Sender<Msg>) -> Self {
        Self { tx }
    }
}

impl ConfirmOverwrite for ChannelPrompt {
    fn confirm_overwrite(&mut self, file_name: &str) -> bool {
        let (reply, answer) = mpsc::channel();
        let asked = self.tx.send(Msg::ConfirmOverwrite {
            file_name: file_name.to_string(),
            reply,
        });

        if asked.is_err() {
            return false;
        }

        answer.recv().unwrap_or(false)
    }
}

/// Run one install off the UI thread and post the result back as
/// `Msg::InstallFinished`.
pub fn spawn_install(
    installer: Installer,
    request: InstallRequest,
    tx: mpsc::Sender<Msg>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut prompt = ChannelPrompt::new(tx.clone());
        let result = installer.install(&request, &mut prompt);

        if let Err(err) = &result {
            tracing::warn!("install failed: {err}");
        }

        let _ = tx.send(Msg::InstallFinished(result));
    })
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::io::Write;
    use std::time::Duration;

    use zip::write::FileOptions;

    use crate::install::{InstallError, InstallOutcome, InstallReport, InstallSettings};

    use super::*;

    const WAIT: Duration = Duration::from_secs(10);

    fn zip_with(path: &std::path::Path, name: &str, contents: &[u8]) {
        let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
        zip.start_file(name, FileOptions::default()).unwrap();
        zip.write_all(contents).unwrap();
        zip.finish().unwrap();
    }

    #[test]
    fn prompt_round_trips_through_channel() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("mod.zip");
        zip_with(&archive, "mod.package", b"new");
        let dest = dir.path().join("Mods");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("mod.package"), b"old").unwrap();

        let (tx, rx) = mpsc::channel();
        let handle = spawn_install(
            Installer::new(InstallSettings::default()),
            InstallRequest::new(&archive, &dest),
            tx,
        );

        match rx.recv_timeout(WAIT).unwrap() {
            Msg::ConfirmOverwrite { file_name, reply } => {
                assert_eq!(file_name, "mod.package");
                reply.send(false).unwrap();
            }
            other => panic!("expected confirm, got {other:?}"),
        }

        match rx.recv_timeout(WAIT).unwrap() {
            Msg::InstallFinished(Ok(outcome)) => {
                assert_eq!(outcome, InstallOutcome::Completed(InstallReport::default()));
            }
            other => panic!("expected finished, got {other:?}"),
        }

        handle.join().unwrap();
        assert_eq!(fs::read(dest.join("mod.package")).unwrap(), b"old");
    }

    #[test]
    fn dropped_reply_means_no() {
        let (tx, rx) = mpsc::channel();
        let mut prompt = ChannelPrompt::new(tx);

        let asker = thread::spawn(move || prompt.confirm_overwrite("a.package"));
        match rx.recv_timeout(WAIT).unwrap() {
            Msg::ConfirmOverwrite { reply, .. } => drop(reply),
            other => panic!("expected confirm, got {other:?}"),
        }

        assert!(!asker.join().unwrap());
    }

    #[test]
    fn closed_ui_means_no() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut prompt = ChannelPrompt::new(tx);
        assert!(!prompt.confirm_overwrite("a.package"));
    }

    #[test]
    fn fatal_errors_are_posted() {
        let (tx, rx) = mpsc::channel();
        spawn_install(
            Installer::default(),
            InstallRequest::new("notes.txt", "/nonexistent/Mods"),
            tx,
        )
        .join()
        .unwrap();

        assert!(matches!(
            rx.recv_timeout(WAIT).unwrap(),
            Msg::InstallFinished(Err(InstallError::InvalidInput(_)))
        ));
    }
}
