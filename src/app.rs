use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::install::{Installer, Summary, SummaryLevel};
use crate::model::browser::{BrowseTarget, FileBrowser};
use crate::model::config::{AppConfig, expand_tilde};
use crate::model::form::{Focus, InstallForm};
use crate::model::mode::Mode;
use crate::model::theme::Theme;
use crate::msg::Msg;
use crate::worker;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

struct PendingConfirm {
    file_name: String,
    reply: mpsc::Sender<bool>,
}

pub struct App {
    pub mode: Mode,
    pub form: InstallForm,
    pub should_quit: bool,
    pub event_tx: mpsc::Sender<Msg>,
    pub notifications: VecDeque<String>,
    theme: Theme,
    installer: Installer,
    default_destination: PathBuf,
    browser: Option<FileBrowser>,
    pending_confirm: Option<PendingConfirm>,
    summary: Option<Summary>,
    spinner: usize,
}

impl App {
    pub fn new(config: AppConfig, event_tx: mpsc::Sender<Msg>) -> Self {
        let theme = Theme::from_config(&config.theme);
        let installer = Installer::new(config.install_settings());
        let default_destination = config.default_destination();

        Self {
            mode: Mode::Form,
            form: InstallForm::default(),
            should_quit: false,
            event_tx,
            notifications: VecDeque::new(),
            theme,
            installer,
            default_destination,
            browser: None,
            pending_confirm: None,
            summary: None,
            spinner: 0,
        }
    }

    // ── MVU: Update ──────────────────────────────────────────────

    pub fn update(&mut self, msg: Msg) -> Result<()> {
        match msg {
            Msg::Key(key) => self.handle_key(key)?,
            Msg::ConfirmOverwrite { file_name, reply } => {
                tracing::debug!("asking about {file_name}");
                self.pending_confirm = Some(PendingConfirm { file_name, reply });
                self.mode = Mode::ConfirmOverwrite;
            }
            Msg::InstallFinished(result) => {
                let summary = Summary::from_result(&result);
                self.push_notification(summary.title.clone());
                self.summary = Some(summary);
                self.pending_confirm = None;
                self.mode = Mode::Report;
            }
            Msg::Tick => {
                if matches!(self.mode, Mode::Installing | Mode::ConfirmOverwrite) {
                    self.spinner = self.spinner.wrapping_add(1);
                }
            }
            Msg::Quit => self.request_quit(),
            Msg::Resize(_w, _h) => {}
        }
        Ok(())
    }

    fn push_notification(&mut self, message: String) {
        self.notifications.push_back(message);
        while self.notifications.len() > 8 {
            self.notifications.pop_front();
        }
    }

    fn request_quit(&mut self) {
        if matches!(self.mode, Mode::Installing | Mode::ConfirmOverwrite) {
            self.push_notification("install in progress, quit after it finishes".to_string());
            return;
        }
        self.should_quit = true;
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.mode {
            Mode::Form => self.handle_key_form(key),
            Mode::Browse => self.handle_key_browse(key),
            Mode::ConfirmOverwrite => {
                self.handle_key_confirm(key);
                Ok(())
            }
            Mode::Report => {
                self.handle_key_report(key);
                Ok(())
            }
            Mode::Installing => Ok(()),
        }
    }

    fn handle_key_form(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('o') => self.open_browser(BrowseTarget::File)?,
                KeyCode::Char('f') => self.open_browser(BrowseTarget::Folder)?,
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.request_quit(),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Enter => match self.form.focus {
                Focus::BrowseFile => self.open_browser(BrowseTarget::File)?,
                Focus::BrowseFolder => self.open_browser(BrowseTarget::Folder)?,
                Focus::Archive | Focus::Destination | Focus::Install => self.start_install(),
            },
            KeyCode::Backspace => {
                if let Some(input) = self.form.focused_input_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(ch)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                if let Some(input) = self.form.focused_input_mut() {
                    input.push(ch);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_key_browse(&mut self, key: KeyEvent) -> Result<()> {
        let Some(browser) = self.browser.as_mut() else {
            self.mode = Mode::Form;
            return Ok(());
        };

        match key.code {
            KeyCode::Esc => {
                self.browser = None;
                self.mode = Mode::Form;
            }
            KeyCode::Char('j') | KeyCode::Down => browser.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => browser.move_selection(-1),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => browser.ascend()?,
            KeyCode::Char('s') | KeyCode::Char(' ') if browser.target == BrowseTarget::Folder => {
                let picked = browser.cwd().to_path_buf();
                self.finish_browse(BrowseTarget::Folder, &picked);
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => {
                let target = browser.target;
                if let Some(picked) = browser.enter()? {
                    self.finish_browse(target, &picked);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_key_confirm(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.answer_confirm(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.answer_confirm(false),
            _ => {}
        }
    }

    fn handle_key_report(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
            self.summary = None;
            self.mode = Mode::Form;
        }
    }

    fn answer_confirm(&mut self, overwrite: bool) {
        if let Some(pending) = self.pending_confirm.take() {
            tracing::debug!("overwrite {}: {overwrite}", pending.file_name);
            // The worker may already be gone if it failed; nothing to do then.
            let _ = pending.reply.send(overwrite);
        }
        self.mode = Mode::Installing;
    }

    fn start_install(&mut self) {
        let request = self.form.request(&self.default_destination);
        tracing::info!(
            "install requested: {} -> {}",
            request.archive_path.display(),
            request.destination_dir.display()
        );

        self.summary = None;
        self.spinner = 0;
        self.mode = Mode::Installing;
        worker::spawn_install(self.installer.clone(), request, self.event_tx.clone());
    }

    fn open_browser(&mut self, target: BrowseTarget) -> Result<()> {
        let start = self.browse_start(target);
        self.browser = Some(FileBrowser::new(
            target,
            start,
            self.installer.settings().clone(),
        )?);
        self.mode = Mode::Browse;
        Ok(())
    }

    fn finish_browse(&mut self, target: BrowseTarget, picked: &Path) {
        match target {
            BrowseTarget::File => {
                self.form.set_archive(picked);
                self.form.focus = Focus::Destination;
            }
            BrowseTarget::Folder => {
                self.form.set_destination(picked);
                self.form.focus = Focus::Install;
            }
        }
        self.browser = None;
        self.mode = Mode::Form;
    }

    /// Nearest existing directory to whatever the matching field points at.
    fn browse_start(&self, target: BrowseTarget) -> PathBuf {
        let input = match target {
            BrowseTarget::File => self.form.archive_input.trim(),
            BrowseTarget::Folder => self.form.destination_input.trim(),
        };

        let hint = if !input.is_empty() {
            Some(expand_tilde(input))
        } else if target == BrowseTarget::Folder {
            Some(self.default_destination.clone())
        } else {
            None
        };

        hint.as_deref()
            .and_then(|path| path.ancestors().find(|p| p.is_dir()))
            .map(Path::to_path_buf)
            .or_else(|| directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    // ── MVU: View ────────────────────────────────────────────────

    pub fn view(&mut self, frame: &mut Frame) {
        let full = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Min(1),    // form
                Constraint::Length(1), // status bar
            ])
            .split(full);

        frame.render_widget(Block::default().style(self.theme.base()), full);
        self.render_title(frame, chunks[0]);
        self.render_form(frame, chunks[1]);
        self.render_status_bar(frame, chunks[2]);

        match self.mode {
            Mode::Browse => self.render_browser_overlay(frame),
            Mode::ConfirmOverwrite => self.render_confirm_overlay(frame),
            Mode::Report => self.render_report_overlay(frame),
            Mode::Form | Mode::Installing => {}
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(" The Sims 4 Mod Installer ")
            .alignment(Alignment::Center)
            .style(self.theme.button(false).add_modifier(Modifier::BOLD));
        frame.render_widget(title, area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let column = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Max(72),
                Constraint::Min(0),
            ])
            .split(area)[1];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // spacer
                Constraint::Length(1), // archive label
                Constraint::Length(3), // archive input
                Constraint::Length(1), // browse file
                Constraint::Length(1), // spacer
                Constraint::Length(1), // destination label
                Constraint::Length(3), // destination input
                Constraint::Length(1), // browse folder
                Constraint::Length(1), // spacer
                Constraint::Length(1), // install
                Constraint::Min(0),
            ])
            .split(column);

        let label = Style::default().fg(self.theme.text);
        frame.render_widget(
            Paragraph::new(format!(
                "Mod file (.{}) path:",
                self.installer.settings().archive_extension
            ))
            .style(label),
            rows[1],
        );
        self.render_input(frame, rows[2], &self.form.archive_input, Focus::Archive, None);
        self.render_button(frame, rows[3], "Select File", Focus::BrowseFile);

        frame.render_widget(
            Paragraph::new("Destination folder (Mods):").style(label),
            rows[5],
        );
        let placeholder = self.default_destination.display().to_string();
        self.render_input(
            frame,
            rows[6],
            &self.form.destination_input,
            Focus::Destination,
            Some(&placeholder),
        );
        self.render_button(frame, rows[7], "Select Folder", Focus::BrowseFolder);

        let install_label = if matches!(self.mode, Mode::Installing | Mode::ConfirmOverwrite) {
            format!("Installing {}", SPINNER[self.spinner % SPINNER.len()])
        } else {
            "Install Mod".to_string()
        };
        self.render_button(frame, rows[9], &install_label, Focus::Install);
    }

    fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        value: &str,
        focus: Focus,
        placeholder: Option<&str>,
    ) {
        let focused = self.mode == Mode::Form && self.form.focus == focus;
        let border = if focused {
            self.theme.accent
        } else {
            self.theme.button
        };

        let text = match placeholder {
            Some(hint) if value.is_empty() => Span::styled(
                hint.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
            _ => Span::raw(value.to_string()),
        };

        let input = Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(self.theme.field(focused)),
        );
        frame.render_widget(input, area);

        if focused {
            let max_x = area.x + area.width.saturating_sub(2);
            let cursor_x = (area.x + 1 + value.chars().count() as u16).min(max_x);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, label: &str, focus: Focus) {
        let focused = self.mode == Mode::Form && self.form.focus == focus;
        let width = (label.len() as u16 + 6).min(area.width);
        let button_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y,
            width,
            height: 1,
        };

        let style = if focused {
            self.theme.button(true).add_modifier(Modifier::BOLD)
        } else {
            self.theme.button(false)
        };
        frame.render_widget(
            Paragraph::new(label.to_string())
                .alignment(Alignment::Center)
                .style(style),
            button_area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode_style = match self.mode {
            Mode::Form => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Mode::Report => Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            _ => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        };

        let mode_span = Span::styled(format!(" {} ", self.mode.label()), mode_style);

        let hints = match self.mode {
            Mode::Form => "Tab: next  Enter: activate  ^O: file  ^F: folder  Esc: quit",
            Mode::Browse => "Enter: open  h: up  s: use folder  Esc: cancel",
            Mode::Installing => "working...",
            Mode::ConfirmOverwrite => "y: overwrite  n: keep existing",
            Mode::Report => "Enter: close",
        };

        let mut text = format!(" {hints}");
        if let Some(last) = self.notifications.back() {
            text.push_str(&format!(" | {last}"));
        }

        let info = Span::styled(
            format!("{text} "),
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        );

        let bar = Line::from(vec![mode_span, info]);
        let status = Paragraph::new(bar).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status, area);
    }

    fn render_browser_overlay(&self, frame: &mut Frame) {
        let Some(browser) = self.browser.as_ref() else {
            return;
        };

        let area = centered_rect(70, 70, frame.area());
        frame.render_widget(Clear, area);

        let title = match browser.target {
            BrowseTarget::File => " Select the mod file ",
            BrowseTarget::Folder => " Select the destination folder ",
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let cwd = Paragraph::new(browser.cwd().display().to_string()).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(self.theme.field(false)),
        );
        frame.render_widget(cwd, chunks[0]);

        let visible = chunks[1].height.saturating_sub(2) as usize;
        let offset = browser.selected.saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = browser
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible.max(1))
            .map(|(idx, entry)| {
                let prefix = if entry.is_dir { "▸ " } else { "  " };
                let content = format!("{prefix}{}", entry.name);

                if idx == browser.selected {
                    Line::from(Span::styled(content, self.theme.button(true)))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(self.theme.text)))
                }
            })
            .collect();

        let list = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .style(self.theme.base()),
        );
        frame.render_widget(list, chunks[1]);
    }

    fn render_confirm_overlay(&self, frame: &mut Frame) {
        let Some(pending) = self.pending_confirm.as_ref() else {
            return;
        };

        let area = centered_rect(60, 20, frame.area());
        frame.render_widget(Clear, area);

        let prompt = Paragraph::new(vec![
            Line::from(format!("Do you want to overwrite {}?", pending.file_name)),
            Line::from(""),
            Line::from(Span::styled(
                "y: yes   n: no",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .style(self.theme.base()),
        );
        frame.render_widget(prompt, area);
    }

    fn render_report_overlay(&self, frame: &mut Frame) {
        let Some(summary) = self.summary.as_ref() else {
            return;
        };

        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);

        let accent = match summary.level {
            SummaryLevel::Success => Color::Green,
            SummaryLevel::Partial | SummaryLevel::Warning => Color::Yellow,
            SummaryLevel::Error => self.theme.error,
        };

        let lines: Vec<Line> = summary
            .lines
            .iter()
            .map(|line| Line::from(line.clone()))
            .collect();

        let report = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(format!(" {} ", summary.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .style(self.theme.base()),
        );
        frame.render_widget(report, area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::io::Write;
    use std::time::Duration;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use zip::write::FileOptions;

    use super::*;

    const WAIT: Duration = Duration::from_secs(10);

    fn app() -> (App, mpsc::Receiver<Msg>) {
        let (tx, rx) = mpsc::channel();
        let config = AppConfig::from_layers(None).unwrap();
        (App::new(config, tx), rx)
    }

    fn key(code: KeyCode) -> Msg {
        Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(ch: char) -> Msg {
        Msg::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.update(key(KeyCode::Char(ch))).unwrap();
        }
    }

    fn pump_until_report(app: &mut App, rx: &mpsc::Receiver<Msg>, answer: bool) {
        while app.mode != Mode::Report {
            let msg = rx.recv_timeout(WAIT).unwrap();
            app.update(msg).unwrap();
            if app.mode == Mode::ConfirmOverwrite {
                let reply = if answer { 'y' } else { 'n' };
                app.update(key(KeyCode::Char(reply))).unwrap();
                assert_eq!(app.mode, Mode::Installing);
            }
        }
    }

    #[test]
    fn typing_fills_focused_field() {
        let (mut app, _rx) = app();
        type_text(&mut app, "a.zip");
        app.update(key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "/Mods");
        app.update(key(KeyCode::Backspace)).unwrap();

        assert_eq!(app.form.archive_input, "a.zip");
        assert_eq!(app.form.destination_input, "/Mod");
        assert_eq!(app.form.focus, Focus::Destination);
    }

    #[test]
    fn invalid_archive_ends_in_error_report() {
        let (mut app, rx) = app();
        type_text(&mut app, "notes.txt");
        app.update(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.mode, Mode::Installing);

        pump_until_report(&mut app, &rx, true);
        let summary = app.summary.as_ref().unwrap();
        assert_eq!(summary.level, SummaryLevel::Error);

        app.update(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.mode, Mode::Form);
        assert!(app.summary.is_none());
    }

    #[test]
    fn overwrite_prompt_is_answered_from_keyboard() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("mod.zip");
        let mut zip = zip::ZipWriter::new(File::create(&archive).unwrap());
        zip.start_file("mod.package", FileOptions::default()).unwrap();
        zip.write_all(b"new").unwrap();
        zip.finish().unwrap();
        let dest = dir.path().join("Mods");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("mod.package"), b"old").unwrap();

        let (mut app, rx) = app();
        app.form.set_archive(&archive);
        app.form.set_destination(&dest);
        app.form.focus = Focus::Install;
        app.update(key(KeyCode::Enter)).unwrap();

        pump_until_report(&mut app, &rx, true);
        let summary = app.summary.as_ref().unwrap();
        assert_eq!(summary.level, SummaryLevel::Success);
        assert_eq!(fs::read(dest.join("mod.package")).unwrap(), b"new");
    }

    #[test]
    fn quit_is_refused_while_installing() {
        let (mut app, _rx) = app();
        app.mode = Mode::Installing;
        app.update(Msg::Quit).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.notifications.len(), 1);

        app.mode = Mode::Form;
        app.update(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn folder_browser_picks_current_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Mods")).unwrap();

        let (mut app, _rx) = app();
        app.form.set_destination(dir.path());
        app.update(ctrl('f')).unwrap();
        assert_eq!(app.mode, Mode::Browse);

        // ".." first, then "Mods".
        app.update(key(KeyCode::Down)).unwrap();
        app.update(key(KeyCode::Enter)).unwrap();
        app.update(key(KeyCode::Char('s'))).unwrap();

        assert_eq!(app.mode, Mode::Form);
        assert_eq!(
            PathBuf::from(&app.form.destination_input),
            dir.path().join("Mods")
        );
        assert_eq!(app.form.focus, Focus::Install);
    }

    #[test]
    fn file_browser_picks_archive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cc.zip"), b"").unwrap();

        let (mut app, _rx) = app();
        app.form.set_archive(&dir.path().join("missing.zip"));
        app.update(ctrl('o')).unwrap();
        app.update(key(KeyCode::Down)).unwrap();
        app.update(key(KeyCode::Enter)).unwrap();

        assert_eq!(app.mode, Mode::Form);
        assert_eq!(
            PathBuf::from(&app.form.archive_input),
            dir.path().join("cc.zip")
        );
    }

    #[test]
    fn every_mode_renders() {
        let (mut app, _rx) = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| app.view(f)).unwrap();

        let (reply, _answer) = mpsc::channel();
        app.update(Msg::ConfirmOverwrite {
            file_name: "mod.package".to_string(),
            reply,
        })
        .unwrap();
        terminal.draw(|f| app.view(f)).unwrap();

        app.update(Msg::InstallFinished(Ok(
            crate::install::InstallOutcome::NoCandidates,
        )))
        .unwrap();
        terminal.draw(|f| app.view(f)).unwrap();
        assert_eq!(app.summary.as_ref().unwrap().title, "No Mod Installed");
    }
}
