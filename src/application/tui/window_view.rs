use super::theme::Theme;
use crate::application::{DateSetApp, Notice, TransientNotice};
use crate::domain::{DateSetError, DateWindow, SavedDateSet};
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::tty::IsTty;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};
use std::io::{self, Stdout, stdout};
use std::time::{Duration, Instant};

/// `YYYY-MM-DD`
const ANCHOR_MAX_LEN: usize = 10;
/// Rows moved by PgUp/PgDn
const PAGE_ROWS: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Anchor,
    Saved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Blocking message, dismissed by any key
    Alert(String),
    /// Waiting for y/n before deleting the saved set with this id
    ConfirmDelete(String),
}

/// Everything the view shows, plus its reaction to keys.
///
/// Kept apart from the terminal so it can be driven and rendered in tests.
pub struct ViewState {
    anchor_input: String,
    window: Option<DateWindow>,
    saved: Vec<SavedDateSet>,
    selected_saved: Option<usize>,
    focus: Focus,
    scroll: usize,
    notice: Option<TransientNotice>,
    modal: Option<Modal>,
    should_exit: bool,
}

impl ViewState {
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor_input: anchor.into(),
            window: None,
            saved: Vec::new(),
            selected_saved: None,
            focus: Focus::Anchor,
            scroll: 0,
            notice: None,
            modal: None,
            should_exit: false,
        }
    }

    pub fn anchor_input(&self) -> &str {
        &self.anchor_input
    }

    pub fn window(&self) -> Option<&DateWindow> {
        self.window.as_ref()
    }

    pub fn saved(&self) -> &[SavedDateSet] {
        &self.saved
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().map(TransientNotice::notice)
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Reload the saved list; the selection goes back to none.
    pub fn refresh_saved(&mut self, app: &DateSetApp) {
        match app.saved_sets() {
            Ok(saved) => self.saved = saved,
            Err(e) => self.fail(e),
        }
        self.selected_saved = None;
    }

    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, app: &DateSetApp, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Any key closes a modal; only `y` confirms a pending delete
        if let Some(modal) = self.modal.take() {
            if let Modal::ConfirmDelete(id) = modal {
                if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                    self.delete(&id, app, now);
                }
            }
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_exit = true;
            }
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => self.save(app, now),
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => self.export(app, now),
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
                self.focus = match self.focus {
                    Focus::Anchor => Focus::Saved,
                    Focus::Saved => Focus::Anchor,
                };
            }
            (KeyCode::PageUp, _) => self.scroll_by(-PAGE_ROWS),
            (KeyCode::PageDown, _) => self.scroll_by(PAGE_ROWS),
            _ => match self.focus {
                Focus::Anchor => self.handle_anchor_key(key, app),
                Focus::Saved => self.handle_saved_key(key, app, now),
            },
        }
    }

    fn handle_anchor_key(&mut self, key: KeyEvent, app: &DateSetApp) {
        match key.code {
            KeyCode::Char(c)
                if (c.is_ascii_digit() || c == '-') && self.anchor_input.len() < ANCHOR_MAX_LEN =>
            {
                self.anchor_input.push(c);
            }
            KeyCode::Backspace => {
                self.anchor_input.pop();
            }
            KeyCode::Enter => self.calculate(app),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            _ => {}
        }
    }

    fn handle_saved_key(&mut self, key: KeyEvent, app: &DateSetApp, now: Instant) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Enter => self.load(app, now),
            KeyCode::Delete | KeyCode::Char('d') => self.request_delete(),
            KeyCode::Char('q') => self.should_exit = true,
            _ => {}
        }
    }

    fn selected_id(&self) -> Option<&str> {
        self.selected_saved
            .and_then(|index| self.saved.get(index))
            .map(|set| set.id.as_str())
    }

    fn calculate(&mut self, app: &DateSetApp) {
        match app.calculate(&self.anchor_input) {
            Ok(window) => self.show_window(window),
            Err(e) => self.alert(e.to_string()),
        }
    }

    fn save(&mut self, app: &DateSetApp, now: Instant) {
        match app.save(self.window.as_ref()) {
            Ok(notice) => {
                self.show_notice(notice, now);
                self.refresh_saved(app);
            }
            Err(e) => self.fail(e),
        }
    }

    fn load(&mut self, app: &DateSetApp, now: Instant) {
        let selection = self.selected_id().map(str::to_string);
        match app.load(selection.as_deref()) {
            Ok((window, notice)) => {
                self.anchor_input = window.anchor_raw().to_string();
                self.show_window(window);
                self.show_notice(notice, now);
            }
            Err(e) => self.fail(e),
        }
    }

    fn request_delete(&mut self) {
        match self.selected_id() {
            Some(id) => self.modal = Some(Modal::ConfirmDelete(id.to_string())),
            None => self.alert(DateSetError::NoSelection.to_string()),
        }
    }

    fn delete(&mut self, id: &str, app: &DateSetApp, now: Instant) {
        match app.delete(Some(id)) {
            Ok(notice) => {
                self.show_notice(notice, now);
                self.refresh_saved(app);
            }
            Err(e) => self.fail(e),
        }
    }

    fn export(&mut self, app: &DateSetApp, now: Instant) {
        match app.export(self.window.as_ref(), None) {
            Ok((path, notice)) => {
                let message = format!("{} to {}", notice.message, path.display());
                self.show_notice(Notice { message, ..notice }, now);
            }
            Err(e) => self.fail(e),
        }
    }

    fn show_window(&mut self, window: DateWindow) {
        self.window = Some(window);
        self.scroll = 0;
    }

    fn show_notice(&mut self, notice: Notice, now: Instant) {
        self.notice = Some(TransientNotice::new(notice, now));
    }

    fn alert(&mut self, message: String) {
        self.modal = Some(Modal::Alert(message));
    }

    fn fail(&mut self, error: anyhow::Error) {
        if error.downcast_ref::<DateSetError>().is_none() {
            log::error!("{error:#}");
        }
        self.alert(format!("{error:#}"));
    }

    fn scroll_by(&mut self, delta: isize) {
        let last = self.window.as_ref().map_or(0, DateWindow::len).saturating_sub(1);
        self.scroll = (self.scroll as isize + delta).clamp(0, last as isize) as usize;
    }

    fn move_selection(&mut self, delta: isize) {
        if self.saved.is_empty() {
            self.selected_saved = None;
            return;
        }

        let last = self.saved.len() as isize - 1;
        let next = match self.selected_saved {
            None if delta > 0 => 0,
            None => last,
            Some(index) => (index as isize + delta).clamp(0, last),
        };
        self.selected_saved = Some(next as usize);
    }

    /// Calculate a centered area inside `available`
    fn calculate_centered_area(available: Rect, needed_width: u16, needed_height: u16) -> Rect {
        let width = std::cmp::min(available.width, needed_width);
        let height = std::cmp::min(available.height, needed_height);

        Rect {
            x: available.x + (available.width - width) / 2,
            y: available.y + (available.height - height) / 2,
            width,
            height,
        }
    }

    fn block(&self, title: String, focused: bool, theme: &Theme) -> Block<'static> {
        let border = if focused {
            &theme.colors.focused_border
        } else {
            &theme.colors.border
        };

        Block::default()
            .borders(Borders::ALL)
            .border_style(border.to_ratatui())
            .title(title)
            .title_style(theme.colors.header.to_ratatui())
    }

    fn anchor_widget(&self, theme: &Theme) -> Paragraph<'static> {
        let focused = self.focus == Focus::Anchor;
        let cursor = if focused { "_" } else { "" };

        Paragraph::new(Line::from(vec![Span::styled(
            format!("{}{}", self.anchor_input, cursor),
            theme.colors.normal_text.to_ratatui(),
        )]))
        .block(self.block(" Day 1 (YYYY-MM-DD) ".to_string(), focused, theme))
    }

    fn table_widget(&self, theme: &Theme) -> Table<'static> {
        let header = Row::new(vec![
            Cell::from("Day"),
            Cell::from("Date"),
            Cell::from("Weekday"),
        ])
        .style(theme.colors.header.to_ratatui_with_modifier(Modifier::BOLD));

        let entries = self.window.as_ref().map(DateWindow::entries).unwrap_or_default();
        let rows: Vec<Row<'static>> = entries
            .iter()
            .skip(self.scroll)
            .map(|entry| {
                let style = if entry.is_day_one() {
                    theme.colors.day_one.to_ratatui_with_modifier(Modifier::BOLD)
                } else if entry.is_before_start() {
                    theme.colors.before_start.to_ratatui()
                } else {
                    theme.colors.normal_text.to_ratatui()
                };

                Row::new(vec![
                    Cell::from(entry.day_label()),
                    Cell::from(entry.formatted_date().to_string()),
                    Cell::from(entry.weekday_name().to_string()),
                ])
                .style(style)
            })
            .collect();

        let title = match &self.window {
            Some(window) => format!(" Dates for day 1 = {} ", window.anchor_raw()),
            None => " Dates ".to_string(),
        };

        Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(12),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(self.block(title, false, theme))
        .column_spacing(2)
    }

    fn saved_widget(&self, theme: &Theme) -> List<'static> {
        let items: Vec<ListItem<'static>> = if self.saved.is_empty() {
            vec![ListItem::new(Span::styled(
                "No saved date sets",
                theme.colors.help_text.to_ratatui(),
            ))]
        } else {
            self.saved
                .iter()
                .map(|set| ListItem::new(set.display_label()))
                .collect()
        };

        List::new(items)
            .block(self.block(
                " Saved dates ".to_string(),
                self.focus == Focus::Saved,
                theme,
            ))
            .highlight_style(theme.colors.selected.to_ratatui())
            .highlight_symbol("> ")
    }

    fn notice_widget(&self, theme: &Theme) -> Paragraph<'static> {
        let line = match &self.notice {
            Some(transient) => {
                let notice = transient.notice();
                Line::from(Span::styled(
                    notice.to_string(),
                    theme
                        .colors
                        .notice(notice.severity)
                        .to_ratatui_with_modifier(Modifier::BOLD),
                ))
            }
            None => Line::default(),
        };
        Paragraph::new(line).alignment(Alignment::Right)
    }

    fn help_widget(theme: &Theme) -> Paragraph<'static> {
        Paragraph::new(Line::from(Span::styled(
            "Enter=Calculate/Load • Tab=Switch • Ctrl+S=Save • Ctrl+E=Export • d=Delete • PgUp/PgDn=Scroll • Esc=Quit",
            theme.colors.help_text.to_ratatui(),
        )))
        .alignment(Alignment::Center)
    }

    fn modal_widget(modal: &Modal, theme: &Theme) -> Paragraph<'static> {
        let (title, text, style) = match modal {
            Modal::Alert(message) => (
                " Notice ",
                format!("{message}\n\nPress any key to continue"),
                theme.colors.danger.to_ratatui(),
            ),
            Modal::ConfirmDelete(id) => (
                " Delete ",
                format!("Are you sure you want to delete the saved date set {id}? (y/n)"),
                theme.colors.normal_text.to_ratatui(),
            ),
        };

        Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            )
    }

    pub fn draw(&self, frame: &mut Frame, theme: &Theme) {
        let area = frame.area();

        const ANCHOR_HEIGHT: u16 = 3;
        const MAX_SAVED_ROWS: u16 = 6;
        let saved_height = (self.saved.len() as u16).clamp(1, MAX_SAVED_ROWS) + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(ANCHOR_HEIGHT),
                Constraint::Min(5),
                Constraint::Length(saved_height),
                Constraint::Length(1), // notice
                Constraint::Length(1), // help
            ])
            .split(area);

        frame.render_widget(self.anchor_widget(theme), chunks[0]);
        frame.render_widget(self.table_widget(theme), chunks[1]);

        let mut list_state = ListState::default().with_selected(self.selected_saved);
        frame.render_stateful_widget(self.saved_widget(theme), chunks[2], &mut list_state);

        frame.render_widget(self.notice_widget(theme), chunks[3]);
        frame.render_widget(Self::help_widget(theme), chunks[4]);

        if let Some(modal) = &self.modal {
            let modal_area = Self::calculate_centered_area(area, 60, 7);
            frame.render_widget(Clear, modal_area);
            frame.render_widget(Self::modal_widget(modal, theme), modal_area);
        }
    }
}

pub struct WindowView<'a> {
    state: ViewState,
    /// Terminal instance
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Theme for styling
    theme: Theme,
    app: &'a DateSetApp,
}

impl<'a> WindowView<'a> {
    pub fn new(anchor: impl Into<String>, app: &'a DateSetApp, theme: Theme) -> io::Result<Self> {
        // First check if we're in a proper terminal
        if !IsTty::is_tty(&std::io::stdout()) {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "Not running in a TTY, cannot initialize terminal interface",
            ));
        }

        enable_raw_mode()
            .map_err(|e| io::Error::other(format!("Failed to enable raw mode: {}", e)))?;

        stdout().execute(EnterAlternateScreen).map_err(|e| {
            let _ = disable_raw_mode(); // Clean up on failure
            io::Error::other(format!("Failed to enter alternate screen: {}", e))
        })?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).map_err(|e| {
            let _ = disable_raw_mode();
            let _ = stdout().execute(LeaveAlternateScreen);
            io::Error::other(format!("Failed to create terminal: {}", e))
        })?;

        Ok(Self {
            state: ViewState::new(anchor),
            terminal,
            theme,
            app,
        })
    }

    /// Run the view until the user quits
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.state.refresh_saved(self.app);

        loop {
            if self.state.should_exit() {
                break;
            }

            self.state.expire_notice(Instant::now());

            let state = &self.state;
            let theme = &self.theme;
            self.terminal.draw(|frame| state.draw(frame, theme))?;

            // Poll with a timeout so expired notices disappear without input
            if poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.state.handle_key(key, self.app, Instant::now());
                }
            }
        }

        self.cleanup()?;
        Ok(())
    }

    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        Ok(())
    }
}

impl<'a> Drop for WindowView<'a> {
    fn drop(&mut self) {
        // Fallback cleanup if run() did not finish
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{NOTICE_DURATION, Severity};
    use crate::infrastructure::SavedSetRepository;
    use crate::infrastructure::test_utils::test_harness::MemoryStore;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    struct Harness {
        app: DateSetApp,
        state: ViewState,
        now: Instant,
        _export_dir: TempDir,
    }

    impl Harness {
        fn new(anchor: &str) -> Self {
            let export_dir = TempDir::new().unwrap();
            let repository = SavedSetRepository::new(Box::new(MemoryStore::new()));
            let app = DateSetApp::with_repository(repository, export_dir.path().to_path_buf());
            let mut state = ViewState::new(anchor);
            state.refresh_saved(&app);

            Self {
                app,
                state,
                now: Instant::now(),
                _export_dir: export_dir,
            }
        }

        fn press(&mut self, code: KeyCode) {
            self.state
                .handle_key(KeyEvent::new(code, KeyModifiers::NONE), &self.app, self.now);
        }

        fn ctrl(&mut self, c: char) {
            self.state.handle_key(
                KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL),
                &self.app,
                self.now,
            );
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.press(KeyCode::Char(c));
            }
        }

        fn render(&self) -> String {
            let mut terminal = Terminal::new(TestBackend::new(100, 70)).unwrap();
            let theme = Theme::default();
            terminal
                .draw(|frame| self.state.draw(frame, &theme))
                .unwrap();
            terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|cell| cell.symbol())
                .collect()
        }
    }

    fn alert_text(state: &ViewState) -> Option<&str> {
        match state.modal() {
            Some(Modal::Alert(message)) => Some(message.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_typing_and_calculating() {
        let mut h = Harness::new("");
        h.type_text("2024-03-15x");
        assert_eq!(h.state.anchor_input(), "2024-03-15");

        h.press(KeyCode::Enter);
        let window = h.state.window().unwrap();
        assert_eq!(window.len(), 43);
        assert_eq!(window.anchor_raw(), "2024-03-15");
    }

    #[test]
    fn test_backspace_edits_input() {
        let mut h = Harness::new("2024-03-15");
        h.press(KeyCode::Backspace);
        h.press(KeyCode::Backspace);
        h.type_text("22");
        assert_eq!(h.state.anchor_input(), "2024-03-22");
    }

    #[test]
    fn test_missing_anchor_raises_blocking_alert() {
        let mut h = Harness::new("");
        h.press(KeyCode::Enter);

        assert_eq!(alert_text(&h.state), Some("please select a date for day 1"));
        assert!(h.state.window().is_none());

        // The next key only dismisses the alert
        h.press(KeyCode::Esc);
        assert!(h.state.modal().is_none());
        assert!(!h.state.should_exit());
    }

    #[test]
    fn test_save_then_update() {
        let mut h = Harness::new("2024-03-15");
        h.ctrl('s');
        assert!(alert_text(&h.state).unwrap().contains("no data to save"));
        h.press(KeyCode::Enter); // dismiss

        h.press(KeyCode::Enter);
        h.ctrl('s');
        assert_eq!(h.state.notice(), Some(&Notice::success("Dates saved")));
        assert_eq!(h.state.saved().len(), 1);

        h.ctrl('s');
        assert_eq!(h.state.notice(), Some(&Notice::success("Dates updated")));
        assert_eq!(h.state.saved().len(), 1);
    }

    #[test]
    fn test_load_selected_set() {
        let mut h = Harness::new("2024-03-15");
        h.press(KeyCode::Enter);
        h.ctrl('s');

        h.press(KeyCode::Backspace);
        h.press(KeyCode::Backspace);
        h.type_text("01");
        h.press(KeyCode::Enter);
        assert_eq!(h.state.window().unwrap().anchor_raw(), "2024-03-01");

        h.press(KeyCode::Tab);
        assert_eq!(h.state.focus(), Focus::Saved);
        h.press(KeyCode::Enter);
        assert!(alert_text(&h.state).unwrap().contains("select a saved date set"));
        h.press(KeyCode::Enter);

        h.press(KeyCode::Down);
        h.press(KeyCode::Enter);
        assert_eq!(h.state.window().unwrap().anchor_raw(), "2024-03-15");
        assert_eq!(h.state.anchor_input(), "2024-03-15");
        assert_eq!(h.state.notice().unwrap().severity, Severity::Info);
    }

    #[test]
    fn test_delete_asks_for_confirmation() {
        let mut h = Harness::new("2024-03-15");
        h.press(KeyCode::Enter);
        h.ctrl('s');
        h.press(KeyCode::Tab);

        h.press(KeyCode::Char('d'));
        assert!(alert_text(&h.state).is_some());
        h.press(KeyCode::Enter);

        h.press(KeyCode::Down);
        h.press(KeyCode::Char('d'));
        assert_eq!(
            h.state.modal(),
            Some(&Modal::ConfirmDelete("2024-03-15".to_string()))
        );
        h.press(KeyCode::Char('n'));
        assert_eq!(h.state.saved().len(), 1);

        h.press(KeyCode::Down);
        h.press(KeyCode::Delete);
        h.press(KeyCode::Char('y'));
        assert!(h.state.saved().is_empty());
        assert_eq!(h.state.notice().unwrap().severity, Severity::Danger);
    }

    #[test]
    fn test_export() {
        let mut h = Harness::new("2024-03-15");
        h.ctrl('e');
        assert!(alert_text(&h.state).unwrap().contains("no data to export"));
        h.press(KeyCode::Enter);

        h.press(KeyCode::Enter);
        h.ctrl('e');
        let notice = h.state.notice().unwrap();
        assert!(notice.message.starts_with("Spreadsheet exported to "));
        assert!(notice.message.ends_with(".xlsx"));
    }

    #[test]
    fn test_notice_expires() {
        let mut h = Harness::new("2024-03-15");
        h.press(KeyCode::Enter);
        h.ctrl('s');

        h.state.expire_notice(h.now + Duration::from_secs(1));
        assert!(h.state.notice().is_some());
        h.state.expire_notice(h.now + NOTICE_DURATION);
        assert!(h.state.notice().is_none());
    }

    #[test]
    fn test_scroll_is_clamped_to_window() {
        let mut h = Harness::new("2024-03-15");
        h.press(KeyCode::PageDown);
        assert_eq!(h.state.scroll(), 0);

        h.press(KeyCode::Enter);
        for _ in 0..10 {
            h.press(KeyCode::PageDown);
        }
        assert_eq!(h.state.scroll(), 42);
        h.press(KeyCode::PageUp);
        assert_eq!(h.state.scroll(), 32);
    }

    #[test]
    fn test_exit_keys() {
        let mut h = Harness::new("");
        h.press(KeyCode::Char('q'));
        assert!(!h.state.should_exit());

        h.ctrl('c');
        assert!(h.state.should_exit());
    }

    #[test]
    fn test_render_shows_window_and_saved_sets() {
        let mut h = Harness::new("2024-03-15");
        h.press(KeyCode::Enter);
        h.ctrl('s');

        let screen = h.render();
        assert!(screen.contains("Day -10"));
        assert!(screen.contains("04/03/2024"));
        assert!(screen.contains("15/03/2024"));
        assert!(screen.contains("Friday"));
        assert!(screen.contains("15/04/2024"));
        assert!(screen.contains("Day 1: 15/03/2024"));
        assert!(screen.contains("Dates saved"));
    }

    #[test]
    fn test_render_shows_alert() {
        let mut h = Harness::new("");
        h.press(KeyCode::Enter);

        let screen = h.render();
        assert!(screen.contains("Press any key to continue"));
    }
}
