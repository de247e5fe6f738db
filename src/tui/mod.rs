//! TUI — ratatui terminal interface.
//!
//! Layout: hero banner on top, editor and color palette side by side, the
//! token strip below them and a status bar at the bottom.
//!
//! Two token streams are kept. The editor recolors from a synchronous
//! `tokenize` on every edit, so colors never lag the cursor. The token strip,
//! its count and the status line go through the debounced [`Retokenizer`] and
//! update once per idle window.

pub mod editor;
pub mod help;
pub mod hero;
pub mod keybindings;
pub mod layout;
pub mod palette;
pub mod status;

pub use status::{Notice, StatusInfo};

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::animate::{Tick, TypingAnimator};
use crate::config::AppConfig;
use crate::highlight::{self, significant_tokens};
use crate::lexer::{tokenize, Token};
use crate::schedule::Retokenizer;
use crate::store::{KeyValueStore, DEFAULT_LIVE_CODE_KEY};
use crate::theme::{builtin, color_hex, find_theme, Theme, BACKGROUND};

use editor::Editor;
use help::HelpScreen;
use hero::Hero;
use keybindings::{Action, KeyContext};
use layout::FocusPanel;
use palette::Palette;

/// Input poll timeout; one frame at roughly 60 fps.
const FRAME_MS: u64 = 16;

const BORDER: Color = Color::DarkGray;
const BORDER_FOCUSED: Color = Color::Cyan;
const LINE_NUMBER: Color = Color::Rgb(154, 154, 154);
const RAW_TEXT: Color = Color::Rgb(102, 102, 102);
const STATUS_BG: Color = Color::Rgb(45, 45, 45);
const STATUS_FG: Color = Color::Rgb(230, 230, 230);
const OK: Color = Color::Green;
const ERR: Color = Color::Red;

/// Timings and startup choices for an [`App`].
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub debounce: Duration,
    pub reveal: Duration,
    /// Typing duration for the starting buffer; `None` shows it at once.
    pub typing: Option<Duration>,
    /// Starting theme name.
    pub theme: Option<String>,
    pub seed: u64,
}

impl AppOptions {
    pub fn from_config(config: &AppConfig, seed: u64) -> Self {
        Self {
            debounce: config.debounce(),
            reveal: config.reveal(),
            typing: config.typing.then(|| config.typing_duration()),
            theme: config.theme.clone(),
            seed,
        }
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default(), 0)
    }
}

/// The main TUI application state.
pub struct App {
    pub editor: Editor,
    /// Tokens of the current buffer, refreshed on every edit.
    editor_tokens: Vec<Token>,
    /// Debounced tokens behind the token strip.
    retokenizer: Retokenizer,
    themes: Vec<Theme>,
    theme_index: usize,
    theme: Theme,
    pub palette: Palette,
    pub hero: Hero,
    typing: TypingAnimator,
    typed_len: usize,
    store: Box<dyn KeyValueStore>,
    pub status: StatusInfo,
    pub focus: FocusPanel,
    pub help: HelpScreen,
    inspect: bool,
    pub should_quit: bool,
}

impl App {
    /// Create the app around a starting buffer. Nothing animates until
    /// [`App::start`].
    pub fn new(
        source: &str,
        themes: Vec<Theme>,
        store: Box<dyn KeyValueStore>,
        options: AppOptions,
    ) -> Self {
        let themes = if themes.is_empty() {
            builtin::all_builtins()
        } else {
            themes
        };
        let theme_index = match options.theme.as_deref() {
            Some(name) => match find_theme(&themes, name) {
                Some(found) => themes.iter().position(|t| t.name == found.name).unwrap_or(0),
                None => {
                    tracing::warn!(theme = name, "unknown theme, using {}", themes[0].name);
                    0
                }
            },
            None => 0,
        };
        let theme = themes[theme_index].clone();

        let (typing, initial) = match options.typing {
            Some(duration) => (TypingAnimator::new(source, duration), String::new()),
            None => (TypingAnimator::disabled(source), source.to_string()),
        };
        let focus = if typing.is_typing() {
            FocusPanel::Palette
        } else {
            FocusPanel::Editor
        };
        let typed_len = typing.text().len();

        let mut app = Self {
            editor: Editor::new(&initial),
            editor_tokens: tokenize(&initial),
            retokenizer: Retokenizer::new(&initial, options.debounce),
            themes,
            theme_index,
            theme,
            palette: Palette::new(),
            hero: Hero::new(options.reveal, options.seed),
            typing,
            typed_len,
            store,
            status: StatusInfo::default(),
            focus,
            help: HelpScreen::new(),
            inspect: false,
            should_quit: false,
        };
        app.refresh_status();
        app
    }

    /// Start the hero banner and the typing animation.
    pub fn start(&mut self, now: Instant) {
        self.hero.start(now);
        self.typing.start(now);
        self.refresh_status();
    }

    /// Stop every animation and drop pending work.
    pub fn shutdown(&mut self) {
        self.typing.cancel();
        self.retokenizer.cancel();
        self.hero.stop();
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Debounced token stream shown in the token strip.
    pub fn tokens(&self) -> &[Token] {
        self.retokenizer.tokens()
    }

    /// Tokens used to color the editor.
    pub fn editor_tokens(&self) -> &[Token] {
        &self.editor_tokens
    }

    pub fn retokenize_count(&self) -> u64 {
        self.retokenizer.generation()
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_typing()
    }

    pub fn is_inspecting(&self) -> bool {
        self.inspect
    }

    pub fn saved_code(&self) -> Option<String> {
        self.store.get(DEFAULT_LIVE_CODE_KEY)
    }

    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            focus: self.focus,
            help_visible: self.help.visible,
            palette_editing: self.palette.is_editing(),
            typing: self.typing.is_typing(),
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        self.handle_action_at(action, Instant::now());
    }

    /// Apply an action; `now` stamps any buffer edit for debouncing.
    pub fn handle_action_at(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::CycleTheme => self.cycle_theme(),
            Action::Retokenize => {
                if self.retokenizer.flush() {
                    self.status.notice = Notice::Info("re-tokenized".to_string());
                }
            }
            Action::ToggleInspect => self.inspect = !self.inspect,
            Action::CycleFocus => self.focus = self.focus.next(),
            Action::ToggleHelp => self.help.toggle(),
            Action::Escape => {
                self.help.hide();
                self.focus = FocusPanel::Editor;
            }
            Action::EditorInsert(c) => self.edit(now, |ed| ed.insert_char(c)),
            Action::EditorBackspace => self.edit(now, Editor::backspace),
            Action::EditorDelete => self.edit(now, Editor::delete),
            Action::EditorNewline => self.edit(now, Editor::newline),
            Action::EditorLeft => self.editor.move_left(),
            Action::EditorRight => self.editor.move_right(),
            Action::EditorUp => self.editor.move_up(),
            Action::EditorDown => self.editor.move_down(),
            Action::EditorHome => self.editor.home(),
            Action::EditorEnd => self.editor.end(),
            Action::PaletteUp => self.palette.select_prev(),
            Action::PaletteDown => self.palette.select_next(),
            Action::PaletteEdit => {
                let current = self.theme.color_of(self.palette.selected_class());
                self.palette.begin_edit(&color_hex(current));
            }
            Action::PaletteInsert(c) => self.palette.insert(c),
            Action::PaletteBackspace => self.palette.backspace(),
            Action::PaletteCancel => self.palette.cancel(),
            Action::PaletteCommit => match self.palette.commit() {
                Some(Ok((class, color))) => self.override_color(class, color),
                Some(Err(input)) => {
                    tracing::warn!(input = %input, "invalid color");
                    self.status.notice = Notice::Error(format!("invalid color: {input}"));
                }
                None => {}
            },
            Action::PaletteReset => {
                let class = self.palette.selected_class();
                let base = self.themes[self.theme_index].color_of(class);
                self.override_color(class, base);
            }
        }
        self.refresh_status();
    }

    /// Run `f` against the editor, recolor it, persist the buffer and hand the
    /// text to the debounced retokenizer.
    fn edit(&mut self, now: Instant, f: impl FnOnce(&mut Editor)) {
        if self.typing.is_typing() {
            return;
        }
        f(&mut self.editor);
        let content = self.editor.content();
        self.editor_tokens = tokenize(&content);
        if let Err(e) = self.store.set(DEFAULT_LIVE_CODE_KEY, &content) {
            tracing::warn!("failed to save buffer: {e}");
            self.status.notice = Notice::Error(format!("save failed: {e}"));
        }
        self.retokenizer.on_buffer_change(content, now);
    }

    fn cycle_theme(&mut self) {
        self.theme_index = (self.theme_index + 1) % self.themes.len();
        self.theme = self.themes[self.theme_index].clone();
        tracing::info!(theme = %self.theme.name, "switched theme");
        self.status.notice = Notice::Info(format!("theme: {}", self.theme.name));
    }

    fn override_color(&mut self, class: crate::lexer::TokenClass, color: Color) {
        self.theme = self.theme.with_override(class, color);
        tracing::info!(class = %class, color = %color_hex(color), "color override");
        self.status.notice = Notice::Info(format!("{class}: {}", color_hex(color)));
    }

    /// Advance animations, typing and the debouncer to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.hero.tick(now);

        match self.typing.poll(now) {
            Tick::Idle => {}
            Tick::Running => self.sync_typed(now),
            Tick::Ready => {
                self.sync_typed(now);
                self.focus = FocusPanel::Editor;
                self.status.notice = Notice::Info("ready".to_string());
            }
        }

        self.retokenizer.poll(now);
        self.refresh_status();
    }

    /// Mirror newly typed text into the editor.
    fn sync_typed(&mut self, now: Instant) {
        let text = self.typing.text();
        if text.len() == self.typed_len {
            return;
        }
        self.typed_len = text.len();
        self.editor.set_content(text);
        self.editor.move_to_end();
        self.editor_tokens = tokenize(text);
        self.retokenizer.on_buffer_change(text, now);
    }

    fn refresh_status(&mut self) {
        self.status.theme_name = self.theme.name.clone();
        self.status.is_typing = self.typing.is_typing();
        self.status.is_pending = self.retokenizer.is_pending();
        self.status.token_count = significant_tokens(self.retokenizer.tokens()).count();
        self.status.inspecting = self.inspect;
        let rendered: String = self.editor_tokens.iter().map(|t| t.lexeme.as_str()).collect();
        self.status.matched = rendered == self.editor.content();
    }

    /// Draw the UI.
    pub fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Hero
                Constraint::Min(6),    // Editor + Palette
                Constraint::Length(4), // Token strip
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[1]);

        self.draw_hero(frame, chunks[0]);
        self.draw_editor(frame, middle[0]);
        self.draw_palette(frame, middle[1]);
        self.draw_tokens(frame, chunks[2]);
        self.draw_status(frame, chunks[3]);

        if self.help.visible {
            self.draw_help(frame, size);
        }
    }

    fn border_style(&self, panel: FocusPanel) -> Style {
        if self.focus == panel {
            Style::default().fg(BORDER_FOCUSED)
        } else {
            Style::default().fg(BORDER)
        }
    }

    fn draw_hero(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" glint ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER));
        let paragraph = Paragraph::new(self.hero.lines(&self.theme))
            .block(block)
            .style(Style::default().bg(BACKGROUND));
        frame.render_widget(paragraph, area);
    }

    fn draw_editor(&mut self, frame: &mut Frame, area: Rect) {
        let inner_height = area.height.saturating_sub(2) as usize;
        self.editor.set_viewport_height(inner_height);
        let scroll_offset = self.editor.scroll_offset();

        let number = |i: usize| {
            Span::styled(format!("{:3} ", i + 1), Style::default().fg(LINE_NUMBER))
        };

        let lines: Vec<Line> = if self.inspect {
            self.editor
                .lines()
                .iter()
                .enumerate()
                .skip(scroll_offset)
                .take(inner_height)
                .map(|(i, line)| {
                    Line::from(vec![
                        number(i),
                        Span::styled(line.as_str(), Style::default().fg(RAW_TEXT)),
                    ])
                })
                .collect()
        } else {
            highlight::highlight_lines(&self.editor_tokens, &self.theme)
                .into_iter()
                .enumerate()
                .skip(scroll_offset)
                .take(inner_height)
                .map(|(i, line)| {
                    let mut spans = vec![number(i)];
                    spans.extend(line.spans);
                    Line::from(spans)
                })
                .collect()
        };

        let mode = if self.inspect { "RAW" } else { "COLOR" };
        let block = Block::default()
            .title(format!(" Code [{mode}] "))
            .borders(Borders::ALL)
            .border_style(self.border_style(FocusPanel::Editor));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(BACKGROUND));
        frame.render_widget(paragraph, area);

        if self.focus == FocusPanel::Editor && !self.typing.is_typing() && !self.help.visible {
            let (row, col) = self.editor.cursor();
            // +1 for border, +4 for line number
            let x = area.x + 1 + 4 + col as u16;
            let y = area.y + 1 + (row - scroll_offset) as u16;
            if x < area.x + area.width && y < area.y + area.height {
                frame.set_cursor_position((x, y));
            }
        }
    }

    fn draw_palette(&self, frame: &mut Frame, area: Rect) {
        let selected = self.palette.selected();
        let mut lines: Vec<Line> = self
            .palette
            .classes()
            .iter()
            .enumerate()
            .map(|(i, &class)| {
                let color = self.theme.color_of(class);
                let value = match self.palette.input() {
                    Some(input) if i == selected => format!("{input}_"),
                    _ => color_hex(color),
                };
                let mut name_style = Style::default();
                if i == selected && self.focus == FocusPanel::Palette {
                    name_style = name_style.add_modifier(Modifier::REVERSED);
                }
                Line::from(vec![
                    Span::styled(" ■ ", Style::default().fg(color)),
                    Span::styled(format!("{:<12}", class.name()), name_style),
                    Span::styled(value, Style::default().fg(LINE_NUMBER)),
                ])
            })
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            " Ctrl-T: next theme",
            Style::default().fg(LINE_NUMBER),
        ));

        let block = Block::default()
            .title(format!(" {} ", self.theme.name))
            .borders(Borders::ALL)
            .border_style(self.border_style(FocusPanel::Palette));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_tokens(&self, frame: &mut Frame, area: Rect) {
        let spans: Vec<Span> = significant_tokens(self.retokenizer.tokens())
            .flat_map(|t| {
                [
                    Span::styled(t.lexeme.as_str(), highlight::spans::token_style(t, &self.theme)),
                    Span::raw(" "),
                ]
            })
            .collect();
        let block = Block::default()
            .title(format!(" Tokens ({}) ", self.status.token_count))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER));
        let paragraph = Paragraph::new(Line::from(spans))
            .block(block)
            .style(Style::default().bg(BACKGROUND))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let width = (area.width * 60 / 100).max(50).min(area.width);
        let height = (self.help.lines().len() as u16 + 2).min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let overlay = Rect::new(x, y, width, height);

        let block = Block::default()
            .style(Style::default().bg(Color::Black))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_FOCUSED))
            .title(" Help — F1 or Esc to close ");
        let inner = block.inner(overlay);
        frame.render_widget(Clear, overlay);
        frame.render_widget(block, overlay);

        let lines: Vec<Line> = self
            .help
            .lines()
            .iter()
            .take(inner.height as usize)
            .map(|hl| {
                let style = if hl.is_header {
                    Style::default().fg(BORDER_FOCUSED).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(Span::styled(hl.text.as_str(), style))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let notice = match &self.status.notice {
            Notice::Idle => Span::raw(""),
            Notice::Info(msg) => Span::styled(format!(" {msg} "), Style::default().fg(OK)),
            Notice::Error(msg) => Span::styled(format!(" {msg} "), Style::default().fg(ERR)),
        };
        let match_color = if self.status.matched { OK } else { ERR };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.status.activity_display()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {} |", self.status.theme_name)),
            Span::styled(
                format!(" {} ", self.status.match_display()),
                Style::default().fg(match_color),
            ),
            Span::raw(format!("| {} tokens ", self.status.token_count)),
            notice,
            Span::styled(" F1:help ", Style::default().fg(LINE_NUMBER)),
        ]);

        let paragraph =
            Paragraph::new(line).style(Style::default().bg(STATUS_BG).fg(STATUS_FG));
        frame.render_widget(paragraph, area);
    }

    /// Run the TUI event loop.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> io::Result<()> {
        self.start(Instant::now());
        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if event::poll(Duration::from_millis(FRAME_MS))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = keybindings::map_key(key, self.key_context()) {
                            self.handle_action(action);
                        }
                    }
                }
            }

            self.tick(Instant::now());
        }
        self.shutdown();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenClass;
    use crate::store::MemoryStore;

    const MS: Duration = Duration::from_millis(1);

    fn app_with(source: &str, typing: Option<Duration>) -> App {
        let options = AppOptions {
            typing,
            ..AppOptions::default()
        };
        App::new(
            source,
            builtin::all_builtins(),
            Box::new(MemoryStore::new()),
            options,
        )
    }

    fn ready_app(source: &str) -> App {
        app_with(source, None)
    }

    #[test]
    fn app_creation() {
        let app = ready_app("let a = 1");
        assert_eq!(app.editor.content(), "let a = 1");
        assert_eq!(app.focus, FocusPanel::Editor);
        assert_eq!(app.theme().name, "Stylish");
        assert!(!app.is_typing());
        assert!(app.status.matched);
    }

    #[test]
    fn handle_quit() {
        let mut app = ready_app("");
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn starting_theme_from_options() {
        let options = AppOptions {
            theme: Some("minimal".to_string()),
            typing: None,
            ..AppOptions::default()
        };
        let app = App::new("", Vec::new(), Box::new(MemoryStore::new()), options);
        assert_eq!(app.theme().name, "Minimal");
    }

    #[test]
    fn unknown_theme_falls_back_to_first() {
        let options = AppOptions {
            theme: Some("neon".to_string()),
            typing: None,
            ..AppOptions::default()
        };
        let app = App::new("", Vec::new(), Box::new(MemoryStore::new()), options);
        assert_eq!(app.theme().name, "Stylish");
    }

    #[test]
    fn cycle_theme_action() {
        let mut app = ready_app("const x");
        let tokens_before = app.editor_tokens().to_vec();
        app.handle_action(Action::CycleTheme);
        assert_eq!(app.theme().name, "Minimal");
        assert_eq!(app.editor_tokens(), tokens_before.as_slice());
        app.handle_action(Action::CycleTheme);
        assert_eq!(app.theme().name, "Stylish");
    }

    #[test]
    fn typing_fills_editor_then_focuses_it() {
        let t0 = Instant::now();
        let mut app = app_with("abcd", Some(400 * MS));
        assert_eq!(app.editor.content(), "");
        assert_eq!(app.focus, FocusPanel::Palette);
        app.start(t0);
        app.tick(t0 + 200 * MS);
        assert_eq!(app.editor.content(), "ab");
        assert!(app.is_typing());
        app.tick(t0 + 400 * MS);
        assert_eq!(app.editor.content(), "abcd");
        assert!(!app.is_typing());
        assert_eq!(app.focus, FocusPanel::Editor);
        assert_eq!(app.saved_code(), None);
    }

    #[test]
    fn edits_blocked_while_typing() {
        let t0 = Instant::now();
        let mut app = app_with("abcd", Some(400 * MS));
        app.start(t0);
        app.handle_action_at(Action::EditorInsert('x'), t0);
        assert_eq!(app.editor.content(), "");
        assert_eq!(app.saved_code(), None);
    }

    #[test]
    fn edit_saves_buffer() {
        let mut app = ready_app("a");
        app.handle_action(Action::EditorEnd);
        app.handle_action(Action::EditorInsert('b'));
        assert_eq!(app.saved_code().as_deref(), Some("ab"));
    }

    #[test]
    fn editor_colors_update_immediately_strip_waits() {
        let t0 = Instant::now();
        let mut app = ready_app("");
        for c in "let".chars() {
            app.handle_action_at(Action::EditorInsert(c), t0);
        }
        assert_eq!(app.editor_tokens()[0].class, TokenClass::Keyword);
        assert!(app.tokens().is_empty());
        assert!(app.status.is_pending);

        app.tick(t0 + 100 * MS);
        assert!(app.tokens().is_empty());
        app.tick(t0 + 200 * MS);
        assert_eq!(app.tokens().len(), 1);
        assert_eq!(app.retokenize_count(), 1);
        assert_eq!(app.status.token_count, 1);
    }

    #[test]
    fn retokenize_action_flushes() {
        let t0 = Instant::now();
        let mut app = ready_app("");
        app.handle_action_at(Action::EditorInsert('x'), t0);
        app.handle_action_at(Action::Retokenize, t0);
        assert_eq!(app.tokens().len(), 1);
        assert!(!app.status.is_pending);
    }

    #[test]
    fn palette_override_changes_one_class() {
        let mut app = ready_app("let a");
        let before = app.theme().clone();
        app.handle_action(Action::CycleFocus);
        app.handle_action(Action::PaletteDown);
        app.handle_action(Action::PaletteEdit);
        assert!(app.palette.is_editing());
        for _ in 0..7 {
            app.handle_action(Action::PaletteBackspace);
        }
        for c in "#010203".chars() {
            app.handle_action(Action::PaletteInsert(c));
        }
        app.handle_action(Action::PaletteCommit);

        assert_eq!(
            app.theme().color_of(TokenClass::Keyword),
            Color::Rgb(1, 2, 3)
        );
        assert_eq!(
            app.theme().color_of(TokenClass::String),
            before.color_of(TokenClass::String)
        );

        app.handle_action(Action::PaletteReset);
        assert_eq!(app.theme(), &before);
    }

    #[test]
    fn invalid_palette_color_reports_error() {
        let mut app = ready_app("");
        app.handle_action(Action::PaletteEdit);
        app.handle_action(Action::PaletteInsert('!'));
        app.handle_action(Action::PaletteCommit);
        assert!(matches!(app.status.notice, Notice::Error(_)));
        assert_eq!(app.theme(), &builtin::stylish());
    }

    #[test]
    fn theme_switch_drops_overrides() {
        let mut app = ready_app("");
        app.handle_action(Action::PaletteEdit);
        app.handle_action(Action::PaletteBackspace);
        app.handle_action(Action::PaletteBackspace);
        app.handle_action(Action::PaletteInsert('f'));
        app.handle_action(Action::PaletteInsert('f'));
        app.handle_action(Action::PaletteCommit);
        assert_ne!(app.theme(), &builtin::stylish());
        app.handle_action(Action::CycleTheme);
        app.handle_action(Action::CycleTheme);
        assert_eq!(app.theme(), &builtin::stylish());
    }

    #[test]
    fn inspect_toggle() {
        let mut app = ready_app("a");
        app.handle_action(Action::ToggleInspect);
        assert!(app.is_inspecting());
        assert_eq!(app.status.match_display(), "MATCHING");
        app.handle_action(Action::ToggleInspect);
        assert_eq!(app.status.match_display(), "MATCHED");
    }

    #[test]
    fn escape_closes_help_and_focuses_editor() {
        let mut app = ready_app("");
        app.handle_action(Action::CycleFocus);
        app.handle_action(Action::ToggleHelp);
        assert!(app.help.visible);
        app.handle_action(Action::Escape);
        assert!(!app.help.visible);
        assert_eq!(app.focus, FocusPanel::Editor);
    }

    #[test]
    fn shutdown_stops_pending_work() {
        let t0 = Instant::now();
        let mut app = app_with("abc", Some(300 * MS));
        app.start(t0);
        app.shutdown();
        app.tick(t0 + 1000 * MS);
        assert_eq!(app.editor.content(), "");
        assert_eq!(app.retokenize_count(), 0);
    }

    #[test]
    fn draw_renders_without_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut app = ready_app("export default function App() {}\n");
        app.start(Instant::now());
        app.handle_action(Action::ToggleHelp);
        terminal.draw(|f| app.draw(f)).unwrap();
    }
}
