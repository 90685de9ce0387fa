//! Interactive screen
//!
//! One input line (search or add, toggled with Tab), four result panes, the
//! saved word list, the session history and a modal notification popup.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use wordbook::{
    ansi::{ANTONYMS_HEADING, MEANING_HEADING, SYNONYMS_HEADING, USAGE_HEADING},
    theme::Theme,
    Lookup, Notification, Wordbook,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Search,
    Add,
}

impl InputMode {
    fn toggle(self) -> Self {
        match self {
            InputMode::Search => InputMode::Add,
            InputMode::Add => InputMode::Search,
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            InputMode::Search => "Enter a word",
            InputMode::Add => "Enter a word to add",
        }
    }
}

struct App {
    wordbook: Wordbook,
    theme: Theme,
    mode: InputMode,
    input: String,
    lookup: Option<Lookup>,
    saved_words: Vec<String>,
    notification: Option<Notification>,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(wordbook: Wordbook, theme: Theme) -> Self {
        let mut app = Self {
            wordbook,
            theme,
            mode: InputMode::Search,
            input: String::new(),
            lookup: None,
            saved_words: Vec::new(),
            notification: None,
            status_message: None,
            should_quit: false,
        };
        app.reload_saved_words();
        app
    }

    fn reload_saved_words(&mut self) {
        match self.wordbook.saved_words() {
            Ok(words) => self.saved_words = words,
            Err(err) => self.notification = Some(err.notification()),
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        // Any key dismisses an open notification
        if self.notification.take().is_some() {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('y') if ctrl => self.copy_meaning(),
            KeyCode::Tab => self.mode = self.mode.toggle(),
            KeyCode::Enter => self.submit().await,
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => {}
        }
    }

    async fn submit(&mut self) {
        self.status_message = None;
        match self.mode {
            InputMode::Search => match self.wordbook.search(&self.input).await {
                Ok(lookup) => self.lookup = Some(lookup),
                Err(err) => self.notification = Some(err.notification()),
            },
            InputMode::Add => match self.wordbook.add_word(&self.input) {
                Ok(notification) => {
                    self.notification = Some(notification);
                    self.reload_saved_words();
                }
                Err(err) => self.notification = Some(err.notification()),
            },
        }
    }

    fn copy_meaning(&mut self) {
        let Some(lookup) = &self.lookup else {
            self.status_message = Some("Nothing to copy yet".to_string());
            return;
        };

        let copied = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(lookup.result.meaning.clone()));
        self.status_message = Some(match copied {
            Ok(()) => format!("Copied meaning of '{}'", lookup.word),
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard copy failed");
                format!("Clipboard unavailable: {err}")
            }
        });
    }
}

/// Run the interactive screen until the user quits
pub async fn run(wordbook: Wordbook, theme: Theme) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(wordbook, theme);
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| render(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key).await;
                }
            }
        }
    }
    Ok(())
}

fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(10),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_input(f, app, chunks[0]);
    render_results(f, app, chunks[1]);
    render_lists(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);

    if let Some(notification) = &app.notification {
        render_notification(f, &app.theme, notification);
    }
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mode_color = match app.mode {
        InputMode::Search => theme.color(&theme.mode_search),
        InputMode::Add => theme.color(&theme.mode_add),
    };
    let label = match app.mode {
        InputMode::Search => " Search ",
        InputMode::Add => " Add ",
    };

    let line = Line::from(vec![
        Span::styled(
            label,
            Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.input.as_str(),
            Style::default().fg(theme.color(&theme.input_text)),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.mode.prompt())
        .border_style(Style::default().fg(theme.color(&theme.input_border)));
    f.render_widget(Paragraph::new(line).block(block), area);

    f.set_cursor_position((input_cursor_x(area, label, &app.input), area.y + 1));
}

/// Column just after the typed text, clamped inside the input border
fn input_cursor_x(area: Rect, label: &str, input: &str) -> u16 {
    let width = |text: &str| u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(width(label))
        .saturating_add(1)
        .saturating_add(width(input));
    cursor_x.min(area.right().saturating_sub(2))
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let (meaning, usage, synonyms, antonyms) = match &app.lookup {
        Some(lookup) => (
            lookup.result.meaning.as_str(),
            lookup.result.usage.as_str(),
            lookup.result.synonyms.as_str(),
            lookup.result.antonyms.as_str(),
        ),
        None => ("", "", "", ""),
    };

    render_pane(f, &app.theme, MEANING_HEADING, meaning, top[0]);
    render_pane(f, &app.theme, USAGE_HEADING, usage, top[1]);
    render_pane(f, &app.theme, SYNONYMS_HEADING, synonyms, bottom[0]);
    render_pane(f, &app.theme, ANTONYMS_HEADING, antonyms, bottom[1]);
}

fn render_pane(f: &mut Frame, theme: &Theme, title: &str, body: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.color(&theme.result_title))
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.color(&theme.result_border)));

    let paragraph = Paragraph::new(body)
        .style(Style::default().fg(theme.color(&theme.result_text)))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_lists(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_word_list(f, &app.theme, "Previously Added Words", &app.saved_words, columns[0]);
    render_word_list(
        f,
        &app.theme,
        "Search History",
        app.wordbook.history().entries(),
        columns[1],
    );
}

/// Word list pinned to its newest (last) entry so appends stay visible
fn render_word_list(f: &mut Frame, theme: &Theme, title: &str, words: &[String], area: Rect) {
    let items: Vec<ListItem> = words
        .iter()
        .map(|word| ListItem::new(word.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(theme.color(&theme.list_border))),
        )
        .style(Style::default().fg(theme.color(&theme.list_item)))
        .highlight_style(Style::default().fg(theme.color(&theme.list_latest)));

    let mut state = ListState::default();
    state.select(words.len().checked_sub(1));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(theme.color(&theme.status_message_fg)),
        )),
        None => Line::from(Span::styled(
            "Enter: submit | Tab: search/add | Ctrl+Y: copy meaning | Esc: quit",
            Style::default().fg(theme.color(&theme.help_bar_fg)),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_notification(f: &mut Frame, theme: &Theme, notification: &Notification) {
    let area = centered_rect(50, 20, f.area());
    let accent = if notification.is_error() {
        theme.color(&theme.popup_error)
    } else {
        theme.color(&theme.popup_success)
    };

    let text = vec![
        Line::from(Span::styled(
            notification.message.as_str(),
            Style::default().fg(theme.color(&theme.popup_text)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(theme.color(&theme.help_bar_fg)),
        )),
    ];

    let popup = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    notification.title.as_str(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(accent)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_input() {
        let area = Rect::new(0, 0, 80, 3);
        assert_eq!(input_cursor_x(area, " Search ", ""), 10);
        assert_eq!(input_cursor_x(area, " Search ", "word"), 14);
    }

    #[test]
    fn test_cursor_clamped_for_long_input() {
        let area = Rect::new(2, 0, 40, 3);
        let pasted = "x".repeat(usize::from(u16::MAX) + 10);
        assert_eq!(input_cursor_x(area, " Add ", &pasted), area.right() - 2);
    }
}
