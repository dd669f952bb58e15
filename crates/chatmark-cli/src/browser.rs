use anyhow::Result;
use chatmark_engine::{MessageFormatter, io};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::warn;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use relative_path::RelativePathBuf;
use std::{io::Stdout, path::PathBuf};

use crate::tui_render::message_lines;

/// State of the message browser: the file list and the rendered selection.
pub struct App {
    messages_path: PathBuf,
    formatter: MessageFormatter,
    files: Vec<RelativePathBuf>,
    list_state: ListState,
    content: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    pub fn new(messages_path: PathBuf, formatter: MessageFormatter) -> Result<Self> {
        let files = io::scan_message_files(&messages_path)?;

        let mut app = Self {
            messages_path,
            formatter,
            files,
            list_state: ListState::default(),
            content: Vec::new(),
            scroll: 0,
        };

        // Select first message if available
        if !app.files.is_empty() {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    pub fn selected(&self) -> Option<&RelativePathBuf> {
        self.list_state.selected().and_then(|i| self.files.get(i))
    }

    pub fn next_message(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn previous_message(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn scroll_down(&mut self) {
        let max = u16::try_from(self.content.len()).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        let Some(file) = self.selected().cloned() else {
            self.content.clear();
            return;
        };

        self.content = match io::read_message(&file, &self.messages_path) {
            Ok(text) => message_lines(&self.formatter.format(&text, None)),
            Err(e) => {
                warn!("failed to read {file}: {e}");
                vec![Line::from(format!("Error reading file: {e}"))]
            }
        };
    }
}

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_message(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_message(),
                KeyCode::PageDown | KeyCode::Char('J') => app.scroll_down(),
                KeyCode::PageUp | KeyCode::Char('K') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Message list panel
    let items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(Line::from(file.as_str().to_string())))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    // Rendered message panel
    let content = if app.content.is_empty() {
        vec![Line::from("No message selected")]
    } else {
        app.content.clone()
    };

    let title = app
        .selected()
        .map_or_else(|| "Message".to_string(), |file| file.to_string());

    let message = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(message, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgUp/K PgDn/J: Scroll"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}
