use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_reader_engine::{
    HighlightCategory, Highlighter, IoError, classify_link, io, parse_blocks,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{
    io::{Stdout, stdout},
    path::PathBuf,
};

use crate::render::{Rendered, Role, render_blocks};

/// Pager state: the open document, its links and the navigation history.
pub struct App {
    path: PathBuf,
    highlighter: Highlighter,
    rendered: Rendered,
    history: Vec<PathBuf>,
    selected_link: Option<usize>,
    scroll: u16,
    status: String,
}

impl App {
    pub fn open(path: PathBuf, highlighter: Highlighter) -> Result<Self, IoError> {
        let mut app = Self {
            path: PathBuf::new(),
            highlighter,
            rendered: Rendered::default(),
            history: Vec::new(),
            selected_link: None,
            scroll: 0,
            status: String::new(),
        };
        app.load(path)?;
        Ok(app)
    }

    fn load(&mut self, path: PathBuf) -> Result<(), IoError> {
        let content = io::read_file(&path)?;
        self.rendered = render_blocks(&parse_blocks(&content), &self.highlighter);
        self.selected_link = (!self.rendered.links.is_empty()).then_some(0);
        self.scroll = 0;
        self.status = path.display().to_string();
        self.path = path;
        Ok(())
    }

    fn scroll_down(&mut self) {
        let max = u16::try_from(self.rendered.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn next_link(&mut self) {
        let count = self.rendered.links.len();
        if count > 0 {
            self.selected_link = Some(self.selected_link.map_or(0, |i| (i + 1) % count));
        }
    }

    fn previous_link(&mut self) {
        let count = self.rendered.links.len();
        if count > 0 {
            self.selected_link = Some(self.selected_link.map_or(0, |i| (i + count - 1) % count));
        }
    }

    /// Opens the selected link if it names an existing document.
    fn follow_selected_link(&mut self) {
        let Some(url) = self
            .selected_link
            .and_then(|i| self.rendered.links.get(i))
            .cloned()
        else {
            return;
        };

        if let Some(target) = io::navigate(&url, &self.path) {
            let previous = self.path.clone();
            match self.load(target) {
                Ok(()) => self.history.push(previous),
                Err(e) => self.status = format!("Error reading file: {e}"),
            }
        } else if classify_link(&url).is_web() {
            self.status = format!("External link: {url}");
        } else {
            self.status = format!("Not found: {url}");
        }
    }

    fn back(&mut self) {
        if let Some(previous) = self.history.pop()
            && let Err(e) = self.load(previous)
        {
            self.status = format!("Error reading file: {e}");
        }
    }
}

pub fn run(path: PathBuf, highlighter: Highlighter) -> Result<()> {
    let mut app = App::open(path, highlighter)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Tab => app.next_link(),
                KeyCode::BackTab => app.previous_link(),
                KeyCode::Enter => app.follow_selected_link(),
                KeyCode::Backspace | KeyCode::Left => app.back(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let lines: Vec<Line> = app
        .rendered
        .lines
        .iter()
        .map(|segments| {
            Line::from(
                segments
                    .iter()
                    .map(|s| Span::styled(s.text.clone(), role_style(s.role, app.selected_link)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let title = app
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | ↑/k ↓/j: Scroll | Tab: Next link | Enter: Open | ←: Back | "),
        Span::styled(app.status.clone(), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}

fn role_style(role: Role, selected_link: Option<usize>) -> Style {
    let base = Style::default();
    match role {
        Role::Plain | Role::Source(HighlightCategory::Default) => base,
        Role::Heading | Role::Bold => base.add_modifier(Modifier::BOLD),
        Role::Italic => base.add_modifier(Modifier::ITALIC),
        Role::Code => base.fg(Color::Yellow),
        Role::Link(i) if Some(i) == selected_link => base
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::UNDERLINED),
        Role::Link(_) => base.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        Role::LinkUrl | Role::Marker | Role::Rule => base.fg(Color::DarkGray),
        Role::Quote => base.add_modifier(Modifier::ITALIC | Modifier::DIM),
        Role::Source(HighlightCategory::String) => base.fg(Color::Red),
        Role::Source(HighlightCategory::Comment) => base.fg(Color::Green),
        Role::Source(HighlightCategory::Keyword) => base.fg(Color::Magenta),
        Role::Source(HighlightCategory::Number) => base.fg(Color::Blue),
        Role::Source(HighlightCategory::TypeIdentifier) => base.fg(Color::Cyan),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn notes() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("index.md"),
            "# Home\n[Next](next.md) [Web](https://example.com) [Gone](gone.md)",
        )
        .unwrap();
        fs::write(dir.path().join("next.md"), "# Next\n[Home](index.md)").unwrap();
        dir
    }

    fn open(dir: &TempDir) -> App {
        App::open(dir.path().join("index.md"), Highlighter::new()).unwrap()
    }

    #[test]
    fn first_link_is_selected_on_open() {
        let dir = notes();
        let app = open(&dir);
        assert_eq!(app.selected_link, Some(0));
        assert_eq!(app.rendered.links.len(), 3);
    }

    #[test]
    fn link_selection_wraps() {
        let dir = notes();
        let mut app = open(&dir);
        app.previous_link();
        assert_eq!(app.selected_link, Some(2));
        app.next_link();
        assert_eq!(app.selected_link, Some(0));
    }

    #[test]
    fn follow_and_back() {
        let dir = notes();
        let mut app = open(&dir);

        app.follow_selected_link();
        assert_eq!(app.path, dir.path().join("next.md"));
        assert_eq!(app.history, vec![dir.path().join("index.md")]);

        app.back();
        assert_eq!(app.path, dir.path().join("index.md"));
        assert!(app.history.is_empty());
    }

    #[test]
    fn external_and_missing_links_stay_put() {
        let dir = notes();
        let mut app = open(&dir);

        app.next_link();
        app.follow_selected_link();
        assert_eq!(app.status, "External link: https://example.com");

        app.next_link();
        app.follow_selected_link();
        assert_eq!(app.status, "Not found: gone.md");
        assert_eq!(app.path, dir.path().join("index.md"));
    }

    #[test]
    fn scroll_is_clamped() {
        let dir = notes();
        let mut app = open(&dir);
        app.scroll_up();
        assert_eq!(app.scroll, 0);
        for _ in 0..10 {
            app.scroll_down();
        }
        assert_eq!(usize::from(app.scroll), app.rendered.lines.len() - 1);
    }

    #[test]
    fn scroll_saturates_on_huge_documents() {
        let dir = notes();
        let mut app = open(&dir);
        app.rendered.lines = vec![vec![]; usize::from(u16::MAX) + 10];
        app.scroll = u16::MAX;
        app.scroll_down();
        assert_eq!(app.scroll, u16::MAX);
    }

    #[test]
    fn missing_document_fails_to_open() {
        let dir = notes();
        let result = App::open(dir.path().join("nope.md"), Highlighter::new());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
