use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block as Panel, Borders, List, ListItem, ListState, Paragraph},
};
use slidedeck_config::Config;
use slidedeck_engine::{
    Block, InlineSpan, Slide, SlideStore, SlideUpdate, ViewContext,
    html::render_deck_html,
    io::{self, DeckIoError},
    render,
    rendering::plain_text,
};
use std::{
    env,
    io::stdout,
    path::{Path, PathBuf},
    process,
};

struct App {
    deck_path: PathBuf,
    store: SlideStore,
    slides: Vec<Slide>,
    slide_list_state: ListState,
    edit_mode: bool,
    edit_buffer: String,
}

impl App {
    fn new(deck_path: PathBuf, store: SlideStore) -> Self {
        let mut app = Self {
            deck_path,
            store,
            slides: Vec::new(),
            slide_list_state: ListState::default(),
            edit_mode: false,
            edit_buffer: String::new(),
        };
        app.refresh_slides();
        if !app.slides.is_empty() {
            app.slide_list_state.select(Some(0));
        }
        app
    }

    fn refresh_slides(&mut self) {
        self.slides = self.store.list();
        // Keep the selection inside bounds after deletes
        if let Some(i) = self.slide_list_state.selected()
            && i >= self.slides.len()
        {
            self.slide_list_state
                .select(self.slides.len().checked_sub(1));
        }
    }

    fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.slide_list_state.selected()?)
    }

    fn next_slide(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        let i = match self.slide_list_state.selected() {
            Some(i) => (i + 1) % self.slides.len(),
            None => 0,
        };
        self.slide_list_state.select(Some(i));
    }

    fn previous_slide(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        let i = match self.slide_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.slides.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.slide_list_state.select(Some(i));
    }

    fn add_slide(&mut self) -> Result<()> {
        let order = self.slides.len() as i32;
        let slide = self.store.create(
            "New Slide",
            "# New Slide\n\nAdd your content here...",
            order,
        )?;
        self.refresh_slides();
        if let Some(i) = self.slides.iter().position(|s| s.id == slide.id) {
            self.slide_list_state.select(Some(i));
        }
        Ok(())
    }

    fn delete_current_slide(&mut self) -> Result<()> {
        if let Some(slide) = self.current_slide() {
            let id = slide.id;
            self.store.soft_delete(id)?;
            self.refresh_slides();
            self.renumber()?;
        }
        Ok(())
    }

    /// Submits a contiguous renumbering for the remaining slides.
    fn renumber(&mut self) -> Result<()> {
        let ids: Vec<_> = self.slides.iter().map(|s| s.id).collect();
        for (position, id) in ids.iter().enumerate() {
            self.store.reorder(*id, position as i32)?;
        }
        self.refresh_slides();
        Ok(())
    }

    /// Moves the selected slide one position and renumbers the whole deck.
    /// The store's reorder sets one row at a time, so a coherent,
    /// contiguous order has to be submitted for every slide.
    fn move_current_slide(&mut self, offset: isize) -> Result<()> {
        let Some(from) = self.slide_list_state.selected() else {
            return Ok(());
        };
        let to = from as isize + offset;
        if to < 0 || to as usize >= self.slides.len() {
            return Ok(());
        }
        let to = to as usize;

        let mut ids: Vec<_> = self.slides.iter().map(|s| s.id).collect();
        let moved = ids.remove(from);
        ids.insert(to, moved);
        for (position, id) in ids.iter().enumerate() {
            self.store.reorder(*id, position as i32)?;
        }

        self.refresh_slides();
        self.slide_list_state.select(Some(to));
        Ok(())
    }

    /// Copies the selected slide's raw text into the edit buffer. All
    /// keystrokes land in the buffer until the edit is committed.
    fn enter_edit_mode(&mut self) {
        if let Some(slide) = self.current_slide() {
            self.edit_buffer = slide.content.clone();
            self.edit_mode = true;
        }
    }

    /// Leaves edit mode, writing the buffer back through the store. A
    /// buffer edited down to nothing is discarded; the slide keeps its
    /// previous content rather than failing content validation.
    fn commit_edit(&mut self) -> Result<()> {
        self.edit_mode = false;
        let Some(slide) = self.current_slide() else {
            return Ok(());
        };
        let id = slide.id;
        let changed = slide.content != self.edit_buffer;
        if changed && !self.edit_buffer.trim().is_empty() {
            self.store
                .update(id, SlideUpdate::content(self.edit_buffer.clone()))?;
            self.refresh_slides();
        }
        Ok(())
    }

    fn edit_input(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.edit_buffer.push(c),
            KeyCode::Enter => self.edit_buffer.push('\n'),
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            _ => {}
        }
    }

    fn save(&self) -> Result<(), DeckIoError> {
        io::save_deck(&self.store, &self.deck_path)
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // `--export <file>` renders the deck to HTML and exits
    if let Some(pos) = args.iter().position(|a| a == "--export") {
        let Some(out_path) = args.get(pos + 1) else {
            eprintln!("Usage: {} [deck.json] --export <output.html>", args[0]);
            process::exit(1);
        };
        let mut remaining: Vec<&String> = args[1..].iter().collect();
        remaining.drain(pos - 1..=pos);
        let deck_path = resolve_deck_path(&remaining, &args[0]);
        let store = load_or_seed(&deck_path);
        std::fs::write(out_path, render_deck_html(&store.list(), &deck_title(&deck_path)))?;
        println!("Exported {} slides to {}", store.len(), out_path);
        return Ok(());
    }

    let positional: Vec<&String> = args[1..].iter().collect();
    let deck_path = resolve_deck_path(&positional, &args[0]);
    let store = load_or_seed(&deck_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(deck_path, store);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// The deck file comes from the command line, or from the settings file,
/// or from the default location under the user's data directory.
fn resolve_deck_path(positional: &[&String], argv0: &str) -> PathBuf {
    match positional {
        [path] => PathBuf::from(path),
        [] => match Config::load() {
            Ok(config) => config.deck_path,
            Err(e) => {
                eprintln!("Error: {e}");
                eprintln!("Usage: {argv0} [deck.json]");
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {argv0} [deck.json] [--export <output.html>]");
            process::exit(1);
        }
    }
}

/// Document title for HTML export, taken from the deck file's name.
fn deck_title(deck_path: &Path) -> String {
    deck_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "slides".to_string())
}

/// A missing deck file starts a fresh seeded deck; anything else that goes
/// wrong while reading it is fatal.
fn load_or_seed(deck_path: &PathBuf) -> SlideStore {
    match io::load_deck(deck_path) {
        Ok(store) => store,
        Err(DeckIoError::NotFound(_)) => SlideStore::seeded(),
        Err(e) => {
            eprintln!("Error: Failed to load deck '{}': {e}", deck_path.display());
            process::exit(1);
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.edit_mode {
                // Everything except Esc is text input while editing
                match key.code {
                    KeyCode::Esc => app.commit_edit()?,
                    code => app.edit_input(code),
                }
                continue;
            }
            match key.code {
                KeyCode::Char('q') => {
                    app.save()?;
                    return Ok(());
                }
                KeyCode::Down | KeyCode::Char('j') => app.next_slide(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_slide(),
                KeyCode::Char('a') => app.add_slide()?,
                KeyCode::Char('d') => app.delete_current_slide()?,
                KeyCode::Char('J') => app.move_current_slide(1)?,
                KeyCode::Char('K') => app.move_current_slide(-1)?,
                KeyCode::Char('e') => app.enter_edit_mode(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(outer[0]);

    // Sidebar: one thumbnail per slide
    let sidebar_items: Vec<ListItem> = app
        .slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let mut lines = vec![Line::from(Span::styled(
                format!("{} {}", i + 1, slide.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            lines.extend(thumbnail_lines(&slide.content));
            ListItem::new(lines)
        })
        .collect();

    let sidebar = List::new(sidebar_items)
        .block(
            Panel::default()
                .borders(Borders::ALL)
                .title(format!("Slides ({})", app.slides.len())),
        )
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

    f.render_stateful_widget(sidebar, chunks[0], &mut app.slide_list_state);

    // Main panel: rendered blocks, or raw text while editing
    let (title, content_lines) = match app.current_slide() {
        Some(slide) if app.edit_mode => (
            format!("{} (editing)", slide.title),
            edit_lines(&app.edit_buffer),
        ),
        Some(slide) => (
            slide.title.clone(),
            slide_lines(&slide.content),
        ),
        None => (
            "No slides".to_string(),
            vec![Line::from("Press 'a' to add a slide")],
        ),
    };

    let main_panel = Paragraph::new(content_lines)
        .block(Panel::default().borders(Borders::ALL).title(title))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(main_panel, chunks[1]);

    let help = if app.edit_mode {
        "Type to edit | Esc: Apply changes"
    } else {
        "q: Save & quit | j/k: Navigate | a: Add | d: Delete | J/K: Move | e: Edit"
    };
    f.render_widget(Paragraph::new(Line::from(help)), outer[1]);
}

/// Full-view rendering of a slide into styled terminal lines.
fn slide_lines(content: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in render(content, ViewContext::Full) {
        match block {
            Block::Title { spans } => {
                lines.push(styled_line(
                    &spans,
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .add_modifier(Modifier::UNDERLINED),
                    "",
                ));
                lines.push(Line::default());
            }
            Block::SectionHeader { spans } => {
                lines.push(styled_line(
                    &spans,
                    Style::default().add_modifier(Modifier::BOLD),
                    "",
                ));
                lines.push(Line::default());
            }
            Block::SubsectionHeader { spans } => {
                lines.push(styled_line(
                    &spans,
                    Style::default().add_modifier(Modifier::ITALIC),
                    "",
                ));
            }
            Block::List { items } => {
                for item in &items {
                    lines.push(styled_line(item, Style::default(), "• "));
                }
                lines.push(Line::default());
            }
            Block::OrderedItem { index, spans } => {
                lines.push(styled_line(&spans, Style::default(), &format!("{index}. ")));
            }
            Block::Paragraph { spans } => {
                lines.push(styled_line(&spans, Style::default(), ""));
                lines.push(Line::default());
            }
        }
    }
    lines
}

/// Raw edit buffer with a block cursor after the last character.
fn edit_lines(buffer: &str) -> Vec<Line<'static>> {
    let mut text = buffer.to_string();
    text.push('▌');
    text.lines().map(|l| Line::from(l.to_string())).collect()
}

/// Compact thumbnail preview, capped by the renderer's thumbnail contract.
fn thumbnail_lines(content: &str) -> Vec<Line<'static>> {
    render(content, ViewContext::Thumbnail)
        .into_iter()
        .map(|block| match block {
            Block::Title { spans } => Line::from(Span::styled(
                format!("  # {}", plain_text(&spans)),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Block::SectionHeader { spans } | Block::SubsectionHeader { spans } => Line::from(
                format!("  ~ {}", plain_text(&spans)),
            ),
            Block::List { items } => Line::from(format!("  • {} items", items.len())),
            Block::OrderedItem { index, spans } => Line::from(format!(
                "  {index}. {}",
                plain_text(&spans)
            )),
            Block::Paragraph { spans } => Line::from(format!(
                "  {}",
                plain_text(&spans)
            )),
        })
        .collect()
}

/// One terminal line from a span sequence: strong renders bold, emphasis
/// renders italic, on top of the block's base style.
fn styled_line(spans: &[InlineSpan], base: Style, prefix: &str) -> Line<'static> {
    let mut out: Vec<Span<'static>> = Vec::new();
    if !prefix.is_empty() {
        out.push(Span::styled(prefix.to_string(), base));
    }
    for span in spans {
        match span {
            InlineSpan::Text(t) => out.push(Span::styled(t.clone(), base)),
            InlineSpan::Strong(t) => out.push(Span::styled(
                t.clone(),
                base.add_modifier(Modifier::BOLD),
            )),
            InlineSpan::Emphasis(t) => out.push(Span::styled(
                t.clone(),
                base.add_modifier(Modifier::ITALIC),
            )),
        }
    }
    Line::from(out)
}
