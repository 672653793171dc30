//! Quoteshelf CLI — single-screen terminal quote viewer
//!
//! Shows a random quote, lets the user shelve it as a favourite, and
//! persists the favourites list when the screen is left.

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crossbeam_channel::bounded;

use quoteshelf_app::app::controller::AppController;
use quoteshelf_app::app::state::{AppCommand, AppSnapshot};
use quoteshelf_app::data::{config_dir, Favourites, Settings};
use quoteshelf_app::providers::ProviderRegistry;

/// Quoteshelf — random quotes with a favourites shelf
#[derive(Parser)]
#[command(name = "quoteshelf", version, about)]
struct Args {}

/// Route log output to a file in the config directory — anything written
/// to stderr while the alternate screen is active corrupts the display.
fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(log::LevelFilter::Info);
    if let Ok(dir) = config_dir() {
        let _ = std::fs::create_dir_all(&dir);
        if let Ok(file) = std::fs::File::create(dir.join("quoteshelf.log")) {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    builder.init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();
    init_logging();

    let settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("Could not load settings, using defaults: {e}");
        Settings::default()
    });

    let favourites_path = match Favourites::default_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let favourites = Favourites::load_or_default(&favourites_path);

    let registry = match ProviderRegistry::with_defaults() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Shared command channel + state
    let (cmd_tx, cmd_rx) = bounded(64);
    let shared_state = Arc::new(Mutex::new(AppSnapshot::default()));

    // Spawn controller on its own thread
    let auto_fetch = settings.auto_fetch;
    let ctrl_state = shared_state.clone();
    let controller_handle = std::thread::Builder::new()
        .name("controller".into())
        .spawn(move || {
            let mut ctrl = AppController::new(
                cmd_rx,
                ctrl_state,
                registry,
                settings,
                favourites,
                favourites_path,
            );
            ctrl.run();
        })
        .expect("Failed to spawn controller thread");

    // First quote of the session
    if auto_fetch {
        let _ = cmd_tx.send(AppCommand::FetchQuote);
    }

    // Enter TUI
    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(100);
    let mut running = true;

    while running {
        let snapshot = shared_state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        terminal.draw(|f| draw_ui(f, &snapshot))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            running = false;
                        }
                        KeyCode::Char('n') => {
                            let _ = cmd_tx.send(AppCommand::FetchQuote);
                        }
                        KeyCode::Char('f') => {
                            let _ = cmd_tx.send(AppCommand::AddFavourite);
                        }
                        KeyCode::Char('s') => {
                            let _ = cmd_tx.send(AppCommand::Persist);
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    // Leaving the screen persists the shelf
    let _ = cmd_tx.send(AppCommand::Shutdown);
    drop(cmd_tx);
    let _ = controller_handle.join();

    // Restore terminal
    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

fn draw_ui(f: &mut Frame, snapshot: &AppSnapshot) {
    let area = f.area();

    let outer = Block::default()
        .title(format!(" Quoteshelf v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Length(8), // current quote
        Constraint::Min(4),    // favourites list
        Constraint::Length(3), // status + help bar
    ])
    .split(inner);

    draw_quote(f, snapshot, chunks[0]);
    draw_favourites(f, snapshot, chunks[1]);
    draw_help(f, snapshot, chunks[2]);
}

fn draw_quote(f: &mut Frame, snapshot: &AppSnapshot, area: Rect) {
    let block = Block::default()
        .title(" Quote ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = Vec::new();
    match &snapshot.current {
        Some(quote) => {
            lines.push(Line::from(Span::styled(
                quote.quote_text.clone(),
                Style::default().fg(Color::White).bold(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("— {}", quote.author_or_unknown()),
                Style::default().fg(Color::Yellow),
            )));
            let heart = if snapshot.current_added {
                Span::styled("♥ on the shelf", Style::default().fg(Color::Red))
            } else {
                Span::styled("♡ press f to shelve", Style::default().fg(Color::DarkGray))
            };
            lines.push(Line::from(heart));
        }
        None => {
            let text = if snapshot.is_fetching {
                "Fetching..."
            } else {
                "No quote yet — press n"
            };
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_favourites(f: &mut Frame, snapshot: &AppSnapshot, area: Rect) {
    let block = Block::default()
        .title(format!(" Favourites ({}) ", snapshot.favourites.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let max_len = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = snapshot
        .favourites
        .iter()
        .map(|quote| {
            let entry = format!("{} — {}", quote.quote_text, quote.author_or_unknown());
            ListItem::new(truncate_str(&entry, max_len))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn draw_help(f: &mut Frame, snapshot: &AppSnapshot, area: Rect) {
    let status_color = match snapshot.status_text.as_ref() {
        "Fetch failed" | "Save failed" => Color::Red,
        "Fetching..." => Color::Yellow,
        _ => Color::Green,
    };

    let mut status_spans = vec![Span::styled(
        snapshot.status_text.to_string(),
        Style::default().fg(status_color),
    )];
    if let Some(ref err) = snapshot.last_error {
        status_spans.push(Span::raw("  "));
        status_spans.push(Span::styled(
            truncate_str(err, area.width.saturating_sub(20) as usize),
            Style::default().fg(Color::Red),
        ));
    }

    let lines = vec![
        Line::from(status_spans),
        Line::from(Span::styled(
            "n: another one   f: favourite   s: save   q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    } else {
        s.chars().take(max).collect()
    }
}
