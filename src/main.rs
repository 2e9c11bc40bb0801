use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{
    poll as event_poll, read as event_read, Event as CrosstermEvent, KeyCode, KeyEvent,
    KeyEventKind, KeyModifiers,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use search_engines::app::EngineStore;
use search_engines::config_io::{self, DirectoryContext};
use search_engines::model::EngineIcon;
use search_engines::services::id_source::TimestampIdSource;
use search_engines::services::terminal_modes::{self, TerminalModes};
use search_engines::services::tracing_setup;
use search_engines::view::search_engines::{
    render_manager, EngineOwner, ManagerLayout, SearchEngineManager, GLOBE_GLYPH, IMAGE_GLYPH,
};
use search_engines::view::theme::Theme;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Manage the search engines used for web searches
#[derive(Parser, Debug)]
#[command(name = "search-engines")]
#[command(about = "Select, add and delete search engines", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the directories used and exit
    #[arg(long)]
    show_paths: bool,
}

/// Term used for the sample query shown on the host screen
const SAMPLE_QUERY: &str = "rust ratatui";

fn main() -> AnyhowResult<()> {
    let args = Args::parse();
    let dir_context = DirectoryContext::from_system()?;
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| dir_context.config_path());

    if args.show_paths {
        println!("Config file: {}", config_path.display());
        println!("Log file:    {}", dir_context.log_path().display());
        return Ok(());
    }

    if args.dump_config {
        let config = config_io::load_or_default(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(|| dir_context.log_path());
    tracing_setup::init_global(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing::info!("Starting search-engines, logging to {}", log_file.display());

    let config = config_io::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let theme = Theme::load_builtin(&config.theme).unwrap_or_else(|| {
        tracing::warn!("Unknown theme {:?}, using the default", config.theme);
        Theme::default()
    });
    let auto_fetch = config.manager.auto_fetch_icon;
    let mut store = EngineStore::new(config, Some(config_path));
    let mut manager =
        SearchEngineManager::new(TimestampIdSource::shared()).with_auto_fetch(auto_fetch);

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        terminal_modes::emergency_cleanup();
        default_hook(info);
    }));

    let _modes = TerminalModes::enable()?;
    let mut terminal = Terminal::new(ratatui::backend::CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run_event_loop(&mut terminal, &mut store, &mut manager, &theme);
    if let Err(e) = &result {
        tracing::error!("Event loop failed: {:#}", e);
    }
    result
}

fn run_event_loop(
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    store: &mut EngineStore,
    manager: &mut SearchEngineManager,
    theme: &Theme,
) -> AnyhowResult<()> {
    let mut layout: Option<ManagerLayout> = None;

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            render_host_screen(frame, area, store, theme);
            layout = render_manager(frame, area, manager, &store.props(), theme);
        })?;

        if !event_poll(Duration::from_millis(250))? {
            continue;
        }

        let events = match event_read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if !store.manager_open {
                    if handle_host_key(key, store, manager) {
                        return Ok(());
                    }
                    continue;
                }
                manager.handle_key(key, &store.props())
            }
            CrosstermEvent::Mouse(mouse_event) => match &layout {
                Some(layout) => manager.handle_mouse(mouse_event, &store.props(), layout),
                None => Vec::new(),
            },
            CrosstermEvent::Paste(text) => {
                manager.handle_paste(&text, &store.props());
                Vec::new()
            }
            _ => Vec::new(),
        };
        store.apply(events);
    }
}

/// Handle a key on the host screen; returns true to quit
fn handle_host_key(key: KeyEvent, store: &mut EngineStore, manager: &mut SearchEngineManager) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char('s') => {
            tracing::debug!("Opening search engine manager");
            store.manager_open = true;
            manager.open(&store.props());
            false
        }
        _ => false,
    }
}

fn render_host_screen(frame: &mut Frame, area: Rect, store: &EngineStore, theme: &Theme) {
    let base = Style::default().fg(theme.screen_fg).bg(theme.screen_bg);
    let muted = Style::default().fg(theme.muted_fg).bg(theme.screen_bg);

    let mut lines = vec![
        Line::from(Span::styled(
            "Search engines",
            base.add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    match store.active_engine() {
        Some(engine) => {
            let glyph = match engine.icon_kind() {
                EngineIcon::Image(_) => IMAGE_GLYPH,
                EngineIcon::Globe => GLOBE_GLYPH,
            };
            lines.push(Line::from(vec![
                Span::styled("Default: ", muted),
                Span::styled(format!("{} {}", glyph, engine.name), base),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Example: ", muted),
                Span::styled(engine.query_url(SAMPLE_QUERY), base),
            ]));
        }
        None => lines.push(Line::from(Span::styled(
            format!("Default: none ({} engines configured)", store.config.engines.len()),
            muted,
        ))),
    }

    if let Some(error) = &store.last_error {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Could not save: {}", error),
            Style::default().fg(theme.danger_fg).bg(theme.screen_bg),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "s: manage search engines   q: quit",
        muted,
    )));

    frame.render_widget(Paragraph::new(lines).style(base), area);
}
