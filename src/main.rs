//! Tickerbar - status bar demo for terminal stock watchers.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveTime};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tickerbar::app::{App, REFRESHING_MESSAGE};
use tickerbar::status::TimeRange;
use tickerbar::theme::ThemeContext;
use tickerbar::ui;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "tickerbar")]
#[command(about = "A themeable status bar for terminal stock watchers", long_about = None)]
struct Args {
    /// Data source label shown next to the connection indicator
    #[arg(long, default_value = "NASDAQ")]
    provider: String,

    /// Theme to start with
    #[arg(long)]
    theme: Option<String>,

    /// Initially selected time range
    #[arg(long, value_enum, default_value_t = TimeRange::OneDay)]
    range: TimeRange,

    /// List available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Print a single status line to stdout and exit
    #[arg(long)]
    print: bool,

    /// Line width for --print
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Last update time for --print (HH:MM:SS), defaults to now
    #[arg(long, value_parser = parse_time)]
    time: Option<NaiveTime>,

    /// Render as disconnected
    #[arg(long)]
    disconnected: bool,

    /// Render with a data error
    #[arg(long)]
    error: Option<String>,

    /// Transient message replacing the timestamp
    #[arg(long)]
    message: Option<String>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn parse_time(s: &str) -> std::result::Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").map_err(|e| format!("expected HH:MM:SS: {}", e))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Tickerbar");
    }

    let mut theme = ThemeContext::default();
    if let Some(name) = &args.theme {
        if !theme.set_theme(name) {
            bail!(
                "Unknown theme '{}'. Available: {}",
                name,
                theme.registry().names().join(", ")
            );
        }
    }

    if args.list_themes {
        for name in theme.registry().names() {
            let marker = if name == theme.active_name() { "*" } else { " " };
            println!("{} {}", marker, name);
        }
        return Ok(());
    }

    let mut app = App::new(args.provider.clone(), theme);
    app.set_time_range(args.range);
    app.set_status(
        args.time.unwrap_or_else(|| Local::now().time()),
        !args.disconnected,
        args.error.clone(),
    );
    if let Some(message) = &args.message {
        app.set_status_message(message.clone());
    }

    if args.print {
        app.set_size(args.width, 1);
        println!("{}", app.status_line().to_ansi()?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Tickerbar exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },

                    // Time range
                    (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='4')) => {
                        let idx = c as usize - '1' as usize;
                        app.set_time_range(TimeRange::ALL[idx]);
                    },
                    (KeyModifiers::NONE, KeyCode::Tab) => {
                        app.set_time_range(app.status.time_range.next());
                    },

                    // Simulated status changes
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.toggle_connected();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('e')) => {
                        app.toggle_error();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('r')) => {
                        app.set_status_message(REFRESHING_MESSAGE);
                    },
                    (KeyModifiers::NONE, KeyCode::Char('u')) => {
                        app.clear_status_message();
                        let connected = app.status.connected;
                        app.set_status(Local::now().time(), connected, None);
                    },
                    (KeyModifiers::NONE, KeyCode::Esc) => {
                        app.clear_status_message();
                    },

                    _ => {},
                }
            }
        }
    }
}
