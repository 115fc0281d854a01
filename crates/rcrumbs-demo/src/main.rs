#![forbid(unsafe_code)]

//! rcrumbs demo binary: a breadcrumb trail that re-fits on terminal resize.

mod cli;

use std::fs;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, queue, terminal};
use rcrumbs_core::{ResizeDecision, Trail, TrailConfig};
use rcrumbs_text::TextContainer;
use tracing_subscriber::EnvFilter;

use cli::Opts;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    let opts = Opts::parse();
    init_logging();

    if let Err(e) = run(&opts) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}

/// Log to the file named by `RCRUMBS_LOG`; the terminal is in raw mode.
fn init_logging() {
    let Ok(path) = std::env::var("RCRUMBS_LOG") else {
        return;
    };
    match fs::File::create(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
                )
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => eprintln!("cannot open log file {path}: {e}"),
    }
}

fn load_config(opts: &Opts) -> io::Result<TrailConfig> {
    let mut config = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            TrailConfig::from_json(&text)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
        }
        None => TrailConfig::default(),
    };
    if opts.no_ellipsis {
        config = config.with_ellipsis(false);
    }
    if opts.no_animation {
        config = config.with_animation(false);
    }
    if let Some(speed) = opts.speed {
        config = config.with_speed(speed);
    }
    Ok(config)
}

/// Restores the terminal on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn run(opts: &Opts) -> io::Result<()> {
    let config = load_config(opts)?;
    let (cols, _rows) = terminal::size()?;

    let mut host = TextContainer::from_labels(cols, opts.labels.iter().map(String::as_str));
    if let Some(separator) = &opts.separator {
        host = host.with_separator(separator.as_str());
    }

    let _guard = TerminalGuard::enter()?;
    let mut trail = Trail::attach(host, config);
    draw(&trail)?;

    let mut last_frame = Instant::now();
    loop {
        let timeout = if trail.is_animating() {
            FRAME
        } else {
            Duration::from_secs(1)
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_quit(&key) => break,
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                    trail.host_mut().set_width(width);
                    if trail.on_resize() == ResizeDecision::Refit {
                        last_frame = Instant::now();
                    }
                    draw(&trail)?;
                }
                _ => {}
            }
        }

        if trail.is_animating() {
            let now = Instant::now();
            trail.tick(now.duration_since(last_frame));
            last_frame = now;
            draw(&trail)?;
        }
    }

    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn draw(trail: &Trail<TextContainer>) -> io::Result<()> {
    let mut out = io::stdout();
    let state = trail.state();
    queue!(
        out,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All)
    )?;
    write!(out, "{}", trail.host().render_line())?;
    queue!(out, cursor::MoveTo(0, 2))?;
    write!(
        out,
        "width {}  shown {}  used {}  next {}",
        state.container_width,
        state.shown_count,
        state.total_shown_width,
        state
            .next_hidden_width
            .map_or_else(|| "-".to_string(), |w| w.to_string()),
    )?;
    out.flush()
}
