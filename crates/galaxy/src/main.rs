use std::{
    fs::{self, File},
    sync::Mutex,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use galaxy_background::GalaxyState;
use galaxy_config::Config;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
};
use tracing::{Level, info, warn};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&config);
    if let Err(err) = &loaded {
        warn!(error = %err, "using default configuration");
    }

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// Send tracing output to a log file; the terminal belongs to the animation.
fn init_logging(config: &Config) {
    let Some(dir) = galaxy_config::log_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("galaxy.log")) else {
        return;
    };

    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Is the animation clock stopped?
    paused: bool,
    /// Show the key help line.
    show_help: bool,
    /// Animation time, excluding paused periods.
    elapsed_ms: u64,
    /// When the clock was last advanced.
    last_tick: Instant,
    /// Delay between frames.
    frame_interval: Duration,
    /// Generated galaxy and its animations.
    galaxy: GalaxyState,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            running: false,
            paused: false,
            show_help: true,
            elapsed_ms: 0,
            last_tick: Instant::now(),
            frame_interval: Duration::from_millis(config.frame_interval_ms.max(1)),
            galaxy: GalaxyState::new(config.planets, config.stars, config.background, seed),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.last_tick = Instant::now();
        while self.running {
            self.tick(Instant::now());
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        info!(elapsed_ms = self.elapsed_ms, "galaxy stopped");
        Ok(())
    }

    /// Advance the animation clock unless paused.
    fn tick(&mut self, now: Instant) {
        if !self.paused {
            let delta = now.saturating_duration_since(self.last_tick);
            self.elapsed_ms = self.elapsed_ms.saturating_add(delta.as_millis() as u64);
        }
        self.last_tick = now;
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        self.galaxy.render(frame, self.elapsed_ms);

        if !self.show_help {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Galaxy
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let accent = Color::Cyan;
        let pause_label = if self.paused { " resume  " } else { " pause  " };
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "p".bold().fg(accent),
            pause_label.dark_gray(),
            "r".bold().fg(accent),
            " reseed  ".dark_gray(),
            "h".bold().fg(accent),
            " hide help".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame interval as timeout so the animation keeps moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('p') | KeyCode::Char(' ')) => self.toggle_pause(),
            (_, KeyCode::Char('r')) => self.reseed(rand::random()),
            (_, KeyCode::Char('h')) => self.show_help = !self.show_help,
            _ => {}
        }
    }

    /// Stop or restart the animation clock.
    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!(paused = self.paused, elapsed_ms = self.elapsed_ms, "toggled pause");
    }

    /// Generate a new galaxy and restart its animations.
    fn reseed(&mut self, seed: u64) {
        self.galaxy.reseed(seed);
        self.elapsed_ms = 0;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
