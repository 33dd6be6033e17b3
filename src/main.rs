use bollard_striker::core::constants::FRAME_INTERVAL_MS;
use bollard_striker::utils::{build_info, logging};
use bollard_striker::{ui, Flow, GameApp, InputCollector, LeaderboardStore, Settings, UiEvent};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::Rng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Bollard Striker - dodge the bollards, top the leaderboard\n");
                println!("Usage: bollard-striker [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Controls: ←/→ or a/d to steer, Enter to confirm, Ctrl+Q to quit.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'bollard-striker --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    match logging::init_file_logger() {
        Ok(path) => log::info!(
            "Starting {}, logging to {}",
            build_info::version_line(),
            path.display()
        ),
        Err(e) => eprintln!("Warning: file logging disabled: {}", e),
    }

    let settings_path = Settings::default_path();
    let settings = match &settings_path {
        Ok(path) => Settings::load(path),
        Err(e) => {
            log::warn!("No config directory, using default settings: {}", e);
            Settings::default()
        }
    };

    let store = LeaderboardStore::open_or_local(&settings.leaderboard_file);
    log::info!("Leaderboard file: {}", store.path().display());

    let mut app = GameApp::new(store, settings, rand::thread_rng());
    if let Ok(path) = settings_path {
        app = app.with_settings_path(path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    // Release events make steering stop as soon as the key comes up
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    if enhanced_keys {
        terminal
            .backend_mut()
            .execute(PopKeyboardEnhancementFlags)?;
    }
    terminal.backend_mut().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Exited with error: {}", e);
    }
    log::info!("Goodbye");
    result
}

/// Fixed-rate frame loop: draw, gather input until the frame deadline, step.
fn run<B: Backend, R: Rng>(terminal: &mut Terminal<B>, app: &mut GameApp<R>) -> io::Result<()> {
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut input = InputCollector::new();

    loop {
        let frame_start = Instant::now();
        terminal.draw(|frame| ui::draw(frame, &*app))?;

        let viewport = ui::viewport_for(terminal.size()?);
        let deadline = frame_start + frame_interval;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            input.handle_event(event::read()?, &viewport);
        }

        let flow = app.step(&input.finish_frame());
        let events = app.take_events();
        if app.settings().sound_enabled {
            play_cues(&events);
        }
        if flow == Flow::Exit {
            return Ok(());
        }
    }
}

/// The terminal bell is the only sound a terminal reliably has.
fn play_cues(events: &[UiEvent]) {
    let rings = events
        .iter()
        .any(|e| matches!(e, UiEvent::Collision | UiEvent::LevelUp | UiEvent::GameOver));
    if rings {
        let mut out = io::stdout();
        // Best effort
        let _ = out.write_all(b"\x07").and_then(|_| out.flush());
    }
}
