//! Numble terminal shell.
//!
//! Owns the terminal, the 1-second timer, and all persistence IO; every game
//! decision lives in the core and reaches the shell as events and flags.

use chrono::Utc;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use numble::config::{load_config, save_config};
use numble::core::constants::INPUT_POLL_MS;
use numble::core::game_logic::new_session;
use numble::core::game_state::Mode;
use numble::input::{handle_key, InputResult, Overlay};
use numble::stats::{load_stats, load_streak, save_stats, save_streak};
use numble::ui::draw_ui;
use numble::{build_info, Streak};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "numble {} ({} {})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Numble - Terminal Number Deduction Puzzle\n");
                println!("Usage: numble [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'numble --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut config = load_config();
    let mut stats = load_stats();
    let mut streak = load_streak();

    let today = Utc::now().date_naive();

    // A missed day breaks the chain; repair once per load, before the
    // session can consult the streak.
    if config.mode == Mode::Daily {
        let reconciled = streak.reconcile(today);
        if reconciled != streak {
            streak = reconciled;
            save_streak(&streak).ok();
        }
    }

    let mut rng = rand::thread_rng();
    let mut session = new_session(config.mode, config.difficulty, today, &mut rng);
    let mut overlay = Overlay::None;

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(
        &mut terminal,
        &mut session,
        &mut config,
        &mut streak,
        &mut stats,
        &mut overlay,
        &mut rng,
    );

    save_config(&config).ok();

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop<B: ratatui::backend::Backend, R: rand::Rng>(
    terminal: &mut Terminal<B>,
    session: &mut numble::GameSession,
    config: &mut numble::GameConfig,
    streak: &mut Streak,
    stats: &mut numble::Stats,
    overlay: &mut Overlay,
    rng: &mut R,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let today = Utc::now().date_naive();

        terminal.draw(|frame| draw_ui(frame, session, streak, stats, config, overlay, today))?;

        // One observational tick per elapsed second; ticks after a win are
        // no-ops inside the session.
        while last_tick.elapsed() >= Duration::from_secs(1) {
            session.second_tick();
            last_tick += Duration::from_secs(1);
        }

        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match handle_key(key, session, config, streak, stats, overlay, today, rng) {
            InputResult::Continue => {}
            InputResult::Outcome(outcome) => {
                // Write-behind for the snapshots the win just replaced.
                if outcome.streak_changed {
                    save_streak(streak).ok();
                }
                if outcome.stats_changed {
                    save_stats(stats).ok();
                }
            }
            InputResult::SessionReset => {
                last_tick = Instant::now();
            }
            InputResult::SettingsChanged { session_reset } => {
                save_config(config).ok();
                if session_reset {
                    last_tick = Instant::now();
                }
            }
            InputResult::Quit => return Ok(()),
        }
    }
}
