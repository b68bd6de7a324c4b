mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use arcade_shooter::clock::Pacer;
use arcade_shooter::compute::{apply_intent, init_state, restart, snapshot, tick};
use arcade_shooter::consts::TICK_MS;
use arcade_shooter::entities::GameState;
use arcade_shooter::input::{map_key, Intent};
use arcade_shooter::spawner::RngSource;

/// Upper bound on ticks run back-to-back after a stall, so a long pause
/// doesn't fast-forward the game.
const MAX_CATCHUP_TICKS: u32 = 4;

const SEED_VAR: &str = "ARCADE_SHOOTER_SEED";
const LOG_FILE_VAR: &str = "ARCADE_SHOOTER_LOG";

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode on the alternate screen, so log lines go to a
/// file.  Nothing is written unless `RUST_LOG` is set.
fn init_logging() -> std::io::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let path = std::env::var_os(LOG_FILE_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("arcade-shooter.log"));
    let file = File::create(&path)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("logging to {}", path.display());
    Ok(())
}

fn session_seed() -> u64 {
    std::env::var(SEED_VAR)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| rand::thread_rng().gen())
}

// ── Key translation ───────────────────────────────────────────────────────────

/// Platform key name for a terminal key code, as the input mapper expects.
fn key_name(code: &KeyCode) -> Option<String> {
    match code {
        KeyCode::Up => Some("ArrowUp".to_string()),
        KeyCode::Down => Some("ArrowDown".to_string()),
        KeyCode::Left => Some("ArrowLeft".to_string()),
        KeyCode::Right => Some("ArrowRight".to_string()),
        KeyCode::Char(' ') => Some("Space".to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

enum Command {
    Quit,
    Restart,
    Play(Intent),
}

fn command_for(key: &KeyEvent, state: &GameState) -> Option<Command> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        // Restart only as an explicit confirmation on the game-over screen.
        KeyCode::Char('r') | KeyCode::Char('R') if state.is_over() => Some(Command::Restart),
        ref code => key_name(code).map(|name| Command::Play(map_key(&name))),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Every key press (and key repeat) is one discrete intent, applied as soon
/// as it is drained.  Ticks run on a fixed 50 ms cadence; the frame is
/// rendered after each batch.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    rng: &mut RngSource<Pcg32>,
) -> std::io::Result<()> {
    let mut state = init_state();
    let mut pacer = Pacer::new(Duration::from_millis(TICK_MS));

    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match command_for(&key, &state) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Restart) => {
                    state = restart(&state);
                    pacer.reset();
                }
                Some(Command::Play(intent)) => state = apply_intent(&state, intent),
                None => {}
            }
        }

        let (width, height) = terminal::size()?;
        display::render(out, &snapshot(&state), width, height)?;

        let due = pacer.wait().min(MAX_CATCHUP_TICKS);
        for _ in 0..due {
            state = tick(&state, rng);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging()?;
    let seed = session_seed();
    log::info!("session seed {}", seed);
    let mut rng = RngSource(Pcg32::seed_from_u64(seed));

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx, &mut rng);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("terminal error: {}", e);
    }
    result
}
