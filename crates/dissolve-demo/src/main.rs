#![forbid(unsafe_code)]

//! Dissolve demo: a label that fades in and out on a repeating timer.
//!
//! # Running
//!
//! ```sh
//! cargo run -p dissolve-demo
//! ```
//!
//! # Controls
//!
//! - `q` / Escape / Ctrl+C: quit
//!
//! Set `DISSOLVE_LOG=<filter>` (e.g. `dissolve=debug`) to append tracing
//! output to `dissolve-demo.log`; logs never touch the alternate screen.

use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use dissolve_core::easing::ease_in_out;
use dissolve_label::{FadeConfig, FadeController, ManualClock, Tick};

const TEXT: &str = "The quick brown fox jumps over the lazy dog";
const FRAME: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    init_logging();

    let config = FadeConfig::default()
        .fade_in_duration(Duration::from_secs(1))
        .fade_out_duration(Duration::from_secs(1))
        .auto_start(true)
        .easing(ease_in_out);
    let mut label = FadeController::new(config, ManualClock::new());
    label.set_text(TEXT);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let result = run(&mut label, &mut stdout);
    execute!(stdout, Show, ResetColor, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(label: &mut FadeController<ManualClock>, out: &mut impl Write) -> io::Result<()> {
    let start = Instant::now();
    let interval = label.config().fade_in_duration;
    let mut next_flip = interval;

    tracing::info!(text = TEXT, "demo starting");
    label.attached(Duration::ZERO);
    draw(label, out)?;

    loop {
        let now = start.elapsed();

        // Repeating timer alternating direction. A firing that lands
        // mid-run is swallowed by the controller's idempotence guards.
        if now >= next_flip {
            if label.is_faded_out() {
                label.fade_in(now);
            } else {
                label.fade_out(now);
            }
            next_flip += interval;
        }

        match label.on_frame_tick(now) {
            Tick::Redraw | Tick::Finished => draw(label, out)?,
            Tick::Idle => {}
        }

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                if is_quit(&key) {
                    tracing::info!("demo exiting");
                    return Ok(());
                }
            }
        }
    }
}

fn draw(label: &FadeController<ManualClock>, out: &mut impl Write) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let width = label.styled().display_width() as u16;
    let x = cols.saturating_sub(width) / 2;
    let y = rows / 2;

    queue!(out, Clear(ClearType::All), MoveTo(x, y))?;
    for grapheme in label.styled().iter() {
        // Alpha blending against the black background: scale the channel.
        let level = (grapheme.alpha() * 255.0).round() as u8;
        queue!(
            out,
            SetForegroundColor(Color::Rgb {
                r: level,
                g: level,
                b: level
            }),
            Print(grapheme.cluster())
        )?;
    }
    out.flush()
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn init_logging() {
    let Ok(filter) = std::env::var("DISSOLVE_LOG") else {
        return;
    };
    let Ok(file) = File::create("dissolve-demo.log") else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
