// Visualizer abstraction so a finished trace can go to different renderers.

use std::io::{self, Write};
use std::sync::Once;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyCode},
    execute, terminal,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::ui::draw;

/// Consumer of a completed voltage trace. The simulation never calls this itself.
pub trait Visualizer {
    fn visualize(&mut self, trace: &[f64]) -> Result<()>;
}

/// Writes `step,voltage` rows.
pub struct CsvWriter<W: Write> {
    out: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Visualizer for CsvWriter<W> {
    fn visualize(&mut self, trace: &[f64]) -> Result<()> {
        writeln!(self.out, "step,voltage")?;
        for (t, v) in trace.iter().enumerate() {
            writeln!(self.out, "{},{}", t, v)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Interactive line chart. Controls: [←/→] Pan, [+/-] Zoom, [q] Quit
pub struct TerminalChart {
    threshold: f64,
    width: usize,
}

impl TerminalChart {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, width: 200 }
    }
}

static PANIC_HOOK: Once = Once::new();

fn restore_terminal() -> Result<()> {
    terminal::disable_raw_mode()?;
    // Leave alternate screen and show cursor
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Ensure the terminal is restored on panic. Installed at most once per process.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            default_hook(panic_info);
        }));
    });
}

/// Run `setup`; if it fails, run `cleanup` before handing the error back.
fn or_cleanup<T>(setup: impl FnOnce() -> Result<T>, cleanup: impl FnOnce() -> Result<()>) -> Result<T> {
    let outcome = setup();
    if outcome.is_err() {
        let _ = cleanup();
    }
    outcome
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    terminal::enable_raw_mode()?;
    or_cleanup(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, terminal::EnterAlternateScreen)?;
            let mut term = Terminal::new(CrosstermBackend::new(stdout))?;
            term.clear()?;
            Ok(term)
        },
        restore_terminal,
    )
}

impl Visualizer for TerminalChart {
    fn visualize(&mut self, trace: &[f64]) -> Result<()> {
        install_panic_hook();
        let mut term = setup_terminal()?;

        let mut app = App::new(trace.to_vec(), self.threshold, self.width);
        let outcome = event_loop(&mut term, &mut app);

        // Cleanup even when drawing failed
        restore_terminal()?;
        outcome
    }
}

fn event_loop(term: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let poll = Duration::from_millis(200);
    loop {
        draw(term, app)?;
        if event::poll(poll)? {
            if let CEvent::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Left => app.pan_left(),
                    KeyCode::Right => app.pan_right(),
                    KeyCode::Char('+') | KeyCode::Char('=') => app.zoom_in(),
                    KeyCode::Char('-') => app.zoom_out(),
                    KeyCode::Home => app.jump_start(),
                    KeyCode::End => app.jump_end(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}
