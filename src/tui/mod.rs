//! Terminal UI for gridtactoe.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridtactoe::{GameConfig, RandomChooser};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tracing::{error, info};

use app::App;

/// Runs the game shell until the player quits.
pub fn run(config: &GameConfig, chooser: RandomChooser) -> Result<()> {
    info!("starting terminal shell");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, chooser);
    let res = run_game(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "game loop error");
    }
    res
}

/// Event loop: one event at a time, fully processed before the next is
/// read.
fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Idle tick keeps the screen fresh without busy-waiting.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    info!("player quit");
                    return Ok(());
                }
                KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    app.move_cursor(key.code);
                }
                KeyCode::Enter | KeyCode::Char(' ') => app.place_at_cursor(),
                _ => {}
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let size = terminal.size()?;
                    let frame_area = Rect::new(0, 0, size.width, size.height);
                    if let Some((row, col)) = ui::cell_at(frame_area, app, mouse.column, mouse.row)
                    {
                        app.place(row, col);
                    }
                }
            }
            _ => {}
        }
    }
}
