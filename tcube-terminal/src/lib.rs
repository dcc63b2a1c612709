/// Terminal front end for the bouncing ASCII cube
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use nalgebra::Point2;
use tcube_core::{Cube, Dynamics, Viewport};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Fixed tick between frames (25 FPS).
const TICK: Duration = Duration::from_millis(40);

/// Main application struct driving the simulation loop.
pub struct TerminalApp {
    cube: Cube,
    dynamics: Dynamics,
    renderer: AsciiRenderer,
    running: bool,
}

impl TerminalApp {
    pub fn new(cube: Cube, dynamics: Dynamics) -> Result<Self> {
        let (columns, rows) = terminal::size()?;

        Ok(Self {
            cube,
            dynamics,
            renderer: AsciiRenderer::new(columns as usize, rows as usize),
            running: true,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Restore the terminal even when the loop failed.
        let _ = terminal::disable_raw_mode();
        let _ = execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen);

        result
    }

    fn main_loop(&mut self) -> Result<()> {
        while self.running {
            let frame_start = Instant::now();

            self.frame()?;

            // Spend the rest of the tick waiting for quit keys.
            let budget = TICK.saturating_sub(frame_start.elapsed());
            if event::poll(budget)? {
                self.handle_input()?;
            }
            let elapsed = frame_start.elapsed();
            if elapsed < TICK {
                std::thread::sleep(TICK - elapsed);
            }
        }
        Ok(())
    }

    /// One tick: visibility, raster, draw, collision, dynamics.
    fn frame(&mut self) -> Result<()> {
        let (columns, rows) = terminal::size()?;
        let viewport = match Viewport::new(columns, rows) {
            Some(viewport) => viewport,
            // Zero-sized terminal: skip the frame and poll again.
            None => return Ok(()),
        };
        self.renderer.resize(columns as usize, rows as usize);

        let faces = self.cube.visible_faces();
        let corners: ArrayVec<Point2<f64>, 12> =
            faces.iter().flat_map(|face| face.corners).collect();

        self.renderer.clear();
        self.renderer.render_faces(&faces, &viewport);
        let mut out = stdout();
        self.renderer.draw(&mut out)?;
        out.flush()?;

        if !corners.is_empty() {
            self.dynamics
                .handle_edge_collision(&corners, &mut self.cube, viewport.aspect)?;
        }
        self.dynamics.step(&mut self.cube);

        Ok(())
    }

    fn handle_input(&mut self) -> Result<()> {
        if let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.running = false;
                }
                _ => {}
            }
        }
        Ok(())
    }
}
