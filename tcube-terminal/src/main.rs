/// TCube - a bouncing, rotating ASCII cube
///
/// Renders the three front-facing sides of a spinning cube into the
/// terminal and bounces it off the window edges. Press Q, Esc, or
/// Ctrl-C to quit.
use anyhow::Result;
use nalgebra::{Point2, Vector2, Vector3};
use tcube_core::{Cube, Dynamics};
use tcube_terminal::TerminalApp;

fn main() -> Result<()> {
    let cube = Cube::new(Vector3::new(0.1, 0.2, 0.3), Point2::new(0.5, 0.5), 0.3);
    let dynamics = Dynamics::new(Vector2::new(0.01, 0.01), Vector3::new(0.05, 0.05, 0.0));

    let mut app = TerminalApp::new(cube, dynamics)?;
    app.run()
}
