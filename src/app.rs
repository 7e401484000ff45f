// The event loop shared by all demos.
// One thread, one window: poll inputs, let the scene handle each one to
// completion, and replot the whole scene only when something changed.

use log::{debug, info};

use crate::cli::Cli;
use crate::draw::Drawer;
use crate::error::Error;
use crate::input::Response;
use crate::scene::Scene;
use crate::types::FrameBuffer;

pub fn run<S: Scene>(mut scene: S, cli: &Cli) -> Result<(), Error> {
    println!("=== {} ===", scene.title());
    for line in scene.help() {
        println!("{line}");
    }

    let (w, h) = (cli.width as usize, cli.height as usize);
    let mut drawer = Drawer::new(scene.title(), w, h, cli.fps)?;
    let mut screen = FrameBuffer::new(w, h);
    let mut dirty = true; // first frame

    while drawer.is_open() {
        /* 1) Window resized? Reallocate so device pixels stay 1:1 with the window. */
        let (ww, wh) = drawer.size();
        if ww > 0 && wh > 0 && (ww, wh) != (screen.width, screen.height) {
            info!("window resized to {ww}x{wh}");
            screen.resize(ww, wh);
            dirty = true;
        }

        /* 2) Inputs, strictly one at a time. */
        for input in drawer.poll_inputs(screen.height) {
            debug!("input: {input:?}");
            match scene.handle(input) {
                Response::Quit => {
                    info!("exit requested");
                    return Ok(());
                }
                Response::Redraw => dirty = true,
                Response::Ignored => {}
            }
        }

        /* 3) Full replot only after a state change; otherwise just pump events. */
        if dirty {
            redraw(&scene, &mut screen);
            drawer.present(&screen)?;
            dirty = false;
        } else {
            drawer.idle();
        }
    }

    Ok(())
}

/// Clear the buffer and plot the scene into it from scratch.
pub fn redraw<S: Scene>(scene: &S, screen: &mut FrameBuffer) {
    let (w, h) = (screen.width as i32, screen.height as i32);
    screen.clear(scene.background());
    scene.render(screen, w, h);
}
