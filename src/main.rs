// Three small raster-algorithm visualizers behind one binary:
// • lines: click twice for a thick Bresenham stroke; +/- width, R brush, C clear.
// • clip:  click twice for a line; arrows move the clip window, [ ] resize it,
//          C clear, R reset, ESC quits.
// • rings: +/- ring count, C gradient, R reset, ESC quits.
// Closing the window always quits.

mod app;
mod brush;
mod circle;
mod cli;
mod clip;
mod draw;
mod error;
mod gradient;
mod input;
mod line;
mod scene;
mod types;

use clap::Parser;
use cli::{Cli, Demo};
use error::Error;
use scene::{clipping::ClipScene, lines::LineScene, rings::RingScene};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::debug!("starting {:?} at {}x{}", cli.demo, cli.width, cli.height);

    match cli.demo {
        Demo::Lines => app::run(LineScene::default(), &cli),
        Demo::Clip => app::run(ClipScene::default(), &cli),
        Demo::Rings => app::run(RingScene::default(), &cli),
    }
}
