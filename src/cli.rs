// Command line: which demo to open and how big the window starts.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "raster-demos", version, about = "Interactive demos of classic 2D raster algorithms")]
pub struct Cli {
    #[command(subcommand)]
    pub demo: Demo,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Upper bound on window polls per second
    #[arg(long, default_value_t = 60)]
    pub fps: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Subcommand)]
pub enum Demo {
    /// Bresenham thick lines with square or round brushes
    Lines,
    /// Liang-Barsky clipping against a movable window
    Clip,
    /// Midpoint circles as concentric gradient rings
    Rings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_window() {
        let cli = Cli::try_parse_from(["raster-demos", "rings"]).expect("parses");
        assert_eq!(cli.demo, Demo::Rings);
        assert_eq!((cli.width, cli.height, cli.fps), (800, 600, 60));
    }

    #[test]
    fn size_flags_are_read() {
        let cli = Cli::try_parse_from(["raster-demos", "--width", "1024", "--height", "768", "clip"])
            .expect("parses");
        assert_eq!(cli.demo, Demo::Clip);
        assert_eq!((cli.width, cli.height), (1024, 768));
    }

    #[test]
    fn zero_size_and_unknown_demo_are_rejected() {
        assert!(Cli::try_parse_from(["raster-demos", "--width", "0", "lines"]).is_err());
        assert!(Cli::try_parse_from(["raster-demos", "polygons"]).is_err());
        assert!(Cli::try_parse_from(["raster-demos"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
