// Process-level failures. The raster kernels never fail; only the window can.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed (no display, bad size, ...).
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Pushing the frame buffer to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_stage() {
        let e = Error::WindowInit("no display".into());
        assert_eq!(e.to_string(), "Window init error: no display");

        let e = Error::WindowUpdate("size mismatch".into());
        assert_eq!(e.to_string(), "Window update error: size mismatch");
    }
}
