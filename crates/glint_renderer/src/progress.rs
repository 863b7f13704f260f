//! Progress reporting for renders.

/// Sink for human-readable render progress messages.
///
/// Messages are purely observational; nothing a sink does can change the
/// rendered image.
pub trait RenderLog {
    fn log(&self, message: &str);
}

/// Forwards progress to the `log` facade at info level.
///
/// Timestamps and filtering come from whichever logger the binary installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl RenderLog for LogProgress {
    fn log(&self, message: &str) {
        log::info!("{}", message);
    }
}

impl<F: Fn(&str)> RenderLog for F {
    fn log(&self, message: &str) {
        self(message)
    }
}
