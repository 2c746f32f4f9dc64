/// Result type for application actions.
pub(crate) type Result<T> = std::result::Result<T, AppError>;

/// Error codes raised while bringing up or running the SDL shell.
#[derive(Debug)]
pub enum AppError {
    Sdl(sdl3::Error), // SDL subsystem could not be initialized or polled.
    Window(String),   // Window or renderer creation failed.
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Sdl(why) => write!(f, "SDL Error: {why}"),
            AppError::Window(why) => write!(f, "Window Error: {why}"),
        }
    }
}

impl std::error::Error for AppError {}
