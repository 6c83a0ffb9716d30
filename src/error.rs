use thiserror::Error;

/// Why the background could not be mounted.
#[derive(Debug, Error)]
pub enum MountError {
    /// The page cannot host the animation (no window, document, body or 2D
    /// context). Mounting degrades to an inert handle.
    #[error("{0} unavailable")]
    Unavailable(&'static str),
    /// The browser refused an event subscription. Surfaced to the page.
    #[error("failed to register `{event}` listener: {detail}")]
    Listener { event: &'static str, detail: String },
}

impl MountError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, MountError::Unavailable(_))
    }
}
