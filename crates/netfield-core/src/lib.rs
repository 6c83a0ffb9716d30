//! Platform-independent core of the animated network background.
//!
//! Nothing in here touches the browser: the frontend owns the canvas, the
//! event listeners and the frame loop, and drives an [`Animator`] through
//! plain method calls and the [`Painter`] seam.

pub mod animator;
pub mod constants;
pub mod field;
pub mod paint;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod scroll;
pub mod surface;

pub use animator::*;
pub use field::*;
pub use paint::*;
pub use params::*;
pub use particle::*;
pub use pointer::*;
pub use scroll::*;
pub use surface::*;
