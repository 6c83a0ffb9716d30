// Tuning constants for the network background.
// Distances are in surface units (CSS pixels), speeds in units per frame.

// Population density
pub const MAX_PARTICLES: usize = 60; // hard cap bounding the O(n^2) link pass
pub const PX_PER_PARTICLE: f32 = 25.0; // one particle per this many px of viewport width

// Seeding ranges
pub const MAX_SPEED: f32 = 0.75; // velocity drawn from [-MAX_SPEED, MAX_SPEED] per axis
pub const MIN_RADIUS: f32 = 1.5;
pub const MAX_RADIUS: f32 = 4.0;

// Links between neighbours
pub const CONNECTION_DISTANCE: f32 = 150.0;
pub const LINK_ALPHA_MAX: f32 = 0.4; // alpha of a link between coincident particles
pub const LINK_WIDTH: f32 = 0.8;

// Pointer repulsion
pub const REPULSION_RADIUS: f32 = 120.0;
pub const REPULSION_STRENGTH: f32 = 5.0; // max nudge in units, reached at distance 0

// Event rate limiting (milliseconds)
pub const POINTER_THROTTLE_MS: u64 = 16; // ~60 Hz
pub const SCROLL_QUIET_MS: u64 = 150;

// Dot appearance
pub const DOT_RGB: [u8; 3] = [88, 196, 220];
pub const DOT_ALPHA: f32 = 0.9;
pub const GLOW_RGB: [u8; 3] = [88, 196, 220]; // #58c4dc
pub const GLOW_BLUR: f32 = 5.0;

// Link colour; alpha is computed per link
pub const LINK_RGB: [u8; 3] = [88, 196, 220];
