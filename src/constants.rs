/// DOM and event wiring for the background layer.
///
/// The layer sits fixed behind the page, covers the viewport and lets every
/// pointer event through to the content above it.
pub const CONTAINER_CLASS: &str = "bg-network-container";
pub const CANVAS_CLASS: &str = "network-canvas";

pub const LAYER_STYLE: &str = "position:fixed;top:0;left:0;width:100vw;height:100vh;\
                               pointer-events:none;z-index:-1;overflow:hidden";
pub const CANVAS_STYLE: &str = "display:block;width:100%;height:100%";

// Window events
pub const EV_RESIZE: &str = "resize";
pub const EV_MOUSE_MOVE: &str = "mousemove";
pub const EV_SCROLL: &str = "scroll";
// Fired on the root element when the pointer leaves the viewport
pub const EV_MOUSE_LEAVE: &str = "mouseleave";
