use super::{EventWiring, Listener};
use crate::constants::{EV_RESIZE, EV_SCROLL};
use crate::dom;
use crate::error::MountError;
use instant::Instant;
use web_sys as web;

pub fn wire_resize(w: &EventWiring) -> Result<Listener, MountError> {
    let window = w.window.clone();
    let layer = w.layer.clone();
    let animator = w.animator.clone();
    Listener::attach(&w.window, EV_RESIZE, move |_ev: web::Event| {
        let size = dom::viewport_size(&window);
        layer.sync_size(size);
        animator.borrow_mut().resize(size);
    })
}

pub fn wire_scroll(w: &EventWiring) -> Result<Listener, MountError> {
    let animator = w.animator.clone();
    Listener::attach(&w.window, EV_SCROLL, move |_ev: web::Event| {
        animator.borrow_mut().scrolled(Instant::now());
    })
}
