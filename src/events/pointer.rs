use super::{EventWiring, Listener};
use crate::constants::{EV_MOUSE_LEAVE, EV_MOUSE_MOVE};
use crate::error::MountError;
use glam::Vec2;
use instant::Instant;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in viewport coordinates, which are surface coordinates
/// since the canvas covers the viewport from its top-left corner.
pub fn wire_mousemove(w: &EventWiring) -> Result<Listener, MountError> {
    let animator = w.animator.clone();
    Listener::attach(&w.window, EV_MOUSE_MOVE, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        animator.borrow_mut().pointer_moved(pos, Instant::now());
    })
}

pub fn wire_mouseleave(w: &EventWiring) -> Result<Listener, MountError> {
    let animator = w.animator.clone();
    let root: web::EventTarget = match w.document.document_element() {
        Some(el) => el.into(),
        None => w.document.clone().into(),
    };
    Listener::attach(&root, EV_MOUSE_LEAVE, move |_ev: web::Event| {
        animator.borrow_mut().pointer_left();
    })
}
