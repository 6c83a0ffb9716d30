pub mod pointer;
pub mod viewport;

use crate::dom::Layer;
use crate::error::MountError;
use netfield_core::Animator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One event subscription. Dropping it unsubscribes.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, MountError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| MountError::Listener {
                event,
                detail: format!("{:?}", e),
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    pub fn event(&self) -> &'static str {
        self.event
    }

    fn detach(&self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}

#[derive(Clone)]
pub struct EventWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub animator: Rc<RefCell<Animator>>,
    pub layer: Rc<Layer>,
}

/// Subscribe to resize, pointer and scroll events. On failure every
/// subscription made so far is dropped again before the error is returned.
pub fn wire_listeners(w: &EventWiring) -> Result<Vec<Listener>, MountError> {
    let mut listeners = Vec::with_capacity(4);
    listeners.push(viewport::wire_resize(w)?);
    listeners.push(pointer::wire_mousemove(w)?);
    listeners.push(pointer::wire_mouseleave(w)?);
    listeners.push(viewport::wire_scroll(w)?);
    log::debug!(
        "[events] listening to {:?}",
        listeners.iter().map(Listener::event).collect::<Vec<_>>()
    );
    Ok(listeners)
}
