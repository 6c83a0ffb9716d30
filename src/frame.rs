use crate::render::CanvasPainter;
use instant::Instant;
use netfield_core::Animator;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` driver for an [`Animator`].
///
/// The tick closure reschedules itself for as long as the animator asks for
/// more frames. `cancel` flips the shared `alive` flag, cancels the pending
/// request and drops the closure; a callback that still fires afterwards
/// sees the flag and returns without touching the animator.
pub struct FrameLoop {
    alive: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn start(animator: Rc<RefCell<Animator>>, mut painter: CanvasPainter) -> Self {
        let alive = Rc::new(Cell::new(true));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let alive_tick = alive.clone();
        let pending_tick = pending.clone();
        // weak so the closure does not keep itself alive
        let self_ref: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !alive_tick.get() {
                return;
            }
            let more = animator.borrow_mut().advance(Instant::now(), &mut painter);
            if !more || !alive_tick.get() {
                alive_tick.set(false);
                return;
            }
            if let Some(slot) = self_ref.upgrade() {
                if let Some(cb) = slot.borrow().as_ref() {
                    pending_tick.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            pending.set(request_frame(cb));
        }
        if pending.get().is_none() {
            log::warn!("[frame] could not schedule the first frame");
            alive.set(false);
        }
        Self {
            alive,
            pending,
            tick,
        }
    }

    pub fn is_running(&self) -> bool {
        self.alive.get()
    }

    /// Stop the loop. Safe to call repeatedly.
    pub fn cancel(&self) {
        self.alive.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
