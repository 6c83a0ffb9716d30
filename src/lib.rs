#![cfg(target_arch = "wasm32")]
use crate::error::MountError;
use crate::events::{EventWiring, Listener};
use crate::frame::FrameLoop;
use crate::render::CanvasPainter;
use netfield_core::Animator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod error;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("netfield-web loaded");
    Ok(())
}

/// Everything a live background holds on to.
struct Mounted {
    animator: Rc<RefCell<Animator>>,
    listeners: Vec<Listener>,
    frame: FrameLoop,
    layer: Rc<dom::Layer>,
}

impl Mounted {
    fn teardown(self) {
        let Mounted {
            animator,
            listeners,
            frame,
            layer,
        } = self;
        frame.cancel();
        drop(listeners);
        animator.borrow_mut().teardown();
        layer.remove();
    }
}

/// Handle returned to the page. An inert handle (environment without a 2D
/// canvas) does nothing; unmounting it is still fine.
#[wasm_bindgen]
pub struct Background {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl Background {
    /// Whether the animation is mounted and running.
    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner
            .as_ref()
            .map(|m| m.frame.is_running())
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.inner
            .as_ref()
            .map(|m| m.animator.borrow().particles().len())
            .unwrap_or(0)
    }

    /// Remove listeners, stop the frame loop and take the canvas off the page.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.inner.take() {
            mounted.teardown();
            log::info!("[mount] background unmounted");
        }
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount the animated background behind the page content.
///
/// Returns an inert handle when the page cannot host it, and throws only if
/// the browser refuses an event subscription.
#[wasm_bindgen(js_name = mountBackground)]
pub fn mount_background() -> Result<Background, JsValue> {
    match mount() {
        Ok(mounted) => Ok(Background {
            inner: Some(mounted),
        }),
        Err(e) if e.is_unavailable() => {
            log::warn!("[mount] {}; background disabled", e);
            Ok(Background { inner: None })
        }
        Err(e) => {
            log::error!("[mount] {}", e);
            Err(js_sys::Error::new(&e.to_string()).into())
        }
    }
}

fn mount() -> Result<Mounted, MountError> {
    let (window, document) =
        dom::window_document().ok_or(MountError::Unavailable("window document"))?;
    let layer = Rc::new(dom::Layer::create(&document)?);
    let ctx = match layer.context_2d() {
        Ok(ctx) => ctx,
        Err(e) => {
            layer.remove();
            return Err(e);
        }
    };

    let viewport = dom::viewport_size(&window);
    layer.sync_size(viewport);
    let animator = Rc::new(RefCell::new(Animator::with_defaults(
        viewport,
        rand::random(),
    )));
    log::info!(
        "[mount] {} particles on {}x{}",
        animator.borrow().particles().len(),
        viewport.width,
        viewport.height
    );

    let wiring = EventWiring {
        window,
        document,
        animator: animator.clone(),
        layer: layer.clone(),
    };
    let listeners = match events::wire_listeners(&wiring) {
        Ok(l) => l,
        Err(e) => {
            animator.borrow_mut().teardown();
            layer.remove();
            return Err(e);
        }
    };

    let frame = FrameLoop::start(animator.clone(), CanvasPainter::new(ctx));
    Ok(Mounted {
        animator,
        listeners,
        frame,
        layer,
    })
}
