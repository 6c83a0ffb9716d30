use crate::constants::{CANVAS_CLASS, CANVAS_STYLE, CONTAINER_CLASS, LAYER_STYLE};
use crate::error::MountError;
use netfield_core::Surface;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Current `innerWidth` x `innerHeight` in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Surface {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Surface::from_viewport(read(window.inner_width()), read(window.inner_height()))
}

/// The fixed, full-viewport container and the canvas inside it.
pub struct Layer {
    container: web::Element,
    canvas: web::HtmlCanvasElement,
}

impl Layer {
    /// Build the layer and put it first in `<body>` so it renders beneath
    /// the page content.
    pub fn create(document: &web::Document) -> Result<Self, MountError> {
        let body = document.body().ok_or(MountError::Unavailable("document body"))?;
        let container = document
            .create_element("div")
            .map_err(|_| MountError::Unavailable("layer container"))?;
        container.set_class_name(CONTAINER_CLASS);
        _ = container.set_attribute("style", LAYER_STYLE);
        _ = container.set_attribute("aria-hidden", "true");

        let canvas = document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
            .ok_or(MountError::Unavailable("canvas element"))?;
        canvas.set_class_name(CANVAS_CLASS);
        _ = canvas.set_attribute("style", CANVAS_STYLE);

        container
            .append_child(&canvas)
            .map_err(|_| MountError::Unavailable("layer container"))?;
        body.prepend_with_node_1(&container)
            .map_err(|_| MountError::Unavailable("document body"))?;
        Ok(Self { container, canvas })
    }

    pub fn context_2d(&self) -> Result<web::CanvasRenderingContext2d, MountError> {
        self.canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(MountError::Unavailable("2d canvas context"))
    }

    /// Match the canvas backing store to the surface, one unit per pixel.
    pub fn sync_size(&self, surface: Surface) {
        self.canvas.set_width(surface.width as u32);
        self.canvas.set_height(surface.height as u32);
    }

    pub fn remove(&self) {
        self.container.remove();
    }
}
