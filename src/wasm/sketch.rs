use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use super::gl::{context, FlatSurface};
use super::status::DomStatus;
use crate::config::SKETCH_CANVAS_SIDE;
use crate::geom::{to_ndc, Point};
use crate::gesture::Sketch;
use crate::scene::draw_sketch;

struct SketchDemo {
    canvas: HtmlCanvasElement,
    sketch: Sketch,
    surface: FlatSurface,
    status: DomStatus,
}

impl SketchDemo {
    fn pointer(&self, event: &MouseEvent) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        let x = event.client_x() as f64 - rect.left();
        let y = event.client_y() as f64 - rect.top();
        to_ndc(x, y, self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn render(&mut self) {
        draw_sketch(&self.sketch, &mut self.surface);
    }

    fn mouse_down(&mut self, event: &MouseEvent) {
        event.prevent_default();
        event.stop_propagation();
        let at = self.pointer(event);
        if self.sketch.pointer_down(at, &mut self.status) {
            self.render();
        }
    }

    fn mouse_move(&mut self, event: &MouseEvent) {
        let at = self.pointer(event);
        if self.sketch.pointer_move(at) {
            self.render();
        }
    }

    fn mouse_up(&mut self) {
        if self.sketch.pointer_up(&mut self.status) {
            self.render();
        }
    }

    fn key_down(&mut self, event: &KeyboardEvent) {
        if event.key() == "Escape" {
            self.sketch.reset(&mut self.status);
            self.render();
        }
    }
}

fn listen(
    target: &web_sys::EventTarget,
    kind: &str,
    demo: &Rc<RefCell<SketchDemo>>,
    handler: fn(&mut SketchDemo, &web_sys::Event),
) -> Result<(), JsValue> {
    let demo = demo.clone();
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        handler(&mut demo.borrow_mut(), &event);
    }) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Circle then segment by mouse drag; the crossing points are drawn once the
/// segment is released. `Escape` starts over.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let document = window()
        .ok_or("no window")?
        .document()
        .ok_or("no document")?;

    canvas.set_width(SKETCH_CANVAS_SIDE);
    canvas.set_height(SKETCH_CANVAS_SIDE);
    let gl = context(&canvas)?;
    gl.viewport(0, 0, SKETCH_CANVAS_SIDE as i32, SKETCH_CANVAS_SIDE as i32);
    gl.clear_color(0.1, 0.2, 0.3, 1.0);

    let mut demo = SketchDemo {
        canvas: canvas.clone(),
        sketch: Sketch::new(),
        surface: FlatSurface::new(&gl)?,
        status: DomStatus::new(&document),
    };
    demo.sketch.announce(&mut demo.status);
    demo.render();
    let demo = Rc::new(RefCell::new(demo));

    listen(&canvas, "mousedown", &demo, |d, e| {
        if let Some(e) = e.dyn_ref::<MouseEvent>() {
            d.mouse_down(e);
        }
    })?;
    listen(&canvas, "mousemove", &demo, |d, e| {
        if let Some(e) = e.dyn_ref::<MouseEvent>() {
            d.mouse_move(e);
        }
    })?;
    listen(&canvas, "mouseup", &demo, |d, _| d.mouse_up())?;
    listen(&document, "keydown", &demo, |d, e| {
        if let Some(e) = e.dyn_ref::<KeyboardEvent>() {
            d.key_down(e);
        }
    })?;

    info!("intersection demo ready");
    Ok(())
}
