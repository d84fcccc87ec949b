use std::cell::Cell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, KeyboardEvent, WebGl2RenderingContext as GL};

use super::gl::{context, Program, VertexStream, FLAT_FRAG, MOVER_VERT};
use super::render::{stop_on_unload, AnimationLoop};
use super::status::DomStatus;
use crate::config::TRIANGLE_CANVAS_SIDE;
use crate::gesture::{StatusLine, StatusSink};
use crate::mover::{Mover, TRIANGLE};

/// Arrow keys move the triangle, `r`/`g`/`b` recolor it and `f` flips it.
/// Drawn every animation frame until the page is unloaded.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    canvas.set_width(TRIANGLE_CANVAS_SIDE);
    canvas.set_height(TRIANGLE_CANVAS_SIDE);
    let gl = context(&canvas)?;
    gl.viewport(0, 0, TRIANGLE_CANVAS_SIDE as i32, TRIANGLE_CANVAS_SIDE as i32);
    gl.clear_color(0.0, 0.0, 0.0, 1.0);

    let program = Program::link(&gl, MOVER_VERT, FLAT_FRAG)?;
    let stream = VertexStream::new(&gl, &program, "a_position")?;
    let color = program.uniform("u_color");
    let offset = program.uniform("u_offset");
    let flip = program.uniform("u_flip");

    DomStatus::new(&document).update(StatusLine::First, "Use arrow keys to move the triangle");

    let mover = Rc::new(Cell::new(Mover::default()));

    let on_key = {
        let mover = mover.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let mut m = mover.get();
            if m.key(&event.key()) {
                mover.set(m);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    let frames = AnimationLoop::start(move || {
        let m = mover.get();
        gl.clear(GL::COLOR_BUFFER_BIT);
        program.bind();
        gl.uniform4fv_with_f32_array(color.as_ref(), &m.tint.rgba());
        gl.uniform2f(offset.as_ref(), m.x, m.y);
        gl.uniform1f(flip.as_ref(), m.flip_scale());
        stream.draw(GL::TRIANGLES, &TRIANGLE);
    })?;

    stop_on_unload(Rc::new(frames))?;

    info!("triangle demo running");
    Ok(())
}
