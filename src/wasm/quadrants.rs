use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, WebGl2RenderingContext as GL};

use super::gl::context;
use crate::quadrants::{quadrants, square_side};

fn draw(gl: &GL, width: u32, height: u32) {
    gl.viewport(0, 0, width as i32, height as i32);
    gl.scissor(0, 0, width as i32, height as i32);
    gl.clear_color(0.0, 0.0, 0.0, 1.0);
    gl.clear(GL::COLOR_BUFFER_BIT);

    for (vp, [r, g, b, a]) in quadrants(width, height) {
        gl.viewport(vp.x, vp.y, vp.width, vp.height);
        gl.scissor(vp.x, vp.y, vp.width, vp.height);
        gl.clear_color(r, g, b, a);
        gl.clear(GL::COLOR_BUFFER_BIT);
    }
}

fn resize(canvas: &HtmlCanvasElement, gl: &GL) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let w = window.inner_width()?.as_f64().unwrap_or_default();
    let h = window.inner_height()?.as_f64().unwrap_or_default();
    let side = square_side(w, h);
    canvas.set_width(side);
    canvas.set_height(side);
    draw(gl, side, side);
    Ok(())
}

/// Splits the canvas into four colored quadrants, redrawn on every resize.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let gl = context(&canvas)?;
    gl.enable(GL::SCISSOR_TEST);

    let style = canvas.style();
    style.set_property("position", "absolute")?;
    style.set_property("left", "50%")?;
    style.set_property("top", "50%")?;
    style.set_property("transform", "translate(-50%, -50%)")?;

    resize(&canvas, &gl)?;

    // Resize canvas to fit window
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Err(err) = resize(&canvas, &gl) {
            log::error!("resize failed: {err:?}");
        }
    }) as Box<dyn FnMut()>);
    window()
        .ok_or("no window")?
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    Ok(())
}
