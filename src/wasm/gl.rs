//! WebGL2 plumbing: context lookup, program linking and a single-buffer
//! immediate-mode surface.

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::error::DemoError;
use crate::scene::{Rgba, Surface};

pub const FLAT_VERT: &str = include_str!("../shaders/flat.vert");
pub const FLAT_FRAG: &str = include_str!("../shaders/flat.frag");
pub const MOVER_VERT: &str = include_str!("../shaders/mover.vert");

pub fn context(canvas: &HtmlCanvasElement) -> Result<GL, DemoError> {
    canvas
        .get_context("webgl2")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<GL>().ok())
        .ok_or(DemoError::Unsupported)
}

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, DemoError> {
    let shader = gl
        .create_shader(kind)
        .ok_or(DemoError::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(DemoError::ShaderCompile(log))
    }
}

pub struct Program {
    gl: GL,
    program: WebGlProgram,
}

impl Program {
    pub fn link(gl: &GL, vertex: &str, fragment: &str) -> Result<Self, DemoError> {
        let vs = compile(gl, GL::VERTEX_SHADER, vertex)?;
        let fs = compile(gl, GL::FRAGMENT_SHADER, fragment)?;
        let program = gl
            .create_program()
            .ok_or(DemoError::Allocation("program"))?;
        gl.attach_shader(&program, &vs);
        gl.attach_shader(&program, &fs);
        gl.link_program(&program);
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let ok = gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !ok {
            let log = gl.get_program_info_log(&program).unwrap_or_default();
            return Err(DemoError::ProgramLink(log));
        }
        Ok(Self {
            gl: gl.clone(),
            program,
        })
    }

    pub fn bind(&self) {
        self.gl.use_program(Some(&self.program));
    }

    pub fn uniform(&self, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(&self.program, name)
    }

    pub fn attribute(&self, name: &'static str) -> Result<u32, DemoError> {
        let location = self.gl.get_attrib_location(&self.program, name);
        u32::try_from(location).map_err(|_| DemoError::MissingAttribute(name))
    }
}

/// One VAO over one 2D position buffer, re-uploaded on every draw call.
pub struct VertexStream {
    gl: GL,
    vao: WebGlVertexArrayObject,
    buffer: WebGlBuffer,
}

impl VertexStream {
    pub fn new(gl: &GL, program: &Program, attribute: &'static str) -> Result<Self, DemoError> {
        let location = program.attribute(attribute)?;
        let vao = gl
            .create_vertex_array()
            .ok_or(DemoError::Allocation("vertex array"))?;
        let buffer = gl.create_buffer().ok_or(DemoError::Allocation("buffer"))?;

        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        gl.enable_vertex_attrib_array(location);
        gl.vertex_attrib_pointer_with_i32(location, 2, GL::FLOAT, false, 0, 0);
        gl.bind_vertex_array(None);

        Ok(Self {
            gl: gl.clone(),
            vao,
            buffer,
        })
    }

    fn upload(&self, vertices: &[f32], usage: u32) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.buffer));
        let data = js_sys::Float32Array::from(vertices);
        self.gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, usage);
    }

    pub fn draw(&self, mode: u32, vertices: &[f32]) {
        self.upload(vertices, GL::STATIC_DRAW);
        self.gl.bind_vertex_array(Some(&self.vao));
        self.gl.draw_arrays(mode, 0, (vertices.len() / 2) as i32);
    }
}

/// Flat-colored lines and points through the `flat` program.
pub struct FlatSurface {
    gl: GL,
    program: Program,
    stream: VertexStream,
    color: Option<WebGlUniformLocation>,
}

impl FlatSurface {
    pub fn new(gl: &GL) -> Result<Self, DemoError> {
        let program = Program::link(gl, FLAT_VERT, FLAT_FRAG)?;
        let stream = VertexStream::new(gl, &program, "a_position")?;
        let color = program.uniform("u_color");
        Ok(Self {
            gl: gl.clone(),
            program,
            stream,
            color,
        })
    }

    fn draw(&mut self, mode: u32, vertices: &[f32], color: Rgba) {
        self.program.bind();
        self.gl.uniform4fv_with_f32_array(self.color.as_ref(), &color);
        self.stream.draw(mode, vertices);
    }
}

impl Surface for FlatSurface {
    fn clear(&mut self) {
        self.gl.clear(GL::COLOR_BUFFER_BIT);
    }

    fn draw_lines(&mut self, vertices: &[f32], color: Rgba) {
        self.draw(GL::LINES, vertices, color);
    }

    fn draw_points(&mut self, vertices: &[f32], color: Rgba) {
        self.draw(GL::POINTS, vertices, color);
    }
}
