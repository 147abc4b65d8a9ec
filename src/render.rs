use gl::types as gltype;
use log::{debug, error, warn};
use sdl2::video::GLContext;

use crate::{
    error::Result,
    gl_wrappers::{
        check_gl_error,
        program::{Program, UniformLocation},
        shader::Shader,
    },
    render_vec::RenderVec,
    shaders::{ANIMATE_UNIFORM, FRAG_SHADER_SOURCE, TIME_UNIFORM, VERT_SHADER_SOURCE},
    vertex::Vertex,
};

pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.6, 1.0];

/// Owns the GL objects for the one shape the demo draws.
pub struct Renderer {
    vbo: gltype::GLuint,
    vao: gltype::GLuint,
    vertex_count: i32,
    program: Program,
    time_location: Option<UniformLocation>,
    animate_location: Option<UniformLocation>,
}

impl Renderer {
    /// Compile the shader pair and upload `vertices` once.
    pub fn new(gl_ctx: &GLContext, vertices: &[Vertex]) -> Result<Self> {
        assert!(
            gl_ctx.is_current(),
            "gl_ctx must be current in order to create a Renderer"
        );

        let vert_shader = Shader::vertex(VERT_SHADER_SOURCE).compile()?;
        let frag_shader = Shader::fragment(FRAG_SHADER_SOURCE).compile()?;
        let program = crate::construct_program!(vert_shader, frag_shader)?;
        // compiled shaders are dropped here, GL frees them with the program

        // an unused uniform may be optimised out, drawing still works
        let time_location = program
            .uniform_location(TIME_UNIFORM)
            .map_err(|err| warn!("{err}, time will not advance"))
            .ok();
        let animate_location = program
            .uniform_location(ANIMATE_UNIFORM)
            .map_err(|err| warn!("{err}, drawing without animation"))
            .ok();

        let render_vec = RenderVec::from_slice(vertices);

        let (vao, vbo) = unsafe {
            let mut vao = 0;
            gl::GenVertexArrays(1, &mut vao);
            let mut vbo = 0;
            gl::GenBuffers(1, &mut vbo);

            // bind the Vertex Array Object first, then bind and set vertex buffers, and then configure attributes
            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                render_vec.gl_byte_size(),
                render_vec.gl_data(),
                gl::STATIC_DRAW,
            );

            let stride = render_vec.stride() as gltype::GLsizei;
            for (location, attr, offset) in render_vec.attribute_offsets() {
                gl::VertexAttribPointer(
                    location,
                    attr.components,
                    attr.ty.gl_enum(),
                    gl::FALSE,
                    stride,
                    offset as *const _,
                );
                gl::EnableVertexAttribArray(location);
            }

            // reset bound arrays
            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            (vao, vbo)
        };
        debug!(
            "renderer program: {}, vao: {vao}, vbo: {vbo}, {} vertices, stride {}",
            program.id(),
            render_vec.gl_len(),
            render_vec.stride()
        );
        check_gl_error()?;

        Ok(Self {
            vbo,
            vao,
            vertex_count: render_vec.gl_len(),
            program,
            time_location,
            animate_location,
        })
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    pub fn clear(&mut self) {
        let [r, g, b, a] = CLEAR_COLOR;
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    /// Draw the uploaded triangles. With `Some(seconds)` the shaders animate
    /// them, with `None` the vertex data is drawn as given.
    pub fn draw(&mut self, time: Option<f32>) {
        self.program.bind();
        if let Some(location) = self.animate_location {
            self.program.set_bool(location, time.is_some());
        }
        if let (Some(location), Some(time)) = (self.time_location, time) {
            self.program.set_f32(location, time);
        }
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, self.vertex_count);
            gl::BindVertexArray(0);
        }
        if let Err(err) = check_gl_error() {
            error!("after glDrawArrays: {err}");
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}
