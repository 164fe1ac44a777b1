//! OpenGL renderer
//!
//! Owns the GLFW window, the GL function table, one flat-color program and a
//! VAO/VBO pair per vertex buffer. Every buffer uses attribute 0 for a tightly
//! packed `vec3` position.

use std::collections::HashMap;

use glow::HasContext;

use super::shader;
use crate::color::Color;
use crate::config::WindowConfig;
use crate::foundation::math::Vertex;
use crate::render::api::{BackendResult, MeshHandle, RenderBackend};
use crate::render::window::GlWindow;
use crate::render::RenderError;

#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
const VERTEX_STRIDE: i32 = Vertex::STRIDE as i32;

struct GlMesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: usize,
}

/// `RenderBackend` backed by an OpenGL 3.3 core context
pub struct GlRenderer {
    gl: glow::Context,
    program: glow::Program,
    color_location: Option<glow::UniformLocation>,
    meshes: HashMap<MeshHandle, GlMesh>,
    next_mesh_id: u64,
    window: GlWindow,
}

impl GlRenderer {
    /// Open a window and prepare the flat-color pipeline
    pub fn new(config: &WindowConfig) -> BackendResult<Self> {
        let mut window = GlWindow::new(config)?;

        // SAFETY: the window's context was made current in `GlWindow::new`
        // and stays current on this thread for the renderer's lifetime.
        let gl = unsafe {
            glow::Context::from_loader_function(|name| window.get_proc_address(name))
        };

        let (program, color_location) = unsafe {
            let program = shader::build_program(&gl)?;
            gl.use_program(Some(program));
            let location = gl.get_uniform_location(program, shader::COLOR_UNIFORM);
            (program, location)
        };

        if color_location.is_none() {
            log::warn!(
                "Uniform '{}' not found; draws will use the default color",
                shader::COLOR_UNIFORM
            );
        }

        let (width, height) = window.get_framebuffer_size();
        unsafe {
            gl.viewport(0, 0, width, height);
        }

        log::info!("OpenGL renderer ready ({width}x{height} framebuffer)");

        Ok(Self {
            gl,
            program,
            color_location,
            meshes: HashMap::new(),
            next_mesh_id: 0,
            window,
        })
    }

    /// The window this renderer draws into
    pub fn window(&self) -> &GlWindow {
        &self.window
    }

    fn mesh(&self, handle: MeshHandle) -> BackendResult<&GlMesh> {
        self.meshes.get(&handle).ok_or(RenderError::UnknownMesh(handle))
    }

    fn upload(&self, mesh: &GlMesh, vertices: &[Vertex]) {
        unsafe {
            self.gl.bind_vertex_array(Some(mesh.vao));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(mesh.vbo));
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );
        }
    }
}

impl RenderBackend for GlRenderer {
    fn create_vertex_buffer(&mut self, vertices: &[Vertex]) -> BackendResult<MeshHandle> {
        let mesh = unsafe {
            let vao = self.gl.create_vertex_array().map_err(RenderError::ResourceCreation)?;
            let vbo = match self.gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    self.gl.delete_vertex_array(vao);
                    return Err(RenderError::ResourceCreation(e));
                }
            };

            self.gl.bind_vertex_array(Some(vao));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            self.gl
                .vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, VERTEX_STRIDE, 0);
            self.gl.enable_vertex_attrib_array(0);

            GlMesh {
                vao,
                vbo,
                vertex_count: vertices.len(),
            }
        };
        self.upload(&mesh, vertices);

        let handle = MeshHandle(self.next_mesh_id);
        self.next_mesh_id += 1;
        self.meshes.insert(handle, mesh);

        log::debug!("Created {handle} with {} vertices", vertices.len());
        Ok(handle)
    }

    fn update_vertices(&mut self, handle: MeshHandle, vertices: &[Vertex]) -> BackendResult<()> {
        self.upload(self.mesh(handle)?, vertices);
        if let Some(mesh) = self.meshes.get_mut(&handle) {
            mesh.vertex_count = vertices.len();
        }
        Ok(())
    }

    fn clear(&mut self, color: Color) -> BackendResult<()> {
        unsafe {
            self.gl.clear_color(color.r, color.g, color.b, color.a);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        Ok(())
    }

    fn set_object_color(&mut self, color: Color) -> BackendResult<()> {
        unsafe {
            self.gl.use_program(Some(self.program));
            self.gl
                .uniform_4_f32(self.color_location.as_ref(), color.r, color.g, color.b, color.a);
        }
        Ok(())
    }

    fn draw_triangle_fan(&mut self, handle: MeshHandle, vertex_count: usize) -> BackendResult<()> {
        let mesh = self.mesh(handle)?;
        if vertex_count > mesh.vertex_count {
            return Err(RenderError::VertexCountOutOfRange {
                mesh: handle,
                requested: vertex_count,
                available: mesh.vertex_count,
            });
        }
        let count = i32::try_from(vertex_count).map_err(|_| RenderError::VertexCountOutOfRange {
            mesh: handle,
            requested: vertex_count,
            available: mesh.vertex_count,
        })?;

        unsafe {
            self.gl.use_program(Some(self.program));
            self.gl.bind_vertex_array(Some(mesh.vao));
            self.gl.draw_arrays(glow::TRIANGLE_FAN, 0, count);
        }
        Ok(())
    }

    fn present(&mut self) -> BackendResult<()> {
        self.window.swap_buffers();
        Ok(())
    }

    fn poll_events(&mut self) {
        for event in self.window.poll_events() {
            match event {
                glfw::WindowEvent::FramebufferSize(width, height) => {
                    log::debug!("Framebuffer resized to {width}x{height}");
                    unsafe {
                        self.gl.viewport(0, 0, width, height);
                    }
                }
                glfw::WindowEvent::Close => {
                    log::info!("Window close requested");
                }
                _ => {}
            }
        }
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }
}

impl Drop for GlRenderer {
    fn drop(&mut self) {
        unsafe {
            for (_, mesh) in self.meshes.drain() {
                self.gl.delete_buffer(mesh.vbo);
                self.gl.delete_vertex_array(mesh.vao);
            }
            self.gl.delete_program(self.program);
        }
        log::debug!("OpenGL resources released");
    }
}
