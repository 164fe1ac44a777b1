//! Flat-color shader program

use glow::HasContext;

use crate::render::RenderError;

/// Passes positions through unchanged; geometry is already in NDC.
pub const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos, 1.0);
}
"#;

/// Fills every fragment with `objectColor`.
pub const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

uniform vec4 objectColor;

void main()
{
    FragColor = objectColor;
}
"#;

/// Name of the color uniform in [`FRAGMENT_SHADER`]
pub const COLOR_UNIFORM: &str = "objectColor";

/// Compile and link the flat-color program
///
/// # Safety
///
/// `gl` must belong to the context that is current on this thread.
pub unsafe fn build_program(gl: &glow::Context) -> Result<glow::Program, RenderError> {
    let vertex = compile(gl, glow::VERTEX_SHADER, "vertex", VERTEX_SHADER)?;
    let fragment = match compile(gl, glow::FRAGMENT_SHADER, "fragment", FRAGMENT_SHADER) {
        Ok(shader) => shader,
        Err(e) => {
            gl.delete_shader(vertex);
            return Err(e);
        }
    };

    let program = gl.create_program().map_err(RenderError::ResourceCreation)?;
    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    let linked = gl.get_program_link_status(program);
    let log = gl.get_program_info_log(program);

    gl.detach_shader(program, vertex);
    gl.detach_shader(program, fragment);
    gl.delete_shader(vertex);
    gl.delete_shader(fragment);

    if !linked {
        gl.delete_program(program);
        return Err(RenderError::ProgramLink(log));
    }

    log::debug!("Linked flat-color shader program");
    Ok(program)
}

unsafe fn compile(
    gl: &glow::Context,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<glow::Shader, RenderError> {
    let shader = gl.create_shader(kind).map_err(RenderError::ResourceCreation)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.get_shader_compile_status(shader) {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        Err(RenderError::ShaderCompilation { stage, log })
    }
}
