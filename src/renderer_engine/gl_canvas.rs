use anyhow::{anyhow, Result};
use bytemuck::{Pod, Zeroable};
use gl::types::*;
use log::{debug, info};
use memoffset::offset_of;
use std::mem;

use crate::cstr;
use crate::physic_engine::{Color, Point};
use crate::renderer_engine::shader::try_compile_shader_program;
use crate::renderer_engine::{Canvas, CompositeMode, Rgba};
use crate::utils::human_bytes::HumanBytes;

/// Sommet envoyé au GPU : position en pixels surface + couleur RGBA unitaire.
///
/// | Location | Type   | Champs              |
/// |:--------:|:-------|:--------------------|
/// | `0`      | `vec2` | `pos_x`, `pos_y`    |
/// | `1`      | `vec4` | `r`, `g`, `b`, `a`  |
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CanvasVertex {
    pub pos_x: f32,
    pub pos_y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl CanvasVertex {
    fn new(p: Point, rgb: [f32; 3], alpha: f32) -> Self {
        Self {
            pos_x: p.x,
            pos_y: p.y,
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: alpha,
        }
    }

    /// Configure les attributs de sommets. Un VAO doit être lié.
    unsafe fn setup_vertex_attribs() {
        let stride = mem::size_of::<Self>() as GLsizei;

        // Attribut 0 : position (x, y)
        gl::VertexAttribPointer(
            0,
            2,
            gl::FLOAT,
            gl::FALSE,
            stride,
            offset_of!(CanvasVertex, pos_x) as *const _,
        );
        gl::EnableVertexAttribArray(0);

        // Attribut 1 : couleur (r, g, b, a)
        gl::VertexAttribPointer(
            1,
            4,
            gl::FLOAT,
            gl::FALSE,
            stride,
            offset_of!(CanvasVertex, r) as *const _,
        );
        gl::EnableVertexAttribArray(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Primitive {
    Lines,
    Triangles,
}

impl Primitive {
    fn gl_mode(self) -> GLenum {
        match self {
            Primitive::Lines => gl::LINES,
            Primitive::Triangles => gl::TRIANGLES,
        }
    }
}

const VERTEX_SRC: &str = r#"
#version 330 core
layout(location = 0) in vec2 aPos;
layout(location = 1) in vec4 aColor;

out vec4 vertexColor;

uniform vec2 uSize;

void main() {
    vertexColor = aColor;
    // pixels surface (y vers le bas) -> NDC
    float x = aPos.x / uSize.x * 2.0 - 1.0;
    float y = 1.0 - aPos.y / uSize.y * 2.0;
    gl_Position = vec4(x, y, 0.0, 1.0);
}
"#;

const FRAGMENT_SRC: &str = r#"
#version 330 core
in vec4 vertexColor;
out vec4 FragColor;

void main() {
    // sortie prémultipliée, cohérente avec les fonctions de blending
    FragColor = vec4(vertexColor.rgb * vertexColor.a, vertexColor.a);
}
"#;

/// Surface de dessin OpenGL.
///
/// Le contenu vit dans un framebuffer hors écran persistant (le fondu de la
/// frame précédente en dépend), recopié vers l'écran à chaque `flush`. Les
/// tracés sont regroupés en lots homogènes (mode de composition + primitive).
pub struct GlCanvas {
    width: u32,
    height: u32,

    fbo: u32,
    color_texture: u32,
    vao: u32,
    vbo: u32,
    shader_program: u32,
    loc_size: i32,

    mode: CompositeMode,
    batch: Vec<CanvasVertex>,
    batch_primitive: Primitive,
}

impl GlCanvas {
    /// Crée la surface. Le contexte OpenGL doit être courant.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let shader_program = unsafe { try_compile_shader_program(VERTEX_SRC, FRAGMENT_SRC)? };
        let loc_size = unsafe { gl::GetUniformLocation(shader_program, cstr!("uSize")) };

        let (mut vao, mut vbo) = (0u32, 0u32);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            CanvasVertex::setup_vertex_attribs();
            gl::BindVertexArray(0);
        }

        let mut canvas = Self {
            width: 0,
            height: 0,
            fbo: 0,
            color_texture: 0,
            vao,
            vbo,
            shader_program,
            loc_size,
            mode: CompositeMode::SourceOver,
            batch: Vec::with_capacity(4096),
            batch_primitive: Primitive::Lines,
        };
        unsafe { canvas.create_target(width, height)? };
        Ok(canvas)
    }

    /// (Re)crée le framebuffer hors écran, effacé en noir transparent.
    unsafe fn create_target(&mut self, width: u32, height: u32) -> Result<()> {
        self.delete_target();

        // une texture 0x0 est invalide : on garde au moins un pixel
        let (tex_w, tex_h) = (width.max(1) as GLsizei, height.max(1) as GLsizei);

        gl::GenTextures(1, &mut self.color_texture);
        gl::BindTexture(gl::TEXTURE_2D, self.color_texture);
        gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            gl::RGBA8 as GLint,
            tex_w,
            tex_h,
            0,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            std::ptr::null(),
        );
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as GLint);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as GLint);

        gl::GenFramebuffers(1, &mut self.fbo);
        gl::BindFramebuffer(gl::FRAMEBUFFER, self.fbo);
        gl::FramebufferTexture2D(
            gl::FRAMEBUFFER,
            gl::COLOR_ATTACHMENT0,
            gl::TEXTURE_2D,
            self.color_texture,
            0,
        );

        let status = gl::CheckFramebufferStatus(gl::FRAMEBUFFER);
        if status != gl::FRAMEBUFFER_COMPLETE {
            gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
            return Err(anyhow!("Canvas framebuffer incomplete: 0x{:X}", status));
        }

        gl::ClearColor(0.0, 0.0, 0.0, 0.0);
        gl::Clear(gl::COLOR_BUFFER_BIT);
        gl::BindFramebuffer(gl::FRAMEBUFFER, 0);

        self.width = width;
        self.height = height;

        let bytes = (tex_w as usize) * (tex_h as usize) * 4;
        info!(
            "🎨 Canvas target {} x {} allocated ({})",
            width,
            height,
            bytes.human_bytes()
        );
        Ok(())
    }

    unsafe fn delete_target(&mut self) {
        if self.fbo != 0 {
            gl::DeleteFramebuffers(1, &self.fbo);
            self.fbo = 0;
        }
        if self.color_texture != 0 {
            gl::DeleteTextures(1, &self.color_texture);
            self.color_texture = 0;
        }
    }

    unsafe fn apply_blend(mode: CompositeMode) {
        gl::Enable(gl::BLEND);
        match mode {
            CompositeMode::SourceOver => gl::BlendFunc(gl::ONE, gl::ONE_MINUS_SRC_ALPHA),
            CompositeMode::DestinationOut => gl::BlendFunc(gl::ZERO, gl::ONE_MINUS_SRC_ALPHA),
            CompositeMode::Lighter => gl::BlendFunc(gl::ONE, gl::ONE),
        }
    }

    /// Ajoute des sommets au lot courant, en soumettant d'abord le lot si la
    /// primitive change.
    fn enqueue(&mut self, primitive: Primitive, vertices: &[CanvasVertex]) {
        if primitive != self.batch_primitive {
            self.submit_batch();
            self.batch_primitive = primitive;
        }
        self.batch.extend_from_slice(vertices);
    }

    /// Dessine le lot en attente dans le framebuffer hors écran.
    fn submit_batch(&mut self) {
        if self.batch.is_empty() {
            return;
        }
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, self.fbo);
            gl::Viewport(0, 0, self.width as GLsizei, self.height as GLsizei);
            Self::apply_blend(self.mode);

            gl::UseProgram(self.shader_program);
            gl::Uniform2f(self.loc_size, self.width as f32, self.height as f32);

            gl::BindVertexArray(self.vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            let data: &[u8] = bytemuck::cast_slice(&self.batch);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const _,
                gl::STREAM_DRAW,
            );
            gl::DrawArrays(
                self.batch_primitive.gl_mode(),
                0,
                self.batch.len() as GLsizei,
            );
            gl::BindVertexArray(0);
            gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
        }
        self.batch.clear();
    }
}

impl Canvas for GlCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.batch.clear();
        if let Err(err) = unsafe { self.create_target(width, height) } {
            log::error!("Canvas resize to {width} x {height} failed: {err:#}");
        }
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        if mode != self.mode {
            self.submit_batch();
            self.mode = mode;
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgba) {
        let rgb = fill.color.to_unit_rgb();
        let alpha = fill.alpha.clamp(0.0, 1.0);
        let corners = [
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ];
        let v = corners.map(|p| CanvasVertex::new(p, rgb, alpha));
        self.enqueue(Primitive::Triangles, &[v[0], v[1], v[2], v[0], v[2], v[3]]);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, alpha: f32) {
        if from == to {
            return;
        }
        let rgb = color.to_unit_rgb();
        let alpha = alpha.clamp(0.0, 1.0);
        self.enqueue(
            Primitive::Lines,
            &[
                CanvasVertex::new(from, rgb, alpha),
                CanvasVertex::new(to, rgb, alpha),
            ],
        );
    }

    /// Soumet le dernier lot puis recopie la surface dans le framebuffer écran.
    fn flush(&mut self) {
        self.submit_batch();
        unsafe {
            gl::BindFramebuffer(gl::READ_FRAMEBUFFER, self.fbo);
            gl::BindFramebuffer(gl::DRAW_FRAMEBUFFER, 0);
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
            let (w, h) = (self.width as GLint, self.height as GLint);
            gl::BlitFramebuffer(0, 0, w, h, 0, 0, w, h, gl::COLOR_BUFFER_BIT, gl::NEAREST);
            gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
        }
    }

    fn close(&mut self) {
        unsafe {
            self.delete_target();
            if self.vbo != 0 {
                gl::DeleteBuffers(1, &self.vbo);
                self.vbo = 0;
            }
            if self.vao != 0 {
                gl::DeleteVertexArrays(1, &self.vao);
                self.vao = 0;
            }
            if self.shader_program != 0 {
                gl::DeleteProgram(self.shader_program);
                self.shader_program = 0;
            }
        }
        debug!("GlCanvas closed.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_vertex_layout() {
        assert_eq!(mem::size_of::<CanvasVertex>(), 6 * 4);
        assert_eq!(offset_of!(CanvasVertex, pos_x), 0);
        assert_eq!(offset_of!(CanvasVertex, r), 8);
    }

    #[test]
    fn test_canvas_vertex_is_castable_to_bytes() {
        let vertices = [CanvasVertex::new(Point::new(1.0, 2.0), [0.5, 0.25, 1.0], 0.75); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 2 * mem::size_of::<CanvasVertex>());
    }
}
