use anyhow::{anyhow, Result};
use gl::types::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::{ffi::CString, ptr};

lazy_static! {
    /// Formats de log GLSL connus, le groupe `line` porte le numéro de ligne :
    /// - "0:12(105): ..." (Standard/Intel)
    /// - "0(12) : error ..." (NVIDIA)
    /// - "ERROR: 0:12: ..." (AMD/ATI)
    static ref GLSL_ERROR_PATTERNS: [Regex; 3] = [
        Regex::new(r"\d+:(?P<line>\d+)\(\d+\)").unwrap(),
        Regex::new(r"\d+\((?P<line>\d+)\)\s*:").unwrap(),
        Regex::new(r":\s*\d+:(?P<line>\d+):").unwrap(),
    ];
}

/// Lit le journal d'un shader ou d'un programme.
unsafe fn info_log(object: u32, is_program: bool) -> String {
    let mut len = 0;
    if is_program {
        gl::GetProgramiv(object, gl::INFO_LOG_LENGTH, &mut len);
    } else {
        gl::GetShaderiv(object, gl::INFO_LOG_LENGTH, &mut len);
    }
    let mut buf = vec![0u8; len.max(0) as usize];
    if is_program {
        gl::GetProgramInfoLog(object, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
    } else {
        gl::GetShaderInfoLog(object, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
    }
    String::from_utf8_lossy(&buf)
        .trim_matches(char::from(0))
        .to_string()
}

unsafe fn try_compile_shader(src: &str, ty: GLenum) -> Result<u32> {
    let shader = gl::CreateShader(ty);
    let c_str = CString::new(src).map_err(|e| anyhow!("CString error: {}", e))?;

    gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut success = gl::FALSE as GLint;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let log = info_log(shader, false);
        gl::DeleteShader(shader);

        let mut error_msg = format!("Shader compilation failed:\n{}", log);
        if let Some(line) = parse_glsl_error_line(&log) {
            error_msg.push_str(&format_glsl_error_context(src, line));
        }
        return Err(anyhow!(error_msg));
    }
    Ok(shader)
}

/// Compile et lie un programme vertex + fragment.
///
/// # Safety
/// Interagit directement avec des pointeurs OpenGL : le contexte doit être courant.
pub unsafe fn try_compile_shader_program(vertex_src: &str, fragment_src: &str) -> Result<u32> {
    let vs = try_compile_shader(vertex_src, gl::VERTEX_SHADER)?;
    let fs = match try_compile_shader(fragment_src, gl::FRAGMENT_SHADER) {
        Ok(fs) => fs,
        Err(err) => {
            gl::DeleteShader(vs);
            return Err(err);
        }
    };

    let program = gl::CreateProgram();
    gl::AttachShader(program, vs);
    gl::AttachShader(program, fs);
    gl::LinkProgram(program);

    gl::DeleteShader(vs);
    gl::DeleteShader(fs);

    let mut success = gl::FALSE as GLint;
    gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let log = info_log(program, true);
        gl::DeleteProgram(program);
        return Err(anyhow!("Shader link failed:\n{}", log));
    }
    Ok(program)
}

/// Essaie d’extraire le numéro de ligne de l’erreur GLSL.
fn parse_glsl_error_line(log: &str) -> Option<usize> {
    GLSL_ERROR_PATTERNS
        .iter()
        .find_map(|re| re.captures(log))
        .and_then(|cap| cap.name("line"))
        .and_then(|m| m.as_str().parse().ok())
}

/// Formate un extrait du code GLSL autour de la ligne fautive
fn format_glsl_error_context(src: &str, line_number: usize) -> String {
    let lines: Vec<&str> = src.lines().collect();
    if lines.is_empty() || line_number == 0 || line_number > lines.len() {
        return String::new();
    }

    let context_range = 2; // nb de lignes avant/après à afficher
    let start = line_number.saturating_sub(1 + context_range);
    let end = (line_number + context_range).min(lines.len());

    let mut output = format!("\n🔍 Error context (line {}):\n", line_number);
    for (current, line) in (start + 1..).zip(&lines[start..end]) {
        if current == line_number {
            output.push_str(&format!("> {:>3} | {}\n", current, line));
            output.push_str(&format!("        {}\n", "^".repeat(line.len().min(80))));
        } else {
            output.push_str(&format!("  {:>3} | {}\n", current, line));
        }
    }
    output
}
