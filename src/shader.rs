use bytemuck::{Pod, Zeroable};

pub const POINT_SHADER: &str = include_str!("points.wgsl");
pub const LINE_SHADER: &str = include_str!("lines.wgsl");

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    /// Viewport size in pixels.
    pub viewport: [f32; 2],
    pub _padding: [f32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_wgsl(code: &str) -> Result<(), String> {
        let module = naga::front::wgsl::parse_str(code)
            .map_err(|e| format!("WGSL parse error: {:?}", e))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("WGSL validation error: {:?}", e))?;

        Ok(())
    }

    #[test]
    fn test_point_shader_is_valid() {
        validate_wgsl(POINT_SHADER).expect("point shader should be valid");
    }

    #[test]
    fn test_line_shader_is_valid() {
        validate_wgsl(LINE_SHADER).expect("line shader should be valid");
    }

    #[test]
    fn test_uniform_size_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);
    }
}
