//! Typed shader uniform interface
//!
//! Uniforms are addressed by [`UniformKind`] rather than by string. The
//! exact names the shader program uses are kept in one place,
//! [`UniformKind::name`], for backends that talk to a real program.

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};

/// The uniforms the scene pipeline writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UniformKind {
    /// Model matrix of the next draw
    Model,
    /// Flat RGBA color
    ObjectColor,
    /// Sampler slot of the active texture
    ObjectTexture,
    /// Sample the texture instead of the flat color
    UseTexture,
    /// Apply lighting
    UseLighting,
    /// Texture coordinate tiling scale
    UvScale,
    /// Material diffuse RGB
    MaterialDiffuse,
    /// Material specular RGB
    MaterialSpecular,
    /// Material specular exponent
    MaterialShininess,
}

impl UniformKind {
    /// Every uniform kind, in declaration order
    pub const ALL: [UniformKind; 9] = [
        UniformKind::Model,
        UniformKind::ObjectColor,
        UniformKind::ObjectTexture,
        UniformKind::UseTexture,
        UniformKind::UseLighting,
        UniformKind::UvScale,
        UniformKind::MaterialDiffuse,
        UniformKind::MaterialSpecular,
        UniformKind::MaterialShininess,
    ];

    /// Name of the uniform in the shader program
    pub const fn name(self) -> &'static str {
        match self {
            UniformKind::Model => "model",
            UniformKind::ObjectColor => "objectColor",
            UniformKind::ObjectTexture => "objectTexture",
            UniformKind::UseTexture => "bUseTexture",
            UniformKind::UseLighting => "bUseLighting",
            UniformKind::UvScale => "UVscale",
            UniformKind::MaterialDiffuse => "material.diffuseColor",
            UniformKind::MaterialSpecular => "material.specularColor",
            UniformKind::MaterialShininess => "material.shininess",
        }
    }
}

impl std::fmt::Display for UniformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A value written to a uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// 4x4 matrix
    Mat4(Mat4),
    /// 4-component vector
    Vec4(Vec4),
    /// 3-component vector
    Vec3(Vec3),
    /// 2-component vector
    Vec2(Vec2),
    /// Scalar
    Float(f32),
    /// Boolean flag
    Bool(bool),
    /// Sampler unit index; may be negative when no texture matched
    Sampler2D(i32),
}

impl UniformValue {
    /// Raw bytes of the value as they would be uploaded
    ///
    /// Matrices are column-major. Booleans are a single byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        match *self {
            UniformValue::Mat4(m) => {
                let columns: [[f32; 4]; 4] = m.into();
                bytemuck::bytes_of(&columns).to_vec()
            }
            UniformValue::Vec4(v) => {
                let components: [f32; 4] = v.into();
                bytemuck::bytes_of(&components).to_vec()
            }
            UniformValue::Vec3(v) => {
                let components: [f32; 3] = v.into();
                bytemuck::bytes_of(&components).to_vec()
            }
            UniformValue::Vec2(v) => {
                let components: [f32; 2] = v.into();
                bytemuck::bytes_of(&components).to_vec()
            }
            UniformValue::Float(x) => x.to_ne_bytes().to_vec(),
            UniformValue::Sampler2D(i) => i.to_ne_bytes().to_vec(),
            UniformValue::Bool(b) => vec![u8::from(b)],
        }
    }
}

/// Shader program collaborator
///
/// Writes go to the currently active program and stay in effect until
/// overwritten. The pipeline never reads them back.
pub trait ShaderInterface {
    /// Write a uniform value
    fn set_uniform(&mut self, kind: UniformKind, value: UniformValue);
}

impl<T: ShaderInterface + ?Sized> ShaderInterface for Box<T> {
    fn set_uniform(&mut self, kind: UniformKind, value: UniformValue) {
        (**self).set_uniform(kind, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_names() {
        let names: Vec<&str> = UniformKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            [
                "model",
                "objectColor",
                "objectTexture",
                "bUseTexture",
                "bUseLighting",
                "UVscale",
                "material.diffuseColor",
                "material.specularColor",
                "material.shininess",
            ]
        );
        assert_eq!(UniformKind::UvScale.to_string(), "UVscale");
    }

    #[test]
    fn test_value_byte_sizes() {
        assert_eq!(UniformValue::Mat4(Mat4::identity()).to_bytes().len(), 64);
        assert_eq!(UniformValue::Vec4(Vec4::zeros()).to_bytes().len(), 16);
        assert_eq!(UniformValue::Vec3(Vec3::zeros()).to_bytes().len(), 12);
        assert_eq!(UniformValue::Vec2(Vec2::zeros()).to_bytes().len(), 8);
        assert_eq!(UniformValue::Float(1.0).to_bytes().len(), 4);
        assert_eq!(UniformValue::Sampler2D(-1).to_bytes(), (-1i32).to_ne_bytes().to_vec());
        assert_eq!(UniformValue::Bool(true).to_bytes(), vec![1]);
    }

    #[test]
    fn test_matrix_bytes_are_column_major() {
        let m = Mat4::new_translation(&Vec3::new(5.0, 6.0, 7.0));
        let bytes = UniformValue::Mat4(m).to_bytes();
        let floats: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|c| bytemuck::pod_read_unaligned::<f32>(c))
            .collect();
        assert_eq!(&floats[12..15], &[5.0, 6.0, 7.0]);
    }
}
