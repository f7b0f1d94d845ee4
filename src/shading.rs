//! Phong lighting inputs shared by the demos.
//!
//! [`Light`] and [`Material`] are the CPU-side values; [`LightUniform`] and
//! [`MaterialUniform`] are their std140 images for a uniform upload.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub ambient: Vec4,
    /// Also the "light colour" edited by [`LightController`](crate::controls::LightController).
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub position: Vec3,
    pub power: f32,
}

impl Light {
    /// White light above and in front of the walker.
    pub const SKINNING: Light = Light {
        ambient: Vec4::ONE,
        diffuse: Vec4::ONE,
        specular: Vec4::ONE,
        position: Vec3::new(0.0, 4.0, 4.0),
        power: 20.0,
    };

    /// Starting light of the shading demo.
    pub const SHADING: Light = Light {
        ambient: Vec4::ONE,
        diffuse: Vec4::ONE,
        specular: Vec4::ONE,
        position: Vec3::new(0.0, 0.0, 4.0),
        power: 10.0,
    };

    #[must_use]
    pub fn color(&self) -> Vec3 {
        self.diffuse.truncate()
    }

    #[must_use]
    pub fn to_uniform(&self) -> LightUniform {
        LightUniform {
            la: self.ambient.to_array(),
            ld: self.diffuse.to_array(),
            ls: self.specular.to_array(),
            position: self.position.to_array(),
            power: self.power,
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::SHADING
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub shininess: f32,
}

impl Material {
    /// Material of the bone segments in the skinning demo.
    pub const BONE: Material = Material {
        ambient: Vec4::new(0.1, 0.1, 0.1, 1.0),
        diffuse: Vec4::new(1.0, 1.0, 1.0, 1.0),
        specular: Vec4::new(0.3, 0.3, 0.3, 1.0),
        shininess: 0.1,
    };

    pub const BRONZE: Material = Material {
        ambient: Vec4::new(0.2125, 0.1275, 0.054, 1.0),
        diffuse: Vec4::new(0.714, 0.4284, 0.18144, 1.0),
        specular: Vec4::new(0.393548, 0.271906, 0.166721, 1.0),
        shininess: 25.6,
    };

    pub const JADE: Material = Material {
        ambient: Vec4::new(0.135, 0.2225, 0.1575, 1.0),
        diffuse: Vec4::new(0.54, 0.89, 0.63, 1.0),
        specular: Vec4::new(0.316228, 0.316228, 0.316228, 1.0),
        shininess: 12.8,
    };

    pub const SILVER: Material = Material {
        ambient: Vec4::new(0.19225, 0.19225, 0.19225, 1.0),
        diffuse: Vec4::new(0.50754, 0.50754, 0.50754, 1.0),
        specular: Vec4::new(0.508273, 0.508273, 0.508273, 1.0),
        shininess: 51.2,
    };

    pub const PEWTER: Material = Material {
        ambient: Vec4::new(0.105882, 0.058824, 0.113725, 1.0),
        diffuse: Vec4::new(0.427451, 0.470588, 0.541176, 1.0),
        specular: Vec4::new(0.333333, 0.333333, 0.521569, 1.0),
        shininess: 9.84615,
    };

    #[must_use]
    pub fn to_uniform(&self) -> MaterialUniform {
        MaterialUniform {
            ka: self.ambient.to_array(),
            kd: self.diffuse.to_array(),
            ks: self.specular.to_array(),
            ns: self.shininess,
            _padding: [0.0; 3],
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::BONE
    }
}

/// Model instances of the shading demo: one material per copy, laid out
/// left to right along X.
pub const SHADING_INSTANCES: [(Material, f32); 4] = [
    (Material::BRONZE, -4.5),
    (Material::JADE, -1.5),
    (Material::SILVER, 1.5),
    (Material::PEWTER, 4.5),
];

/// Model matrices of [`SHADING_INSTANCES`].
#[must_use]
pub fn shading_instance_matrices() -> [Mat4; 4] {
    SHADING_INSTANCES.map(|(_, x)| Mat4::from_translation(Vec3::new(x, 0.0, 0.0)))
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    pub la: [f32; 4],
    pub ld: [f32; 4],
    pub ls: [f32; 4],
    pub position: [f32; 3],
    pub power: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MaterialUniform {
    pub ka: [f32; 4],
    pub kd: [f32; 4],
    pub ks: [f32; 4],
    pub ns: f32,
    pub _padding: [f32; 3],
}
