//! Shader material that fakes a running CRT on the screen mesh.

use bevy::asset::{AssetPath, embedded_asset, embedded_path};
use bevy::pbr::Material;
use bevy::prelude::*;
use bevy::render::render_resource::AsBindGroup;
use bevy::shader::ShaderRef;

/// Unlit CRT effect: procedural phosphor video plus scanlines, chroma
/// bleed, triad mask, temporal noise, jitter, flicker, and vignette.
///
/// Everything is packed into a single uniform buffer; WebGPU has a low
/// per-stage uniform-buffer limit. Layout:
/// `u[0] = (time, scanline_count, scanline_intensity, rgb_shift)`
/// `u[1] = (noise_intensity, vignette_radius, mask_strength, jitter)`
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct CrtMaterial {
    #[uniform(0)]
    u: [Vec4; 2],
}

impl Default for CrtMaterial {
    fn default() -> Self {
        Self {
            u: [
                Vec4::new(0.0, 900.0, 0.35, 0.003),
                Vec4::new(0.04, 0.75, 0.4, 0.002),
            ],
        }
    }
}

impl CrtMaterial {
    /// Advances the animation clock sampled by the fragment shader.
    pub fn set_time(&mut self, t: f32) {
        self.u[0].x = t;
    }
}

impl Material for CrtMaterial {
    fn fragment_shader() -> ShaderRef {
        // Build the path at compile time so it exactly matches what
        // `register_shader` embedded below.
        let path = embedded_path!("crt.wgsl");
        ShaderRef::from(AssetPath::from_path_buf(path).with_source("embedded"))
    }
}

/// Registers the shader source in the embedded asset registry.
pub(super) fn register_shader(app: &mut App) {
    embedded_asset!(app, "crt.wgsl");
}
