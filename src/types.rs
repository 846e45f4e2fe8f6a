use glam::Vec3;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub _pad1: f32,
    pub forward: [f32; 3],
    pub _pad2: f32,
    pub right: [f32; 3],
    pub _pad3: f32,
    pub up: [f32; 3],
    pub _pad4: f32,
}

/// Sphere marker data for GPU
///
/// One marker per scattered sphere. `term_id` selects which visibility
/// toggle controls it. `rotation` and `randomizer` are carried per marker
/// for animation variation; the shader does not read them.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerData {
    pub center: [f32; 3],
    pub radius: f32,
    pub rotation: [f32; 3],
    pub randomizer: f32,
    pub color: [f32; 3],
    pub term_id: f32,
}

impl MarkerData {
    pub fn new(
        center: Vec3,
        radius: f32,
        rotation: Vec3,
        color: [f32; 3],
        term_id: u32,
        randomizer: f32,
    ) -> Self {
        Self {
            center: center.to_array(),
            radius,
            rotation: rotation.to_array(),
            randomizer,
            color,
            term_id: term_id as f32,
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    pub fn term_id(&self) -> u32 {
        self.term_id as u32
    }
}

/// View settings uniform for GPU: per-term visibility plus marker count
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewSettingsUniform {
    pub term_visible: [u32; 3],
    pub marker_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_creation() {
        let marker = MarkerData::new(
            Vec3::new(1.0, 2.0, 3.0),
            0.5,
            Vec3::new(0.1, 0.2, 0.3),
            [1.0, 0.0, 0.0],
            2,
            0.75,
        );
        assert_eq!(marker.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(marker.radius, 0.5);
        assert_eq!(marker.term_id(), 2);
        assert_eq!(marker.color, [1.0, 0.0, 0.0]);
        assert_eq!(marker.randomizer, 0.75);
    }

    #[test]
    fn test_marker_gpu_layout() {
        // Storage buffer stride must stay vec4-aligned for WGSL
        assert_eq!(std::mem::size_of::<MarkerData>(), 48);
        assert_eq!(std::mem::size_of::<ViewSettingsUniform>(), 16);
    }
}
