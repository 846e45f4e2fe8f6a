use crate::types::CameraUniform;
use glam::Vec3;
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

pub const CAMERA_SPEED: f32 = 0.1;
pub const CAMERA_ROTATION_SPEED: f32 = 0.05;

/// Radius and angular speed of the automatic orbit around the marker cloud
pub const ORBIT_RADIUS: f32 = 16.0;
pub const ORBIT_SPEED: f32 = 0.3;

#[derive(Default, Clone, Copy)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

impl MovementState {
    const fn to_direction(&self, positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    const fn velocity(&self) -> (f32, f32, f32) {
        (
            self.to_direction(self.forward, self.backward),
            self.to_direction(self.right, self.left),
            self.to_direction(self.up, self.down),
        )
    }

    const fn rotation_velocity(&self) -> f32 {
        self.to_direction(self.rotate_right, self.rotate_left)
    }
}

pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub movement: MovementState,
}

impl Camera {
    /// Starts level with the band, backed off far enough to see all of it
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 20.0),
            yaw: std::f32::consts::PI,
            pitch: 0.0,
            movement: MovementState::default(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    pub fn update(&mut self) {
        let (fwd, right_dir, up_dir) = self.movement.velocity();

        let displacement = self.forward() * fwd * CAMERA_SPEED
            + self.right() * right_dir * CAMERA_SPEED
            + Vec3::Y * up_dir * CAMERA_SPEED;

        self.position += displacement;
        self.yaw += self.movement.rotation_velocity() * CAMERA_ROTATION_SPEED;
    }

    /// Circles the scene origin at a fixed radius, keeping the current
    /// height and aiming at the center. Drives the rotate-camera toggle.
    pub fn orbit(&mut self, elapsed: f32) {
        self.position.x = (elapsed * ORBIT_SPEED).sin() * ORBIT_RADIUS;
        self.position.z = (elapsed * ORBIT_SPEED).cos() * ORBIT_RADIUS;
        self.look_at_origin();
    }

    fn look_at_origin(&mut self) {
        let to_origin = -self.position;
        if to_origin.length_squared() > f32::EPSILON {
            let dir = to_origin.normalize();
            self.pitch = dir.y.asin();
            self.yaw = dir.x.atan2(dir.z);
        }
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            position: self.position.to_array(),
            _pad1: 0.0,
            forward: self.forward().to_array(),
            _pad2: 0.0,
            right: self.right().to_array(),
            _pad3: 0.0,
            up: self.up().to_array(),
            _pad4: 0.0,
        }
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::KeyW => self.movement.forward = is_pressed,
                KeyCode::KeyS => self.movement.backward = is_pressed,
                KeyCode::KeyA => self.movement.left = is_pressed,
                KeyCode::KeyD => self.movement.right = is_pressed,
                KeyCode::Space => self.movement.up = is_pressed,
                KeyCode::ShiftLeft => self.movement.down = is_pressed,
                KeyCode::KeyQ => self.movement.rotate_left = is_pressed,
                KeyCode::KeyE => self.movement.rotate_right = is_pressed,
                _ => {}
            }
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_camera_faces_the_scene() {
        let camera = Camera::new();
        let forward = camera.forward();
        assert!(forward.z < -0.99, "camera should look down -z, got {:?}", forward);
    }

    #[test]
    fn orbit_keeps_fixed_radius() {
        let mut camera = Camera::new();
        for elapsed in [0.0, 1.7, 42.0] {
            camera.orbit(elapsed);
            let radius = (camera.position.x.powi(2) + camera.position.z.powi(2)).sqrt();
            assert!((radius - ORBIT_RADIUS).abs() < 1e-3);
        }
    }

    #[test]
    fn orbit_aims_at_origin() {
        let mut camera = Camera::new();
        camera.position.y = 5.0;
        camera.orbit(2.0);

        let to_origin = (-camera.position).normalize();
        let forward = camera.forward();
        assert!((forward - to_origin).length() < 1e-3);
    }
}
