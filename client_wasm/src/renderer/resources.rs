use crate::camera::{Camera, CameraUniform};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y (top-left), width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            transform: [x, y, w, h],
            tint: Self::WHITE,
        }
    }
}

pub fn create_camera_buffer(device: &Device, camera: &Camera) -> Buffer {
    let camera_uniform = CameraUniform::from_camera(camera);

    device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    })
}

pub fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Rect Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * capacity) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
