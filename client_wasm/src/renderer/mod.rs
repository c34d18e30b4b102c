pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_rectangle, Mesh};
use game_core::{Canvas, Config};
use resources::InstanceData;
use wgpu::*;

/// Enough for paddles, ball and a few dozen score markers; grows on demand
const INITIAL_INSTANCE_CAPACITY: usize = 64;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub pipeline: RenderPipeline,
    pub camera_buffer: Buffer,
    pub camera_bind_group: BindGroup,
    pub quad: Mesh,

    // Rectangles requested since the last clear
    pub instances: Vec<InstanceData>,
    pub instance_buffer: Buffer,
    pub instance_capacity: usize,
}

impl Renderer {
    pub async fn new(canvas: web_sys::HtmlCanvasElement, config: &Config) -> Result<Self, String> {
        let ctx = init::init_gpu(canvas).await?;
        let camera = Camera::orthographic(config.arena_width(), config.arena_height());

        let pipes = pipeline::create_pipeline(&ctx.device, ctx.surface_config.format);
        let camera_buffer = resources::create_camera_buffer(&ctx.device, &camera);
        let instance_buffer =
            resources::create_instance_buffer(&ctx.device, INITIAL_INSTANCE_CAPACITY);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let quad = create_rectangle(&ctx.device);

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.surface_config,
            pipeline: pipes.pipeline,
            camera_buffer,
            camera_bind_group,
            quad,
            instances: Vec::with_capacity(INITIAL_INSTANCE_CAPACITY),
            instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
        })
    }

    /// Submit everything drawn since the last clear
    pub fn present(&mut self) -> Result<(), String> {
        draw::draw_frame(self)
    }
}

impl Canvas for Renderer {
    fn clear(&mut self) {
        self.instances.clear();
    }

    fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.instances.push(InstanceData::rect(x, y, w, h));
    }
}
