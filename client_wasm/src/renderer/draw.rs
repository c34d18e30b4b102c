use super::resources::{create_instance_buffer, InstanceData};
use super::Renderer;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer) -> Result<(), String> {
    upload_instances(renderer);

    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one draws on the fresh surface
            log::warn!("Surface lost, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        let count = renderer.instances.len() as u32;
        if count > 0 {
            pass.set_pipeline(&renderer.pipeline);
            pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, renderer.instance_buffer.slice(..));
            pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
            pass.draw_indexed(0..renderer.quad.index_count, 0, 0..count);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Copy this frame's rectangles to the GPU, growing the buffer if needed
fn upload_instances(renderer: &mut Renderer) {
    let needed = renderer.instances.len();
    if needed > renderer.instance_capacity {
        let capacity = needed.next_power_of_two();
        log::info!(
            "Growing instance buffer: {} -> {} rects",
            renderer.instance_capacity,
            capacity
        );
        renderer.instance_buffer = create_instance_buffer(&renderer.device, capacity);
        renderer.instance_capacity = capacity;
    }

    if needed > 0 {
        renderer.queue.write_buffer(
            &renderer.instance_buffer,
            0,
            bytemuck::cast_slice::<InstanceData, u8>(&renderer.instances),
        );
    }
}
