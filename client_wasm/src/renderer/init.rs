//! WebGPU device and canvas surface setup

use log::info;
use web_sys::HtmlCanvasElement;
use wgpu::*;

/// Device, queue and a surface already configured for the canvas
pub struct GpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
}

pub async fn init_gpu(canvas: HtmlCanvasElement) -> Result<GpuContext, String> {
    // Canvas dimensions are fixed for the lifetime of the game
    let (width, height) = (canvas.width(), canvas.height());

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Failed to create surface: {:?}", e))?;

    let adapter = request_adapter(&instance, &surface).await?;
    let (device, queue) = request_device(&adapter).await?;

    let format = pick_surface_format(&surface.get_capabilities(&adapter))?;
    let surface_config = surface_configuration(format, width, height);
    surface.configure(&device, &surface_config);
    info!("Surface configured: {}x{} {:?}", width, height, format);

    Ok(GpuContext {
        device,
        queue,
        surface,
        surface_config,
    })
}

async fn request_adapter(instance: &Instance, surface: &Surface<'_>) -> Result<Adapter, String> {
    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| "No WebGPU adapter available".to_string())?;

    info!("Using adapter: {:?}", adapter.get_info().backend);
    Ok(adapter)
}

async fn request_device(adapter: &Adapter) -> Result<(Device, Queue), String> {
    // A handful of flat rectangles needs nothing beyond the baseline limits
    let descriptor = DeviceDescriptor {
        label: Some("Pong Device"),
        required_features: Features::empty(),
        required_limits: Limits::downlevel_webgl2_defaults(),
        memory_hints: MemoryHints::MemoryUsage,
    };

    adapter
        .request_device(&descriptor, None)
        .await
        .map_err(|e| format!("Failed to create device: {:?}", e))
}

/// Prefer an sRGB format, else whatever the surface lists first
fn pick_surface_format(caps: &SurfaceCapabilities) -> Result<TextureFormat, String> {
    caps.formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first())
        .copied()
        .ok_or_else(|| "Surface reports no formats".to_string())
}

fn surface_configuration(format: TextureFormat, width: u32, height: u32) -> SurfaceConfiguration {
    SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Opaque,
        view_formats: Vec::new(),
        desired_maximum_frame_latency: 2,
    }
}
