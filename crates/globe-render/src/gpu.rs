//! Headless GPU device acquisition.

/// Request a device without a surface, for offscreen upload and tests.
///
/// Returns `None` when no adapter is available (e.g. CI without a GPU).
pub fn create_headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    pollster::block_on(async {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok()?;

        let info = adapter.get_info();
        log::info!("Headless adapter: {} ({:?})", info.name, info.backend);

        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("globe-headless-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .ok()
    })
}
