/// Surface and device settings used when the window's GPU context is created.
///
/// The defaults suit the demo: a handful of flat rects at a low tick rate, on
/// whatever adapter is available.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format if the surface offers one.
    pub prefer_srgb: bool,

    /// Fifo works on every backend. The runtime's pacer sets the tick rate,
    /// so vsync only bounds presentation.
    pub present_mode: wgpu::PresentMode,

    /// Requested compositing mode; `None` or an unsupported value falls back
    /// to the first mode the surface reports.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_limits: wgpu::Limits,

    /// Passed through to the surface configuration as a latency hint.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_any_adapter() {
        let init = GpuInit::default();
        assert!(init.prefer_srgb);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(init.alpha_mode, None);
    }
}
