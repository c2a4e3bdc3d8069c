use winit::dpi::PhysicalSize;

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        if let Some(f) = formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(f);
        }
    }
    formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Updates `config` for `new_size`; returns false when the surface must not be
/// configured (wgpu rejects 0x0 surfaces, e.g. while minimized).
pub(crate) fn apply_resize(
    config: &mut wgpu::SurfaceConfiguration,
    new_size: PhysicalSize<u32>,
) -> bool {
    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }
    config.width = new_size.width;
    config.height = new_size.height;
    true
}
