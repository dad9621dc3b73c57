use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;

    let preferred: [wgpu::TextureFormat; 2] = if prefer_srgb {
        [wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Rgba8UnormSrgb]
    } else {
        [wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Rgba8Unorm]
    };

    Some(
        preferred
            .into_iter()
            .find(|f| formats.contains(f))
            .unwrap_or(first),
    )
}

/// Opaque when offered: the backbuffer is always fully covered by the clear.
pub(crate) fn choose_alpha_mode(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    let opaque = wgpu::CompositeAlphaMode::Opaque;
    if modes.contains(&opaque) {
        return opaque;
    }
    modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Returns the requested present mode if supported, otherwise FIFO.
///
/// FIFO is the only mode every surface must support.
pub(crate) fn choose_present_mode(
    modes: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    if modes.contains(&requested) || is_auto(requested) {
        return requested;
    }
    log::warn!("present mode {requested:?} unsupported by surface; falling back to Fifo");
    wgpu::PresentMode::Fifo
}

fn is_auto(mode: wgpu::PresentMode) -> bool {
    matches!(mode, wgpu::PresentMode::AutoVsync | wgpu::PresentMode::AutoNoVsync)
}

pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    // wgpu rejects 0x0 surfaces; defer configuration until a real size arrives.
    if new_size.width == 0 || new_size.height == 0 {
        *size = new_size;
        return;
    }

    *size = new_size;
    config.width = new_size.width;
    config.height = new_size.height;

    surface.configure(device, config);
}

/// Maps a surface error to the action the frame loop should take.
pub(crate) fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, PresentMode, SurfaceError, TextureFormat as Tf};

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn no_formats_yields_none() {
        assert_eq!(choose_surface_format(&[], false), None);
    }

    #[test]
    fn prefers_unorm_when_srgb_not_requested() {
        let formats = [Tf::Bgra8UnormSrgb, Tf::Rgba8Unorm];
        assert_eq!(choose_surface_format(&formats, false), Some(Tf::Rgba8Unorm));
    }

    #[test]
    fn prefers_srgb_when_requested() {
        let formats = [Tf::Bgra8Unorm, Tf::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(Tf::Bgra8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_format() {
        let formats = [Tf::Rgb10a2Unorm, Tf::Rgba16Float];
        assert_eq!(choose_surface_format(&formats, true), Some(Tf::Rgb10a2Unorm));
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[test]
    fn opaque_alpha_preferred() {
        let modes = [Alpha::PreMultiplied, Alpha::Opaque];
        assert_eq!(choose_alpha_mode(&modes), Alpha::Opaque);
    }

    #[test]
    fn alpha_mode_falls_back_to_first_then_auto() {
        assert_eq!(choose_alpha_mode(&[Alpha::Inherit, Alpha::PreMultiplied]), Alpha::Inherit);
        assert_eq!(choose_alpha_mode(&[]), Alpha::Auto);
    }

    // ── present mode ──────────────────────────────────────────────────────

    #[test]
    fn immediate_kept_when_supported() {
        let modes = [PresentMode::Fifo, PresentMode::Immediate];
        assert_eq!(choose_present_mode(&modes, PresentMode::Immediate), PresentMode::Immediate);
    }

    #[test]
    fn immediate_falls_back_to_fifo() {
        let modes = [PresentMode::Fifo];
        assert_eq!(choose_present_mode(&modes, PresentMode::Immediate), PresentMode::Fifo);
    }

    #[test]
    fn auto_modes_pass_through() {
        assert_eq!(choose_present_mode(&[], PresentMode::AutoVsync), PresentMode::AutoVsync);
    }

    // ── surface errors ────────────────────────────────────────────────────

    #[test]
    fn surface_error_classification() {
        assert_eq!(classify_surface_error(&SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_surface_error(&SurfaceError::Other), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_surface_error(&SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
