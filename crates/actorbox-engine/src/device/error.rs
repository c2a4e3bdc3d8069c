/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Out of memory; the run cannot continue.
    Fatal,
}

impl SurfaceErrorAction {
    /// Maps a wgpu surface error to the runtime's response.
    pub fn for_error(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
            wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_and_outdated_reconfigure() {
        assert_eq!(SurfaceErrorAction::for_error(&wgpu::SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(SurfaceErrorAction::for_error(&wgpu::SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
    }

    #[test]
    fn oom_is_fatal_timeout_skips() {
        assert_eq!(SurfaceErrorAction::for_error(&wgpu::SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
        assert_eq!(SurfaceErrorAction::for_error(&wgpu::SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
    }
}
