use actorbox_engine::paint::Color;
use actorbox_engine::window::{LogicalSize, RuntimeConfig};

/// Fixed demo settings; there is no config file or CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    /// Window size in logical pixels.
    pub width: u32,
    pub height: u32,
    /// Ticks per second.
    pub target_fps: u32,
    pub background: Color,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "actorbox".to_string(),
            width: 480,
            height: 360,
            target_fps: 12,
            background: Color::black(),
        }
    }
}

impl DemoConfig {
    /// Window settings for the runtime. The window is never resizable.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            size: LogicalSize::new(self.width as f64, self.height as f64),
            resizable: false,
            target_fps: self.target_fps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = DemoConfig::default();
        assert_eq!((c.width, c.height), (480, 360));
        assert_eq!(c.target_fps, 12);
        assert_eq!(c.background, Color::black());
    }

    #[test]
    fn runtime_config_is_fixed_size() {
        let rc = DemoConfig::default().runtime_config();
        assert_eq!(rc.title, "actorbox");
        assert_eq!(rc.size, LogicalSize::new(480.0, 360.0));
        assert!(!rc.resizable);
        assert_eq!(rc.target_fps, 12);
    }
}
