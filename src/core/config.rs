use crate::core::data::colour::PaletteMode;
use crate::core::navigation::NavigationState;

/// Startup configuration for the viewer.
///
/// Everything the loop needs travels in here; the core keeps no process-wide
/// mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Initial window and framebuffer size in pixels.
    pub width: u32,
    pub height: u32,
    /// Frame-rate cap; 0 disables throttling.
    pub target_fps: u32,
    pub palette_mode: PaletteMode,
    pub navigation: NavigationState,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            target_fps: 120,
            palette_mode: PaletteMode::default(),
            navigation: NavigationState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_startup() {
        let config = ViewerConfig::default();

        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 800);
        assert_eq!(config.target_fps, 120);
        assert_eq!(config.palette_mode, PaletteMode::Gradient);
        assert!(config.navigation.running);
    }
}
