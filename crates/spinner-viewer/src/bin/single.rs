//! One triangle, spinning forward, no vsync, window sized to the desktop.

use anyhow::Result;
use spinner_engine::config::DEFAULT_WINDOW_SIZE;
use spinner_engine::{RenderProfile, ViewerConfig, WindowSize};

fn main() -> Result<()> {
    let config = ViewerConfig::new(RenderProfile::single(), spinner_viewer::effect_path())
        .title("spinner (single target)")
        .window(WindowSize::Desktop {
            fallback: DEFAULT_WINDOW_SIZE,
        });

    spinner_viewer::run(config)
}
