//! Two mirrored triangles, vsync, fixed 800x600 window.

use anyhow::Result;
use spinner_engine::{RenderProfile, ViewerConfig};

fn main() -> Result<()> {
    let config = ViewerConfig::new(RenderProfile::dual(), spinner_viewer::effect_path())
        .title("spinner (dual target)");

    spinner_viewer::run(config)
}
