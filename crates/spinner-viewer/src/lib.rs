//! Shared glue for the spinner viewer binaries.

use std::path::PathBuf;

use anyhow::Result;
use spinner_engine::logging::init_logging;
use spinner_engine::{Runtime, ViewerConfig};

/// Effect file name inside the `assets` directory.
pub const EFFECT_FILE: &str = "effect.wgsl";

/// Resolves the effect path.
///
/// An `assets/` directory next to the executable wins (packaged builds);
/// otherwise the crate's own `assets/` is used (`cargo run`).
pub fn effect_path() -> PathBuf {
    let packaged = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets").join(EFFECT_FILE)))
        .filter(|p| p.is_file());

    packaged.unwrap_or_else(bundled_effect_path)
}

/// The effect shipped with this crate.
pub fn bundled_effect_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(EFFECT_FILE)
}

/// Installs logging and runs the viewer until its window closes.
pub fn run(config: ViewerConfig) -> Result<()> {
    init_logging(config.logging.clone());
    log::info!("starting {} ({} target slot(s))", config.title, config.profile.targets.len());
    Runtime::run(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinner_engine::render::{Effect, EffectConfig};

    #[test]
    fn bundled_effect_exists() {
        assert!(bundled_effect_path().is_file());
    }

    #[test]
    fn bundled_effect_declares_its_pass() {
        let fx = Effect::load(&EffectConfig::new(bundled_effect_path())).unwrap();
        assert_eq!(fx.vertex_entry(), "vs_main");
        assert_eq!(fx.fragment_entry(), "fs_main");
    }

    #[test]
    fn effect_path_points_at_a_file() {
        assert!(effect_path().ends_with(EFFECT_FILE));
    }
}
