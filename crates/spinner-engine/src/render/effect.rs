use std::path::{Path, PathBuf};

use thiserror::Error;

/// Name of the uniform the effect must declare (the "Transform" input).
pub const TRANSFORM_SYMBOL: &str = "transform";

/// Where to find the effect and which entry points form its pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectConfig {
    pub path: PathBuf,
    pub vertex_entry: String,
    pub fragment_entry: String,
}

impl EffectConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            vertex_entry: "vs_main".to_string(),
            fragment_entry: "fs_main".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("failed to read effect {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("effect {} is not valid WGSL:\n{message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("effect {} failed validation:\n{message}", .path.display())]
    Validation { path: PathBuf, message: String },

    #[error("effect {} has no {stage:?} entry point `{name}`", .path.display())]
    MissingEntry {
        path: PathBuf,
        stage: naga::ShaderStage,
        name: String,
    },

    #[error("effect {} does not declare `{symbol}`", .path.display())]
    MissingSymbol { path: PathBuf, symbol: String },

    #[error("effect {}: `{symbol}` {reason}", .path.display())]
    TransformMismatch {
        path: PathBuf,
        symbol: String,
        reason: &'static str,
    },
}

/// A WGSL effect loaded from disk: one vertex + fragment entry pair.
#[derive(Debug, Clone)]
pub struct Effect {
    path: PathBuf,
    source: String,
    vertex_entry: String,
    fragment_entry: String,
}

impl Effect {
    /// Reads and checks the effect named by `config`.
    pub fn load(config: &EffectConfig) -> Result<Self, EffectError> {
        let source = std::fs::read_to_string(&config.path).map_err(|source| EffectError::Read {
            path: config.path.clone(),
            source,
        })?;
        Self::from_source(config, source)
    }

    /// Parses and validates `source`, then checks its interface: both entry
    /// points with the right stages and a `mat4x4<f32>` uniform named
    /// `transform` at group 0, binding 0.
    pub fn from_source(config: &EffectConfig, source: String) -> Result<Self, EffectError> {
        let path = &config.path;

        let module = naga::front::wgsl::parse_str(&source).map_err(|err| EffectError::Parse {
            path: path.clone(),
            message: err.emit_to_string(&source),
        })?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|err| EffectError::Validation {
                path: path.clone(),
                message: err.emit_to_string(&source),
            })?;

        for (stage, name) in [
            (naga::ShaderStage::Vertex, &config.vertex_entry),
            (naga::ShaderStage::Fragment, &config.fragment_entry),
        ] {
            let found = module
                .entry_points
                .iter()
                .any(|ep| ep.stage == stage && ep.name == *name);
            if !found {
                return Err(EffectError::MissingEntry {
                    path: path.clone(),
                    stage,
                    name: name.clone(),
                });
            }
        }

        check_transform(&module).map_err(|reason| match reason {
            None => EffectError::MissingSymbol {
                path: path.clone(),
                symbol: TRANSFORM_SYMBOL.to_string(),
            },
            Some(reason) => EffectError::TransformMismatch {
                path: path.clone(),
                symbol: TRANSFORM_SYMBOL.to_string(),
                reason,
            },
        })?;

        Ok(Self {
            path: path.clone(),
            source,
            vertex_entry: config.vertex_entry.clone(),
            fragment_entry: config.fragment_entry.clone(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn vertex_entry(&self) -> &str {
        &self.vertex_entry
    }

    pub fn fragment_entry(&self) -> &str {
        &self.fragment_entry
    }

    pub fn create_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("spinner effect"),
            source: wgpu::ShaderSource::Wgsl(self.source.as_str().into()),
        })
    }
}

/// `Err(None)` when no global is named `transform`, `Err(Some(reason))`
/// when it exists with the wrong shape.
fn check_transform(module: &naga::Module) -> Result<(), Option<&'static str>> {
    let (_, global) = module
        .global_variables
        .iter()
        .find(|(_, g)| g.name.as_deref() == Some(TRANSFORM_SYMBOL))
        .ok_or(None)?;

    if global.space != naga::AddressSpace::Uniform {
        return Err(Some("is not a uniform"));
    }
    let bound_at_zero = global
        .binding
        .as_ref()
        .is_some_and(|b| b.group == 0 && b.binding == 0);
    if !bound_at_zero {
        return Err(Some("is not bound at @group(0) @binding(0)"));
    }

    let holds_mat4 = match module.types[global.ty].inner {
        naga::TypeInner::Struct { ref members, .. } => {
            members.len() == 1 && is_mat4x4_f32(module, members[0].ty)
        }
        _ => is_mat4x4_f32(module, global.ty),
    };
    if !holds_mat4 {
        return Err(Some("is not a mat4x4<f32>"));
    }

    Ok(())
}

fn is_mat4x4_f32(module: &naga::Module, ty: naga::Handle<naga::Type>) -> bool {
    matches!(
        module.types[ty].inner,
        naga::TypeInner::Matrix {
            columns: naga::VectorSize::Quad,
            rows: naga::VectorSize::Quad,
            scalar,
        } if scalar == naga::Scalar::F32
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHADER: &str = r#"
struct Effect {
    matrix: mat4x4<f32>,
};

@group(0) @binding(0) var<uniform> transform: Effect;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return transform.matrix * vec4<f32>(position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0);
}
"#;

    fn config() -> EffectConfig {
        EffectConfig::new("fx/effect.wgsl")
    }

    #[test]
    fn accepts_complete_effect() {
        let fx = Effect::from_source(&config(), SHADER.to_string()).unwrap();
        assert_eq!(fx.vertex_entry(), "vs_main");
        assert_eq!(fx.fragment_entry(), "fs_main");
        assert_eq!(fx.path(), Path::new("fx/effect.wgsl"));
    }

    // ── interface ─────────────────────────────────────────────────────────

    #[test]
    fn rejects_missing_vertex_entry() {
        let src = SHADER.replace("fn vs_main", "fn vertex_main");
        let err = Effect::from_source(&config(), src).unwrap_err();
        assert!(matches!(
            err,
            EffectError::MissingEntry { stage: naga::ShaderStage::Vertex, ref name, .. } if name == "vs_main"
        ));
    }

    #[test]
    fn entry_with_wrong_stage_is_rejected() {
        let cfg = EffectConfig {
            fragment_entry: "vs_main".to_string(),
            ..config()
        };
        let err = Effect::from_source(&cfg, SHADER.to_string()).unwrap_err();
        assert!(matches!(
            err,
            EffectError::MissingEntry { stage: naga::ShaderStage::Fragment, .. }
        ));
    }

    #[test]
    fn rejects_missing_transform() {
        let src = SHADER.replace("transform", "world");
        let err = Effect::from_source(&config(), src).unwrap_err();
        assert_eq!(err.to_string(), "effect fx/effect.wgsl does not declare `transform`");
    }

    #[test]
    fn bare_matrix_uniform_is_accepted() {
        let src = SHADER
            .replace("var<uniform> transform: Effect;", "var<uniform> transform: mat4x4<f32>;")
            .replace("transform.matrix", "transform");
        assert!(Effect::from_source(&config(), src).is_ok());
    }

    #[test]
    fn transform_of_wrong_type_is_rejected() {
        let src = SHADER.replace("matrix: mat4x4<f32>", "matrix: mat3x3<f32>").replace(
            "transform.matrix * vec4<f32>(position, 1.0)",
            "vec4<f32>(transform.matrix * position, 1.0)",
        );
        let err = Effect::from_source(&config(), src).unwrap_err();
        assert!(matches!(err, EffectError::TransformMismatch { reason, .. } if reason.contains("mat4x4")));
    }

    #[test]
    fn transform_on_wrong_binding_is_rejected() {
        let src = SHADER.replace("@binding(0)", "@binding(3)");
        let err = Effect::from_source(&config(), src).unwrap_err();
        assert!(matches!(err, EffectError::TransformMismatch { .. }));
    }

    #[test]
    fn custom_entry_points() {
        let src = SHADER.replace("vs_main", "vert").replace("fs_main", "frag");
        let cfg = EffectConfig {
            vertex_entry: "vert".to_string(),
            fragment_entry: "frag".to_string(),
            ..config()
        };
        assert!(Effect::from_source(&cfg, src).is_ok());
    }

    // ── malformed source ──────────────────────────────────────────────────

    #[test]
    fn garbage_source_is_a_parse_error() {
        let src = "this is not wgsl @@@ fn vs_main fn fs_main var transform".to_string();
        let err = Effect::from_source(&EffectConfig::new("x.wgsl"), src).unwrap_err();
        assert!(matches!(err, EffectError::Parse { .. }));
        assert!(err.to_string().starts_with("effect x.wgsl is not valid WGSL"));
    }

    #[test]
    fn nested_block_comment_hides_everything() {
        let src = "/* outer /* inner */ fn vs_main() {} fn fs_main() {} \
                   var<uniform> transform: mat4x4<f32>; */"
            .to_string();
        let err = Effect::from_source(&config(), src).unwrap_err();
        assert!(matches!(err, EffectError::MissingEntry { .. }));
    }

    #[test]
    fn commented_out_entry_does_not_count() {
        let src = SHADER.replace("fn fs_main", "// fn fs_main\nfn other");
        assert!(Effect::from_source(&config(), src).is_err());

        let src = SHADER.replace("fn fs_main", "/* fn fs_main */ fn other");
        assert!(Effect::from_source(&config(), src).is_err());
    }

    #[test]
    fn non_host_shareable_uniform_fails_validation() {
        let src = format!("{SHADER}\n@group(0) @binding(1) var<uniform> flag: bool;\n");
        let err = Effect::from_source(&config(), src).unwrap_err();
        assert!(matches!(err, EffectError::Validation { .. }));
    }

    // ── disk ──────────────────────────────────────────────────────────────

    #[test]
    fn missing_file_is_a_read_error() {
        let cfg = EffectConfig::new("does/not/exist.wgsl");
        let err = Effect::load(&cfg).unwrap_err();
        assert!(matches!(err, EffectError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.wgsl"));
    }

    #[test]
    fn load_reads_from_disk() {
        let path = std::env::temp_dir().join(format!("spinner-effect-{}.wgsl", std::process::id()));
        std::fs::write(&path, SHADER).unwrap();
        let fx = Effect::load(&EffectConfig::new(&path));
        std::fs::remove_file(&path).ok();
        assert!(fx.is_ok());
    }
}
