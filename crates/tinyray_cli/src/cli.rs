//! Command-line arguments and how they layer over the render config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tinyray_core::SceneDescription;
use tinyray_renderer::{RenderConfig, Scene};

#[derive(Parser, Debug)]
#[command(name = "tinyray", version, about = "Render a scene with a recursive ray tracer")]
pub struct Args {
    /// Scene description (JSON). Renders the built-in scene when omitted.
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Render config (JSON). Flags below override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Recursion budget for primary rays
    #[arg(short, long)]
    pub trace_level: Option<u32>,

    #[arg(long)]
    pub no_shadows: bool,

    #[arg(long)]
    pub no_reflection: bool,

    #[arg(long)]
    pub no_refraction: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Log filter, e.g. "info" or "tinyray_renderer=debug". Overrides RUST_LOG.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => load_render_config(path)?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(trace_level) = self.trace_level {
            config.trace_level = trace_level;
        }
        config.flags.shadow &= !self.no_shadows;
        config.flags.reflection &= !self.no_reflection;
        config.flags.refraction &= !self.no_refraction;

        if config.width == 0 || config.height == 0 {
            anyhow::bail!("Image size must be non-zero, got {}x{}", config.width, config.height);
        }
        Ok(config)
    }

    /// Scene file when given, the built-in scene otherwise.
    pub fn scene(&self) -> Result<Scene> {
        match &self.scene {
            Some(path) => Scene::from_json_file(path)
                .with_context(|| format!("Failed to load scene {}", path.display())),
            None => {
                log::info!("No scene given, using the built-in scene");
                Scene::from_description(&SceneDescription::default()).context("Invalid built-in scene")
            }
        }
    }

    /// Logger reading RUST_LOG (default "info"), with `--log-level` on top.
    pub fn logger(&self) -> env_logger::Builder {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
        if let Some(filter) = &self.log_level {
            builder.parse_filters(filter);
        }
        builder
    }
}

fn load_render_config(path: &Path) -> Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyray_renderer::RenderError;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["tinyray"]).unwrap();
        let config = args.render_config().unwrap();

        assert_eq!(config, RenderConfig::default());
        assert_eq!(args.output, PathBuf::from("render.png"));
        assert!(args.log_level.is_none());
        assert!(args.scene().is_ok());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "tinyray",
            "--width",
            "320",
            "--trace-level",
            "2",
            "--no-shadows",
            "--no-refraction",
        ])
        .unwrap();
        let config = args.render_config().unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 480);
        assert_eq!(config.trace_level, 2);
        assert!(!config.flags.shadow);
        assert!(config.flags.reflection);
        assert!(!config.flags.refraction);
    }

    #[test]
    fn test_config_file_then_overrides() {
        let path = std::env::temp_dir().join("tinyray_cli_config_test.json");
        std::fs::write(&path, r#"{ "width": 100, "height": 50, "trace_level": 3 }"#).unwrap();

        let args = Args::try_parse_from([
            "tinyray",
            "--config",
            path.to_str().unwrap(),
            "--height",
            "60",
        ])
        .unwrap();
        let config = args.render_config().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!((config.width, config.height, config.trace_level), (100, 60, 3));
    }

    #[test]
    fn test_zero_size_rejected() {
        let args = Args::try_parse_from(["tinyray", "--width", "0"]).unwrap();
        assert!(args.render_config().is_err());
    }

    #[test]
    fn test_missing_scene_file() {
        let args = Args::try_parse_from(["tinyray", "--scene", "/nonexistent/scene.json"]).unwrap();
        let err = args.scene().err().unwrap();
        assert!(matches!(
            err.downcast_ref::<RenderError>(),
            Some(RenderError::Scene(_))
        ));
    }

    #[test]
    fn test_scene_file() {
        let path = std::env::temp_dir().join("tinyray_cli_scene_test.json");
        std::fs::write(
            &path,
            r#"{
                "view_width": 2.0,
                "view_height": 2.0,
                "primitives": [ { "type": "sphere", "centre": [0.0, 0.0, 0.0], "radius": 1.0 } ]
            }"#,
        )
        .unwrap();

        let args = Args::try_parse_from(["tinyray", "--scene", path.to_str().unwrap()]).unwrap();
        let scene = args.scene().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(scene.primitives().len(), 1);
        assert_eq!(scene.scene_width(), 2.0);
    }

    #[test]
    fn test_log_level_is_optional() {
        let args = Args::try_parse_from(["tinyray", "--log-level", "tinyray_renderer=debug"]).unwrap();
        assert_eq!(args.log_level.as_deref(), Some("tinyray_renderer=debug"));
        // building the logger does not install it
        let _ = args.logger();
    }
}
