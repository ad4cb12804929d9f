mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tinyray_renderer::{ImageBuffer, RayTracer};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    args.logger().init();

    log::info!("Starting TinyRay");

    let config = args.render_config()?;
    let scene = args.scene()?;

    let mut image = ImageBuffer::new(config.width, config.height);
    let mut tracer = RayTracer::new(&config);
    tracer.do_ray_trace(&scene, &mut image);

    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
