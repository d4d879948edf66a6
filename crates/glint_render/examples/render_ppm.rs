//! Demo render of the five-sphere scene.
//!
//! Traces the demo scene at 1920x1080 and writes the result as both a
//! plain-text PPM and a PNG.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Result;
use glint_render::{render, Camera, ImageBuffer, RenderConfig, Scene};

fn main() -> Result<()> {
    env_logger::init();

    let scene = Scene::demo();
    let camera = Camera::demo();
    let config = RenderConfig::default();

    println!(
        "Rendering {}x{} @ {} spp...",
        config.width, config.height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &config)?;
    println!("Rendered in {:?}", start.elapsed());

    save_ppm(&image, "picture.ppm")?;
    println!("Saved to picture.ppm");

    image.save_png("picture.png")?;
    println!("Saved to picture.png");

    Ok(())
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgb in image.to_rgb8().chunks_exact(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}
