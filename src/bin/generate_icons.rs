//! Build-time asset pipeline: rasterizes the app's vector icon into the
//! fixed PNG sizes and writes a small manifest describing them. Run with
//! `cargo run --bin generate_icons`. Packaging only, nothing at runtime
//! depends on this.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

const SIZES: [u32; 3] = [96, 192, 512];
const INPUT: &str = "assets/favicon.svg";
const OUTPUT_DIR: &str = "assets/icons";

#[derive(Serialize)]
struct IconEntry {
    src: String,
    sizes: String,
    #[serde(rename = "type")]
    mime: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let entries = generate(Path::new(INPUT), Path::new(OUTPUT_DIR))?;
    log::info!("generated {} icons into {OUTPUT_DIR}", entries.len());
    Ok(())
}

fn generate(input: &Path, output_dir: &Path) -> Result<Vec<IconEntry>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    let data = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let tree = resvg::usvg::Tree::from_data(&data, &resvg::usvg::Options::default())
        .with_context(|| format!("parsing {}", input.display()))?;

    let mut entries = Vec::new();
    for size in SIZES {
        let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
            .ok_or_else(|| anyhow!("zero-sized pixmap for {size}px"))?;
        let transform = resvg::tiny_skia::Transform::from_scale(
            size as f32 / tree.size().width(),
            size as f32 / tree.size().height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let file_name = format!("icon-{size}x{size}.png");
        let output = output_dir.join(&file_name);
        pixmap
            .save_png(&output)
            .with_context(|| format!("writing {}", output.display()))?;
        log::info!("generated {size}x{size} icon");

        entries.push(IconEntry {
            src: file_name,
            sizes: format!("{size}x{size}"),
            mime: "image/png".to_string(),
        });
    }

    let manifest = serde_json::to_string_pretty(&entries)?;
    fs::write(output_dir.join("icons.json"), manifest)?;
    Ok(entries)
}
