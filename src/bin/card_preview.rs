//! Manual preview utility: render a feedback block to a PNG on disk.
//!
//! Usage: `card-preview [input.txt] [output.png]`
//!
//! With no input file a built-in sample document is rendered. Build with
//! `--features dev-tools`.

use std::fs;

use anyhow::{Context, Result};
use lingo_card::{Renderer, StyleConfig};

const SAMPLE: &str = concat!(
    "Original: \"I go to school yesterday\"\n",
    "Corregido: \"I went to school yesterday\"\n",
    "Tip: Use the past tense for actions that already happened.\n",
    "Respuesta: ¡Buen intento! ¿Qué más hiciste ayer?",
);

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let input = args.next();
    let output = args.next().unwrap_or_else(|| "card.png".to_string());

    let raw = match &input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {path}"))?,
        None => SAMPLE.to_string(),
    };

    let style = StyleConfig::load()?;
    let renderer = Renderer::new(style)?;
    let png = renderer.render_feedback_image(&raw)?;
    fs::write(&output, &png).with_context(|| format!("writing {output}"))?;
    eprintln!("wrote {output} ({} bytes)", png.len());
    Ok(())
}
