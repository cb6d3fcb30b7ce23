//! Render a markdown file to HTML

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::content::render_markdown;

/// Read markdown from `input` (or stdin for "-") and return the HTML
pub fn render_file(input: &Path) -> Result<String> {
    let markdown = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read markdown from stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {:?}", input))?
    };

    tracing::debug!("Rendering {} bytes of markdown", markdown.len());
    Ok(render_markdown(&markdown))
}

/// Render and print to stdout
pub fn run(input: &Path) -> Result<()> {
    println!("{}", render_file(input)?);
    Ok(())
}
