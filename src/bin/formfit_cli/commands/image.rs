// ABOUTME: Image studio command for the formfit CLI
// ABOUTME: Reads a photo, applies a prompt-driven edit, and writes the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::{Path, PathBuf};

use formfit::context::FormFitContext;
use formfit::llm::InlineImage;
use formfit_core::errors::{AppError, AppResult};
use tokio::fs;
use tracing::info;

/// Edit `input` with `prompt` and save the result
pub async fn edit(
    ctx: &FormFitContext,
    input: &Path,
    prompt: &str,
    output: Option<PathBuf>,
) -> AppResult<()> {
    let mime_type = InlineImage::mime_for_path(input).ok_or_else(|| {
        AppError::invalid_input(format!(
            "Cannot tell the image type of {}; use png, jpg, webp, gif or heic",
            input.display()
        ))
    })?;
    let bytes = fs::read(input).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", input.display())).with_source(e)
    })?;
    let image = InlineImage::from_bytes(mime_type, &bytes)?;

    println!("Editing {} ...", input.display());
    let edited = ctx.studio().edit(&image, prompt).await?;

    let output = output.unwrap_or_else(|| default_output(input, &edited));
    fs::write(&output, edited.to_bytes()?).await?;
    info!(output = %output.display(), "Saved edited image");
    println!("Saved {}", output.display());
    Ok(())
}

fn default_output(input: &Path, edited: &InlineImage) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "image".into(), |s| s.to_string_lossy());
    input.with_file_name(format!("{stem}-edited.{}", edited.file_extension()))
}
