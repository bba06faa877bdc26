// ABOUTME: Status command for the formfit CLI
// ABOUTME: Reports the record store location and checks that the AI provider is reachable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formfit::config::AppConfig;
use formfit::context::FormFitContext;
use formfit_core::errors::AppResult;
use tracing::warn;

use crate::helpers::display::heading;

/// Print storage and AI configuration, probing the provider when one is configured
pub async fn status(ctx: &FormFitContext, config: &AppConfig) -> AppResult<()> {
    heading("FormFit status");
    println!("  Storage:      {} ({})", config.storage, ctx.backend_name());
    println!("  Logs stored:  {}", ctx.logs().all_logs()?.len());

    let Some(provider) = ctx.provider() else {
        println!("  AI:           offline (set GEMINI_API_KEY to enable)");
        return Ok(());
    };

    println!("  AI provider:  {}", provider.display_name());
    println!("  Text model:   {}", config.ai.text_model);
    println!("  Image model:  {}", config.ai.image_model);

    let reachable = match provider.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "Health check failed");
            false
        }
    };
    println!(
        "  Reachable:    {}",
        if reachable { "yes" } else { "no (check the API key and network)" }
    );
    Ok(())
}
