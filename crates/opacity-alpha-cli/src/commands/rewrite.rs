//! Rewrite command

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use opacity_alpha::{Rewrite, SnippetOptions, rewrite_with_opacity};

use super::Outcome;

/// Read source text from `path`, or stdin when `None`
pub fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Rewrite `.withOpacity(<literal>)` calls in `source`
pub fn rewrite(source: &str, options: &SnippetOptions) -> anyhow::Result<Outcome> {
    let rewrite = rewrite_with_opacity(source, options);
    report(&rewrite);
    let json = serde_json::to_value(&rewrite)?;
    Ok(Outcome {
        text: rewrite.output,
        json,
    })
}

fn report(rewrite: &Rewrite) {
    for skipped in &rewrite.skipped {
        tracing::warn!(
            line = skipped.line,
            call = %skipped.text,
            reason = %skipped.reason,
            "left call unchanged"
        );
    }
    tracing::info!(
        replaced = rewrite.replacements.len(),
        skipped = rewrite.skipped.len(),
        "rewrite finished"
    );
}
