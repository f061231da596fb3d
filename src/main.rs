mod annotate;
mod config;
mod content;
mod errors;
mod logging;
mod summarize;

use crate::annotate::{Annotator, HttpAnnotator};
use crate::config::AppConfig;
use crate::summarize::{summarize, SummaryOptions};

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cfg = AppConfig::from_env_and_args();
    if let Err(e) = cfg.validate() {
        anyhow::bail!("invalid config: {e}");
    }

    let content = content::load_content(cfg.input.as_deref(), cfg.content_uri)?;
    tracing::info!(
        chars = content.chars().count(),
        uri = cfg.content_uri,
        api_url = %cfg.api_url,
        "requesting annotation"
    );

    let annotator = HttpAnnotator::new(cfg.api_url.clone(), cfg.key.clone(), cfg.language.clone());
    let annotation = annotator.annotate(&content, cfg.content_uri)?;
    tracing::info!(
        sentences = annotation.sentences.len(),
        tokens = annotation.tokens.len(),
        mentions = annotation.mentions.len(),
        "annotation received"
    );

    let options = SummaryOptions {
        percent: cfg.percent,
        top_n: cfg.top_n,
    };
    let summary = summarize(&annotation, &options)?;
    tracing::info!(info = %summary.info, "summary assembled");

    if cfg.verbose {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.summary);
    }
    Ok(())
}
