use crate::summarize::DEFAULT_PERCENT;
use clap::Parser;

pub const DEFAULT_API_URL: &str = "https://api.rosette.com/rest/v1";

#[derive(Debug, Clone, Parser)]
#[command(name = "summarize")]
#[command(about = "Extractive document summarizer backed by a text-analytics annotation API", long_about = None)]
pub struct AppConfig {
    /// Path to a plain-text file or a URI; reads stdin when absent
    #[arg(short, long)]
    pub input: Option<String>,

    /// Treat the input as a URI the annotation service fetches itself
    #[arg(short = 'u', long)]
    pub content_uri: bool,

    #[arg(short, long, env = "ANNOTATION_API_KEY")]
    pub key: String,

    #[arg(short, long, env = "ANNOTATION_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// ISO 639-2 T language code overriding the service's language detection
    #[arg(short, long, env = "ANNOTATION_LANGUAGE")]
    pub language: Option<String>,

    /// Fraction of the original sentences to keep, in (0, 1]
    #[arg(short, long, default_value_t = DEFAULT_PERCENT)]
    pub percent: f64,

    /// Absolute number of sentences to keep (overrides --percent)
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Print the full summary object (info, ranked sentences, summary) as JSON
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_env_and_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        url::Url::parse(&self.api_url).map_err(|_| "invalid api_url format".to_string())?;
        if !(self.percent > 0.0 && self.percent <= 1.0) {
            return Err("percent must be in (0, 1]".into());
        }
        if self.top_n == Some(0) {
            return Err("top_n must be > 0".into());
        }
        Ok(())
    }
}
