//! `outlink render <query>` – full pipeline from a raw query string.

use anyhow::Result;
use outlink_core::config::{OutlinkConfig, RenderFormat};
use outlink_core::interstitial::Interstitial;
use outlink_core::locale::{EnvPreferences, PreferenceSource, StaticPreferences};
use outlink_core::query::PageRequest;

pub fn run_render(
    cfg: &OutlinkConfig,
    query: &str,
    format: Option<RenderFormat>,
    prefer: Option<&str>,
) -> Result<()> {
    let request = PageRequest::from_query(query);
    let source: Box<dyn PreferenceSource> = match prefer {
        Some(tags) => Box::new(StaticPreferences::from_list(tags)),
        None => Box::new(EnvPreferences),
    };
    let format = format.or(cfg.format).unwrap_or_default();

    match Interstitial::build(&request, source.as_ref(), &cfg.fallback_lang) {
        Ok(page) => {
            match format {
                RenderFormat::Text => print!("{}", page.to_text()),
                RenderFormat::Html => print!("{}", page.to_html()),
                RenderFormat::Json => println!("{}", page.to_json()?),
            }
            Ok(())
        }
        Err(rejection) => {
            tracing::info!(reason = %rejection.reason(), "page request rejected");
            match format {
                RenderFormat::Text => print!("{}", rejection.to_text()),
                RenderFormat::Html => print!("{}", rejection.to_html()),
                RenderFormat::Json => println!("{}", rejection.to_json()?),
            }
            anyhow::bail!("rejected: {}", rejection.reason())
        }
    }
}
