use tracing::{debug, info};

mod config;
mod error;
mod kompas;
mod output;

pub use config::ScraperConfig;
pub use error::ScraperError;
pub use kompas::{extract_date_from_url, KompasArticle, KompasScraper};
pub use output::{save_articles, save_links};

/// Runs the two-phase pipeline: collect article links from the paginated
/// listing, persist them, then scrape every article in sequence and persist
/// the records. There is no checkpointing; a crash mid-run loses the run.
pub async fn run(config: &ScraperConfig) -> Result<(), ScraperError> {
    let scraper = KompasScraper::new(config)?;

    info!("Phase 1: collecting article links");
    let links = scraper.collect_links().await;
    info!("Collected {} unique links", links.len());

    let path = output::save_links(&links, &config.output_dir, &config.links_filename)?;
    info!("Links saved to {}", path.display());

    info!("Phase 2: scraping article contents");
    let mut articles = Vec::with_capacity(links.len());
    for (i, link) in links.iter().enumerate() {
        debug!("[{}/{}] Scraping {}", i + 1, links.len(), link);
        articles.push(scraper.scrape_article(link).await);
    }

    let path = output::save_articles(&articles, &config.output_dir, &config.articles_filename)?;
    info!("Articles saved to {}", path.display());

    Ok(())
}
