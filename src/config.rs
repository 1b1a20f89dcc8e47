use std::path::PathBuf;
use std::time::Duration;

/// Immutable settings shared by the link collector and the article extractor.
///
/// `base_url` is a template whose `{page_number}` placeholder is substituted
/// with the page number (1 through `max_pages`).
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub base_url: String,
    pub article_selector: String,
    pub title_selector: String,
    pub content_selector: String,
    pub max_pages: u32,
    pub timeout: Duration,
    pub user_agent: String,
    pub output_dir: PathBuf,
    pub links_filename: String,
    pub articles_filename: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            base_url: "https://www.kompas.com/tag/bogor?page={page_number}".to_string(),
            article_selector: "div.article__list__title > h3".to_string(),
            title_selector: "h1.read__title".to_string(),
            content_selector: "div.read__content".to_string(),
            max_pages: 100,
            timeout: Duration::from_secs(5),
            user_agent: "Mozilla/5.0".to_string(),
            output_dir: PathBuf::from("output"),
            links_filename: "article_links.csv".to_string(),
            articles_filename: "kompas_articles.csv".to_string(),
        }
    }
}

impl ScraperConfig {
    pub fn page_url(&self, page_number: u32) -> String {
        self.base_url
            .replace("{page_number}", &page_number.to_string())
    }
}
