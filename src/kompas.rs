use crate::config::ScraperConfig;
use crate::error::ScraperError;
use itertools::Itertools;
use lazy_regex::regex;
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

pub const NO_TITLE: &str = "No Title";
pub const NO_CONTENT: &str = "No content found";
pub const NO_DATE: &str = "No Date";

const E: &str = "Invalid selector";
lazy_static! {
    static ref P: Selector = Selector::parse("p").expect(E);
    static ref A: Selector = Selector::parse("a[href]").expect(E);
}

/// One record per input URL. Fields fall back to sentinel values when
/// extraction yields nothing, so a run always produces a full row.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct KompasArticle {
    pub title: String,
    pub content: String,
    pub date: String,
    pub url: String,
}

/// Kompas encodes the publication date in the article path, e.g.
/// `/read/2023/01/15/judul-artikel`.
pub fn extract_date_from_url(url: &str) -> String {
    match regex!(r"/(\d{4})/(\d{2})/(\d{2})/").captures(url) {
        Some(c) => format!("{}-{}-{}", &c[1], &c[2], &c[3]),
        None => NO_DATE.to_string(),
    }
}

pub struct KompasScraper {
    client: reqwest::Client,
    article_selector: Selector,
    title_selector: Selector,
    content_selector: Selector,
    config: ScraperConfig,
}

fn parse_selector(selector: &str) -> Result<Selector, ScraperError> {
    Selector::parse(selector).map_err(|_| ScraperError::Selector(selector.to_string()))
}

impl KompasScraper {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScraperError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(KompasScraper {
            client,
            article_selector: parse_selector(&config.article_selector)?,
            title_selector: parse_selector(&config.title_selector)?,
            content_selector: parse_selector(&config.content_selector)?,
            config: config.clone(),
        })
    }

    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Walks listing pages 1 through `max_pages` and accumulates article
    /// links. A failing page is logged and skipped; its links are simply
    /// absent from the result. Returned sorted for deterministic output.
    pub async fn collect_links(&self) -> Vec<String> {
        let mut all_links: HashSet<String> = HashSet::new();

        for page_number in 1..=self.config.max_pages {
            let url = self.config.page_url(page_number);
            debug!("Visit {}", url);

            match self.fetch(&url).await {
                Ok(html) => {
                    let doc = Html::parse_document(&html);
                    all_links.extend(self.listing_links(&doc));
                }
                Err(e) => {
                    warn!("Error on page {}: {}", page_number, e);
                    continue;
                }
            }
        }

        all_links.into_iter().sorted().collect()
    }

    pub fn listing_links(&self, doc: &Html) -> Vec<String> {
        doc.select(&self.article_selector)
            .flat_map(|container| container.select(&A))
            .filter_map(|a| a.value().attr("href"))
            .map(ToString::to_string)
            .collect()
    }

    /// Fetches and extracts a single article. Transport failures are folded
    /// into the record itself, so this never propagates an error.
    pub async fn scrape_article(&self, url: &str) -> KompasArticle {
        let html = match self.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Error scraping {}: {}", url, e);
                return KompasArticle {
                    title: "Error".to_string(),
                    content: e.to_string(),
                    date: extract_date_from_url(url),
                    url: url.to_string(),
                };
            }
        };

        let doc = Html::parse_document(&html);
        self.parse_article(&doc, url)
    }

    pub fn parse_article(&self, doc: &Html, url: &str) -> KompasArticle {
        let title = doc
            .select(&self.title_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_else(|| NO_TITLE.to_string());

        let content = match doc.select(&self.content_selector).next() {
            Some(container) => container
                .select(&P)
                .map(|p| p.text().collect::<String>().trim().to_string())
                .join(" "),
            None => NO_CONTENT.to_string(),
        };

        KompasArticle {
            title,
            content,
            date: extract_date_from_url(url),
            url: url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn scraper() -> KompasScraper {
        KompasScraper::new(&ScraperConfig::default()).expect("Invalid default config")
    }

    #[test]
    fn test_extract_date_from_url() {
        assert_eq!(
            extract_date_from_url("https://www.kompas.com/read/2023/01/15/judul-artikel"),
            "2023-01-15".to_string()
        );
    }

    #[test]
    fn test_extract_date_sentinel_without_pattern() {
        assert_eq!(
            extract_date_from_url("https://www.kompas.com/tag/bogor"),
            NO_DATE.to_string()
        );
    }

    #[test]
    fn test_extract_date_takes_first_pattern() {
        assert_eq!(
            extract_date_from_url("https://www.kompas.com/2022/12/31/arsip/2023/01/01/judul"),
            "2022-12-31".to_string()
        );
    }

    #[test]
    fn test_listing_links_deduplicate_via_set() {
        let s = scraper();
        let html = fs::read_to_string("tests/htmls/listing.html").expect("Invalid file path");
        let doc = Html::parse_document(&html);

        let links = s.listing_links(&doc);
        // The fixture repeats one link across two containers. The raw
        // extraction keeps both occurrences; the collector's set removes them.
        assert_eq!(links.len(), 4);

        let unique: std::collections::HashSet<_> = links.into_iter().collect();
        assert_eq!(unique.len(), 3);
        assert!(unique.contains("https://www.kompas.com/read/2023/01/15/banjir-bogor"));
        assert!(unique.contains("https://www.kompas.com/read/2023/01/16/cuaca-bogor"));
        assert!(unique.contains("https://www.kompas.com/read/2023/01/17/macet-puncak"));
    }

    #[test]
    fn test_listing_links_ignores_anchors_outside_containers() {
        let s = scraper();
        let html = r#"
            <html><body>
                <a href="https://www.kompas.com/nav/beranda">nav</a>
                <div class="article__list__title"><h3>
                    <a href="https://www.kompas.com/read/2023/01/15/banjir-bogor">x</a>
                </h3></div>
            </body></html>
        "#;
        let doc = Html::parse_document(html);
        assert_eq!(
            s.listing_links(&doc),
            vec!["https://www.kompas.com/read/2023/01/15/banjir-bogor".to_string()]
        );
    }

    #[test]
    fn test_parse_article_fixture() {
        let s = scraper();
        let html = fs::read_to_string("tests/htmls/article.html").expect("Invalid file path");
        let doc = Html::parse_document(&html);

        let url = "https://www.kompas.com/read/2023/01/15/banjir-bogor";
        let article = s.parse_article(&doc, url);

        assert_eq!(
            article,
            KompasArticle {
                title: "Banjir Rendam Sejumlah Wilayah di Bogor".to_string(),
                content: "Hujan deras mengguyur Kota Bogor sejak Sabtu sore. \
                          Sejumlah wilayah dilaporkan terendam banjir hingga satu meter. \
                          Warga mengungsi ke tempat yang lebih tinggi."
                    .to_string(),
                date: "2023-01-15".to_string(),
                url: url.to_string(),
            }
        );
    }

    #[test]
    fn test_parse_article_missing_content_container() {
        let s = scraper();
        let html = r#"<html><body><h1 class="read__title">Judul</h1></body></html>"#;
        let doc = Html::parse_document(html);

        let article = s.parse_article(&doc, "https://www.kompas.com/read/x");
        assert_eq!(article.title, "Judul".to_string());
        assert_eq!(article.content, NO_CONTENT.to_string());
        assert_eq!(article.date, NO_DATE.to_string());
    }

    #[test]
    fn test_parse_article_missing_title() {
        let s = scraper();
        let html = r#"
            <html><body>
                <div class="read__content"><p>Satu.</p><p>Dua.</p></div>
            </body></html>
        "#;
        let doc = Html::parse_document(html);

        let article = s.parse_article(&doc, "https://www.kompas.com/read/2020/06/02/x");
        assert_eq!(article.title, NO_TITLE.to_string());
        assert_eq!(article.content, "Satu. Dua.".to_string());
        assert_eq!(article.date, "2020-06-02".to_string());
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        let config = ScraperConfig {
            title_selector: "h1.read__title[".to_string(),
            ..ScraperConfig::default()
        };
        assert!(matches!(
            KompasScraper::new(&config),
            Err(ScraperError::Selector(_))
        ));
    }
}
