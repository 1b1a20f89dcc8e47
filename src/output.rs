use crate::error::ScraperError;
use crate::kompas::KompasArticle;
use std::fs;
use std::path::{Path, PathBuf};

/// One-column CSV of the collected link set.
pub fn save_links(
    links: &[String],
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf, ScraperError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(filename);

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["link"])?;
    for link in links {
        writer.write_record([link.as_str()])?;
    }
    writer.flush()?;

    Ok(path)
}

/// Article records as a four-column CSV. The header is written up front so
/// it is present even for an empty run.
pub fn save_articles(
    articles: &[KompasArticle],
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf, ScraperError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(filename);

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(&path)?;
    writer.write_record(["title", "content", "date", "url"])?;
    for article in articles {
        writer.serialize(article)?;
    }
    writer.flush()?;

    Ok(path)
}
