// src/core/net.rs
// Page loaders: where a hero's HTML comes from.

use std::{fs, path::PathBuf, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Source of raw hero pages. Implementations must be shareable across the
/// scrape workers.
pub trait PageLoader: Send + Sync {
    fn load(&self, hero: &str) -> Result<String>;

    /// Human-readable location of a hero page, for logs.
    fn locate(&self, hero: &str) -> String;
}

/// `GET <base_url><hero>` over HTTP(S).
pub struct HttpLoader {
    client: Client,
    base_url: String,
}

impl HttpLoader {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, base_url: s!(base_url) })
    }
}

impl PageLoader for HttpLoader {
    fn load(&self, hero: &str) -> Result<String> {
        let url = self.locate(hero);
        log::debug!("GET {url}");

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Transport(format!("HTTP error: {status} {url}")));
        }
        let body = resp.text()?;
        log::debug!("{url}: {} bytes", body.len());
        Ok(body)
    }

    fn locate(&self, hero: &str) -> String {
        format!("{}{}", self.base_url, hero)
    }
}

/// Saved pages: `<dir>/<hero>.html`.
pub struct DirLoader {
    dir: PathBuf,
}

impl DirLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, hero: &str) -> PathBuf {
        self.dir.join(format!("{hero}.html"))
    }
}

impl PageLoader for DirLoader {
    fn load(&self, hero: &str) -> Result<String> {
        let path = self.path(hero);
        fs::read_to_string(&path)
            .map_err(|e| ScrapeError::Transport(format!("{}: {e}", path.display())))
    }

    fn locate(&self, hero: &str) -> String {
        self.path(hero).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_loader_joins_base_and_slug() {
        let l = HttpLoader::new("https://example.test/heroes/").unwrap();
        assert_eq!(l.locate("Soldier-76"), "https://example.test/heroes/Soldier-76");
    }

    #[test]
    fn dir_loader_missing_file_is_transport_error() {
        let l = DirLoader::new(std::env::temp_dir().join("hero_scrape_no_such_dir"));
        let err = l.load("Ana").unwrap_err();
        assert_eq!(err.kind(), "TransportError");
        assert!(err.to_string().contains("Ana.html"));
    }
}
