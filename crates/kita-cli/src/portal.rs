//! Portal-backed page session: plain-HTTP login and day-view scraping.
//!
//! Deliberately thin glue behind [`PageSession`]; the portal's markup is the
//! only thing this module knows about, and the core never sees it.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::time::Duration;

use kita_core::config::ScraperConfig;
use kita_core::session::{JournalEntry, PageSession};

struct Selectors {
    entry: Selector,
    title: Selector,
    image: Selector,
    attachment: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            entry: selector(".JournalEntrySmall")?,
            title: selector(".title-light")?,
            image: selector(".carousel-item img")?,
            attachment: selector("table a.btn.btn-light")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("invalid selector {:?}: {}", css, e))
}

pub struct PortalSession {
    client: Client,
    selectors: Selectors,
    base_url: String,
    group_id: String,
    email: String,
    password: String,
}

impl PortalSession {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            selectors: Selectors::new()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            group_id: config.group_id.clone(),
            email: config.email.clone(),
            password: config.password.clone(),
        })
    }

    fn day_view_url(&self, day: NaiveDate) -> String {
        format!(
            "{}/groups/{}/calendar/{}/day",
            self.base_url,
            self.group_id,
            day.format("%Y-%m-%d")
        )
    }

    fn parse_entries(&self, html: &str) -> Vec<JournalEntry> {
        let document = Html::parse_document(html);
        let mut entries = Vec::new();
        for element in document.select(&self.selectors.entry) {
            let title = element
                .select(&self.selectors.title)
                .next()
                .map(|t| t.text().collect::<String>().trim().to_string())
                .filter(|t| !t.is_empty());
            let image_urls = element
                .select(&self.selectors.image)
                .filter_map(|img| img.value().attr("src"))
                .map(str::to_string)
                .collect();
            let attachment_urls = element
                .select(&self.selectors.attachment)
                .filter_map(|a| a.value().attr("href"))
                .map(str::to_string)
                .collect();
            entries.push(JournalEntry {
                title,
                image_urls,
                attachment_urls,
            });
        }
        entries
    }
}

impl PageSession for PortalSession {
    fn login(&mut self) -> Result<bool> {
        let login_url = format!("{}/sessions/sign_in", self.base_url);
        let response = self
            .client
            .post(&login_url)
            .form(&[
                ("user[email]", self.email.as_str()),
                ("user[password]", self.password.as_str()),
            ])
            .send()
            .context("login request failed")?;
        // The portal redirects away from the sign-in page on success.
        Ok(!response.url().path().contains("/sessions/sign_in"))
    }

    fn entries_for_day(&mut self, day: NaiveDate) -> Result<Vec<JournalEntry>> {
        let url = self.day_view_url(day);
        tracing::info!("Navigating to {} day view for group {}", day, self.group_id);
        let html = self
            .client
            .get(&url)
            .send()
            .context("day view request failed")?
            .error_for_status()
            .context("day view returned an error status")?
            .text()
            .context("day view body was not readable")?;
        Ok(self.parse_entries(&html))
    }
}
