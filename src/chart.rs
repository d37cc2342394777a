//! Billboard Hot-100 lookup.
//!
//! Charts are published weekly, so only dates strictly between 1900-01-01 and
//! one week before today are accepted.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use reqwest::Client;
use scraper::{Html, Selector};

use crate::{Error, Result, config::Config, warning};

pub const CHART_DATE_FORMAT: &str = "%Y-%m-%d";

const ROW_SELECTOR: &str = "div.o-chart-results-list-row-container";
const TITLE_SELECTOR: &str = "h3";

/// Source of chart titles for a date.
#[async_trait]
pub trait ChartLookup: Send + Sync {
    /// Song titles of the chart for `date`, in chart order.
    async fn song_titles(&self, date: NaiveDate) -> Result<Vec<String>>;
}

/// Scrapes the public Billboard Hot-100 page.
pub struct BillboardChart {
    client: Client,
    chart_url: String,
}

impl BillboardChart {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            chart_url: config.chart_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch(&self, date: NaiveDate) -> Result<String> {
        let url = format!(
            "{base}/{date}",
            base = self.chart_url,
            date = date.format(CHART_DATE_FORMAT)
        );

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| {
                warning!("Error fetching chart for {}: {}", date, e);
                Error::Chart(e.to_string())
            })?;

        res.text().await.map_err(|e| Error::Chart(e.to_string()))
    }
}

#[async_trait]
impl ChartLookup for BillboardChart {
    async fn song_titles(&self, date: NaiveDate) -> Result<Vec<String>> {
        let html = self.fetch(date).await?;
        parse_chart_titles(&html)
    }
}

/// Extracts the title of every chart row from a chart page.
pub fn parse_chart_titles(html: &str) -> Result<Vec<String>> {
    let row_selector =
        Selector::parse(ROW_SELECTOR).map_err(|e| Error::Chart(format!("bad selector: {e}")))?;
    let title_selector =
        Selector::parse(TITLE_SELECTOR).map_err(|e| Error::Chart(format!("bad selector: {e}")))?;

    let document = Html::parse_document(html);
    let titles = document
        .select(&row_selector)
        .filter_map(|row| row.select(&title_selector).next())
        .map(|title| title.text().collect::<String>().trim().to_string())
        // a blank heading would turn into an empty catalog search
        .filter(|title| !title.is_empty())
        .collect();

    Ok(titles)
}

/// Checks that a chart exists for `date`.
///
/// Accepted iff `1900-01-01 < date < today - 7 days`; both bounds are
/// exclusive.
pub fn validate_chart_date(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
    let earliest = NaiveDate::from_ymd_opt(1900, 1, 1)
        .ok_or_else(|| Error::InvalidInput("invalid lower chart bound".to_string()))?;
    let latest = today - Duration::days(7);

    if date > earliest && date < latest {
        Ok(date)
    } else {
        Err(Error::InvalidInput(format!(
            "choose a date between {} and {} (exclusive)",
            earliest.format(CHART_DATE_FORMAT),
            latest.format(CHART_DATE_FORMAT)
        )))
    }
}

/// Parses a `YYYY-MM-DD` string and validates it with [`validate_chart_date`].
pub fn parse_chart_date(text: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(text.trim(), CHART_DATE_FORMAT).map_err(|e| {
        Error::InvalidInput(format!("'{text}' is not a YYYY-MM-DD date: {e}"))
    })?;
    validate_chart_date(date, today)
}
