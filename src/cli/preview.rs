use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    chart::{self, BillboardChart, ChartLookup},
    config::Config,
    error, info,
    types::ChartTableRow,
};

/// Prints the Hot-100 titles for `date` without touching Spotify.
pub async fn preview(config: Config, date: String) {
    let date = match chart::parse_chart_date(&date, Utc::now().date_naive()) {
        Ok(date) => date,
        Err(e) => error!("{}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching Hot-100 for {}...", date));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let titles = BillboardChart::new(&config).song_titles(date).await;
    pb.finish_and_clear();

    let titles = match titles {
        Ok(titles) => titles,
        Err(e) => error!("{}", e),
    };

    if titles.is_empty() {
        info!("No chart entries found for {}", date);
        return;
    }

    let rows: Vec<ChartTableRow> = titles
        .into_iter()
        .enumerate()
        .map(|(i, title)| ChartTableRow {
            position: i + 1,
            title,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
