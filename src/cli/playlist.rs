use chrono::Utc;

use crate::{
    chart::{self, BillboardChart},
    config::Config,
    error,
    generator::{Generator, PlaylistRequest, Source},
    management::CredentialStore,
    success,
};

use super::interaction_for;

/// Creates a playlist from a genre search.
pub async fn genre(
    config: Config,
    username: String,
    playlist_name: String,
    genre: String,
    listen: bool,
) {
    build(
        config,
        PlaylistRequest {
            username,
            playlist_name,
            source: Source::Genre(genre),
        },
        listen,
    )
    .await
}

/// Creates a playlist from the Hot-100 chart of `date` (`YYYY-MM-DD`).
pub async fn chart(
    config: Config,
    username: String,
    playlist_name: String,
    date: String,
    listen: bool,
) {
    let date = match chart::parse_chart_date(&date, Utc::now().date_naive()) {
        Ok(date) => date,
        Err(e) => error!("{}", e),
    };

    build(
        config,
        PlaylistRequest {
            username,
            playlist_name,
            source: Source::Chart(date),
        },
        listen,
    )
    .await
}

async fn build(config: Config, request: PlaylistRequest, listen: bool) {
    let interaction = match interaction_for(&config, listen).await {
        Ok(interaction) => interaction,
        Err(e) => error!("{}", e),
    };

    let store = CredentialStore::new(config.credentials_path.clone());
    let chart = BillboardChart::new(&config);
    let generator = Generator::new(config, store, chart, interaction);

    match generator.generate(&request).await {
        Ok(summary) => success!(
            "Playlist '{}' is ready with {} of {} tracks.",
            summary.playlist.name,
            summary.added,
            summary.requested
        ),
        // already reported through the interaction
        Err(_) => std::process::exit(1),
    }
}
