//! End-to-end playlist build.
//!
//! Drives one build from the user's request to the final track append:
//! token → playlist → titles → resolved tracks. Progress and the final error
//! message go through the injected [`Interaction`].

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::{
    Error, Result,
    chart::{self, ChartLookup},
    config::Config,
    info,
    interaction::Interaction,
    management::CredentialStore,
    spotify::{AuthFlow, PlaylistService},
    success,
    types::{PlaylistHandle, ProgressState},
};

/// Progress shown as soon as a build starts.
pub const START_PROGRESS: f64 = 20.0;
/// Added once a genre playlist exists.
pub const GENRE_CREATED_PROGRESS: f64 = 10.0;
/// Added once the genre search returned its titles.
pub const GENRE_SEARCHED_PROGRESS: f64 = 20.0;
/// Added once a chart playlist exists.
pub const CHART_CREATED_PROGRESS: f64 = 30.0;

/// Where the playlist's titles come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Genre(String),
    Chart(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRequest {
    pub username: String,
    pub playlist_name: String,
    pub source: Source,
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub playlist: PlaylistHandle,
    pub requested: usize,
    pub added: usize,
}

pub struct Generator<C: ChartLookup> {
    config: Config,
    store: CredentialStore,
    chart: C,
    interaction: Arc<dyn Interaction>,
}

impl<C: ChartLookup> Generator<C> {
    pub fn new(
        config: Config,
        store: CredentialStore,
        chart: C,
        interaction: Arc<dyn Interaction>,
    ) -> Self {
        Self {
            config,
            store,
            chart,
            interaction,
        }
    }

    /// Builds a playlist for `request`.
    ///
    /// A failure is reported once through `notify_error` with its short user
    /// message and then returned. A playlist created before the failure stays
    /// on the server.
    pub async fn generate(&self, request: &PlaylistRequest) -> Result<PlaylistSummary> {
        match self.run(request).await {
            Ok(summary) => Ok(summary),
            Err(e) => {
                self.interaction.notify_error(&e.user_message());
                Err(e)
            }
        }
    }

    async fn run(&self, request: &PlaylistRequest) -> Result<PlaylistSummary> {
        validate_request(request, Utc::now().date_naive())?;

        let mut progress = ProgressState::default();
        self.advance(&mut progress, START_PROGRESS);

        let flow = AuthFlow::new(
            self.config.clone(),
            self.store.clone(),
            Arc::clone(&self.interaction),
        );
        let access_token = flow.get_access_token().await?;

        let service = PlaylistService::new(&self.config, access_token);
        let playlist = service
            .create(&request.username, &request.playlist_name)
            .await?;
        info!("Created playlist {}", playlist.name);

        let titles = match &request.source {
            Source::Genre(genre) => {
                self.advance(&mut progress, GENRE_CREATED_PROGRESS);
                let titles = service.search_by_genre(genre.trim()).await?;
                self.advance(&mut progress, GENRE_SEARCHED_PROGRESS);
                titles
            }
            Source::Chart(date) => {
                self.advance(&mut progress, CHART_CREATED_PROGRESS);
                self.chart.song_titles(*date).await?
            }
        };
        info!("Resolving {} titles", titles.len());

        let uris = service
            .resolve_and_add_tracks(&playlist, &titles, progress.current, |delta| {
                self.interaction.report_progress(delta)
            })
            .await?;

        success!(
            "Added {} of {} tracks to playlist {}",
            uris.len(),
            titles.len(),
            playlist.name
        );

        Ok(PlaylistSummary {
            playlist,
            requested: titles.len(),
            added: uris.len(),
        })
    }

    fn advance(&self, progress: &mut ProgressState, delta: f64) {
        progress.advance(delta);
        self.interaction.report_progress(delta);
    }
}

/// Rejects blank form fields and chart dates without a published chart.
pub fn validate_request(request: &PlaylistRequest, today: NaiveDate) -> Result<()> {
    if request.username.trim().is_empty() {
        return Err(Error::InvalidInput("username must not be empty".to_string()));
    }
    if request.playlist_name.trim().is_empty() {
        return Err(Error::InvalidInput(
            "playlist name must not be empty".to_string(),
        ));
    }
    match &request.source {
        Source::Genre(genre) if genre.trim().is_empty() => {
            Err(Error::InvalidInput("genre must not be empty".to_string()))
        }
        Source::Genre(_) => Ok(()),
        Source::Chart(date) => chart::validate_chart_date(*date, today).map(|_| ()),
    }
}
