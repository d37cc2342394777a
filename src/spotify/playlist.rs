use reqwest::Client;

use crate::{
    Error, Result,
    config::Config,
    types::{
        AddTrackToPlaylistRequest, CreatePlaylistRequest, CreatePlaylistResponse, PlaylistHandle,
        SearchResponse,
    },
    utils, warning,
};

/// Maximum number of titles a genre search returns.
pub const GENRE_SEARCH_LIMIT: u32 = 50;

/// Playlist operations performed with one access token.
pub struct PlaylistService {
    client: Client,
    api_url: String,
    access_token: String,
}

impl PlaylistService {
    pub fn new(config: &Config, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            access_token: access_token.into(),
        }
    }

    /// Creates a private playlist under the owner's account.
    ///
    /// # Arguments
    ///
    /// * `owner_username` - Spotify user ID that will own the playlist
    /// * `playlist_name` - Display name of the new playlist
    ///
    /// # Returns
    ///
    /// A [`PlaylistHandle`] for the remaining steps of the build.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx answer becomes
    /// [`Error::PlaylistCreate`]; an unknown username is the usual cause.
    ///
    /// # Example
    ///
    /// ```
    /// let playlist = service.create("someuser", "Road Trip").await?;
    /// println!("Created {}", playlist.id);
    /// ```
    pub async fn create(
        &self,
        owner_username: &str,
        playlist_name: &str,
    ) -> Result<PlaylistHandle> {
        let api_url = format!(
            "{uri}/users/{user_id}/playlists",
            uri = self.api_url,
            user_id = owner_username
        );

        let response = self
            .client
            .post(&api_url)
            .bearer_auth(&self.access_token)
            .json(&CreatePlaylistRequest {
                name: playlist_name.to_string(),
                public: false,
            })
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| {
                warning!("Error creating playlist: {}", e);
                Error::PlaylistCreate(e.to_string())
            })?;

        let created = response
            .json::<CreatePlaylistResponse>()
            .await
            .map_err(|e| {
                warning!("Error creating playlist: {}", e);
                Error::PlaylistCreate(e.to_string())
            })?;

        Ok(PlaylistHandle {
            id: created.id,
            owner_username: owner_username.to_string(),
            name: playlist_name.to_string(),
        })
    }

    /// Returns up to 50 track titles for a genre.
    ///
    /// The result page starts at a random offset in `1..=950` so repeated
    /// runs for the same genre produce different playlists.
    pub async fn search_by_genre(&self, genre: &str) -> Result<Vec<String>> {
        let offset = utils::random_search_offset();
        let query = format!("genre:{genre}");
        let limit = GENRE_SEARCH_LIMIT.to_string();
        let offset = offset.to_string();

        let res = self
            .search(&[
                ("q", query.as_str()),
                ("type", "track"),
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
            ])
            .await
            .map_err(|e| {
                warning!("Error searching for songs: {}", e);
                e
            })?;

        Ok(res
            .tracks
            .items
            .into_iter()
            .take(GENRE_SEARCH_LIMIT as usize)
            .map(|track| track.name)
            .collect())
    }

    /// Resolves titles to track URIs and appends them to the playlist.
    ///
    /// Each title is searched once, in input order. The first hit's URI is
    /// kept; a title without hits is logged and skipped. `on_progress` is
    /// called once per title with the same increment,
    /// `(100 - current_progress) / titles.len()` (or `1.0` for no titles).
    /// Finally all URIs, possibly none, go to the playlist in one request.
    ///
    /// # Returns
    ///
    /// The URIs that were added, in title order.
    ///
    /// # Errors
    ///
    /// - [`Error::Search`] - a title search failed at the transport or HTTP level
    /// - [`Error::AddTracks`] - the final batch append failed
    ///
    /// A title that simply has no match is not an error.
    pub async fn resolve_and_add_tracks<F>(
        &self,
        playlist: &PlaylistHandle,
        titles: &[String],
        current_progress: f64,
        mut on_progress: F,
    ) -> Result<Vec<String>>
    where
        F: FnMut(f64),
    {
        let increment = utils::progress_increment(current_progress, titles.len());
        let mut uris: Vec<String> = Vec::with_capacity(titles.len());

        for title in titles {
            let res = self
                .search(&[("q", title.as_str()), ("type", "track")])
                .await
                .map_err(|e| {
                    warning!("Error searching for song '{}': {}", title, e);
                    e
                })?;

            match res.tracks.items.into_iter().next() {
                Some(track) => uris.push(track.uri),
                None => warning!("Track not found: {}", title),
            }

            on_progress(increment);
        }

        self.add_tracks(&playlist.id, &uris).await?;
        Ok(uris)
    }

    /// Appends URIs to a playlist in a single request.
    pub async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()> {
        let api_url = format!(
            "{uri}/playlists/{playlist_id}/tracks",
            uri = self.api_url,
            playlist_id = playlist_id
        );

        self.client
            .post(&api_url)
            .bearer_auth(&self.access_token)
            .json(&AddTrackToPlaylistRequest {
                uris: uris.to_vec(),
            })
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| {
                warning!("Error adding songs to playlist: {}", e);
                Error::AddTracks(e.to_string())
            })?;

        Ok(())
    }

    async fn search(&self, params: &[(&str, &str)]) -> Result<SearchResponse> {
        let api_url = format!("{uri}/search", uri = self.api_url);

        let response = self
            .client
            .get(&api_url)
            .bearer_auth(&self.access_token)
            .query(params)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| Error::Search(e.to_string()))?;

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| Error::Search(e.to_string()))
    }
}
