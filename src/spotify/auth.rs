use std::sync::Arc;

use reqwest::{Client, Url, header::AUTHORIZATION};

use crate::{
    Error, Result,
    config::Config,
    info,
    interaction::Interaction,
    management::CredentialStore,
    success,
    types::{TokenRecord, TokenResponse},
    utils, warning,
};

/// Produces valid access tokens for the Spotify Web API.
///
/// Holds the client credentials, the credential store and the interaction
/// used for the one step that needs a human: pasting the redirect URL after
/// consent. States move `NoToken → PendingAuthorization → Authorized`, with an
/// expired `Authorized` record going through a refresh.
pub struct AuthFlow {
    config: Config,
    store: CredentialStore,
    client: Client,
    interaction: Arc<dyn Interaction>,
}

impl AuthFlow {
    pub fn new(config: Config, store: CredentialStore, interaction: Arc<dyn Interaction>) -> Self {
        Self {
            config,
            store,
            client: Client::new(),
            interaction,
        }
    }

    /// Returns a valid access token, refreshing or re-authorizing as needed.
    ///
    /// # Token Resolution
    ///
    /// 1. **Cached**: a stored record with `now < expires_at` is returned as is,
    ///    without touching the network.
    /// 2. **Expired**: the stored refresh token is exchanged once for a new
    ///    access token.
    /// 3. **Missing**: no (readable) record exists, so the interactive
    ///    authorization-code flow runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] when a refresh or code exchange fails or the
    /// user cancels the redirect prompt. Nothing is retried.
    pub async fn get_access_token(&self) -> Result<String> {
        match self.store.load().await {
            Ok(record) if record.is_valid_at(utils::now_epoch()) => Ok(record.access_token),
            Ok(record) => {
                info!("Access token expired, refreshing...");
                self.refresh(&record.refresh_token).await
            }
            Err(_) => self.authorize().await,
        }
    }

    /// Exchanges a refresh token for a new access token and persists it.
    ///
    /// Sends `grant_type=refresh_token` together with the client credentials
    /// in the form body. The refresh token is kept unless the provider rotates
    /// it.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String> {
        let res = self
            .client
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| {
                warning!("Error refreshing access token: {}", e);
                Error::Auth(format!("token refresh failed: {e}"))
            })?;

        let response: TokenResponse = res.json().await.map_err(|e| {
            warning!("Error refreshing access token: {}", e);
            Error::Auth(format!("malformed refresh response: {e}"))
        })?;

        let record = TokenRecord::from_response(response, Some(refresh_token), utils::now_epoch())
            .ok_or_else(|| Error::Auth("refresh response without refresh token".to_string()))?;
        self.store.save(&record).await?;

        Ok(record.access_token)
    }

    /// Runs the interactive authorization-code flow.
    ///
    /// Opens the consent page, waits for the user to hand back the redirect
    /// URL, then exchanges the code for tokens exactly once. There is no
    /// timeout on the wait; a closed prompt maps to [`Error::Auth`].
    pub async fn authorize(&self) -> Result<String> {
        let url = self.authorization_url()?;
        info!("Waiting for authorization in the browser...");
        self.interaction.open_authorization_url(url.as_str());

        let redirect_url = self.interaction.request_redirect_url().await.ok_or_else(|| {
            warning!("Authorization cancelled before a redirect URL was provided");
            Error::Auth("authorization cancelled".to_string())
        })?;

        let code = utils::parse_authorization_code(&redirect_url).ok_or_else(|| {
            warning!("No authorization code in redirect URL: {}", redirect_url);
            Error::Auth("redirect URL carries no authorization code".to_string())
        })?;

        let record = self.exchange_code(&code).await?;
        self.store.save(&record).await?;
        success!("Authentication successful!");

        Ok(record.access_token)
    }

    /// Builds the consent URL the user has to open.
    pub fn authorization_url(&self) -> Result<Url> {
        Url::parse_with_params(
            &self.config.auth_url,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("scope", self.config.scope.as_str()),
            ],
        )
        .map_err(|e| Error::Config(format!("invalid authorization URL: {e}")))
    }

    /// Exchanges an authorization code for a fresh token record.
    ///
    /// Authenticates with `Basic base64(client_id:client_secret)` and sends
    /// `grant_type=authorization_code`. The returned record is not persisted.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenRecord> {
        let res = self
            .client
            .post(&self.config.token_url)
            .header(
                AUTHORIZATION,
                utils::basic_auth_header(&self.config.client_id, &self.config.client_secret),
            )
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| {
                warning!("Error getting access token: {}", e);
                Error::Auth(format!("code exchange failed: {e}"))
            })?;

        let response: TokenResponse = res.json().await.map_err(|e| {
            warning!("Error getting access token: {}", e);
            Error::Auth(format!("malformed token response: {e}"))
        })?;

        TokenRecord::from_response(response, None, utils::now_epoch())
            .ok_or_else(|| Error::Auth("token response without refresh token".to_string()))
    }
}
