use crate::{
    config::Config, error, management::CredentialStore, spotify::AuthFlow, success,
};

use super::interaction_for;

/// Makes sure a usable token is cached, running the authorization flow when
/// needed or when `force` is set.
pub async fn auth(config: Config, force: bool, listen: bool) {
    let interaction = match interaction_for(&config, listen).await {
        Ok(interaction) => interaction,
        Err(e) => error!("{}", e),
    };

    let store = CredentialStore::new(config.credentials_path.clone());
    let flow = AuthFlow::new(config, store, interaction.clone());

    let result = if force {
        flow.authorize().await
    } else {
        flow.get_access_token().await
    };

    match result {
        Ok(_) => success!("Access token ready."),
        Err(e) => {
            interaction.notify_error(&e.user_message());
            error!("{}", e);
        }
    }
}
