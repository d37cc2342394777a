use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sporlgen::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth(AuthOptions),

    /// Create a playlist from a genre
    Genre(GenreOptions),

    /// Create a playlist from a Billboard Hot-100 chart date
    Chart(ChartOptions),

    /// List suggested genres
    Genres,

    /// Show the Hot-100 titles for a date
    Preview(PreviewOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Authorize again even if a token is cached
    #[clap(long)]
    force: bool,

    /// Catch the redirect with the local callback server instead of pasting it
    #[clap(long)]
    listen: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct GenreOptions {
    /// Spotify username that will own the playlist
    #[clap(long)]
    user: String,

    /// Name of the new playlist
    #[clap(long)]
    name: String,

    /// Genre to search for (see `sporlgen genres`)
    #[clap(long)]
    genre: String,

    /// Catch the redirect with the local callback server instead of pasting it
    #[clap(long)]
    listen: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ChartOptions {
    /// Spotify username that will own the playlist
    #[clap(long)]
    user: String,

    /// Name of the new playlist
    #[clap(long)]
    name: String,

    /// Chart date (YYYY-MM-DD), after 1900-01-01 and at least a week ago
    #[clap(long)]
    date: String,

    /// Catch the redirect with the local callback server instead of pasting it
    #[clap(long)]
    listen: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewOptions {
    /// Chart date (YYYY-MM-DD)
    #[clap(long)]
    date: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Command::Genres => return cli::genres(),
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            return;
        }
        _ => {}
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    match cli.command {
        Command::Auth(opt) => cli::auth(config, opt.force, opt.listen).await,
        Command::Genre(opt) => cli::genre(config, opt.user, opt.name, opt.genre, opt.listen).await,
        Command::Chart(opt) => cli::chart(config, opt.user, opt.name, opt.date, opt.listen).await,
        Command::Preview(opt) => cli::preview(config, opt.date).await,
        Command::Genres | Command::Completions(_) => {}
    }
}
