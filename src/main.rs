use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use atp2osm_review::{
    config::Config,
    import::ImportClient,
    page::{ConsoleSurface, TracedNavigator},
    review::ReviewBoard,
    session::SessionClient,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and print where the browser would land
    Login,
    /// Log out from the given page path
    Logout {
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Confirm the importation for a brand page url
    Import { page_url: String },
    /// Validate cards one by one and watch the gate
    Review { item_ids: Vec<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config = Config::load();

    match args.command {
        Command::Login => {
            let mut navigator = TracedNavigator::at(format!("{}/", config.base_url));
            SessionClient::new(config.base_url)
                .login(&mut navigator)
                .await?;
            println!("Landed on {}", navigator.url());
        }
        Command::Logout { path } => {
            let mut navigator = TracedNavigator::at(format!("{}{path}", config.base_url));
            SessionClient::new(config.base_url)
                .logout(&mut navigator)
                .await?;
            println!("Landed on {}", navigator.url());
        }
        Command::Import { page_url } => {
            let mut navigator = TracedNavigator::at(page_url);
            let mut surface = ConsoleSurface;

            ImportClient::new(config.base_url)
                .confirm_import(&mut navigator, &mut surface)
                .await?;
            println!("Landed on {}", navigator.url());
        }
        Command::Review { item_ids } => {
            let mut surface = ConsoleSurface;
            let mut board = ReviewBoard::new(item_ids.iter().cloned());

            board.recompute_gate(&mut surface);

            for id in &item_ids {
                board.validate(id, &mut surface);
                println!("Validated {id}, all validated: {}", board.all_validated());
            }
        }
    }

    Ok(())
}
