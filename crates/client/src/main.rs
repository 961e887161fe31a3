//! `mesas` -- terminal front end for the Mesas API.
//!
//! # Environment variables
//!
//! | Variable        | Required | Default                 | Description        |
//! |-----------------|----------|-------------------------|--------------------|
//! | `MESAS_API_URL` | no       | `http://localhost:5000` | API base URL       |

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mesas_client::api::MesasApi;
use mesas_client::app::{EditForm, MesasApp};
use mesas_client::config::ClientConfig;
use mesas_client::error::ClientError;
use mesas_client::view;

#[derive(Parser)]
#[command(name = "mesas", version, about = "Manage restaurant tables")]
struct Cli {
    /// API base URL (overrides `MESAS_API_URL`).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show all tables.
    List,
    /// Add a table.
    Add { name: String, capacity: String },
    /// Replace a table's fields. Omitted flags keep the current value.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        capacity: Option<i32>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a table.
    Remove { id: i64 },
    /// Show the service identification payload.
    Whoami,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mesas_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match cli.api_url.as_deref() {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    tracing::debug!(api_url = %config.api_url, "Using API endpoint");

    let api = MesasApi::new(&config);
    if let Err(e) = run(api, cli.command.unwrap_or(Command::List)).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(api: MesasApi, command: Command) -> Result<(), ClientError> {
    let app = MesasApp::new(api);
    let mesas = match command {
        Command::Whoami => {
            println!("{}", app.identity().await?.full_name);
            return Ok(());
        }
        Command::List => app.load().await?,
        Command::Add { name, capacity } => app.add(&name, &capacity).await?,
        Command::Edit {
            id,
            name,
            capacity,
            status,
        } => {
            app.edit(
                id,
                EditForm {
                    name,
                    capacity,
                    status,
                },
            )
            .await?
        }
        Command::Remove { id } => app.remove(id).await?,
    };

    println!("{}", view::render_list(&mesas));
    Ok(())
}
