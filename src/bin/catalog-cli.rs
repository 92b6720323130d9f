use catalog_sdk::{ProductClient, ProductId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use product_catalog::config::load_or_default;
use product_catalog::observability::logging;
use product_catalog::ui::shell::{run_shell, HELP};
use product_catalog::ui::{Outcome, ProductListController, TerminalUi};

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "List, add, edit and delete products in the catalog", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Product API base URL (overrides `api.base_url`).
    #[arg(short, long)]
    url: Option<String>,

    /// Log at the configured level instead of warnings only.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all products
    List,
    /// Load one product into the form and show it
    Show { id: ProductId },
    /// Add a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Change fields of an existing product
    Edit {
        id: ProductId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a product
    Delete {
        id: ProductId,
        /// Do not ask for confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Interactive session with the list and the form
    Shell,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.api.base_url = url;
    }
    if !cli.verbose {
        config.observability.log_level = "warn".to_string();
    }
    logging::init_stderr_logging(&config.observability);

    let mut http = reqwest::Client::builder();
    if let Some(secs) = config.api.timeout_secs {
        http = http.timeout(Duration::from_secs(secs));
    }
    let client = ProductClient::with_client(http.build()?, &config.api.base_url);
    tracing::debug!(base_url = %client.base_url(), "Using product API");

    let assume_yes = matches!(cli.command, Commands::Delete { yes: true, .. });
    let ui = TerminalUi::stdio().assume_yes(assume_yes);
    let mut controller = ProductListController::new(client, ui);

    let outcome = match cli.command {
        Commands::List => controller.fetch_products().await,
        Commands::Show { id } => controller.start_edit(id).await,
        Commands::Add {
            name,
            price,
            description,
        } => {
            let form = controller.form_mut();
            form.name = name;
            form.price = price;
            form.description = description;
            controller.submit().await
        }
        Commands::Edit {
            id,
            name,
            price,
            description,
        } => match controller.start_edit(id).await {
            Outcome::Completed => {
                let form = controller.form_mut();
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(price) = price {
                    form.price = price;
                }
                if let Some(description) = description {
                    form.description = description;
                }
                controller.submit().await
            }
            other => other,
        },
        Commands::Delete { id, .. } => controller.delete_product(id).await,
        Commands::Shell => {
            controller.ui_mut().print(HELP);
            run_shell(&mut controller).await?;
            Outcome::Completed
        }
    };

    Ok(match outcome {
        Outcome::Completed | Outcome::Declined => ExitCode::SUCCESS,
        Outcome::Invalid | Outcome::Failed => ExitCode::FAILURE,
    })
}
