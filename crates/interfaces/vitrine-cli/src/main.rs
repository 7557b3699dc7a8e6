use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use vitrine_cli::{commands, CliPlatform};
use vitrine_core::{NewProduct, Platform, ProductPatch};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(
        long,
        global = true,
        env = "VITRINE_API_URL",
        default_value = vitrine_config::DEFAULT_API_BASE_URL,
        help = "Base URL of the product API"
    )]
    api_url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage catalog products
    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Bulk import products from a CSV file
    Import { file: Utf8PathBuf },
    /// Print or save the import CSV template
    Template {
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
    /// Run the mocked campaign generator for a product
    Generate {
        id: String,
        #[arg(
            short,
            long,
            value_enum,
            value_delimiter = ',',
            help = "Platforms to generate for (default: all)"
        )]
        platforms: Option<Vec<CliPlatform>>,
    },
    /// Notification feed demo
    Notifications {
        #[command(subcommand)]
        command: NotificationCommands,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    List,
    /// List the canonical category pick-list
    Categories,
    Get {
        id: String,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "", help = "Image URL (placeholder when empty)")]
        image_url: String,
        #[arg(long, help = "Comma-joined keyword list")]
        keywords: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        keywords: Option<String>,
        #[arg(long)]
        trend: Option<bool>,
        #[arg(long)]
        trending_percentage: Option<u8>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
enum NotificationCommands {
    Simulate {
        #[arg(short, long, default_value_t = 3)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("default subscriber");

    match cli.command {
        Commands::Product { command } => match command {
            ProductCommands::List => {
                commands::cmd_list(&cli.api_url).await?;
            }
            ProductCommands::Categories => commands::cmd_categories(),
            ProductCommands::Get { id } => {
                commands::cmd_get(&cli.api_url, &id).await?;
            }
            ProductCommands::Add {
                name,
                description,
                category,
                price,
                image_url,
                keywords,
            } => {
                let input = NewProduct {
                    name,
                    category,
                    description,
                    price,
                    image_url,
                    keywords,
                };
                commands::cmd_add(&cli.api_url, input).await?;
            }
            ProductCommands::Update {
                id,
                name,
                description,
                category,
                price,
                image_url,
                keywords,
                trend,
                trending_percentage,
            } => {
                let patch = ProductPatch {
                    name,
                    category,
                    description,
                    price,
                    image_url,
                    is_trend: trend,
                    keywords,
                    trending_percentage: trending_percentage.map(vitrine_config::clamp_trending),
                };
                commands::cmd_update(&cli.api_url, &id, patch).await?;
            }
            ProductCommands::Delete { id } => {
                commands::cmd_delete(&cli.api_url, &id).await?;
            }
        },
        Commands::Import { file } => {
            commands::cmd_import(&cli.api_url, file).await?;
        }
        Commands::Template { output } => {
            commands::cmd_template(output)?;
        }
        Commands::Generate { id, platforms } => {
            let platforms: Vec<Platform> = match platforms {
                Some(list) => list.into_iter().map(Platform::from).collect(),
                None => Platform::ALL.to_vec(),
            };
            commands::cmd_generate(&cli.api_url, &id, platforms).await?;
        }
        Commands::Notifications { command } => match command {
            NotificationCommands::Simulate { count } => {
                commands::cmd_simulate(count)?;
            }
        },
    }

    Ok(())
}
