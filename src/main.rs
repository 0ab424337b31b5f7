use clap::Parser;
use recipe_box::cli::{
    handle_add, handle_clear, handle_delete, handle_init, handle_list, handle_serve, Cli, Commands,
};
use recipe_box::{Config, NewRecipe};
use tracing_subscriber::EnvFilter;

fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The server logs its lifecycle; one-shot commands stay quiet unless asked
    let default_level = match cli.command {
        Commands::Serve { .. } => "info",
        _ => "warn",
    };
    init_tracing(default_level);

    let mut config = Config::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    let result = match cli.command {
        Commands::Init => handle_init(&config).await,
        Commands::Serve { addr } => {
            if let Some(addr) = addr {
                config.addr = addr;
            }
            handle_serve(&config).await
        }
        Commands::List { json } => handle_list(&config, json).await,
        Commands::Add {
            title,
            author,
            description,
            prep_time,
            servings,
            tags,
            json,
        } => {
            let input = NewRecipe {
                title: Some(title),
                author: Some(author),
                description: Some(description),
                prep_time,
                servings,
                tags_raw: tags,
            };
            handle_add(&config, input, json).await
        }
        Commands::Delete { id } => handle_delete(&config, &id).await,
        Commands::Clear { yes, force } => handle_clear(&config, yes, force).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
