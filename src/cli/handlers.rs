use std::io::{self, BufRead, Write};

use crate::catalog::{Catalog, SeedPolicy};
use crate::config::Config;
use crate::error::{RecipeError, Result};
use crate::recipe::{parse_recipe_id, NewRecipe, Recipe};
use crate::server;
use crate::storage::Store;

const CONFIRM_WORD: &str = "DELETE";

async fn open_catalog(config: &Config, policy: SeedPolicy) -> Result<Catalog> {
    let store = Store::open(&config.db_path)?;
    Catalog::init(store, policy).await
}

pub async fn handle_init(config: &Config) -> Result<()> {
    let catalog = open_catalog(config, SeedPolicy::IfEmpty).await?;
    let count = catalog.count().await?;

    println!(
        "Initialized recipe box at {} ({} recipes)",
        config.db_path.display(),
        count
    );
    Ok(())
}

pub async fn handle_serve(config: &Config) -> Result<()> {
    let addr = config.socket_addr()?;
    let catalog = open_catalog(config, SeedPolicy::IfEmpty).await?;
    server::serve(catalog, addr).await
}

pub async fn handle_list(config: &Config, json: bool) -> Result<()> {
    let catalog = open_catalog(config, SeedPolicy::Skip).await?;
    let recipes = catalog.dump_recipes().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
    } else if recipes.is_empty() {
        println!("No recipes found.");
    } else {
        print!("{}", format_table(&recipes));
    }

    Ok(())
}

pub async fn handle_add(config: &Config, input: NewRecipe, json: bool) -> Result<()> {
    let catalog = open_catalog(config, SeedPolicy::Skip).await?;
    let id = catalog.create_recipe(&input).await?;

    if json {
        let created = catalog
            .get_recipe(id)
            .await?
            .ok_or_else(|| RecipeError::Storage("Failed to retrieve created recipe".to_string()))?;
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!(
            "Created recipe {} - {}",
            id,
            input.title.as_deref().unwrap_or_default().trim()
        );
    }

    Ok(())
}

pub async fn handle_delete(config: &Config, raw_id: &str) -> Result<()> {
    // Reject malformed ids before touching the database
    let id = parse_recipe_id(raw_id)?;

    let catalog = open_catalog(config, SeedPolicy::Skip).await?;
    catalog.delete_recipe(id).await?;

    println!("Deleted recipe {}", id);
    Ok(())
}

/// Clear every recipe after the production guard and confirmation pass.
/// The database is only opened once both checks succeed.
pub async fn handle_clear(config: &Config, yes: bool, force: bool) -> Result<()> {
    if config.production && !force {
        return Err(RecipeError::Refused(
            "Refusing to clear recipes in production. Re-run with --force if you really intend this."
                .to_string(),
        ));
    }

    if !yes {
        if !atty::is(atty::Stream::Stdin) {
            return Err(RecipeError::Refused(
                "Use --yes to clear recipes in non-interactive mode".to_string(),
            ));
        }

        // Prompt on stderr so stdout stays clean for piped output
        if !confirm_clear(&mut io::stdin().lock(), &mut io::stderr())? {
            println!("Cancelled. No data was deleted.");
            return Ok(());
        }
    }

    let catalog = open_catalog(config, SeedPolicy::Skip).await?;
    let deleted = catalog.clear_all().await?;
    println!("All recipes deleted successfully ({} removed).", deleted);

    Ok(())
}

fn confirm_clear<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> io::Result<bool> {
    write!(prompt, "Type {} to confirm clearing all recipes: ", CONFIRM_WORD)?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_confirmed(&answer))
}

fn is_confirmed(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']) == CONFIRM_WORD
}

/// Render recipes as an aligned text table.
pub fn format_table(recipes: &[Recipe]) -> String {
    const HEADERS: [&str; 7] = [
        "id",
        "title",
        "author",
        "prepTime",
        "servings",
        "tags",
        "createdAt",
    ];

    let rows: Vec<[String; 7]> = recipes
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.title.clone(),
                r.author.clone(),
                r.prep_time.clone(),
                r.servings.clone(),
                r.tags.join(", "),
                r.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let render = |out: &mut String, cells: &[String]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
    };

    render(&mut out, &HEADERS.map(str::to_string));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        render(&mut out, row);
    }

    out
}
