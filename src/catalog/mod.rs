//! Recipe catalog: schema ownership, seeding and the operations used by
//! request handlers and maintenance commands.

mod seed;

pub use seed::{SeedRecipe, SEED_RECIPES};

use rusqlite::types::{Value, ValueRef};
use rusqlite::Row;
use tracing::{debug, info};

use crate::error::{RecipeError, Result};
use crate::recipe::{validate_recipe_id, NewRecipe, Recipe, TagList};
use crate::storage::Store;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS recipes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        description TEXT NOT NULL,
        prep_time TEXT NOT NULL,
        servings TEXT NOT NULL,
        tags TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
";

const INSERT_RECIPE: &str = "
    INSERT INTO recipes (title, author, description, prep_time, servings, tags)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

const SELECT_RECIPES: &str =
    "SELECT id, title, author, description, prep_time, servings, tags, created_at FROM recipes";

/// Whether initialization may insert the default recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Insert the seed set when the table holds no rows
    IfEmpty,
    /// Only ensure the schema exists
    Skip,
}

/// The recipe catalog.
///
/// A `Catalog` can only be obtained through [`Catalog::init`], so holding one
/// means the schema exists. Seeding checks the row count and then inserts
/// without a transaction; two initializations racing on an empty table can
/// both seed.
#[derive(Clone)]
pub struct Catalog {
    store: Store,
}

impl Catalog {
    /// Ensure the schema exists and, per `policy`, seed an empty table.
    pub async fn init(store: Store, policy: SeedPolicy) -> Result<Self> {
        store.execute_batch(SCHEMA).await?;
        let catalog = Self { store };

        if policy == SeedPolicy::IfEmpty {
            let existing = catalog.count().await?;
            if existing == 0 {
                let seeded = catalog.seed().await?;
                info!("Seeded empty catalog with {} recipes", seeded);
            } else {
                debug!("Catalog already holds {} recipes, skipping seed", existing);
            }
        }

        Ok(catalog)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    async fn seed(&self) -> Result<usize> {
        for recipe in SEED_RECIPES {
            let tags = TagList::new(recipe.tags.iter().map(|t| t.to_string()).collect());
            self.store
                .execute(
                    INSERT_RECIPE,
                    vec![
                        recipe.title.to_string().into(),
                        recipe.author.to_string().into(),
                        recipe.description.to_string().into(),
                        recipe.prep_time.to_string().into(),
                        recipe.servings.to_string().into(),
                        tags.encode().into(),
                    ],
                )
                .await?;
        }
        Ok(SEED_RECIPES.len())
    }

    /// All recipes, newest first; equal timestamps fall back to highest id first.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let sql = format!("{} ORDER BY datetime(created_at) DESC, id DESC", SELECT_RECIPES);
        self.store.query_many(&sql, vec![], recipe_from_row).await
    }

    /// All recipes by descending id, for tabular dumps.
    pub async fn dump_recipes(&self) -> Result<Vec<Recipe>> {
        let sql = format!("{} ORDER BY id DESC", SELECT_RECIPES);
        self.store.query_many(&sql, vec![], recipe_from_row).await
    }

    pub async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>> {
        let sql = format!("{} WHERE id = ?1", SELECT_RECIPES);
        self.store
            .query_one(&sql, vec![Value::from(id)], recipe_from_row)
            .await
    }

    /// Validate, normalize and insert a recipe. Returns the new id.
    pub async fn create_recipe(&self, input: &NewRecipe) -> Result<i64> {
        let recipe = input.normalize()?;

        let outcome = self
            .store
            .execute(
                INSERT_RECIPE,
                vec![
                    recipe.title.clone().into(),
                    recipe.author.into(),
                    recipe.description.into(),
                    recipe.prep_time.into(),
                    recipe.servings.into(),
                    recipe.tags.encode().into(),
                ],
            )
            .await?;

        let id = outcome
            .inserted_id
            .ok_or_else(|| RecipeError::Storage("insert did not assign an id".to_string()))?;
        info!(id, title = %recipe.title, "Created recipe");
        Ok(id)
    }

    /// Delete a recipe by id. Deleting an id that does not exist succeeds.
    pub async fn delete_recipe(&self, id: i64) -> Result<()> {
        let id = validate_recipe_id(id)?;

        let outcome = self
            .store
            .execute("DELETE FROM recipes WHERE id = ?1", vec![Value::from(id)])
            .await?;
        debug!(id, deleted = outcome.affected_rows, "Delete recipe");
        Ok(())
    }

    /// Delete every recipe. Does not re-seed.
    pub async fn clear_all(&self) -> Result<usize> {
        let outcome = self.store.execute("DELETE FROM recipes", vec![]).await?;
        info!("Cleared {} recipes", outcome.affected_rows);
        Ok(outcome.affected_rows)
    }

    pub async fn count(&self) -> Result<usize> {
        let count: Option<i64> = self
            .store
            .query_one("SELECT COUNT(*) FROM recipes", vec![], |row| row.get(0))
            .await?;
        Ok(count.unwrap_or(0) as usize)
    }
}

fn recipe_from_row(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    let id: i64 = row.get(0)?;
    let stored_tags = match row.get_ref(6)? {
        ValueRef::Null => None,
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
    };

    Ok(Recipe {
        id,
        title: row.get(1)?,
        author: row.get(2)?,
        description: row.get(3)?,
        prep_time: row.get(4)?,
        servings: row.get(5)?,
        tags: TagList::decode_or_empty(stored_tags.as_deref(), id).into_vec(),
        created_at: row.get(7)?,
    })
}
