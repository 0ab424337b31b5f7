pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod recipe;
pub mod server;
pub mod storage;

pub use catalog::{Catalog, SeedPolicy};
pub use config::Config;
pub use error::{RecipeError, Result, ValidationError};
pub use recipe::{NewRecipe, Recipe};
pub use storage::Store;
