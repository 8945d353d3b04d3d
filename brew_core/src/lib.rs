//! # brew_core - Home-Brewing Calculation Engine
//!
//! `brew_core` is the computational heart of Bubbles, a home-brewing recipe
//! manager. It estimates what a recipe will produce (gravities, color,
//! bitterness, alcohol) and judges the result against a style, and it carries
//! the recipe, brew and brewbook data model around that engine.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The engine is pure functions from a recipe to a result
//! - **No placeholders**: A metric that cannot be computed is `None`, not 0
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types for everything around the engine
//!
//! ## Quick Start
//!
//! ```rust
//! use brew_core::calculations::calculate;
//! use brew_core::ingredients::{Fermentable, Hop, Yeast};
//! use brew_core::recipe::Recipe;
//!
//! let mut recipe = Recipe::new("Session IPA");
//! recipe.insert(Fermentable::grain("Pale malt", 3.5, 80.0, 3.0));
//! recipe.insert(Hop::boil("Columbus", 15.0, 0.01, 60.0));
//! recipe.insert(Yeast::new("US-05", 78.0, 1.0));
//!
//! let calc = calculate(&recipe);
//! println!("OG {:.3}, {:.0} IBU", calc.og.unwrap(), calc.ibu);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The calculation engine
//! - [`recipe`] - Recipe, equipment and style definitions
//! - [`ingredients`] - Fermentables, hops, yeasts, mash steps
//! - [`brew`] - Brews moving through their steps
//! - [`brewbook`] - Root container for recipes, brews and inventory
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic JSON saves and loads

pub mod brew;
pub mod brewbook;
pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod ingredients;
pub mod recipe;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use brew::{Brew, BrewStep};
pub use brewbook::{Brewbook, BrewbookSettings, UnitSystem};
pub use calculations::{calculate, Calculation, Gauge, Metric};
pub use errors::{BrewError, BrewResult};
pub use file_io::{load_brewbook, load_ingredient, load_recipe, save_brewbook, save_recipe};
pub use ingredients::{Fermentable, Hop, HopUse, Ingredient, IngredientKind, MashStep, Yeast};
pub use recipe::{Recipe, Style, StyleRange};
