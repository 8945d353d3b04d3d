//! # Bubbles CLI Application
//!
//! Terminal front end for brew_core: estimate a recipe, print a brew-day
//! shopping list, and keep a brewbook of recipes and brews.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=brew_core=debug`).

mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use brew_core::brewbook::Brewbook;
use brew_core::calculations::calculate;
use brew_core::file_io::{load_brewbook, load_ingredient, load_recipe, save_brewbook};
use brew_core::ingredients::{AddedUpIngredients, IngredientKind};
use brew_core::UnitSystem;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "brew_cli")]
#[command(version, about = "Home-brewing recipe calculator and brew tracker")]
struct Cli {
    /// Path to the brewbook file
    #[arg(long, global = true, env = "BREWBOOK", default_value = "cellar.brewbook")]
    book: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate gravities, color, bitterness and ABV of a recipe file
    Calc {
        /// Recipe JSON file
        recipe: PathBuf,

        /// Print the calculation as JSON
        #[arg(long)]
        json: bool,

        /// Show volumes and weights in US units
        #[arg(long)]
        imperial: bool,
    },

    /// List the ingredients to gather for a recipe file, merged by name
    Shopping {
        /// Recipe JSON file
        recipe: PathBuf,

        /// Show weights in US units
        #[arg(long)]
        imperial: bool,
    },

    /// Manage the brewbook
    Book {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Track brews
    Brew {
        #[command(subcommand)]
        action: BrewAction,
    },
}

#[derive(Subcommand)]
enum BookAction {
    /// Create an empty brewbook
    Init {
        /// Brewer name
        #[arg(long, default_value = "")]
        brewer: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Import a recipe JSON file
    Add {
        recipe: PathBuf,
    },

    /// Remove a stored recipe (brews started from it are kept)
    Rm { recipe_id: Uuid },

    /// Edit the ingredients of a stored recipe
    Recipe {
        recipe_id: Uuid,

        #[command(subcommand)]
        action: RecipeAction,
    },

    /// Manage the ingredient inventory
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },

    /// List recipes, brews and inventory
    List,
}

#[derive(Subcommand)]
enum RecipeAction {
    /// Append an ingredient from a JSON file (tagged with "kind")
    Add { ingredient: PathBuf },
    /// Remove the ingredient at an index
    Rm { kind: KindArg, index: usize },
    /// Replace the ingredient at an index with one from a JSON file
    Set {
        kind: KindArg,
        index: usize,
        ingredient: PathBuf,
    },
}

#[derive(Subcommand)]
enum InventoryAction {
    /// Add an ingredient from a JSON file (tagged with "kind")
    Add { ingredient: PathBuf },
    /// Remove an inventory item
    Rm { id: Uuid },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Fermentable,
    Hop,
    Yeast,
    MashStep,
}

impl From<KindArg> for IngredientKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Fermentable => IngredientKind::Fermentable,
            KindArg::Hop => IngredientKind::Hop,
            KindArg::Yeast => IngredientKind::Yeast,
            KindArg::MashStep => IngredientKind::MashStep,
        }
    }
}

#[derive(Subcommand)]
enum BrewAction {
    /// Start a brew from a stored recipe
    Start { recipe_id: Uuid },
    /// Move a brew to its next step
    Next { brew_id: Uuid },
    /// Move a brew back one step
    Prev { brew_id: Uuid },
    /// Record the measured original gravity
    Og { brew_id: Uuid, gravity: f64 },
    /// Record the measured final gravity
    Fg { brew_id: Uuid, gravity: f64 },
    /// Record brew notes, or tasting notes with --taste
    Notes {
        brew_id: Uuid,
        text: String,

        #[arg(long)]
        taste: bool,
    },
    /// Show a brew
    Show { brew_id: Uuid },
    /// Delete a brew
    Rm { brew_id: Uuid },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Calc { recipe, json, imperial } => run_calc(&recipe, json, imperial),
        Commands::Shopping { recipe, imperial } => {
            let recipe = load_recipe(&recipe)?;
            let list = AddedUpIngredients::from_parts(&recipe.fermentables, &recipe.hops, &recipe.yeasts);
            report::print_shopping_list(&recipe.name, &list, unit_system(imperial));
            Ok(())
        }
        Commands::Book { action } => run_book(&cli.book, action),
        Commands::Brew { action } => run_brew(&cli.book, action),
    }
}

fn run_calc(path: &Path, json: bool, imperial: bool) -> Result<()> {
    let recipe = load_recipe(path)?;
    recipe
        .validate()
        .with_context(|| format!("recipe {} is not valid", path.display()))?;

    let calc = calculate(&recipe);

    if json {
        println!("{}", serde_json::to_string_pretty(&calc)?);
        return Ok(());
    }

    report::print_calculation(&recipe, &calc, unit_system(imperial));
    Ok(())
}

fn unit_system(imperial: bool) -> UnitSystem {
    if imperial {
        UnitSystem::Imperial
    } else {
        UnitSystem::Metric
    }
}

fn run_book(path: &Path, action: BookAction) -> Result<()> {
    debug!(book = %path.display(), "using brewbook");
    match action {
        BookAction::Init { brewer, force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            save_brewbook(&Brewbook::new(brewer), path)?;
            println!("Created {}", path.display());
        }
        BookAction::Add { recipe } => {
            let mut book = load_brewbook(path)?;
            let recipe = load_recipe(&recipe)?;
            recipe.validate()?;
            let name = recipe.name.clone();
            let id = book.add_recipe(recipe);
            save_brewbook(&book, path)?;
            println!("Added recipe '{}' as {}", name, id);
        }
        BookAction::Rm { recipe_id } => {
            let mut book = load_brewbook(path)?;
            let recipe = book
                .remove_recipe(&recipe_id)
                .with_context(|| format!("no recipe {}", recipe_id))?;
            save_brewbook(&book, path)?;
            println!("Removed recipe '{}'", recipe.name);
        }
        BookAction::Recipe { recipe_id, action } => {
            let mut book = load_brewbook(path)?;
            let recipe = book
                .get_recipe_mut(&recipe_id)
                .with_context(|| format!("no recipe {}", recipe_id))?;
            match action {
                RecipeAction::Add { ingredient } => {
                    let ingredient = load_ingredient(&ingredient)?;
                    println!("Added {} '{}'", ingredient.kind().label(), ingredient.name());
                    recipe.insert(ingredient);
                }
                RecipeAction::Rm { kind, index } => {
                    let removed = recipe.remove(kind.into(), index)?;
                    println!("Removed {} '{}'", removed.kind().label(), removed.name());
                }
                RecipeAction::Set { kind, index, ingredient } => {
                    let ingredient = load_ingredient(&ingredient)?;
                    let old = recipe.replace(kind.into(), index, ingredient)?;
                    println!("Replaced {} '{}'", old.kind().label(), old.name());
                }
            }
            recipe
                .validate()
                .with_context(|| format!("edit leaves recipe {} invalid", recipe_id))?;
            save_brewbook(&book, path)?;
        }
        BookAction::Inventory { action } => {
            let mut book = load_brewbook(path)?;
            match action {
                InventoryAction::Add { ingredient } => {
                    let ingredient = load_ingredient(&ingredient)?;
                    let name = ingredient.name().to_string();
                    let id = book.add_inventory(ingredient);
                    println!("Added '{}' to inventory as {}", name, id);
                }
                InventoryAction::Rm { id } => {
                    let item = book
                        .remove_inventory(&id)
                        .with_context(|| format!("no inventory item {}", id))?;
                    println!("Removed '{}' from inventory", item.name());
                }
            }
            save_brewbook(&book, path)?;
        }
        BookAction::List => {
            let book = load_brewbook(path)?;
            report::print_brewbook(&book);
        }
    }
    Ok(())
}

fn run_brew(path: &Path, action: BrewAction) -> Result<()> {
    debug!(book = %path.display(), "using brewbook");
    let mut book = load_brewbook(path)?;

    let brew_id = match action {
        BrewAction::Start { recipe_id } => {
            let id = book.start_brew(&recipe_id)?;
            println!("Started brew {}", id);
            id
        }
        BrewAction::Next { brew_id } => {
            book.brew_mut(&brew_id)?.next_step();
            brew_id
        }
        BrewAction::Prev { brew_id } => {
            book.brew_mut(&brew_id)?.previous_step();
            brew_id
        }
        BrewAction::Og { brew_id, gravity } => {
            check_gravity(gravity)?;
            book.brew_mut(&brew_id)?.record_og(gravity);
            brew_id
        }
        BrewAction::Fg { brew_id, gravity } => {
            check_gravity(gravity)?;
            let brew = book.brew_mut(&brew_id)?;
            brew.record_fg(gravity);
            if let Some(abv) = brew.real_abv() {
                println!("Real ABV: {:.1}%", abv);
            }
            brew_id
        }
        BrewAction::Notes { brew_id, text, taste } => {
            let brew = book.brew_mut(&brew_id)?;
            if taste {
                brew.taste_notes = text;
            } else {
                brew.notes = text;
            }
            brew_id
        }
        BrewAction::Rm { brew_id } => {
            let brew = book
                .remove_brew(&brew_id)
                .with_context(|| format!("no brew {}", brew_id))?;
            save_brewbook(&book, path)?;
            println!("Removed brew of '{}'", brew.recipe.name);
            return Ok(());
        }
        BrewAction::Show { brew_id } => {
            let brew = book
                .get_brew(&brew_id)
                .with_context(|| format!("no brew {}", brew_id))?;
            report::print_brew(&brew_id, brew);
            return Ok(());
        }
    };

    save_brewbook(&book, path)?;
    if let Some(brew) = book.get_brew(&brew_id) {
        report::print_brew(&brew_id, brew);
    }
    Ok(())
}

fn check_gravity(gravity: f64) -> Result<()> {
    if !(0.9..=1.2).contains(&gravity) {
        bail!("gravity {} is outside 0.900-1.200", gravity);
    }
    Ok(())
}
