//! # File I/O Module
//!
//! Handles brewbook and recipe file operations:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility on load
//!
//! ## File Format
//!
//! Brewbooks are saved as `.brewbook` files containing pretty-printed JSON.
//! Single recipes can be exchanged as plain `Recipe` JSON documents.
//!
//! ## Example
//!
//! ```rust,no_run
//! use brew_core::brewbook::Brewbook;
//! use brew_core::file_io::{load_brewbook, save_brewbook};
//! use std::path::Path;
//!
//! let book = Brewbook::new("Brewer");
//! let path = Path::new("cellar.brewbook");
//!
//! save_brewbook(&book, path)?;
//! let loaded = load_brewbook(path)?;
//! assert_eq!(loaded.meta.brewer, "Brewer");
//! # Ok::<(), brew_core::errors::BrewError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::brewbook::{Brewbook, SCHEMA_VERSION};
use crate::errors::{BrewError, BrewResult};
use crate::ingredients::Ingredient;
use crate::recipe::Recipe;

/// Save a brewbook with atomic write semantics.
///
/// The save process:
/// 1. Serialize to JSON
/// 2. Write to a temporary file next to the target
/// 3. Sync to disk
/// 4. Rename over the target
pub fn save_brewbook(book: &Brewbook, path: &Path) -> BrewResult<()> {
    let json = serde_json::to_string_pretty(book).map_err(|e| BrewError::SerializationError {
        reason: e.to_string(),
    })?;

    write_atomic(path, json.as_bytes())?;
    info!(path = %path.display(), recipes = book.recipes.len(), brews = book.brews.len(), "brewbook saved");
    Ok(())
}

/// Load a brewbook and check its schema version.
///
/// # Returns
///
/// * `Ok(Brewbook)` - Successfully loaded
/// * `Err(BrewError::VersionMismatch)` - File version is incompatible
/// * `Err(BrewError::SerializationError)` - Invalid JSON
/// * `Err(BrewError::FileError)` - I/O error
pub fn load_brewbook(path: &Path) -> BrewResult<Brewbook> {
    let contents = read_to_string(path)?;

    let book: Brewbook = serde_json::from_str(&contents).map_err(|e| BrewError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&book.meta.version)?;

    info!(path = %path.display(), recipes = book.recipes.len(), "brewbook loaded");
    Ok(book)
}

/// Load a single recipe document.
pub fn load_recipe(path: &Path) -> BrewResult<Recipe> {
    let contents = read_to_string(path)?;

    let recipe: Recipe = serde_json::from_str(&contents).map_err(|e| BrewError::SerializationError {
        reason: format!("Invalid recipe JSON in {}: {}", path.display(), e),
    })?;

    debug!(path = %path.display(), name = %recipe.name, "recipe loaded");
    Ok(recipe)
}

/// Save a single recipe document.
pub fn save_recipe(recipe: &Recipe, path: &Path) -> BrewResult<()> {
    let json = serde_json::to_string_pretty(recipe).map_err(|e| BrewError::SerializationError {
        reason: e.to_string(),
    })?;
    write_atomic(path, json.as_bytes())
}

/// Load a single ingredient document, tagged with its `kind`.
pub fn load_ingredient(path: &Path) -> BrewResult<Ingredient> {
    let contents = read_to_string(path)?;

    serde_json::from_str(&contents).map_err(|e| BrewError::SerializationError {
        reason: format!("Invalid ingredient JSON in {}: {}", path.display(), e),
    })
}

fn read_to_string(path: &Path) -> BrewResult<String> {
    let mut file = File::open(path).map_err(|e| {
        BrewError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        BrewError::file_error("read", path.display().to_string(), e.to_string())
    })?;
    Ok(contents)
}

/// Temp file used while saving `path`: `name.ext` -> `name.ext.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp.set_extension(extension);
    tmp
}

fn write_atomic(path: &Path, bytes: &[u8]) -> BrewResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        BrewError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        BrewError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        BrewError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        BrewError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> BrewResult<()> {
    let mismatch = || BrewError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor may have breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
