//! # Brew Sessions
//!
//! A brew is a snapshot of a recipe being brewed. It moves through a fixed
//! sequence of steps and records what was actually measured along the way.
//!
//! ```text
//! Prepare -> BrewDay -> Fermentation -> Bottling -> Done
//! ```
//!
//! ## Example
//!
//! ```rust
//! use brew_core::brew::{Brew, BrewStep};
//! use brew_core::recipe::Recipe;
//! use uuid::Uuid;
//!
//! let mut brew = Brew::new(Uuid::new_v4(), Recipe::new("Pale"));
//! assert_eq!(brew.step, BrewStep::Prepare);
//!
//! brew.next_step();
//! assert_eq!(brew.step, BrewStep::BrewDay);
//! assert!(brew.brew_date.is_some());
//!
//! brew.record_og(1.052);
//! brew.record_fg(1.012);
//! assert!(brew.real_abv().unwrap() > 5.0);
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculations::gravity;
use crate::ingredients::{AddedUpIngredients, HopUse};
use crate::recipe::Recipe;

/// Steps of a brew, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum BrewStep {
    /// Gathering ingredients
    #[default]
    Prepare,
    /// Mash, boil and chill
    BrewDay,
    /// Primary fermentation, OG measured
    Fermentation,
    /// Packaging, FG measured
    Bottling,
    /// Finished; tasting notes
    Done,
}

impl BrewStep {
    /// All steps in order
    pub const ALL: [BrewStep; 5] = [
        BrewStep::Prepare,
        BrewStep::BrewDay,
        BrewStep::Fermentation,
        BrewStep::Bottling,
        BrewStep::Done,
    ];

    /// Last step
    pub const MAX: BrewStep = BrewStep::Done;

    /// Zero-based position in the sequence
    pub fn index(self) -> usize {
        self as usize
    }

    /// Following step, saturating at [`BrewStep::Done`]
    pub fn next(self) -> BrewStep {
        BrewStep::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(BrewStep::MAX)
    }

    /// Preceding step, saturating at [`BrewStep::Prepare`]
    pub fn previous(self) -> BrewStep {
        match self.index() {
            0 => BrewStep::Prepare,
            i => BrewStep::ALL[i - 1],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BrewStep::Prepare => "Prepare",
            BrewStep::BrewDay => "Brew day",
            BrewStep::Fermentation => "Fermentation",
            BrewStep::Bottling => "Bottling",
            BrewStep::Done => "Done",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BrewStep::Prepare => "Gather and weigh the ingredients.",
            BrewStep::BrewDay => "Mash, sparge, boil and chill the wort.",
            BrewStep::Fermentation => "Pitch the yeast and record the original gravity.",
            BrewStep::Bottling => "Record the final gravity and package the beer.",
            BrewStep::Done => "Let it condition, then taste and take notes.",
        }
    }
}

/// A recipe being brewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brew {
    /// Recipe this brew was started from
    pub recipe_id: Uuid,

    /// Recipe as it was when the brew started
    pub recipe: Recipe,

    pub step: BrewStep,

    /// Set when the brew leaves the Prepare step
    #[serde(default)]
    pub brew_date: Option<NaiveDate>,

    /// Measured original gravity
    #[serde(default)]
    pub measured_og: Option<f64>,

    /// Measured final gravity
    #[serde(default)]
    pub measured_fg: Option<f64>,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub taste_notes: String,
}

impl Brew {
    /// Start a brew from a recipe snapshot.
    pub fn new(recipe_id: Uuid, recipe: Recipe) -> Self {
        Brew {
            recipe_id,
            recipe,
            step: BrewStep::Prepare,
            brew_date: None,
            measured_og: None,
            measured_fg: None,
            notes: String::new(),
            taste_notes: String::new(),
        }
    }

    /// Move to the next step. Leaving Prepare stamps today's date if none is set.
    pub fn next_step(&mut self) -> BrewStep {
        if self.step == BrewStep::Prepare && self.brew_date.is_none() {
            self.brew_date = Some(Utc::now().date_naive());
        }
        self.step = self.step.next();
        info!(recipe = %self.recipe.name, step = self.step.name(), "brew advanced");
        self.step
    }

    /// Move back one step.
    pub fn previous_step(&mut self) -> BrewStep {
        self.step = self.step.previous();
        info!(recipe = %self.recipe.name, step = self.step.name(), "brew moved back");
        self.step
    }

    pub fn record_og(&mut self, og: f64) {
        self.measured_og = Some(og);
    }

    pub fn record_fg(&mut self, fg: f64) {
        self.measured_fg = Some(fg);
    }

    /// ABV from the measured gravities, `None` until both are recorded.
    pub fn real_abv(&self) -> Option<f64> {
        gravity::abv(self.measured_og, self.measured_fg)
    }

    /// Whether any hop goes in as a dry hop
    pub fn has_dry_hop(&self) -> bool {
        self.recipe.hops.iter().any(|h| h.hop_use == HopUse::DryHop)
    }

    /// Ingredients to gather, merged by name.
    pub fn shopping_list(&self) -> AddedUpIngredients {
        AddedUpIngredients::from_parts(&self.recipe.fermentables, &self.recipe.hops, &self.recipe.yeasts)
    }
}
