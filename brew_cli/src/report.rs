//! Plain-text rendering of calculations, shopping lists and brewbooks.

use brew_core::brew::{Brew, BrewStep};
use brew_core::brewbook::{Brewbook, UnitSystem};
use brew_core::calculations::{Calculation, Gauge};
use brew_core::ingredients::{AddedUpIngredients, Ingredient};
use brew_core::recipe::Recipe;
use brew_core::units::{Celsius, Ebc, Fahrenheit, Gallons, Kilograms, Liters, Ounces, Pounds, Srm};
use uuid::Uuid;

const RULE: &str = "═══════════════════════════════════════";

fn banner(title: &str) {
    println!("{}", RULE);
    println!("  {}", title);
    println!("{}", RULE);
}

fn volume(liters: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{:.1}", Liters(liters)),
        UnitSystem::Imperial => format!("{:.2}", Gallons::from(Liters(liters))),
    }
}

fn weight(kg: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{:.3}", Kilograms(kg)),
        UnitSystem::Imperial => format!("{:.2}", Pounds::from(Kilograms(kg))),
    }
}

fn hop_weight(kg: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{:.0} g", kg * 1000.0),
        UnitSystem::Imperial => format!("{:.2}", Ounces::from(Kilograms(kg))),
    }
}

fn temperature(celsius: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{:.0}", Celsius(celsius)),
        UnitSystem::Imperial => format!("{:.0}", Fahrenheit::from(Celsius(celsius))),
    }
}

fn unset_or(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.*}", decimals, v))
}

fn gauge_line(gauge: &Gauge) {
    let decimals = gauge.metric.decimals() as usize;
    let status = if gauge.in_range { "[OK]" } else { "[--]" };
    println!(
        "  {:<8} {:>8}  ({:.*} - {:.*})  {:>3.0}%  {}",
        gauge.metric.label(),
        unset_or(gauge.display_value(), decimals),
        decimals,
        gauge.min,
        decimals,
        gauge.max,
        gauge.cursor,
        status
    );
}

pub fn print_calculation(recipe: &Recipe, calc: &Calculation, units: UnitSystem) {
    banner(&recipe.name.to_uppercase());
    println!();
    println!("Process:");
    println!("  Batch:      {}", volume(recipe.batch_size_l, units));
    println!("  Boil:       {:.0} min", recipe.boil_time_min);
    println!("  Efficiency: {:.0}%", recipe.efficiency_pct);
    if let Some(style) = &recipe.style {
        println!("  Style:      {} ({})", style.name, style.category);
    }
    println!();

    println!("Water:");
    println!("  Boil volume:  {}", volume(calc.display_boil_volume(), units));
    println!("  Total volume: {}", volume(calc.total_volume_l, units));
    println!();

    println!("Estimates:");
    println!("  OG:     {}", unset_or(calc.og, 3));
    println!("  FG:     {}", unset_or(calc.fg, 3));
    println!("  ABV:    {}%", unset_or(calc.abv_pct, 1));
    println!("  IBU:    {:.1}", calc.ibu);
    println!(
        "  Color:  {:.1} ({:.1})  {}",
        Srm(calc.color_srm),
        Ebc::from(Srm(calc.color_srm)),
        calc.color_rgb().to_hex()
    );
    println!("  IBU/GU: {}", unset_or(calc.ibu_gu, 2));
    println!("  IBU/RE: {}", unset_or(calc.ibu_re, 2));
    println!();

    println!("Ranges:");
    for gauge in &calc.gauges {
        gauge_line(gauge);
    }
    println!();
    println!("{}", RULE);
}

pub fn print_shopping_list(name: &str, list: &AddedUpIngredients, units: UnitSystem) {
    banner(&format!("SHOPPING LIST: {}", name));
    if list.is_empty() {
        println!("  (nothing to buy)");
        return;
    }

    if !list.fermentables.is_empty() {
        println!("Fermentables:");
        for f in &list.fermentables {
            println!("  {:<24} {}", f.name, weight(f.amount_kg, units));
        }
    }
    if !list.hops.is_empty() {
        println!("Hops:");
        for h in &list.hops {
            println!(
                "  {:<24} {:>7}  {:.1}% AA  {}",
                h.name,
                hop_weight(h.amount_kg, units),
                h.alpha_pct,
                h.hop_use.label()
            );
        }
    }
    if !list.yeasts.is_empty() {
        println!("Yeasts:");
        for y in &list.yeasts {
            println!("  {:<24} x{}", y.name, y.amount);
        }
    }
}

fn ingredient_line(ingredient: &Ingredient, units: UnitSystem) -> String {
    match ingredient {
        Ingredient::Fermentable(f) => format!("{} {}", f.name, weight(f.amount_kg, units)),
        Ingredient::Hop(h) => format!("{} {}", h.name, hop_weight(h.amount_kg, units)),
        Ingredient::Yeast(y) => format!("{} x{}", y.name, y.amount),
        Ingredient::MashStep(m) => format!("{} {}", m.name, temperature(m.step_temp_c, units)),
    }
}

pub fn print_brewbook(book: &Brewbook) {
    let units = book.settings.units;
    banner(&format!("BREWBOOK {} (v{})", book.meta.brewer, book.meta.version));

    println!("Recipes ({}):", book.recipes.len());
    for (id, recipe) in book.sorted_recipes() {
        println!("  {}  {}", id, recipe.name);
    }

    println!("Brews ({}):", book.brews.len());
    let mut brews: Vec<_> = book.brews.iter().collect();
    brews.sort_by_key(|(_, b)| (b.step, b.brew_date));
    for (id, brew) in brews {
        println!("  {}  {:<24} {}", id, brew.recipe.name, brew.step.name());
    }

    println!("Inventory ({}):", book.inventory.len());
    for (_, item) in book.sorted_inventory() {
        println!("  [{}] {}", item.kind().label(), ingredient_line(item, units));
    }
}

pub fn print_brew(id: &Uuid, brew: &Brew) {
    banner(&format!("BREW {}", brew.recipe.name));
    println!("  Id:     {}", id);
    println!(
        "  Step:   {} ({}/{})",
        brew.step.name(),
        brew.step.index() + 1,
        BrewStep::ALL.len()
    );
    println!("          {}", brew.step.description());
    if let Some(date) = brew.brew_date {
        println!("  Date:   {}", date);
    }
    println!("  OG:     {}", unset_or(brew.measured_og, 3));
    println!("  FG:     {}", unset_or(brew.measured_fg, 3));
    if let Some(abv) = brew.real_abv() {
        println!("  ABV:    {:.1}%", abv);
    }
    if brew.step == BrewStep::Fermentation && brew.has_dry_hop() {
        println!("  Remember the dry hop addition.");
    }
    if !brew.notes.is_empty() {
        println!("  Notes:  {}", brew.notes);
    }
    if !brew.taste_notes.is_empty() {
        println!("  Taste:  {}", brew.taste_notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::ingredients::{Hop, MashStep};

    #[test]
    fn test_mash_step_temperature_follows_units() {
        let step = Ingredient::MashStep(MashStep::new("Sacch", 66.0, 60.0));
        assert_eq!(ingredient_line(&step, UnitSystem::Metric), "Sacch 66 °C");

        let imperial = ingredient_line(&step, UnitSystem::Imperial);
        assert!(imperial.contains("°F"));
        assert_eq!(imperial, "Sacch 151 °F");
    }

    #[test]
    fn test_weights_follow_units() {
        assert_eq!(weight(5.0, UnitSystem::Metric), "5.000 kg");
        assert_eq!(weight(5.0, UnitSystem::Imperial), "11.02 lb");
        assert_eq!(hop_weight(0.028, UnitSystem::Metric), "28 g");
        assert_eq!(hop_weight(0.028, UnitSystem::Imperial), "0.99 oz");

        let hop = Ingredient::Hop(Hop::boil("Saaz", 3.5, 0.028, 10.0));
        assert_eq!(ingredient_line(&hop, UnitSystem::Imperial), "Saaz 0.99 oz");
    }

    #[test]
    fn test_volume_and_unset_values() {
        assert_eq!(volume(20.0, UnitSystem::Metric), "20.0 L");
        assert_eq!(volume(20.0, UnitSystem::Imperial), "5.28 gal");
        assert_eq!(unset_or(None, 3), "-");
        assert_eq!(unset_or(Some(1.05195), 3), "1.052");
    }
}
