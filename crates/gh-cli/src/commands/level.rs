use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use gh_classes::{GuildConfig, Progression, Rulebook, start_character};
use gh_core::{Character, Gender, MemoryStore};

pub fn run(config: &GuildConfig, class: &str, target: u8, seed: Option<u64>) -> Result<(), String> {
    let class = super::parse_class(class)?;
    let seed = seed.unwrap_or(config.seed);

    let rules = Rulebook::standard();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = MemoryStore::new();
    let mut ch = Character::new("Climber", class, Gender::Neutral);

    let mut progression = Progression::new(&rules, config, &mut rng, &mut store);
    start_character(&mut progression, &mut ch);
    let gains = progression
        .advance_to(&mut ch, target)
        .map_err(|e| e.to_string())?;

    println!(
        "  {} {}",
        rules.registry.display_name(class).bold(),
        format!("(seed={seed})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Level", "+Hit", "+Mana", "+Practices"]);
    for gain in &gains {
        table.add_row(vec![
            gain.level.to_string(),
            gain.hit_points.to_string(),
            gain.mana.to_string(),
            gain.practices.to_string(),
        ]);
    }
    println!("{table}");
    println!();
    super::print_vitals(&ch);
    if ch.conditions.all_disabled() {
        println!("  {}", "Hunger, thirst and drunkenness disabled".yellow());
    }

    Ok(())
}
