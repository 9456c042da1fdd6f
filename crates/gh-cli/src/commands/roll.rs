use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use gh_classes::{GuildConfig, Progression, Rulebook, start_character};
use gh_core::{Character, Gender, MemoryStore};

pub fn run(config: &GuildConfig, class: &str, seed: Option<u64>) -> Result<(), String> {
    let class = super::parse_class(class)?;
    let seed = seed.unwrap_or(config.seed);

    let rules = Rulebook::standard();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = MemoryStore::new();
    let mut ch = Character::new("Newcomer", class, Gender::Neutral);

    let mut progression = Progression::new(&rules, config, &mut rng, &mut store);
    start_character(&mut progression, &mut ch);

    println!(
        "  {} {}",
        rules.registry.display_name(class).bold(),
        format!("(seed={seed})").dimmed()
    );
    println!("  {}", ch.real_abilities);
    super::print_vitals(&ch);
    println!();

    if ch.skills.is_empty() {
        println!("  {}", "(no starting skills)".dimmed());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Skill", "Percent"]);
    for (ability, percent) in &ch.skills {
        table.add_row(vec![ability.name().to_string(), format!("{percent}%")]);
    }
    println!("{table}");
    if ch.evasion > 0 {
        println!("  Evasion {}", ch.evasion);
    }

    Ok(())
}
