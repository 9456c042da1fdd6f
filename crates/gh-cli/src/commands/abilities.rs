use comfy_table::{ContentArrangement, Table};

use gh_classes::Rulebook;

pub fn run(class: &str, level: u8) -> Result<(), String> {
    let class = super::parse_class(class)?;
    let rules = Rulebook::standard();
    let noun = rules.registry.practice_params(class).terminology.noun();

    let available = rules.spells.available(class, level);
    if available.is_empty() {
        println!("  No {noun} available at level {level}.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Level", "Name", "Kind"]);
    for entry in &available {
        let kind = if entry.ability.is_spell() { "spell" } else { "skill" };
        table.add_row(vec![
            entry.min_level.to_string(),
            entry.ability.name().to_string(),
            kind.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} {noun} at level {level}", available.len());
    Ok(())
}
