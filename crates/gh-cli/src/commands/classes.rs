use comfy_table::{ContentArrangement, Table};

use gh_classes::ClassRegistry;

pub fn run() -> Result<(), String> {
    let registry = ClassRegistry::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Letter", "Abbrev", "Name", "Trains", "Ceiling", "Gain", "Hit/level", "Mana",
    ]);

    for class in registry.iter() {
        let practice = class.practice;
        table.add_row(vec![
            class.id.letter().to_string(),
            class.abbrev.to_string(),
            class.name.to_string(),
            practice.terminology.noun().to_string(),
            format!("{}%", practice.learned_ceiling),
            format!("{}-{}", practice.min_gain, practice.max_gain),
            format!("{}-{}", class.hit_roll.start(), class.hit_roll.end()),
            if class.gains_mana { "yes" } else { "no" }.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} classes", registry.count());

    Ok(())
}
