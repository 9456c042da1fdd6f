use comfy_table::{ContentArrangement, Table};

use gh_classes::{ExperienceTable, MAX_LEVEL, is_administrative};

pub fn run(class: &str) -> Result<(), String> {
    let class = super::parse_class(class)?;
    let experience = ExperienceTable::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Level", "Experience", "Tier"]);

    for level in 0..=MAX_LEVEL {
        let tier = if is_administrative(level) { "staff" } else { "mortal" };
        table.add_row(vec![
            level.to_string(),
            experience.for_level(class, level).to_string(),
            tier.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
