use comfy_table::{ContentArrangement, Table};

use gh_classes::{MAX_LEVEL, TitleTable};
use gh_core::Gender;

pub fn run(class: &str, female: bool) -> Result<(), String> {
    let class = super::parse_class(class)?;
    let titles = TitleTable::standard();
    let gender = if female { Gender::Female } else { Gender::Male };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Level", "Title"]);

    for level in 1..=MAX_LEVEL {
        table.add_row(vec![
            level.to_string(),
            titles.for_level(class, level, gender).to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
