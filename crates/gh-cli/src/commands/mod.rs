pub mod abilities;
pub mod classes;
pub mod exp;
pub mod level;
pub mod mask;
pub mod roll;
pub mod titles;

use std::path::Path;

use gh_classes::GuildConfig;
use gh_core::{Character, ClassId};

/// Load the guild configuration, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<GuildConfig, String> {
    match path {
        Some(path) => GuildConfig::load(path).map_err(|e| format!("{}: {e}", path.display())),
        None => Ok(GuildConfig::default()),
    }
}

/// Parse a class argument, accepting a letter or a class name.
fn parse_class(arg: &str) -> Result<ClassId, String> {
    arg.parse::<ClassId>().map_err(|e| e.to_string())
}

/// Print a one-line summary of a character's vitals.
fn print_vitals(ch: &Character) {
    println!("  Level {} {} ({} exp)", ch.level, ch.title, ch.experience);
    println!(
        "  Hit {}/{}  Mana {}/{}  Practices {}",
        ch.points.hit, ch.points.max_hit, ch.points.mana, ch.points.max_mana, ch.practices
    );
}
