use gh_classes::ClassRegistry;

pub fn run(letters: &str) -> Result<(), String> {
    let registry = ClassRegistry::standard();
    let mask = registry.class_bitvector(letters);

    println!("  Mask {} ({:#07b})", mask.bits(), mask.bits());
    if mask.is_empty() {
        println!("  No classes");
        return Ok(());
    }
    let names: Vec<&str> = mask.classes().map(|c| registry.display_name(c)).collect();
    println!("  Classes: {}", names.join(", "));
    Ok(())
}
