use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use rosewright_config::langs::ResolvedLanguage;
use rosewright_config::registry::ControlRole;
use rosewright_config::{ConfigPage, Generation};

pub fn print_declaration_report(page: &ConfigPage) {
    println!(
        "\nGeneration {}: {} options",
        page.generation,
        page.registry.len()
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Storage Key").add_attribute(Attribute::Bold),
        Cell::new("Query Key"),
        Cell::new("Label"),
        Cell::new("Role"),
        Cell::new("Serializer"),
        Cell::new("Choices"),
        Cell::new("Initial").fg(Color::Cyan),
    ]);

    for (i, decl) in page.registry.iter().enumerate() {
        let initial = decl
            .initial_choice(&page.caps)
            .map(|c| format!("{} ({})", c.text, c.value))
            .unwrap_or_default();

        let role = match decl.role {
            ControlRole::Slider => Cell::new(decl.role).fg(Color::Green),
            ControlRole::Select => Cell::new(decl.role),
        };

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&decl.storage_key).add_attribute(Attribute::Bold),
            Cell::new(&decl.key),
            Cell::new(&decl.label),
            role,
            Cell::new(decl.serializer),
            Cell::new(decl.choices.len()),
            Cell::new(initial),
        ]);
    }

    for i in [0, 6] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{}", table);
}

pub fn print_language_report(generation: Generation, languages: &[ResolvedLanguage]) {
    println!(
        "\nGeneration {}: {} languages",
        generation,
        languages.len()
    );

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(vec![
        Cell::new("Display Name").add_attribute(Attribute::Bold),
        Cell::new("Code"),
        Cell::new("English"),
        Cell::new("Script"),
        Cell::new("Index"),
    ]);

    for lang in languages {
        table.add_row(vec![
            Cell::new(&lang.display_name),
            Cell::new(lang.entry.code),
            Cell::new(lang.entry.english_name),
            Cell::new(lang.entry.script),
            Cell::new(lang.entry.index).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}
