use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use base16_cli::types::{GenerateResult, SchemeOverview};
use base16_model::{Base, Rgb};

pub fn print_generate(result: &GenerateResult) {
    if result.written {
        println!("Generated SCSS: {}", result.output.display());
    } else {
        print!("{}", result.document);
    }
}

pub fn print_colors(overview: &SchemeOverview) {
    println!("Scheme: {}", overview.name);
    println!("Author: {}", overview.author);
    println!(
        "Variant: {} (background luminance {:.4})",
        overview.variant, overview.background_luminance
    );
    println!("{}", colors_table(&overview.colors));
}

fn colors_table(colors: &[(Base, Rgb)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Slot"),
        header_cell("Hex"),
        header_cell("Swatch"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for (base, color) in colors {
        table.add_row(vec![
            Cell::new(base.as_str()).add_attribute(Attribute::Bold),
            Cell::new(color),
            swatch_cell(*color),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn swatch_cell(color: Rgb) -> Cell {
    let [r, g, b] = color.channels();
    Cell::new("      ").bg(Color::Rgb { r, g, b })
}
