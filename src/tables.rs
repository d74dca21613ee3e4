use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{MIN_ACCURATE_SOC_DELTA, MeasurementInput, SohResult, StatusTier},
    quantity::percentage::Percentage,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

pub fn build_result_table(input: &MeasurementInput, result: &SohResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Value"]);
    table.add_row(vec![
        Cell::new("Delivery capacity"),
        Cell::new(input.delivery_capacity()).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Trip distance"),
        Cell::new(input.trip_distance()).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Average consumption"),
        Cell::new(input.avg_consumption()).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("SoC window"),
        Cell::new(format!("{} → {}", input.soc_start(), input.soc_end()))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("SoC difference"),
        Cell::new(result.soc_delta).set_alignment(CellAlignment::Right).fg(
            if result.soc_delta < MIN_ACCURATE_SOC_DELTA { Color::DarkYellow } else { Color::Reset },
        ),
    ]);
    table.add_row(vec![
        Cell::new("Consumed energy").add_attribute(Attribute::Dim),
        Cell::new(result.consumed_energy)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Current capacity"),
        Cell::new(result.current_capacity).set_alignment(CellAlignment::Right),
    ]);
    add_status_rows(&mut table, result.soh, result.status);
    table
}

pub fn build_status_table(soh: Percentage, status: StatusTier) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Value"]);
    add_status_rows(&mut table, soh, status);
    table
}

fn add_status_rows(table: &mut Table, soh: Percentage, status: StatusTier) {
    table.add_row(vec![
        Cell::new("State of health").add_attribute(Attribute::Bold),
        Cell::new(soh)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(status.color()),
    ]);
    table.add_row(vec![Cell::new("Status"), Cell::new(status).fg(status.color())]);
}
