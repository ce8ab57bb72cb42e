//! Human-readable text output formatter

use crate::error::Result;
use crate::events::{Column, EventDetails, ResultTable, VenueDetails};
use crate::format::OutputFormatter;
use crate::request::Notice;

/// Columns printed in text mode (the icon column holds an image)
const TEXT_COLUMNS: [Column; 4] = [Column::Date, Column::Event, Column::Genre, Column::Venue];

/// Text formatter - outputs aligned tables and labelled cards
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn table(&self, table: &ResultTable) -> Result<String> {
        let mut widths: Vec<usize> = TEXT_COLUMNS.iter().map(|c| c.header().len()).collect();
        for row in table.rows() {
            for (width, column) in widths.iter_mut().zip(TEXT_COLUMNS) {
                *width = (*width).max(column.text(row).chars().count());
            }
        }

        let mut output = String::new();
        let header: Vec<&str> = TEXT_COLUMNS.iter().map(|c| c.header()).collect();
        push_line(&mut output, "#", &header, &widths);

        for (index, row) in table.rows().iter().enumerate() {
            let cells: Vec<&str> = TEXT_COLUMNS.iter().map(|c| c.text(row)).collect();
            push_line(&mut output, &(index + 1).to_string(), &cells, &widths);
        }

        output.push_str(&format!("\n{} result(s)\n", table.len()));
        Ok(output)
    }

    fn event(&self, details: &EventDetails) -> Result<String> {
        let mut output = format!("{}\n", details.title);
        output.push_str(&"=".repeat(details.title.chars().count()));
        output.push('\n');

        for (label, value) in details.rows() {
            output.push_str(&format!("{}: {}\n", label, value));
        }
        if !details.seatmap_url.is_empty() {
            output.push_str(&format!("Seat Map: {}\n", details.seatmap_url));
        }

        Ok(output)
    }

    fn venue(&self, details: &VenueDetails) -> Result<String> {
        let mut output = format!("{}\n", details.name);
        output.push_str(&"=".repeat(details.name.chars().count()));
        output.push('\n');

        output.push_str(&format!("Address: {}\n", details.address));
        output.push_str(&format!("City: {}\n", details.city));
        output.push_str(&format!("Postal Code: {}\n", details.postal_code));
        if let Some(url) = &details.url {
            output.push_str(&format!("More events: {}\n", url));
        }
        output.push_str(&format!("Map: {}\n", details.maps_url));

        Ok(output)
    }

    fn notice(&self, notice: Notice) -> Result<String> {
        Ok(format!("{}\n", notice.message()))
    }
}

fn push_line(output: &mut String, index: &str, cells: &[&str], widths: &[usize]) {
    output.push_str(&format!("{:>3}", index));
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width.saturating_sub(cell.chars().count());
        output.push_str("  ");
        output.push_str(cell);
        output.push_str(&" ".repeat(pad));
    }
    let trimmed = output.trim_end().len();
    output.truncate(trimmed);
    output.push('\n');
}
