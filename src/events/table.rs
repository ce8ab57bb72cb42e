//! Client-side results table sorting

use crate::events::model::SearchResponse;
use crate::events::view::EventRow;
use serde::Serialize;
use std::cmp::Ordering;

/// Results table columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    Icon,
    Event,
    Genre,
    Venue,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Date,
        Column::Icon,
        Column::Event,
        Column::Genre,
        Column::Venue,
    ];

    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Icon => "Icon",
            Column::Event => "Event",
            Column::Genre => "Genre",
            Column::Venue => "Venue",
        }
    }

    /// Parse a column by header name or index
    pub fn parse(value: &str) -> Option<Column> {
        if let Ok(index) = value.trim().parse::<usize>() {
            return Self::from_index(index);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.header().eq_ignore_ascii_case(value.trim()))
    }

    /// The text a row shows in this column
    pub fn text(self, row: &EventRow) -> &str {
        match self {
            Column::Date => &row.date,
            // The icon cell holds an image, no text
            Column::Icon => "",
            Column::Event => &row.name,
            Column::Genre => &row.genre,
            Column::Venue => &row.venue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The rendered result rows plus per-column sort state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultTable {
    rows: Vec<EventRow>,
    #[serde(skip)]
    ascending: [bool; 5],
}

impl ResultTable {
    pub fn new(rows: Vec<EventRow>) -> Self {
        Self {
            rows,
            ascending: [false; 5],
        }
    }

    /// Build the table from the first `max_rows` events, in received order
    pub fn from_response(response: &SearchResponse, max_rows: usize) -> Self {
        Self::new(
            response
                .events()
                .iter()
                .take(max_rows)
                .map(EventRow::from_event)
                .collect(),
        )
    }

    pub fn rows(&self) -> &[EventRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Re-sort the rows by `column`, toggling that column's direction
    ///
    /// The first sort of a column is ascending. Comparison is on the
    /// trimmed, lowercased cell text with no secondary key.
    pub fn sort_by(&mut self, column: Column) -> SortDirection {
        let ascending = !self.ascending[column.index()];

        self.rows.sort_by(|a, b| {
            let a = column.text(a).trim().to_lowercase();
            let b = column.text(b).trim().to_lowercase();
            let order: Ordering = a.cmp(&b);
            if ascending {
                order
            } else {
                order.reverse()
            }
        });

        self.ascending[column.index()] = ascending;

        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, venue: &str) -> EventRow {
        EventRow {
            date: String::new(),
            icon: String::new(),
            name: name.to_string(),
            id: None,
            genre: "Music".to_string(),
            venue: venue.to_string(),
        }
    }

    fn names(table: &ResultTable) -> Vec<&str> {
        table.rows().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_column_lookup() {
        assert_eq!(Column::from_index(2), Some(Column::Event));
        assert_eq!(Column::from_index(5), None);
        assert_eq!(Column::parse("venue"), Some(Column::Venue));
        assert_eq!(Column::parse("0"), Some(Column::Date));
        assert_eq!(Column::parse("price"), None);
    }

    #[test]
    fn test_sort_toggles_direction() {
        let mut table = ResultTable::new(vec![
            row("banana", "x"),
            row("Apple", "y"),
            row("cherry", "z"),
        ]);

        assert_eq!(table.sort_by(Column::Event), SortDirection::Ascending);
        assert_eq!(names(&table), vec!["Apple", "banana", "cherry"]);

        assert_eq!(table.sort_by(Column::Event), SortDirection::Descending);
        assert_eq!(names(&table), vec!["cherry", "banana", "Apple"]);

        assert_eq!(table.sort_by(Column::Event), SortDirection::Ascending);
        assert_eq!(names(&table), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_directions_are_per_column() {
        let mut table = ResultTable::new(vec![row("b", "Zed"), row("a", "alpha")]);

        table.sort_by(Column::Event);
        assert_eq!(table.sort_by(Column::Venue), SortDirection::Ascending);
        assert_eq!(names(&table), vec!["a", "b"]);
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let mut table = ResultTable::new(vec![row("  zebra", "v"), row("ZOO", "v"), row("Ant ", "v")]);

        table.sort_by(Column::Event);
        assert_eq!(names(&table), vec!["Ant ", "  zebra", "ZOO"]);
    }

    #[test]
    fn test_from_response_caps_rows_in_order() {
        let events: Vec<_> = (0..25)
            .map(|i| serde_json::json!({"id": format!("e{}", i), "name": format!("Event {}", i)}))
            .collect();
        let response: SearchResponse =
            serde_json::from_value(serde_json::json!({"_embedded": {"events": events}})).unwrap();

        let table = ResultTable::from_response(&response, 20);
        assert_eq!(table.len(), 20);
        assert_eq!(table.rows()[0].name, "Event 0");
        assert_eq!(table.rows()[19].name, "Event 19");
    }

    #[test]
    fn test_from_empty_response() {
        let table = ResultTable::from_response(&SearchResponse::default(), 20);
        assert!(table.is_empty());
    }
}
