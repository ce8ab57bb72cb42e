//! Display data extracted from events and venues
//!
//! These are the values a presenter needs; markup is left to the caller.

use crate::constants::api::GOOGLE_MAPS_SEARCH_URL;
use crate::events::model::{Event, Image, Venue};
use serde::Serialize;

const NOT_AVAILABLE: &str = "N/A";

/// Icons narrower than this are only used as a last resort
const MIN_ICON_WIDTH: u32 = 60;

/// Sort key for images without a usable width
const UNKNOWN_WIDTH: u32 = 9999;

/// One row of the results table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRow {
    pub date: String,
    pub icon: String,
    pub name: String,
    pub id: Option<String>,
    pub genre: String,
    pub venue: String,
}

impl EventRow {
    pub fn from_event(event: &Event) -> Self {
        Self {
            date: event_date(event),
            icon: pick_icon(&event.images),
            name: non_empty(event.name.as_deref()).unwrap_or(NOT_AVAILABLE).to_string(),
            id: event.id.clone(),
            genre: event
                .first_classification()
                .and_then(|c| c.segment.as_ref())
                .and_then(|s| non_empty(s.name.as_deref()))
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            venue: event
                .first_venue()
                .and_then(|v| non_empty(v.name.as_deref()))
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
        }
    }
}

/// Local date and time joined by a space, skipping missing parts
pub fn event_date(event: &Event) -> String {
    let Some(start) = event.start() else {
        return String::new();
    };
    join_present([start.local_date.as_deref(), start.local_time.as_deref()], " ")
}

/// Choose the row icon
///
/// Images are ordered by width (unknown widths last); the first one at least
/// 60px wide wins, falling back to the narrowest.
pub fn pick_icon(images: &[Image]) -> String {
    let mut sorted: Vec<&Image> = images.iter().collect();
    sorted.sort_by_key(|img| known_width(img).unwrap_or(UNKNOWN_WIDTH));

    sorted
        .iter()
        .find(|img| known_width(img).unwrap_or(0) >= MIN_ICON_WIDTH)
        .or_else(|| sorted.first())
        .and_then(|img| img.url.clone())
        .unwrap_or_default()
}

/// A link with display text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub name: String,
    pub url: Option<String>,
}

/// Ticket status with its badge colour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketStatus {
    pub code: String,
    pub color: &'static str,
}

impl TicketStatus {
    pub fn new(code: &str) -> Self {
        let color = match code.to_lowercase().as_str() {
            "onsale" => "#2e7d32",
            "offsale" => "#d32f2f",
            "cancelled" | "canceled" => "#000",
            "postponed" | "rescheduled" => "#ef6c00",
            _ => "#555",
        };
        Self {
            code: code.to_string(),
            color,
        }
    }
}

/// Event detail card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDetails {
    pub title: String,
    pub date: String,
    pub attractions: Vec<Link>,
    pub venue: String,
    pub genre: String,
    pub price: String,
    pub status: Option<TicketStatus>,
    pub buy_url: String,
    pub seatmap_url: String,
}

impl EventDetails {
    pub fn from_event(event: &Event) -> Self {
        let genre = event
            .first_classification()
            .map(|c| {
                let levels = [
                    c.sub_genre.as_ref(),
                    c.genre.as_ref(),
                    c.segment.as_ref(),
                    c.sub_type.as_ref(),
                    c.kind.as_ref(),
                ];
                join_present(
                    levels
                        .into_iter()
                        .map(|level| level.and_then(|n| n.name.as_deref())),
                    " | ",
                )
            })
            .unwrap_or_default();

        let price = event
            .price_ranges
            .first()
            .map(|pr| format!("{} - {}", fmt_price(pr.min), fmt_price(pr.max)))
            .unwrap_or_default();

        Self {
            title: non_empty(event.name.as_deref())
                .unwrap_or("Event Details")
                .to_string(),
            date: event_date(event),
            attractions: event
                .attractions()
                .iter()
                .map(|a| Link {
                    name: a.name.clone().unwrap_or_default(),
                    url: a.url.clone(),
                })
                .collect(),
            venue: event
                .first_venue()
                .and_then(|v| v.name.clone())
                .unwrap_or_default(),
            genre,
            price,
            status: non_empty(event.status_code()).map(TicketStatus::new),
            buy_url: event.url.clone().unwrap_or_default(),
            seatmap_url: event
                .seatmap
                .as_ref()
                .and_then(|s| s.static_url.clone())
                .unwrap_or_default(),
        }
    }

    /// Venue to offer for the venue-detail lookup, if any
    pub fn venue_name(&self) -> Option<&str> {
        non_empty(Some(self.venue.as_str()))
    }

    /// Labelled rows for every field that has a value
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let attractions = self
            .attractions
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(" | ");

        let candidates = [
            ("Date", self.date.clone()),
            ("Artist/Team", attractions),
            ("Venue", self.venue.clone()),
            ("Genre", self.genre.clone()),
            ("Price Ranges", self.price.clone()),
            (
                "Ticket Status",
                self.status.as_ref().map(|s| s.code.clone()).unwrap_or_default(),
            ),
            ("Buy Ticket At", self.buy_url.clone()),
        ];

        candidates
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}

/// Venue detail card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetails {
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub url: Option<String>,
    pub logo: Option<String>,
    pub maps_url: String,
}

impl VenueDetails {
    pub fn from_venue(venue: &Venue) -> Self {
        let city_name = venue.city.as_ref().and_then(|c| non_empty(c.name.as_deref()));
        let state_code = venue
            .state
            .as_ref()
            .and_then(|s| non_empty(s.state_code.as_deref()));
        let line1 = venue.address.as_ref().and_then(|a| non_empty(a.line1.as_deref()));
        let postal_code = non_empty(venue.postal_code.as_deref());
        let name = non_empty(venue.name.as_deref());

        let city = match city_name {
            Some(city) => format!("{}, {}", city, state_code.unwrap_or(""))
                .trim()
                .to_string(),
            None => NOT_AVAILABLE.to_string(),
        };

        let full_address = join_present([name, line1, city_name, state_code, postal_code], ", ");

        let logo = venue
            .images
            .iter()
            .min_by_key(|img| img.width.unwrap_or(0))
            .and_then(|img| non_empty(img.url.as_deref()))
            .map(str::to_string);

        Self {
            name: name.unwrap_or(NOT_AVAILABLE).to_string(),
            address: line1.unwrap_or(NOT_AVAILABLE).to_string(),
            city,
            postal_code: postal_code.unwrap_or(NOT_AVAILABLE).to_string(),
            url: non_empty(venue.url.as_deref()).map(str::to_string),
            logo,
            maps_url: format!(
                "{}{}",
                GOOGLE_MAPS_SEARCH_URL,
                urlencoding::encode(&full_address)
            ),
        }
    }
}

fn known_width(img: &Image) -> Option<u32> {
    img.width.filter(|w| *w > 0)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn join_present<'a>(parts: impl IntoIterator<Item = Option<&'a str>>, sep: &str) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

fn fmt_price(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(json: serde_json::Value) -> Event {
        serde_json::from_value(json).unwrap()
    }

    fn image(width: Option<u32>, url: &str) -> Image {
        Image {
            width,
            url: Some(url.to_string()),
        }
    }

    #[test]
    fn test_row_from_full_event() {
        let row = EventRow::from_event(&event(serde_json::json!({
            "id": "abc",
            "name": "Lakers vs Celtics",
            "dates": {"start": {"localDate": "2025-11-02", "localTime": "19:30:00"}},
            "classifications": [{"segment": {"name": "Sports"}}],
            "_embedded": {"venues": [{"name": "Crypto.com Arena"}]}
        })));

        assert_eq!(row.date, "2025-11-02 19:30:00");
        assert_eq!(row.name, "Lakers vs Celtics");
        assert_eq!(row.id.as_deref(), Some("abc"));
        assert_eq!(row.genre, "Sports");
        assert_eq!(row.venue, "Crypto.com Arena");
        assert_eq!(row.icon, "");
    }

    #[test]
    fn test_row_placeholders() {
        let row = EventRow::from_event(&event(serde_json::json!({
            "dates": {"start": {"localDate": "2025-11-02"}}
        })));

        assert_eq!(row.date, "2025-11-02");
        assert_eq!(row.name, "N/A");
        assert_eq!(row.genre, "N/A");
        assert_eq!(row.venue, "N/A");
        assert_eq!(row.id, None);
    }

    #[test]
    fn test_pick_icon_prefers_smallest_wide_enough() {
        let images = vec![
            image(Some(1024), "large"),
            image(Some(50), "tiny"),
            image(Some(100), "medium"),
        ];
        assert_eq!(pick_icon(&images), "medium");
    }

    #[test]
    fn test_pick_icon_falls_back_to_narrowest() {
        let images = vec![image(Some(40), "forty"), image(Some(20), "twenty")];
        assert_eq!(pick_icon(&images), "twenty");
    }

    #[test]
    fn test_pick_icon_unknown_width_sorts_last() {
        let images = vec![image(None, "unknown"), image(Some(0), "zero"), image(Some(640), "wide")];
        assert_eq!(pick_icon(&images), "wide");
        assert_eq!(pick_icon(&[]), "");
    }

    #[test]
    fn test_event_details() {
        let details = EventDetails::from_event(&event(serde_json::json!({
            "name": "Jazz Night",
            "url": "https://tickets/jazz",
            "dates": {
                "start": {"localDate": "2025-12-01", "localTime": "20:00:00"},
                "status": {"code": "onsale"}
            },
            "classifications": [{
                "segment": {"name": "Music"},
                "genre": {"name": "Jazz"},
                "subGenre": {"name": "Bebop"},
                "type": {"name": "Undefined"}
            }],
            "priceRanges": [{"min": 25.5, "max": 80}],
            "seatmap": {"staticUrl": "https://seat/jazz.png"},
            "_embedded": {
                "venues": [{"name": "Blue Note"}],
                "attractions": [{"name": "Trio A", "url": "https://a"}, {"name": "Trio B"}]
            }
        })));

        assert_eq!(details.title, "Jazz Night");
        assert_eq!(details.genre, "Bebop | Jazz | Music | Undefined");
        assert_eq!(details.price, "25.5 - 80");
        assert_eq!(details.status.as_ref().unwrap().color, "#2e7d32");
        assert_eq!(details.venue_name(), Some("Blue Note"));

        let rows = details.rows();
        let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["Date", "Artist/Team", "Venue", "Genre", "Price Ranges", "Ticket Status", "Buy Ticket At"]
        );
        assert_eq!(rows[1].1, "Trio A | Trio B");
    }

    #[test]
    fn test_event_details_sparse() {
        let details = EventDetails::from_event(&Event::default());

        assert_eq!(details.title, "Event Details");
        assert!(details.rows().is_empty());
        assert_eq!(details.venue_name(), None);
        assert_eq!(details.status, None);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(TicketStatus::new("offsale").color, "#d32f2f");
        assert_eq!(TicketStatus::new("Canceled").color, "#000");
        assert_eq!(TicketStatus::new("rescheduled").color, "#ef6c00");
        assert_eq!(TicketStatus::new("mystery").color, "#555");
    }

    #[test]
    fn test_venue_details() {
        let venue: Venue = serde_json::from_value(serde_json::json!({
            "name": "Hollywood Bowl",
            "url": "https://venue/bowl",
            "address": {"line1": "2301 N Highland Ave"},
            "city": {"name": "Los Angeles"},
            "state": {"stateCode": "CA"},
            "postalCode": "90068",
            "images": [{"width": 300, "url": "big"}, {"width": 100, "url": "small"}]
        }))
        .unwrap();

        let details = VenueDetails::from_venue(&venue);
        assert_eq!(details.name, "Hollywood Bowl");
        assert_eq!(details.address, "2301 N Highland Ave");
        assert_eq!(details.city, "Los Angeles, CA");
        assert_eq!(details.postal_code, "90068");
        assert_eq!(details.logo.as_deref(), Some("small"));
        assert_eq!(
            details.maps_url,
            "https://www.google.com/maps/search/?api=1&query=Hollywood%20Bowl%2C%202301%20N%20Highland%20Ave%2C%20Los%20Angeles%2C%20CA%2C%2090068"
        );
    }

    #[test]
    fn test_venue_details_placeholders() {
        let details = VenueDetails::from_venue(&Venue::default());

        assert_eq!(details.name, "N/A");
        assert_eq!(details.address, "N/A");
        assert_eq!(details.city, "N/A");
        assert_eq!(details.postal_code, "N/A");
        assert_eq!(details.url, None);
        assert_eq!(details.logo, None);
    }
}
