//! Itinerary renderer
//!
//! Pure derivations from a validated TripItinerary: a map view (focal
//! point, bounding region, colored annotated markers) and an ordered daily
//! breakdown. No network, no mutation of the input, no coordinate
//! plausibility checks - out-of-range values pass straight through to the
//! UI layer.

use serde::Serialize;
use tracing::debug;

use crate::itinerary::TripItinerary;

/// Marker colors cycled per day, in day order
///
/// Named colors a mapping layer understands directly; picked to stay
/// visually distinct across adjacent days.
pub const DAY_PALETTE: [&str; 19] = [
    "red",
    "blue",
    "green",
    "purple",
    "orange",
    "darkred",
    "lightred",
    "beige",
    "darkblue",
    "darkgreen",
    "cadetblue",
    "darkpurple",
    "white",
    "pink",
    "lightblue",
    "lightgreen",
    "gray",
    "black",
    "lightgray",
];

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Minimal rectangle enclosing a set of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// One annotated map marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Where the marker sits (passed through unvalidated)
    pub position: LatLng,

    /// Color assigned to the marker's day
    pub color: &'static str,

    /// Short hover text: day number + activity name
    pub tooltip: String,

    /// Richer click payload: name, day + time label, cost estimate
    pub popup: MarkerPopup,
}

/// Structured popup content for one marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPopup {
    pub name: String,
    pub day: u32,
    pub time: String,
    pub cost_estimate: String,
}

/// Everything a UI layer needs to draw the multi-day map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// Initial focal point: the first activity of the first day
    pub center: LatLng,

    /// Fit-all rectangle over every activity coordinate
    pub bounds: BoundingBox,

    /// Markers in itinerary order
    pub markers: Vec<Marker>,
}

/// One day of the textual breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySection {
    pub day: u32,
    pub theme: String,
    pub entries: Vec<DayEntry>,
}

/// One activity line within a day section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEntry {
    pub time: String,
    pub name: String,
    pub cost_estimate: String,
    pub description: String,
}

/// Color for a day number, cycling the fixed palette by modulo
pub fn color_for_day(day: u32) -> &'static str {
    DAY_PALETTE[(day.saturating_sub(1) as usize) % DAY_PALETTE.len()]
}

/// Derive the map view for an itinerary
///
/// Returns `None` when no activity carries coordinates to place - a "nothing
/// to render" signal, not an error.
pub fn compute_map_view(trip: &TripItinerary) -> Option<MapView> {
    debug!(days = trip.itinerary.len(), "compute_map_view: called");

    let mut coords = Vec::new();
    for day in &trip.itinerary {
        for activity in &day.activities {
            coords.push(LatLng {
                lat: activity.latitude,
                lng: activity.longitude,
            });
        }
    }

    let first = match coords.first() {
        Some(c) => *c,
        None => {
            debug!("compute_map_view: no coordinates to render");
            return None;
        }
    };

    let mut bounds = BoundingBox {
        south: first.lat,
        west: first.lng,
        north: first.lat,
        east: first.lng,
    };
    for c in &coords[1..] {
        bounds.south = bounds.south.min(c.lat);
        bounds.north = bounds.north.max(c.lat);
        bounds.west = bounds.west.min(c.lng);
        bounds.east = bounds.east.max(c.lng);
    }

    let mut markers = Vec::with_capacity(coords.len());
    for day in &trip.itinerary {
        let color = color_for_day(day.day);
        for activity in &day.activities {
            markers.push(Marker {
                position: LatLng {
                    lat: activity.latitude,
                    lng: activity.longitude,
                },
                color,
                tooltip: format!("Day {}: {}", day.day, activity.name),
                popup: MarkerPopup {
                    name: activity.name.clone(),
                    day: day.day,
                    time: activity.time.clone(),
                    cost_estimate: activity.cost_estimate.clone(),
                },
            });
        }
    }

    debug!(markers = markers.len(), "compute_map_view: done");
    Some(MapView {
        center: first,
        bounds,
        markers,
    })
}

/// Restructure the itinerary into ordered day sections
///
/// Pure reshaping: every day and every activity appears exactly once, in
/// itinerary order. No filtering, sorting, or truncation.
pub fn compute_daily_breakdown(trip: &TripItinerary) -> Vec<DaySection> {
    debug!(days = trip.itinerary.len(), "compute_daily_breakdown: called");

    trip.itinerary
        .iter()
        .map(|day| DaySection {
            day: day.day,
            theme: day.theme.clone(),
            entries: day
                .activities
                .iter()
                .map(|activity| DayEntry {
                    time: activity.time.clone(),
                    name: activity.name.clone(),
                    cost_estimate: activity.cost_estimate.clone(),
                    description: activity.description.clone(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::{Activity, DailyPlan};

    fn activity(name: &str, lat: f64, lng: f64) -> Activity {
        Activity {
            name: name.to_string(),
            time: "Morning 09:00 AM".to_string(),
            description: format!("{} description", name),
            cost_estimate: "Free".to_string(),
            latitude: lat,
            longitude: lng,
        }
    }

    fn trip(days: Vec<DailyPlan>) -> TripItinerary {
        TripItinerary {
            destination: "Testville".to_string(),
            total_estimated_cost: "$0".to_string(),
            budget_tips: vec!["stay home".to_string()],
            itinerary: days,
        }
    }

    #[test]
    fn test_empty_itinerary_has_no_map_view() {
        let empty = trip(vec![DailyPlan {
            day: 1,
            theme: "Nothing planned".to_string(),
            activities: vec![],
        }]);

        assert!(compute_map_view(&empty).is_none());
    }

    #[test]
    fn test_center_is_first_activity_of_first_day() {
        let t = trip(vec![
            DailyPlan {
                day: 1,
                theme: "A".to_string(),
                activities: vec![activity("start", 48.85, 2.35), activity("next", 48.86, 2.34)],
            },
            DailyPlan {
                day: 2,
                theme: "B".to_string(),
                activities: vec![activity("elsewhere", 41.90, 12.49)],
            },
        ]);

        let view = compute_map_view(&t).unwrap();

        assert_eq!(view.center, LatLng { lat: 48.85, lng: 2.35 });
    }

    #[test]
    fn test_bounds_enclose_every_coordinate() {
        let t = trip(vec![DailyPlan {
            day: 1,
            theme: "Scattered".to_string(),
            activities: vec![
                activity("nw", 52.0, -1.0),
                activity("se", 40.0, 14.0),
                activity("mid", 45.0, 5.0),
            ],
        }]);

        let view = compute_map_view(&t).unwrap();

        assert_eq!(view.bounds.south, 40.0);
        assert_eq!(view.bounds.north, 52.0);
        assert_eq!(view.bounds.west, -1.0);
        assert_eq!(view.bounds.east, 14.0);
    }

    #[test]
    fn test_color_cycles_by_modulo() {
        // 19-entry palette: day 20 wraps back to index 0
        assert_eq!(color_for_day(1), DAY_PALETTE[0]);
        assert_eq!(color_for_day(19), DAY_PALETTE[18]);
        assert_eq!(color_for_day(20), DAY_PALETTE[0]);
        // Deterministic across calls
        assert_eq!(color_for_day(17), color_for_day(17));
    }

    #[test]
    fn test_markers_carry_day_color_and_annotations() {
        let t = trip(vec![
            DailyPlan {
                day: 1,
                theme: "A".to_string(),
                activities: vec![activity("Museum", 48.85, 2.35)],
            },
            DailyPlan {
                day: 2,
                theme: "B".to_string(),
                activities: vec![activity("Market", 48.86, 2.36)],
            },
        ]);

        let view = compute_map_view(&t).unwrap();

        assert_eq!(view.markers.len(), 2);
        assert_eq!(view.markers[0].color, color_for_day(1));
        assert_eq!(view.markers[1].color, color_for_day(2));
        assert_eq!(view.markers[1].tooltip, "Day 2: Market");
        assert_eq!(view.markers[0].popup.name, "Museum");
        assert_eq!(view.markers[0].popup.time, "Morning 09:00 AM");
        assert_eq!(view.markers[0].popup.cost_estimate, "Free");
    }

    #[test]
    fn test_out_of_range_coordinates_pass_through() {
        // The renderer annotates, it does not validate geography
        let t = trip(vec![DailyPlan {
            day: 1,
            theme: "Nowhere".to_string(),
            activities: vec![activity("off the map", 123.0, -500.0)],
        }]);

        let view = compute_map_view(&t).unwrap();

        assert_eq!(view.markers[0].position, LatLng { lat: 123.0, lng: -500.0 });
        assert_eq!(view.markers[0].tooltip, "Day 1: off the map");
    }

    #[test]
    fn test_breakdown_preserves_order_and_content() {
        let t = trip(vec![
            DailyPlan {
                day: 1,
                theme: "First".to_string(),
                activities: vec![activity("a", 0.0, 0.0), activity("b", 1.0, 1.0)],
            },
            DailyPlan {
                day: 2,
                theme: "Second".to_string(),
                activities: vec![activity("c", 2.0, 2.0)],
            },
        ]);

        let sections = compute_daily_breakdown(&t);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].day, 1);
        assert_eq!(sections[0].theme, "First");
        assert_eq!(
            sections[0].entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(sections[1].entries[0].description, "c description");
    }

    #[test]
    fn test_breakdown_of_empty_itinerary_is_empty() {
        let t = trip(vec![]);
        assert!(compute_daily_breakdown(&t).is_empty());
    }
}
