use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::listing::{ListingConfig, Record};

/// Filter buttons of the activities page, after the "all" option.
pub const ACTIVITY_FILTERS: &[(&str, &str)] = &[
    ("courses", "Tečajevi"),
    ("events", "Događaji"),
    ("excursions", "Izleti"),
    ("social", "Društveni"),
    ("cultural", "Kulturni"),
];

pub const ACTIVITY_ALL_LABEL: &str = "Sve";

/// A standing programme of the association (language courses, trips, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(deserialize_with = "crate::serde::deserialize_id")]
    pub id: String,
    pub title: String,
    /// Filter key, one of the values in [`ACTIVITY_FILTERS`].
    #[serde(rename = "type")]
    pub kind: String,
    /// Display label of the activity group.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl Activity {
    /// Listing setup of the activities page.
    pub fn listing_config() -> ListingConfig {
        ListingConfig::new("type", ["title", "description"])
    }
}

impl Record for Activity {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.id.as_str())
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "id" => &self.id,
            "title" => &self.title,
            "type" => &self.kind,
            "category" => &self.category,
            "description" => &self.description,
            _ => return None,
        };
        Some(Cow::Borrowed(value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{facet_counts, filter_options, query, FilterState};

    fn activities() -> Vec<Activity> {
        serde_json::from_str(
            r#"[
                {"id": 1, "title": "Tečajevi njemačkog jezika", "type": "courses", "category": "Tečajevi jezika", "description": "Nastava za sve razine"},
                {"id": 2, "title": "Kulturni događaji i izložbe", "type": "events", "category": "Događaji", "description": "Izložbe, koncerti i predavanja"},
                {"id": 3, "title": "Izleti i putovanja", "type": "excursions", "category": "Izleti", "description": "Berlin, Sinj, Brač, Makarska"},
                {"id": 4, "title": "Društvena okupljanja", "type": "social", "category": "Društveni događaji", "description": "Druženja s prijateljima iz Berlina"},
                {"id": 5, "title": "Međunarodna suradnja", "type": "cultural", "category": "Kultura", "description": "Partnerstva"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_activity_filter_options_count_each_type() {
        let facets = facet_counts(&activities(), "type");
        let options = filter_options(&facets, ACTIVITY_ALL_LABEL, ACTIVITY_FILTERS);

        assert_eq!(options.len(), 6);
        assert_eq!(options[0].count, 5);
        assert!(options[1..].iter().all(|o| o.count == 1));
    }

    #[test]
    fn test_activity_search_matches_description() {
        let activities = activities();
        let page = query(
            &activities,
            &Activity::listing_config(),
            &FilterState::new().search("BERLIN"),
        );

        let ids: Vec<&str> = page.visible.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4"]);
    }

    #[test]
    fn test_activity_type_round_trips_as_type() {
        let activity = &activities()[0];
        let json = serde_json::to_value(activity).unwrap();
        assert_eq!(json["type"], "courses");
        assert_eq!(activity.field("type").as_deref(), Some("courses"));
    }
}
