//! Wire types for the static JSON documents.
//!
//! The site ships two read-only documents, `data/states.json` and
//! `data/itineraries.json`, authored out-of-band. Everything here is
//! loaded fresh on each page view; nothing is mutated at runtime.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// State Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub name: String,
    /// URL-safe lowercase identifier, unique across the document.
    pub slug: String,
    pub vibe: String,
    #[serde(default)]
    pub hero_query: Option<String>,
    #[serde(default)]
    pub places: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub has_detail_page: bool,
}

impl State {
    /// Search query used to seed the hero fallback image.
    pub fn hero_search_query(&self) -> &str {
        self.hero_query.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatesDoc {
    pub states: Vec<State>,
}

impl StatesDoc {
    pub fn find_state(&self, slug: &str) -> Option<&State> {
        self.states.iter().find(|s| s.slug == slug)
    }

    /// Structural checks on the authored document. Returns human-readable
    /// issues; an empty list means the document is well-formed.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        for state in &self.states {
            if state.name.is_empty() {
                issues.push(format!("state '{}' has an empty name", state.slug));
            }
            if state.slug.is_empty() {
                issues.push(format!("state '{}' has an empty slug", state.name));
            }
            if !seen.insert(state.slug.as_str()) {
                issues.push(format!("duplicate state slug '{}'", state.slug));
            }
        }
        issues
    }
}

// ============================================================================
// Itinerary Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Unique identifier, e.g. `kerala-5-days`.
    pub id: String,
    /// Slug of the parent state.
    pub state: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub duration_days: u32,
    #[serde(default)]
    pub best_time: String,
    /// Ordered place names; always at least origin and destination.
    pub route: Vec<String>,
    #[serde(default)]
    pub general_tips: Vec<String>,
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// Display label, e.g. "Day 3 — Alleppey Backwaters".
    pub day: String,
    pub theme: String,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub drive_time: String,
    #[serde(default)]
    pub must_see: Vec<String>,
    #[serde(default)]
    pub optional: Vec<String>,
    #[serde(default)]
    pub gallery_queries: Vec<String>,
    #[serde(default)]
    pub food: Option<String>,
    #[serde(default)]
    pub hotels: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub interesting_facts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItinerariesDoc {
    pub itineraries: Vec<Itinerary>,
}

impl ItinerariesDoc {
    pub fn find_itinerary(&self, id: &str) -> Option<&Itinerary> {
        self.itineraries.iter().find(|it| it.id == id)
    }

    pub fn itineraries_for_state<'a>(&'a self, slug: &str) -> Vec<&'a Itinerary> {
        self.itineraries
            .iter()
            .filter(|it| it.state == slug)
            .collect()
    }

    /// Structural checks: unique ids, route length, day count, and
    /// referential integrity against the states document.
    pub fn validate(&self, states: &StatesDoc) -> Vec<String> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        for it in &self.itineraries {
            if !seen.insert(it.id.as_str()) {
                issues.push(format!("duplicate itinerary id '{}'", it.id));
            }
            if states.find_state(&it.state).is_none() {
                issues.push(format!(
                    "itinerary '{}' references unknown state '{}'",
                    it.id, it.state
                ));
            }
            if it.route.len() < 2 {
                issues.push(format!(
                    "itinerary '{}' has a route with fewer than 2 places",
                    it.id
                ));
            }
            if it.days.is_empty() {
                issues.push(format!("itinerary '{}' has no days", it.id));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_states() -> StatesDoc {
        serde_json::from_str(
            r#"{
                "states": [
                    {
                        "name": "Kerala",
                        "slug": "kerala",
                        "vibe": "Backwaters & beaches",
                        "heroQuery": "kerala backwaters",
                        "places": ["Alleppey", "Munnar", "Kochi", "Varkala", "Kovalam"],
                        "themes": ["Beach", "Nature"],
                        "hasDetailPage": true
                    },
                    {
                        "name": "Goa",
                        "slug": "goa",
                        "vibe": "Sun & sand",
                        "places": ["Baga", "Palolem"],
                        "themes": ["Beach"]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    fn sample_itineraries() -> ItinerariesDoc {
        serde_json::from_str(
            r#"{
                "itineraries": [
                    {
                        "id": "kerala-5-days",
                        "state": "kerala",
                        "title": "Kerala in 5 Days",
                        "summary": "Backwaters, beaches and hills",
                        "durationDays": 5,
                        "bestTime": "Oct-Mar",
                        "route": ["Kochi", "Munnar", "Alleppey"],
                        "generalTips": ["Carry light cottons"],
                        "days": [
                            {
                                "day": "Day 1 — Kochi Arrival",
                                "theme": "Heritage walk",
                                "morning": "Fort Kochi",
                                "afternoon": "Mattancherry Palace",
                                "evening": "Marine Drive",
                                "distanceKm": 12,
                                "driveTime": "45 min",
                                "mustSee": ["Chinese fishing nets"],
                                "optional": ["Folklore museum"],
                                "galleryQueries": ["fort kochi", "kochi sunset"],
                                "interestingFacts": ["Kochi was a major spice port"]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    // ========================================================================
    // Deserialization Tests
    // ========================================================================

    #[test]
    fn test_states_doc_camel_case_fields() {
        let doc = sample_states();
        let kerala = &doc.states[0];
        assert_eq!(kerala.slug, "kerala");
        assert_eq!(kerala.hero_query.as_deref(), Some("kerala backwaters"));
        assert!(kerala.has_detail_page);
        // Omitted optional fields fall back to defaults.
        let goa = &doc.states[1];
        assert_eq!(goa.hero_query, None);
        assert!(!goa.has_detail_page);
    }

    #[test]
    fn test_hero_search_query_falls_back_to_name() {
        let doc = sample_states();
        assert_eq!(doc.states[0].hero_search_query(), "kerala backwaters");
        assert_eq!(doc.states[1].hero_search_query(), "Goa");
    }

    #[test]
    fn test_itineraries_doc_day_fields() {
        let doc = sample_itineraries();
        let it = &doc.itineraries[0];
        assert_eq!(it.duration_days, 5);
        assert_eq!(it.best_time, "Oct-Mar");
        let day = &it.days[0];
        assert_eq!(day.distance_km, 12.0);
        assert_eq!(day.must_see, vec!["Chinese fishing nets"]);
        assert_eq!(day.interesting_facts.len(), 1);
        assert_eq!(day.food, None);
        assert!(day.tips.is_empty());
    }

    // ========================================================================
    // Lookup Tests
    // ========================================================================

    #[test]
    fn test_find_state() {
        let doc = sample_states();
        assert!(doc.find_state("kerala").is_some());
        assert!(doc.find_state("atlantis").is_none());
    }

    #[test]
    fn test_find_itinerary_and_state_filter() {
        let doc = sample_itineraries();
        assert!(doc.find_itinerary("kerala-5-days").is_some());
        assert!(doc.find_itinerary("kerala-50-days").is_none());
        assert_eq!(doc.itineraries_for_state("kerala").len(), 1);
        assert!(doc.itineraries_for_state("goa").is_empty());
    }

    // ========================================================================
    // Validation Tests
    // ========================================================================

    #[test]
    fn test_valid_documents_produce_no_issues() {
        let states = sample_states();
        let itineraries = sample_itineraries();
        assert!(states.validate().is_empty());
        assert!(itineraries.validate(&states).is_empty());
    }

    #[test]
    fn test_duplicate_slug_is_reported() {
        let mut states = sample_states();
        let dup = states.states[0].clone();
        states.states.push(dup);
        let issues = states.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("duplicate state slug 'kerala'"));
    }

    #[test]
    fn test_unknown_state_reference_is_reported() {
        let states = sample_states();
        let mut itineraries = sample_itineraries();
        itineraries.itineraries[0].state = "narnia".to_string();
        let issues = itineraries.validate(&states);
        assert!(issues.iter().any(|i| i.contains("unknown state 'narnia'")));
    }

    #[test]
    fn test_short_route_and_empty_days_are_reported() {
        let states = sample_states();
        let mut itineraries = sample_itineraries();
        itineraries.itineraries[0].route = vec!["Kochi".to_string()];
        itineraries.itineraries[0].days.clear();
        let issues = itineraries.validate(&states);
        assert!(issues.iter().any(|i| i.contains("fewer than 2 places")));
        assert!(issues.iter().any(|i| i.contains("no days")));
    }

    #[test]
    fn test_shipped_data_files_are_well_formed() {
        let states: StatesDoc =
            serde_json::from_str(include_str!("../../data/states.json")).unwrap();
        let itineraries: ItinerariesDoc =
            serde_json::from_str(include_str!("../../data/itineraries.json")).unwrap();
        assert!(states.validate().is_empty());
        assert!(itineraries.validate(&states).is_empty());
        for it in &itineraries.itineraries {
            assert!(it.route.len() >= 2);
            assert!(!it.days.is_empty());
        }
    }
}
