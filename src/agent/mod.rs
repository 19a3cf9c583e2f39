use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::catalog::Catalog;
use crate::error::SearchError;
use crate::extractor::extract_query;
use crate::models::restaurant::Restaurant;
use crate::models::search_query::SearchQuery;
use crate::search::search;

/// Tools the agent knows how to run.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    SearchRestaurants,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct ToolDecision {
    pub tool_name: ToolName,
    pub args: SearchQuery,
}

#[derive(Clone, Serialize, Debug)]
pub struct AgentResponse {
    pub tool_used: ToolName,
    pub tool_args: SearchQuery,
    pub candidates: Vec<Restaurant>,
}

/// Turns chat messages into catalog searches using the rule-based extractor.
#[derive(Clone, Debug)]
pub struct RestaurantAgent {
    catalog: Catalog,
}

impl RestaurantAgent {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn decide_tool_and_args(&self, message: &str) -> ToolDecision {
        ToolDecision {
            tool_name: ToolName::SearchRestaurants,
            args: extract_query(message),
        }
    }

    pub fn handle_message(&self, message: &str) -> Result<AgentResponse, SearchError> {
        let decision = self.decide_tool_and_args(message);
        debug!("Agent chose {:?} with {:?}", decision.tool_name, decision.args);

        let candidates = match decision.tool_name {
            ToolName::SearchRestaurants => search(&self.catalog, &decision.args)?,
        };

        Ok(AgentResponse {
            tool_used: decision.tool_name,
            tool_args: decision.args,
            candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::time;
    use super::*;

    fn agent() -> RestaurantAgent {
        let lehja = Restaurant {
            name: "Lehja".to_string(),
            city: "Richmond".to_string(),
            neighborhood: "Short Pump".to_string(),
            cuisine: "Indian".to_string(),
            avg_price_per_person: 25.0,
            rating: 4.5,
            opens_at: time!(11:30),
            closes_at: time!(22:00),
            max_guests_per_slot: 6,
            available_slots: vec![time!(18:00), time!(19:30)],
        };
        let edo = Restaurant {
            name: "Edo's Squid".to_string(),
            neighborhood: "The Fan".to_string(),
            cuisine: "Italian".to_string(),
            avg_price_per_person: 35.0,
            ..lehja.clone()
        };

        RestaurantAgent::new(Catalog::new(vec![lehja, edo]))
    }

    #[test]
    fn always_decides_to_search() {
        let decision = agent().decide_tool_and_args("anything at all");

        assert_eq!(decision.tool_name, ToolName::SearchRestaurants);
        assert_eq!(decision.args, extract_query("anything at all"));
    }

    #[test]
    fn handles_a_message_end_to_end() {
        let response = agent()
            .handle_message("Indian in Short Pump for 4 around 7pm")
            .unwrap();

        assert_eq!(response.tool_used, ToolName::SearchRestaurants);
        assert_eq!(response.tool_args.people, 4);
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.candidates[0].name, "Lehja");
    }

    #[test]
    fn budget_from_message_filters_candidates() {
        let response = agent().handle_message("somewhere cheap in the fan").unwrap();

        assert_eq!(response.tool_args.max_budget_per_person, Some(30.0));
        assert!(response.candidates.is_empty());
    }

    #[test]
    fn response_serializes_tool_name_in_snake_case() {
        let response = agent().handle_message("italian").unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["tool_used"], json!("search_restaurants"));
        assert_eq!(value["tool_args"]["cuisine"], json!("Italian"));
        assert_eq!(value["candidates"][0]["available_slots"], json!(["18:00", "19:30"]));
    }
}
