//! Compiled-in demo agents for the SAGE multi-agent setup.
//!
//! One root orchestrator and two specialists (ordering, planning). The
//! descriptors are rebuilt on every call; nothing here is cached.

use super::capability::{Capabilities, CapabilityValue};
use super::types::{AgentDescriptor, AgentType, ProtocolConfig};

fn capabilities<const N: usize>(entries: [(&str, CapabilityValue); N]) -> Capabilities {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn verified_protocol() -> ProtocolConfig {
    ProtocolConfig {
        required_verification: true,
        ..ProtocolConfig::default()
    }
}

/// Root orchestrator that routes tasks to the specialists
pub fn root_orchestrator() -> AgentDescriptor {
    AgentDescriptor {
        name: "SAGE Root Orchestrator".to_string(),
        did: "did:sage:ethereum:0x1234567890123456789012345678901234567890".to_string(),
        description: "Main orchestration agent that intelligently routes tasks to specialized sub-agents".to_string(),
        version: "1.0.0".to_string(),
        agent_type: AgentType::Orchestrator,
        endpoint: "http://localhost:8080".to_string(),
        public_key: "0x04a7b1f6b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1".to_string(),
        capabilities: capabilities([
            ("type", "root".into()),
            (
                "skills",
                CapabilityValue::strings([
                    "task_routing",
                    "agent_coordination",
                    "request_analysis",
                    "context_understanding",
                    "multi_agent_orchestration",
                ]),
            ),
            ("subagents", CapabilityValue::strings(["ordering", "planning"])),
            ("version", "1.0.0".into()),
            ("maxConcurrentTasks", CapabilityValue::Integer(10)),
            ("supportedProtocols", CapabilityValue::strings(["http", "https", "ws"])),
            ("responseFormats", CapabilityValue::strings(["json", "text"])),
        ]),
        protocol: ProtocolConfig::default(),
    }
}

/// Specialist for e-commerce orders and purchases
pub fn ordering_agent() -> AgentDescriptor {
    AgentDescriptor {
        name: "SAGE Ordering Agent".to_string(),
        did: "did:sage:ethereum:0x2345678901234567890123456789012345678901".to_string(),
        description: "Specialized agent for e-commerce orders, purchases, and shopping assistance".to_string(),
        version: "1.0.0".to_string(),
        agent_type: AgentType::Specialist,
        endpoint: "http://localhost:8083".to_string(),
        public_key: "0x04b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7".to_string(),
        capabilities: capabilities([
            ("type", "ordering".into()),
            (
                "skills",
                CapabilityValue::strings([
                    "order_processing",
                    "purchase_management",
                    "shopping_cart_management",
                    "payment_processing",
                    "delivery_tracking",
                    "product_recommendation",
                ]),
            ),
            (
                "supportedVendors",
                CapabilityValue::strings(["amazon", "ebay", "alibaba", "local_stores", "shopify"]),
            ),
            (
                "paymentMethods",
                CapabilityValue::strings([
                    "credit_card",
                    "debit_card",
                    "paypal",
                    "crypto",
                    "bank_transfer",
                ]),
            ),
            ("version", "1.0.0".into()),
            ("maxOrderValue", CapabilityValue::Integer(10000)),
            (
                "currencies",
                CapabilityValue::strings(["USD", "EUR", "KRW", "JPY", "CNY"]),
            ),
        ]),
        protocol: verified_protocol(),
    }
}

/// Specialist for travel and schedule planning
pub fn planning_agent() -> AgentDescriptor {
    AgentDescriptor {
        name: "SAGE Planning Agent".to_string(),
        did: "did:sage:ethereum:0x3456789012345678901234567890123456789012".to_string(),
        description: "Intelligent travel and schedule planning agent with optimization capabilities".to_string(),
        version: "1.0.0".to_string(),
        agent_type: AgentType::Specialist,
        endpoint: "http://localhost:8084".to_string(),
        public_key: "0x04c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8".to_string(),
        capabilities: capabilities([
            ("type", "planning".into()),
            (
                "skills",
                CapabilityValue::strings([
                    "trip_planning",
                    "schedule_optimization",
                    "route_planning",
                    "accommodation_booking",
                    "transportation_arrangement",
                    "activity_recommendation",
                    "budget_management",
                ]),
            ),
            (
                "supportedFeatures",
                CapabilityValue::strings([
                    "multi_destination",
                    "budget_optimization",
                    "time_constraints",
                    "group_travel",
                    "accessibility_options",
                    "weather_consideration",
                ]),
            ),
            (
                "dataProviders",
                CapabilityValue::strings([
                    "google_maps",
                    "booking_com",
                    "tripadvisor",
                    "weather_api",
                    "flight_aggregators",
                ]),
            ),
            ("version", "1.0.0".into()),
            ("maxTripDuration", CapabilityValue::Integer(365)),
            ("supportedRegions", CapabilityValue::strings(["global"])),
        ]),
        protocol: verified_protocol(),
    }
}

/// All demo agents, in registration order
pub fn demo_agents() -> Vec<AgentDescriptor> {
    vec![root_orchestrator(), ordering_agent(), planning_agent()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_agents_order_and_types() {
        let agents = demo_agents();
        assert_eq!(agents.len(), 3);
        assert_eq!(agents[0].agent_type, AgentType::Orchestrator);
        assert_eq!(agents[1].agent_type, AgentType::Specialist);
        assert_eq!(agents[2].agent_type, AgentType::Specialist);
        assert_eq!(agents[1].capabilities["type"].as_str(), Some("ordering"));
        assert_eq!(agents[2].capabilities["type"].as_str(), Some("planning"));
    }

    #[test]
    fn test_demo_agents_are_valid() {
        for agent in demo_agents() {
            assert!(agent.validate().is_ok(), "{} failed validation", agent.name);
        }
    }

    #[test]
    fn test_only_specialists_require_verification() {
        let agents = demo_agents();
        assert!(!agents[0].protocol.required_verification);
        assert!(agents[1].protocol.required_verification);
        assert!(agents[2].protocol.required_verification);
    }
}
