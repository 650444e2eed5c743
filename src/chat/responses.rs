//! Canned reply tables for the chat widget. Classification is a fixed-order
//! substring scan: the first category with any matching keyword wins, so an
//! input that mentions both pricing and timelines resolves to pricing.

pub struct ResponseCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub responses: &'static [&'static str],
}

pub const CATEGORIES: &[ResponseCategory] = &[
    ResponseCategory {
        name: "pricing",
        keywords: &["cost", "price", "pricing", "package", "fee", "charge"],
        responses: &[
            "Our pricing varies based on project scope. Here's a general overview:\n- Cloud Migration: Starting from $5,000\n- Security Audit: Starting from $3,000\n- Application Development: Custom quotes based on requirements\n- Support Plans: From $1,000/month\n\nWould you like to schedule a consultation for a detailed quote?",
            "Based on our standard packages:\n- Basic: $3,000 - $5,000\n- Professional: $5,000 - $10,000\n- Enterprise: Custom pricing\n\nShall we schedule a call to discuss your specific needs?",
        ],
    },
    ResponseCategory {
        name: "timeline",
        keywords: &["time", "long", "duration", "timeline", "schedule", "when"],
        responses: &[
            "Typical project timelines:\n- Cloud Migration: 2-8 weeks\n- Security Implementation: 1-4 weeks\n- Application Development: 4-12 weeks\n\nWould you like to discuss your project timeline in detail?",
            "Project duration varies based on complexity. Generally:\n- Assessment Phase: 1-2 weeks\n- Implementation: 2-8 weeks\n- Testing & Optimization: 1-2 weeks\n\nLet's schedule a consultation to create a detailed timeline for your project.",
        ],
    },
    ResponseCategory {
        name: "services",
        keywords: &["service", "offer", "provide", "help", "support", "solution"],
        responses: &[
            "We specialize in:\n1. Cloud Migration & Infrastructure\n2. Security & Compliance\n3. Application Development\n4. Managed IT Support\n5. Data Analytics\n6. DevOps Solutions\n\nWhich service interests you most?",
            "Our core services include:\n- Cloud Solutions (AWS, Azure, GCP)\n- Security Services (Audits, Implementation)\n- Custom Software Development\n- 24/7 IT Support\n\nWould you like more details about any specific service?",
        ],
    },
];

pub const FALLBACK: &str = "Thank you for your interest! While I can provide general information about our services, pricing, and timelines, it would be best to discuss your specific needs in a consultation. Would you like to schedule one?";

/// First category whose keyword list has any substring match against the
/// lower-cased input, in declaration order.
pub fn classify(text: &str) -> Option<&'static ResponseCategory> {
    let text = text.to_lowercase();
    CATEGORIES
        .iter()
        .find(|category| category.keywords.iter().any(|keyword| text.contains(keyword)))
}

/// Picks a reply for the input. The picker receives the matched category's
/// reply count and returns an index; production passes a uniform random
/// draw, tests pass something fixed.
pub fn generate_response(text: &str, mut pick: impl FnMut(usize) -> usize) -> &'static str {
    match classify(text) {
        Some(category) => {
            let index = pick(category.responses.len()).min(category.responses.len() - 1);
            category.responses[index]
        }
        None => FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_keywords_resolve_to_pricing_replies() {
        for input in ["What does it cost?", "your PRICE list", "package deals?"] {
            let reply = generate_response(input, |_| 0);
            let pricing = &CATEGORIES[0];
            assert_eq!(pricing.name, "pricing");
            assert!(
                pricing.responses.contains(&reply),
                "expected a pricing reply for {input:?}"
            );
        }
    }

    #[test]
    fn pricing_wins_over_timeline_when_both_match() {
        // "cost" (pricing) and "timeline" (timeline) both appear.
        let category = classify("what's the cost and the timeline?").unwrap();
        assert_eq!(category.name, "pricing");
    }

    #[test]
    fn categories_are_checked_in_declaration_order() {
        assert_eq!(classify("how long will it take?").unwrap().name, "timeline");
        assert_eq!(classify("what do you offer?").unwrap().name, "services");
        // "schedule" is a timeline keyword even in a services-sounding ask.
        assert_eq!(classify("schedule a service visit").unwrap().name, "timeline");
    }

    #[test]
    fn unmatched_input_falls_back() {
        assert!(classify("hello there").is_none());
        assert_eq!(generate_response("hello there", |_| 0), FALLBACK);
    }

    #[test]
    fn reply_is_a_member_of_the_matched_set_for_any_pick() {
        let timeline = &CATEGORIES[1];
        for pick in 0..timeline.responses.len() {
            let reply = generate_response("how long?", |_| pick);
            assert!(timeline.responses.contains(&reply));
        }
    }

    #[test]
    fn out_of_range_pick_is_clamped() {
        let reply = generate_response("how long?", |len| len + 10);
        assert!(CATEGORIES[1].responses.contains(&reply));
    }
}
