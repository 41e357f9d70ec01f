//! Birthplace → baseline life expectancy.
//!
//! Rules are evaluated in declaration order against the lower-cased birthplace
//! and the first hit wins. Patterns are unanchored, so "Indiana" lands on the
//! India rule and "Busan" on the United States rule; reordering the table
//! changes results.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Baseline used when no rule matches.
pub const DEFAULT_BASELINE: i32 = 73;

/// One ordered birthplace rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineRule {
    pub region: &'static str,
    pub pattern: &'static str,
    pub baseline: i32,
}

pub const BASELINE_RULES: [BaselineRule; 17] = [
    BaselineRule {
        region: "India",
        pattern: r"india|delhi|mumbai|kolkata|chennai|bengaluru|hyderabad",
        baseline: 69,
    },
    BaselineRule {
        region: "Pakistan",
        pattern: r"pakistan|karachi|lahore|islamabad",
        baseline: 67,
    },
    BaselineRule {
        region: "Bangladesh",
        pattern: r"bangladesh|dhaka",
        baseline: 72,
    },
    BaselineRule {
        region: "Sri Lanka",
        pattern: r"sri\s*lanka|colombo",
        baseline: 77,
    },
    BaselineRule {
        region: "Nepal",
        pattern: r"nepal|kathmandu",
        baseline: 71,
    },
    BaselineRule {
        region: "Indonesia",
        pattern: r"indonesia|jakarta|bali",
        baseline: 71,
    },
    BaselineRule {
        region: "China",
        pattern: r"china|beijing|shanghai|guangzhou|shenzhen",
        baseline: 78,
    },
    BaselineRule {
        region: "Japan",
        pattern: r"japan|tokyo|osaka|kyoto",
        baseline: 84,
    },
    BaselineRule {
        region: "United States",
        pattern: r"usa|united states|new york|los angeles|chicago|houston|boston|seattle|san|miami",
        baseline: 77,
    },
    BaselineRule {
        region: "Canada",
        pattern: r"canada|toronto|vancouver|montreal",
        baseline: 82,
    },
    BaselineRule {
        region: "United Kingdom",
        pattern: r"uk|united kingdom|england|london|manchester|birmingham|scotland",
        baseline: 80,
    },
    BaselineRule {
        region: "Australia",
        pattern: r"australia|sydney|melbourne|brisbane|perth",
        baseline: 83,
    },
    BaselineRule {
        region: "Germany",
        pattern: r"germany|berlin|munich|frankfurt|hamburg",
        baseline: 81,
    },
    BaselineRule {
        region: "France",
        pattern: r"france|paris|lyon|marseille",
        baseline: 82,
    },
    BaselineRule {
        region: "Russia",
        pattern: r"russia|moscow|st\.? petersburg",
        baseline: 70,
    },
    BaselineRule {
        region: "Nigeria",
        pattern: r"nigeria|lagos|abuja",
        baseline: 55,
    },
    BaselineRule {
        region: "South Africa",
        pattern: r"south africa|johannesburg|cape town|durban",
        baseline: 64,
    },
];

/// Which rule (if any) produced the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaselineMatch {
    pub region: Option<&'static str>,
    pub baseline: i32,
}

fn compiled_rules() -> &'static [(Regex, BaselineRule)] {
    static RULES: OnceLock<Vec<(Regex, BaselineRule)>> = OnceLock::new();
    RULES.get_or_init(|| {
        BASELINE_RULES
            .iter()
            .map(|rule| {
                let pattern = Regex::new(rule.pattern).expect("birthplace pattern compiles");
                (pattern, *rule)
            })
            .collect()
    })
}

pub fn classify_birthplace(birthplace: &str) -> BaselineMatch {
    let needle = birthplace.to_lowercase();
    compiled_rules()
        .iter()
        .find(|(pattern, _)| pattern.is_match(&needle))
        .map(|(_, rule)| BaselineMatch {
            region: Some(rule.region),
            baseline: rule.baseline,
        })
        .unwrap_or(BaselineMatch {
            region: None,
            baseline: DEFAULT_BASELINE,
        })
}

pub fn baseline_for(birthplace: &str) -> i32 {
    classify_birthplace(birthplace).baseline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_rules_take_precedence() {
        let hit = classify_birthplace("New Delhi, India");
        assert_eq!(hit.baseline, 69);
        assert_eq!(hit.region, Some("India"));

        assert_eq!(baseline_for("Indianapolis, Indiana"), 69);
        assert_eq!(baseline_for("Pusan"), 77);
    }

    #[test]
    fn unmatched_birthplace_uses_global_default() {
        let miss = classify_birthplace("Springfield");
        assert_eq!(miss.baseline, DEFAULT_BASELINE);
        assert_eq!(miss.region, None);
        assert_eq!(baseline_for(""), 73);
    }

    #[test]
    fn matching_ignores_case_and_spacing_variants() {
        assert_eq!(baseline_for("TOKYO"), 84);
        assert_eq!(baseline_for("Sri  Lanka"), 77);
        assert_eq!(baseline_for("srilanka"), 77);
        assert_eq!(baseline_for("St. Petersburg"), 70);
        assert_eq!(baseline_for("st petersburg"), 70);
        assert_eq!(baseline_for("Lagos"), 55);
        assert_eq!(baseline_for("Cape Town, South Africa"), 64);
        assert_eq!(baseline_for("San Francisco"), 77);
        assert_eq!(baseline_for("Glasgow, Scotland"), 80);
    }

    #[test]
    fn rule_table_compiles_in_declared_order() {
        let rules = compiled_rules();
        assert_eq!(rules.len(), BASELINE_RULES.len());
        assert_eq!(rules[0].1.region, "India");
        assert_eq!(rules[rules.len() - 1].1.region, "South Africa");
    }
}
