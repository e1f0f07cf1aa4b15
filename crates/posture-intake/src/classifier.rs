//! KeywordClassifier — ordered substring rules over lowercased text.

use serde::{Deserialize, Serialize};

use posture_core::models::Category;

/// How a matching rule decides the crown-jewel flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrownRule {
    Always,
    Never,
    /// Crown if the line contains any of these markers.
    IfContains(Vec<String>),
}

impl CrownRule {
    fn if_contains(markers: &[&str]) -> Self {
        Self::IfContains(markers.iter().map(|m| m.to_lowercase()).collect())
    }

    fn applies(&self, lowered: &str) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::IfContains(markers) => markers.iter().any(|m| lowered.contains(m.as_str())),
        }
    }
}

/// One rule: any keyword hit assigns the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub category: Category,
    /// Lowercase keywords matched as substrings.
    pub keywords: Vec<String>,
    pub crown: CrownRule,
}

impl KeywordRule {
    pub fn new(category: Category, keywords: &[&str], crown: CrownRule) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            crown,
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub is_crown_jewel: bool,
    /// Index of the rule that matched, `None` for the fallback.
    pub rule_index: Option<usize>,
}

/// Ordered keyword rules plus a fallback for unmatched lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordClassifier {
    rules: Vec<KeywordRule>,
    fallback: KeywordRule,
}

impl KeywordClassifier {
    /// Build from rules in priority order. The fallback's keywords are ignored.
    pub fn new(rules: Vec<KeywordRule>, fallback: KeywordRule) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Classify one line of free text.
    pub fn classify(&self, line: &str) -> Classification {
        let lowered = line.to_lowercase();
        let (rule_index, rule) = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, r)| r.matches(&lowered))
            .map(|(i, r)| (Some(i), r))
            .unwrap_or((None, &self.fallback));

        Classification {
            category: rule.category,
            is_crown_jewel: rule.crown.applies(&lowered),
            rule_index,
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        let rules = vec![
            KeywordRule::new(
                Category::Data,
                &["sql", "db", "data", "個資", "database"],
                CrownRule::Always,
            ),
            KeywordRule::new(
                Category::User,
                &["ad", "admin", "user", "帳號", "vpn"],
                CrownRule::Never,
            ),
            KeywordRule::new(
                Category::Network,
                &["cisco", "switch", "wifi", "router", "net"],
                // "core"
                CrownRule::if_contains(&["核心"]),
            ),
            KeywordRule::new(
                Category::Application,
                &["office", "erp", "slack", "app", "aws"],
                // "production"
                CrownRule::if_contains(&["生產"]),
            ),
        ];
        // "chief executive", or a NAS box
        let fallback = KeywordRule::new(
            Category::Device,
            &[],
            CrownRule::if_contains(&["總經理", "nas"]),
        );
        Self::new(rules, fallback)
    }
}
