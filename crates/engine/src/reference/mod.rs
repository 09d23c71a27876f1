//! Immutable reference tables consulted by the scorers and the analyzer.
//!
//! Built once (from [`ReferenceData::builtin`] or a TOML override file) and
//! shared by reference. Nothing mutates these tables at runtime.

mod builtin;

use careerpath_domain::SkillLevel;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use thiserror::Error;

const FALLBACK_COURSE_HOURS: u32 = 35;

/// Errors raised while loading a reference-data override.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("failed to read reference data '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse reference data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid reference data: {0}")]
    Invalid(String),
}

/// A required skill and the level a target position expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill: String,
    pub level: SkillLevel,
}

/// Case-insensitive substring predicate over a target-position string.
///
/// Matches when every `all_of` term is present and, if `any_of` is non-empty,
/// at least one `any_of` term is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionPattern {
    #[serde(default)]
    pub all_of: Vec<String>,
    #[serde(default)]
    pub any_of: Vec<String>,
}

impl PositionPattern {
    pub fn matches(&self, target_lower: &str) -> bool {
        let all = self
            .all_of
            .iter()
            .all(|term| target_lower.contains(&term.to_lowercase()));
        let any = self.any_of.is_empty()
            || self
                .any_of
                .iter()
                .any(|term| target_lower.contains(&term.to_lowercase()));
        all && any
    }
}

/// One entry in the ordered target-position rule list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRule {
    pub name: String,
    pub pattern: PositionPattern,
    pub requirements: Vec<SkillRequirement>,
}

/// Experience band driving career-boost categories and optimal course length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceTier {
    /// Upper bound (exclusive) in years; `None` for the open-ended top tier.
    pub below_years: Option<u32>,
    pub boost_categories: Vec<String>,
    pub optimal_course_hours: u32,
}

/// Position keywords (case-sensitive) adding career-boost categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCategoryRule {
    pub any_of: Vec<String>,
    pub categories: Vec<String>,
}

/// Ordered keyword rule mapping a skill name to some value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule<T> {
    pub keywords: Vec<String>,
    pub value: T,
}

impl<T> KeywordRule<T> {
    fn matches(&self, lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| lower.contains(&k.to_lowercase()))
    }
}

/// All static tables of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub version: String,
    /// Position -> positions reachable by upward progression.
    pub career_tracks: BTreeMap<String, Vec<String>>,
    /// Evaluated top-down; first match wins.
    pub requirement_rules: Vec<RequirementRule>,
    pub default_requirements: Vec<SkillRequirement>,
    /// Department -> related departments. Looked up in both directions.
    pub related_departments: BTreeMap<String, Vec<String>>,
    pub seniority_keywords: Vec<String>,
    pub high_demand_keywords: Vec<String>,
    /// Ordered by ascending `below_years`, open-ended tier last.
    pub experience_tiers: Vec<ExperienceTier>,
    /// First matching rule applies.
    pub position_categories: Vec<PositionCategoryRule>,
    pub critical_skills: Vec<String>,
    pub skill_categories: Vec<KeywordRule<String>>,
    pub default_skill_category: String,
    pub learning_resources: Vec<KeywordRule<Vec<String>>>,
    pub default_learning_resources: Vec<String>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceData {
    /// Tables shipped with the engine.
    pub fn builtin() -> Self {
        builtin::tables()
    }

    /// Parses TOML; missing sections keep their built-in values.
    pub fn from_toml_str(text: &str) -> Result<Self, ReferenceDataError> {
        let data: Self = toml::from_str(text)?;
        data.validate()?;
        Ok(data)
    }

    pub fn load(path: &Path) -> Result<Self, ReferenceDataError> {
        let text = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ReferenceDataError> {
        if self.experience_tiers.is_empty() {
            return Err(ReferenceDataError::Invalid(
                "at least one experience tier is required".into(),
            ));
        }
        if self
            .experience_tiers
            .iter()
            .any(|t| t.optimal_course_hours == 0)
        {
            return Err(ReferenceDataError::Invalid(
                "optimal_course_hours must be positive".into(),
            ));
        }
        if self.experience_tiers.last().and_then(|t| t.below_years).is_some() {
            return Err(ReferenceDataError::Invalid(
                "the last experience tier must be open-ended".into(),
            ));
        }
        Ok(())
    }

    /// Positions reachable from `position`, or `None` if the position is unmapped.
    pub fn progression_from(&self, position: &str) -> Option<&[String]> {
        self.career_tracks.get(position).map(Vec::as_slice)
    }

    /// Related if either department lists the other.
    pub fn is_related_department(&self, a: &str, b: &str) -> bool {
        let lists = |from: &str, to: &str| {
            self.related_departments
                .get(from)
                .is_some_and(|related| related.iter().any(|d| d == to))
        };
        lists(a, b) || lists(b, a)
    }

    /// Number of seniority keywords present in a title (case-sensitive).
    pub fn seniority_signal(&self, title: &str) -> usize {
        self.seniority_keywords
            .iter()
            .filter(|k| title.contains(k.as_str()))
            .count()
    }

    /// Whether a high-demand keyword appears in either text (case-insensitive).
    pub fn is_high_demand(&self, category: &str, title: &str) -> bool {
        let category = category.to_lowercase();
        let title = title.to_lowercase();
        self.high_demand_keywords.iter().any(|k| {
            let k = k.to_lowercase();
            category.contains(&k) || title.contains(&k)
        })
    }

    /// Requirement table for a free-text target position.
    ///
    /// Returns the matched rule name (`"default"` when nothing matched) and the table.
    pub fn requirements_for(&self, target_position: &str) -> (&str, &[SkillRequirement]) {
        let lower = target_position.to_lowercase();
        self.requirement_rules
            .iter()
            .find(|rule| rule.pattern.matches(&lower))
            .map(|rule| (rule.name.as_str(), rule.requirements.as_slice()))
            .unwrap_or(("default", self.default_requirements.as_slice()))
    }

    /// Experience tier for a number of years.
    pub fn tier_for(&self, years: u32) -> Option<&ExperienceTier> {
        self.experience_tiers
            .iter()
            .find(|t| t.below_years.map_or(true, |limit| years < limit))
            .or_else(|| self.experience_tiers.last())
    }

    /// Course length that suits this much experience.
    pub fn optimal_course_hours(&self, years: u32) -> u32 {
        self.tier_for(years)
            .map(|t| t.optimal_course_hours)
            .unwrap_or(FALLBACK_COURSE_HOURS)
    }

    /// Categories that accelerate the next career step for this employee.
    pub fn career_boost_categories(&self, position: &str, years: u32) -> HashSet<&str> {
        let mut categories: HashSet<&str> = self
            .tier_for(years)
            .map(|t| t.boost_categories.iter().map(String::as_str).collect())
            .unwrap_or_default();
        if let Some(rule) = self
            .position_categories
            .iter()
            .find(|r| r.any_of.iter().any(|k| position.contains(k.as_str())))
        {
            categories.extend(rule.categories.iter().map(String::as_str));
        }
        categories
    }

    /// Whether a skill name contains a critical skill (case-insensitive).
    pub fn is_critical_skill(&self, skill_name: &str) -> bool {
        let lower = skill_name.to_lowercase();
        self.critical_skills
            .iter()
            .any(|c| lower.contains(&c.to_lowercase()))
    }

    pub fn skill_category(&self, skill_name: &str) -> &str {
        let lower = skill_name.to_lowercase();
        self.skill_categories
            .iter()
            .find(|r| r.matches(&lower))
            .map(|r| r.value.as_str())
            .unwrap_or(&self.default_skill_category)
    }

    pub fn learning_resources(&self, skill_name: &str) -> &[String] {
        let lower = skill_name.to_lowercase();
        self.learning_resources
            .iter()
            .find(|r| r.matches(&lower))
            .map(|r| r.value.as_slice())
            .unwrap_or(&self.default_learning_resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let data = ReferenceData::builtin();
        assert!(data.validate().is_ok());
        assert!(!data.version.is_empty());
    }

    #[test]
    fn test_progression_lookup() {
        let data = ReferenceData::builtin();
        let from_dev = data.progression_from("Developer").unwrap();
        assert!(from_dev.iter().any(|p| p == "Senior Developer"));
        assert!(!from_dev.iter().any(|p| p == "Junior Developer"));
        assert!(data.progression_from("Astronaut").is_none());
    }

    #[test]
    fn test_related_departments_symmetric() {
        let data = ReferenceData::builtin();
        assert!(data.is_related_department("Engineering", "Security"));
        assert!(data.is_related_department("Security", "Engineering"));
        assert!(data.is_related_department("Design", "Product"));
        assert!(!data.is_related_department("Sales", "Security"));
    }

    #[test]
    fn test_seniority_signal_counts_keywords() {
        let data = ReferenceData::builtin();
        assert_eq!(data.seniority_signal("Developer"), 0);
        assert_eq!(data.seniority_signal("Senior Developer"), 1);
        assert_eq!(data.seniority_signal("Senior Engineering Manager"), 2);
    }

    #[test]
    fn test_high_demand_ignores_case() {
        let data = ReferenceData::builtin();
        assert!(data.is_high_demand("cloud", "Intro"));
        assert!(data.is_high_demand("Programming", "Modern TYPESCRIPT"));
        assert!(!data.is_high_demand("Finance", "Accounting Basics"));
    }

    #[test]
    fn test_requirement_rules_first_match_wins() {
        let data = ReferenceData::builtin();
        assert_eq!(data.requirements_for("Senior Software Engineer").0, "senior");
        assert_eq!(data.requirements_for("Team Lead").0, "lead");
        assert_eq!(data.requirements_for("Engineering Manager").0, "manager");
        assert_eq!(data.requirements_for("Solutions Architect").0, "architect");
        assert_eq!(data.requirements_for("Full Stack Developer").0, "full-stack");
        assert_eq!(data.requirements_for("Developer").0, "default");
        // "senior" alone is not enough for the senior engineering table
        assert_eq!(data.requirements_for("Senior Analyst").0, "default");
    }

    #[test]
    fn test_career_boost_by_tier_and_position() {
        let data = ReferenceData::builtin();
        let junior = data.career_boost_categories("Analyst", 1);
        assert!(junior.contains("Programming"));
        assert!(!junior.contains("Cloud"));

        let mid_dev = data.career_boost_categories("Software Developer", 3);
        assert!(mid_dev.contains("Cloud"));
        assert!(mid_dev.contains("Programming"));

        let senior_lead = data.career_boost_categories("Tech Lead", 9);
        assert!(senior_lead.contains("AI"));
        assert!(senior_lead.contains("Leadership"));
    }

    #[test]
    fn test_tier_boundaries() {
        let data = ReferenceData::builtin();
        assert_eq!(data.optimal_course_hours(0), 20);
        assert_eq!(data.optimal_course_hours(2), 35);
        assert_eq!(data.optimal_course_hours(4), 35);
        assert_eq!(data.optimal_course_hours(5), 50);
        assert_eq!(data.optimal_course_hours(40), 50);
    }

    #[test]
    fn test_skill_knowledge_lookups() {
        let data = ReferenceData::builtin();
        assert!(data.is_critical_skill("Leadership"));
        assert!(data.is_critical_skill("technical architecture"));
        assert!(!data.is_critical_skill("SQL"));
        assert_eq!(data.skill_category("C#"), "Programming");
        assert_eq!(data.skill_category("Cloud Computing"), "Architecture & Cloud");
        assert_eq!(data.skill_category("Budgeting"), "Technical");
        assert_eq!(data.learning_resources("Underwater Basketry").len(), 3);
    }

    #[test]
    fn test_toml_override_keeps_missing_sections() {
        let data = ReferenceData::from_toml_str(
            r#"
            version = "test-1"
            seniority_keywords = ["Staff"]
            "#,
        )
        .unwrap();
        assert_eq!(data.version, "test-1");
        assert_eq!(data.seniority_signal("Staff Engineer"), 1);
        assert_eq!(data.seniority_signal("Senior Engineer"), 0);
        // untouched tables fall back to the built-in ones
        assert!(data.progression_from("Developer").is_some());
    }

    #[test]
    fn test_toml_rejects_closed_last_tier() {
        let err = ReferenceData::from_toml_str(
            r#"
            [[experience_tiers]]
            below_years = 3
            boost_categories = ["Programming"]
            optimal_course_hours = 20
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ReferenceDataError::Invalid(_)));
    }
}
