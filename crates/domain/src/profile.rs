//! Employee profiles and skill proficiency.

use crate::ids::{EmployeeId, SkillId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Ordinal proficiency tier.
///
/// Comparisons and gaps are integer differences on [`SkillLevel::ordinal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
    Expert = 4,
}

impl SkillLevel {
    /// All levels in ascending order.
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    /// Numeric tier, 1 (Beginner) through 4 (Expert).
    #[must_use]
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// Number of tiers between `self` and `target`; negative when `self` is above.
    #[must_use]
    pub fn gap_to(self, target: SkillLevel) -> i32 {
        target.ordinal() - self.ordinal()
    }

    /// Short label used in generated text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A skill held by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSkill {
    pub skill_id: SkillId,
    pub name: String,
    pub category: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub acquired_date: Option<DateTime<Utc>>,
}

/// Snapshot of an employee as read by the engine. Never mutated by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub years_of_experience: u32,
    #[serde(default)]
    pub skills: Vec<EmployeeSkill>,
}

impl EmployeeProfile {
    /// Skill levels keyed by skill id.
    pub fn skill_levels_by_id(&self) -> HashMap<SkillId, SkillLevel> {
        self.skills.iter().map(|s| (s.skill_id, s.level)).collect()
    }

    /// Skill levels keyed by skill name. Later duplicates win.
    pub fn skill_levels_by_name(&self) -> HashMap<&str, SkillLevel> {
        self.skills
            .iter()
            .map(|s| (s.name.as_str(), s.level))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: u64, name: &str, level: SkillLevel) -> EmployeeSkill {
        EmployeeSkill {
            skill_id: SkillId(id),
            name: name.to_string(),
            category: "Programming".to_string(),
            level,
            acquired_date: None,
        }
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(SkillLevel::Beginner < SkillLevel::Intermediate);
        assert!(SkillLevel::Advanced < SkillLevel::Expert);
        assert_eq!(SkillLevel::Expert.ordinal(), 4);
    }

    #[test]
    fn test_gap_to() {
        assert_eq!(SkillLevel::Beginner.gap_to(SkillLevel::Advanced), 2);
        assert_eq!(SkillLevel::Expert.gap_to(SkillLevel::Intermediate), -2);
        assert_eq!(SkillLevel::Advanced.gap_to(SkillLevel::Advanced), 0);
    }

    #[test]
    fn test_profile_lookups() {
        let profile = EmployeeProfile {
            id: EmployeeId(1),
            name: "Dana Reyes".to_string(),
            position: "Developer".to_string(),
            department: "Engineering".to_string(),
            years_of_experience: 3,
            skills: vec![
                skill(1, "C#", SkillLevel::Intermediate),
                skill(2, "SQL", SkillLevel::Advanced),
            ],
        };

        let by_name = profile.skill_levels_by_name();
        assert_eq!(by_name.get("SQL"), Some(&SkillLevel::Advanced));
        assert_eq!(by_name.get("Leadership"), None);
        assert_eq!(
            profile.skill_levels_by_id().get(&SkillId(1)),
            Some(&SkillLevel::Intermediate)
        );
    }

    #[test]
    fn test_level_serializes_by_name() {
        let json = serde_json::to_string(&SkillLevel::Advanced).unwrap();
        assert_eq!(json, "\"Advanced\"");
    }
}
