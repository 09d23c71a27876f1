//! Skill-gap analysis report types.

use crate::profile::SkillLevel;
use crate::types::{Confidence, Priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One required skill the employee does not yet meet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill_name: String,
    pub current_level: SkillLevel,
    /// Always above `current_level`.
    pub required_level: SkillLevel,
    pub priority: Priority,
    pub reasoning: String,
    pub category: String,
    pub estimated_learning_months: u32,
    pub recommended_resources: Vec<String>,
    pub importance_score: Confidence,
}

impl SkillGap {
    /// Ordinal distance between current and required level.
    pub fn level_gap(&self) -> i32 {
        self.current_level.gap_to(self.required_level)
    }
}

/// A checkpoint on the road to the target position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMilestone {
    pub month: u32,
    pub title: String,
    pub description: String,
    pub skills_to_complete: Vec<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Structured roadmap from an employee's current skills to a target position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    pub target_position: String,
    pub employee_name: String,
    pub current_position: String,
    pub years_of_experience: u32,
    pub analysis_date: DateTime<Utc>,
    /// Required skills the employee has only at Beginner (or not at all), priority desc.
    pub missing_skills: Vec<SkillGap>,
    /// Required skills held above Beginner but below the requirement, priority desc.
    pub skills_to_improve: Vec<SkillGap>,
    pub learning_path: String,
    /// Always within 3..=24.
    pub estimated_months: u32,
    /// Share of required skills already met, 0-100.
    pub readiness_percentage: f64,
    pub total_skills_required: usize,
    pub skills_met: usize,
    pub high_priority_gaps: usize,
    pub next_action_items: Vec<String>,
    pub milestones: Vec<CareerMilestone>,
}

impl SkillGapAnalysis {
    /// Every gap, missing skills first.
    pub fn all_gaps(&self) -> impl Iterator<Item = &SkillGap> {
        self.missing_skills.iter().chain(self.skills_to_improve.iter())
    }

    /// Looks up a gap by skill name in either list.
    pub fn gap_for(&self, skill_name: &str) -> Option<&SkillGap> {
        self.all_gaps().find(|g| g.skill_name == skill_name)
    }
}
