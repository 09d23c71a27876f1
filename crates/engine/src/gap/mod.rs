//! Skill-gap analysis toward a target position.
//!
//! Pure function of the employee snapshot, the target string and the
//! reference tables; the only clock input is the analysis date.

mod path;

pub use path::{action_items, learning_path, milestones};

use crate::reference::ReferenceData;
use careerpath_domain::{
    Confidence, EmployeeProfile, Priority, SkillGap, SkillGapAnalysis, SkillLevel,
};
use chrono::{DateTime, Utc};

const MIN_ESTIMATE_MONTHS: u32 = 3;
const MAX_ESTIMATE_MONTHS: u32 = 24;
const MISSING_MONTHS_PER_LEVEL: u32 = 2;
const IMPROVE_MONTHS_PER_LEVEL: u32 = 1;

/// Builds [`SkillGapAnalysis`] reports from the requirement rules.
pub struct SkillGapAnalyzer<'r> {
    reference: &'r ReferenceData,
}

impl<'r> SkillGapAnalyzer<'r> {
    pub fn new(reference: &'r ReferenceData) -> Self {
        Self { reference }
    }

    pub fn analyze(&self, employee: &EmployeeProfile, target_position: &str) -> SkillGapAnalysis {
        self.analyze_at(employee, target_position, Utc::now())
    }

    /// Same as [`Self::analyze`] with an explicit analysis date.
    pub fn analyze_at(
        &self,
        employee: &EmployeeProfile,
        target_position: &str,
        analysis_date: DateTime<Utc>,
    ) -> SkillGapAnalysis {
        let (rule, requirements) = self.reference.requirements_for(target_position);
        let held = employee.skill_levels_by_name();

        let mut missing_skills = Vec::new();
        let mut skills_to_improve = Vec::new();

        for requirement in requirements {
            let held_level = held.get(requirement.skill.as_str()).copied();
            let current = held_level.unwrap_or(SkillLevel::Beginner);
            if current >= requirement.level {
                continue;
            }
            let gap = self.gap(
                &requirement.skill,
                held_level,
                requirement.level,
                target_position,
            );
            if current == SkillLevel::Beginner {
                missing_skills.push(gap);
            } else {
                skills_to_improve.push(gap);
            }
        }

        missing_skills.sort_by(|a, b| b.priority.cmp(&a.priority));
        skills_to_improve.sort_by(|a, b| b.priority.cmp(&a.priority));

        let total = requirements.len();
        let unmet = missing_skills.len() + skills_to_improve.len();
        let estimated_months = estimate_months(&missing_skills, &skills_to_improve);
        let high_priority_gaps = missing_skills
            .iter()
            .chain(skills_to_improve.iter())
            .filter(|g| g.priority.value() >= 4)
            .count();

        tracing::debug!(
            employee_id = %employee.id,
            target = target_position,
            rule,
            missing = missing_skills.len(),
            improve = skills_to_improve.len(),
            "Analyzed skill gaps"
        );

        SkillGapAnalysis {
            target_position: target_position.to_string(),
            employee_name: employee.name.clone(),
            current_position: employee.position.clone(),
            years_of_experience: employee.years_of_experience,
            analysis_date,
            learning_path: learning_path(&missing_skills, &skills_to_improve),
            milestones: milestones(&missing_skills, &skills_to_improve, estimated_months),
            next_action_items: action_items(&missing_skills, &skills_to_improve),
            missing_skills,
            skills_to_improve,
            estimated_months,
            readiness_percentage: readiness(total, unmet),
            total_skills_required: total,
            skills_met: total - unmet,
            high_priority_gaps,
        }
    }

    fn gap(
        &self,
        skill_name: &str,
        held_level: Option<SkillLevel>,
        required: SkillLevel,
        target_position: &str,
    ) -> SkillGap {
        let current = held_level.unwrap_or(SkillLevel::Beginner);
        let level_gap = current.gap_to(required);
        let critical = self.reference.is_critical_skill(skill_name);
        SkillGap {
            skill_name: skill_name.to_string(),
            current_level: current,
            required_level: required,
            priority: skill_priority(critical, urgency_gap(critical, held_level, level_gap)),
            reasoning: gap_reasoning(skill_name, current, required, target_position),
            category: self.reference.skill_category(skill_name).to_string(),
            estimated_learning_months: learning_months(level_gap),
            recommended_resources: self.reference.learning_resources(skill_name).to_vec(),
            importance_score: importance(skill_name, target_position),
        }
    }
}

/// Level gap used for priority.
///
/// A critical skill missing from the profile counts one level below a held
/// Beginner skill, so an absent Leadership requirement at Advanced ranks 5
/// while the plain table would give it 4. Every other gap is the ordinal
/// distance, so an absent non-critical skill ranks exactly like a held
/// Beginner one.
fn urgency_gap(critical: bool, held_level: Option<SkillLevel>, level_gap: i32) -> i32 {
    if critical && held_level.is_none() {
        level_gap + 1
    } else {
        level_gap
    }
}

/// Priority from the level gap; critical skills rank one step higher.
pub fn skill_priority(critical: bool, level_gap: i32) -> Priority {
    let value = match (level_gap, critical) {
        (g, true) if g >= 3 => 5,
        (g, false) if g >= 3 => 4,
        (2, true) => 4,
        (2, false) => 3,
        (1, true) => 3,
        (1, false) => 2,
        _ => 1,
    };
    Priority::new(value)
}

fn learning_months(level_gap: i32) -> u32 {
    match level_gap {
        1 => 2,
        2 => 4,
        3 => 6,
        _ => 8,
    }
}

/// Months to close every gap, clamped to 3..=24.
pub fn estimate_months(missing: &[SkillGap], improve: &[SkillGap]) -> u32 {
    let levels = |gaps: &[SkillGap]| -> u32 {
        gaps.iter()
            .map(|g| u32::try_from(g.level_gap()).unwrap_or(0))
            .sum()
    };
    let raw =
        levels(missing) * MISSING_MONTHS_PER_LEVEL + levels(improve) * IMPROVE_MONTHS_PER_LEVEL;
    raw.clamp(MIN_ESTIMATE_MONTHS, MAX_ESTIMATE_MONTHS)
}

fn readiness(total: usize, unmet: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (total - unmet) as f64 * 100.0 / total as f64
}

fn importance(skill_name: &str, target_position: &str) -> Confidence {
    let skill = skill_name.to_lowercase();
    let target = target_position.to_lowercase();

    if (target.contains("senior") || target.contains("lead"))
        && (skill.contains("leadership") || skill.contains("communication"))
    {
        return Confidence::new(0.9);
    }
    if target.contains("architect") && (skill.contains("design") || skill.contains("architecture")) {
        return Confidence::new(0.95);
    }
    let score = if skill.contains("c#") || skill.contains("javascript") {
        0.8
    } else if skill.contains("leadership") {
        0.75
    } else if skill.contains("cloud") {
        0.85
    } else {
        0.5
    };
    Confidence::new(score)
}

fn gap_reasoning(
    skill_name: &str,
    current: SkillLevel,
    required: SkillLevel,
    target: &str,
) -> String {
    let skill = skill_name.to_lowercase();
    if skill.contains("leadership") {
        format!(
            "{target} roles depend on strong leadership. Growing from {current} to {required} prepares you to guide teams."
        )
    } else if skill.contains("communication") {
        format!(
            "Clear communication is central to {target} work. Moving from {current} to {required} improves how you work with stakeholders."
        )
    } else if skill.contains("system design") || skill.contains("architecture") {
        format!(
            "{target} requires solid design judgement. Advancing from {current} to {required} lets you shape scalable systems."
        )
    } else if skill.contains("c#") || skill.contains("javascript") {
        format!(
            "{target} expects strong {skill_name}. Going from {current} to {required} deepens your technical range."
        )
    } else if skill.contains("cloud") {
        format!(
            "Cloud skills matter more every year for {target} roles. Reaching {required} from {current} keeps you competitive."
        )
    } else {
        format!(
            "{target} needs {skill_name} at {required}. Your current {current} level falls short of that expectation."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerpath_test_utils::employee;

    fn analyzer(reference: &ReferenceData) -> SkillGapAnalyzer<'_> {
        SkillGapAnalyzer::new(reference)
    }

    #[test]
    fn test_software_developer_to_senior_engineer() {
        let reference = ReferenceData::builtin();
        let e = employee(1, "Software Developer", "Engineering", 3)
            .skill(1, "C#", "Programming", SkillLevel::Intermediate)
            .build();

        let analysis = analyzer(&reference).analyze(&e, "Senior Software Engineer");

        let leadership = analysis.gap_for("Leadership").unwrap();
        assert!(analysis.missing_skills.iter().any(|g| g.skill_name == "Leadership"));
        assert_eq!(leadership.current_level, SkillLevel::Beginner);
        assert_eq!(leadership.required_level, SkillLevel::Advanced);
        assert_eq!(leadership.priority, Priority::MAX);
        assert_eq!(leadership.importance_score.value(), 0.9);

        let csharp = analysis
            .skills_to_improve
            .iter()
            .find(|g| g.skill_name == "C#")
            .unwrap();
        assert_eq!(csharp.current_level, SkillLevel::Intermediate);
        assert_eq!(csharp.required_level, SkillLevel::Advanced);
        assert_eq!(csharp.priority.value(), 2);
        assert_eq!(csharp.estimated_learning_months, 2);
        assert_eq!(csharp.category, "Programming");

        assert_eq!(analysis.total_skills_required, 8);
        assert_eq!(analysis.skills_met, 0);
        assert_eq!(analysis.readiness_percentage, 0.0);
        // missing: 2+2+1+2+2+1+2 levels at 2 months each, improve: 1 level
        assert_eq!(analysis.estimated_months, 24);
    }

    #[test]
    fn test_no_gap_for_satisfied_skills() {
        let reference = ReferenceData::builtin();
        let e = employee(1, "Developer", "Engineering", 6)
            .skill(1, "C#", "Programming", SkillLevel::Expert)
            .skill(2, "JavaScript", "Programming", SkillLevel::Intermediate)
            .skill(3, "SQL", "Database", SkillLevel::Advanced)
            .skill(4, "Problem Solving", "General", SkillLevel::Intermediate)
            .build();

        let analysis = analyzer(&reference).analyze(&e, "Developer");
        assert_eq!(analysis.total_skills_required, 5);
        assert_eq!(analysis.skills_met, 4);
        assert!(analysis.skills_to_improve.is_empty());
        assert_eq!(analysis.missing_skills.len(), 1);
        assert_eq!(analysis.missing_skills[0].skill_name, "Communication");
        assert_eq!(analysis.readiness_percentage, 80.0);
        // a single missing level at 2 months clamps up to the minimum
        assert_eq!(analysis.estimated_months, 3);
    }

    #[test]
    fn test_absent_plain_skill_ranks_like_held_beginner() {
        let reference = ReferenceData::builtin();
        let held = employee(1, "Developer", "Engineering", 2)
            .skill(1, "SQL", "Database", SkillLevel::Beginner)
            .build();
        let absent = employee(2, "Developer", "Engineering", 2).build();

        let a = analyzer(&reference).analyze(&held, "Developer");
        let b = analyzer(&reference).analyze(&absent, "Developer");
        assert_eq!(a.gap_for("SQL").unwrap().priority.value(), 2);
        assert_eq!(b.gap_for("SQL").unwrap().priority.value(), 2);
        assert!(a.missing_skills.iter().any(|g| g.skill_name == "SQL"));
        assert!(b.missing_skills.iter().any(|g| g.skill_name == "SQL"));
    }

    #[test]
    fn test_absent_critical_skill_ranks_above_held_beginner() {
        let reference = ReferenceData::builtin();
        let held = employee(1, "Software Developer", "Engineering", 3)
            .skill(1, "Leadership", "Soft Skills", SkillLevel::Beginner)
            .build();
        let absent = employee(2, "Software Developer", "Engineering", 3).build();

        let a = analyzer(&reference).analyze(&held, "Senior Software Engineer");
        let b = analyzer(&reference).analyze(&absent, "Senior Software Engineer");
        assert_eq!(a.gap_for("Leadership").unwrap().priority.value(), 4);
        assert_eq!(b.gap_for("Leadership").unwrap().priority, Priority::MAX);
        assert_eq!(
            a.gap_for("Leadership").unwrap().estimated_learning_months,
            b.gap_for("Leadership").unwrap().estimated_learning_months
        );
    }

    #[test]
    fn test_lists_sorted_by_priority() {
        let reference = ReferenceData::builtin();
        let e = employee(1, "Tech Lead", "Engineering", 9).build();
        let analysis = analyzer(&reference).analyze(&e, "Engineering Manager");
        assert!(analysis
            .missing_skills
            .windows(2)
            .all(|w| w[0].priority >= w[1].priority));
        // Leadership, Communication, Project and Team Management are three levels short
        assert_eq!(analysis.high_priority_gaps, 4);
    }

    #[test]
    fn test_priority_table() {
        assert_eq!(skill_priority(true, 3).value(), 5);
        assert_eq!(skill_priority(false, 4).value(), 4);
        assert_eq!(skill_priority(true, 2).value(), 4);
        assert_eq!(skill_priority(false, 2).value(), 3);
        assert_eq!(skill_priority(true, 1).value(), 3);
        assert_eq!(skill_priority(false, 1).value(), 2);
        assert_eq!(skill_priority(true, 0).value(), 1);
    }

    #[test]
    fn test_importance_rules() {
        assert_eq!(importance("Communication", "Team Lead").value(), 0.9);
        assert_eq!(importance("System Design", "Solutions Architect").value(), 0.95);
        assert_eq!(importance("JavaScript", "Developer").value(), 0.8);
        assert_eq!(importance("Leadership", "Engineering Manager").value(), 0.75);
        assert_eq!(importance("Cloud Computing", "Developer").value(), 0.85);
        assert_eq!(importance("Budgeting", "Engineering Manager").value(), 0.5);
    }

    #[test]
    fn test_analysis_is_deterministic_for_fixed_date() {
        let reference = ReferenceData::builtin();
        let e = employee(1, "Frontend Developer", "Engineering", 4)
            .skill(1, "JavaScript", "Programming", SkillLevel::Advanced)
            .skill(2, "React", "Frontend", SkillLevel::Intermediate)
            .build();
        let now = Utc::now();
        let first = analyzer(&reference).analyze_at(&e, "Full Stack Developer", now);
        let second = analyzer(&reference).analyze_at(&e, "Full Stack Developer", now);
        assert_eq!(first, second);
    }
}
