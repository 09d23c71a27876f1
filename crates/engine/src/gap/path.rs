//! Learning path text, milestones and next actions derived from a gap list.

use careerpath_domain::{CareerMilestone, SkillGap};
use std::fmt::Write as _;

const LISTED_PER_PHASE: usize = 3;

const FOUNDATION_STEPS: &[&str] = &[
    "Focus on closing the high-priority skill gaps first",
    "Enroll in foundational courses for the missing skills",
    "Practice daily with small hands-on exercises",
];

const ENHANCEMENT_STEPS: &[&str] = &[
    "Apply new skills in real project work",
    "Pair with a mentor for guidance and feedback",
    "Take intermediate to advanced courses",
];

const MASTERY_STEPS: &[&str] = &[
    "Lead initiatives that use the newly acquired skills",
    "Mentor others to reinforce what you learned",
    "Pursue relevant certifications",
    "Build a portfolio that demonstrates the target-role skills",
];

const HABITS: &[&str] = &[
    "Schedule weekly skill review sessions",
    "Join practice projects that exercise the target-role skills",
    "Connect with professional communities for your target role",
];

/// Three-phase plan listing the top missing and top partial skills.
pub fn learning_path(missing: &[SkillGap], improve: &[SkillGap]) -> String {
    let mut out = String::new();

    out.push_str("Phase 1: Foundation Building (Months 1-3)\n");
    push_steps(&mut out, FOUNDATION_STEPS);
    if !missing.is_empty() {
        out.push_str("\nCritical skills to acquire:\n");
        push_gaps(&mut out, missing);
    }

    out.push_str("\nPhase 2: Skill Enhancement (Months 4-6)\n");
    push_steps(&mut out, ENHANCEMENT_STEPS);
    if !improve.is_empty() {
        out.push_str("\nSkills to enhance:\n");
        push_gaps(&mut out, improve);
    }

    out.push_str("\nPhase 3: Mastery & Application (Months 7+)\n");
    push_steps(&mut out, MASTERY_STEPS);
    out
}

fn push_steps(out: &mut String, steps: &[&str]) {
    for step in steps {
        let _ = writeln!(out, "• {step}");
    }
}

fn push_gaps(out: &mut String, gaps: &[SkillGap]) {
    for gap in gaps.iter().take(LISTED_PER_PHASE) {
        let _ = writeln!(
            out,
            "• {}: {} → {}",
            gap.skill_name, gap.current_level, gap.required_level
        );
    }
}

/// Four checkpoints spread over `total_months`.
///
/// Checkpoint `i` falls in month `ceil(total_months * i / 4)`, so months never
/// decrease and the last one lands on the estimate itself.
pub fn milestones(
    missing: &[SkillGap],
    improve: &[SkillGap],
    total_months: u32,
) -> Vec<CareerMilestone> {
    let mut ranked: Vec<&SkillGap> = missing.iter().chain(improve.iter()).collect();
    ranked.sort_by(|a, b| b.priority.cmp(&a.priority));

    let month = |quarter: u32| (total_months * quarter).div_ceil(4);

    vec![
        CareerMilestone {
            month: month(1),
            title: "Foundations in Place".to_string(),
            description: "Basic skill development done and practical application started"
                .to_string(),
            skills_to_complete: skill_names(
                ranked
                    .iter()
                    .copied()
                    .filter(|g| g.priority.value() >= 4)
                    .take(3),
            ),
            completed: false,
        },
        CareerMilestone {
            month: month(2),
            title: "Working Proficiency".to_string(),
            description: "Improved skills demonstrated in real project work".to_string(),
            skills_to_complete: skill_names(ranked.iter().copied().skip(3).take(3)),
            completed: false,
        },
        CareerMilestone {
            month: month(3),
            title: "Applied Expertise".to_string(),
            description: "Leading initiatives with the newly acquired skills".to_string(),
            skills_to_complete: skill_names(ranked.iter().copied().skip(6).take(2)),
            completed: false,
        },
        CareerMilestone {
            month: total_months,
            title: "Ready for Target Role".to_string(),
            description: "All skill gaps addressed and prepared for the role transition"
                .to_string(),
            skills_to_complete: vec!["All target skills mastered".to_string()],
            completed: false,
        },
    ]
}

fn skill_names<'a>(gaps: impl Iterator<Item = &'a SkillGap>) -> Vec<String> {
    gaps.map(|g| g.skill_name.clone()).collect()
}

/// Concrete next steps: the top gap of each list followed by standing habits.
pub fn action_items(missing: &[SkillGap], improve: &[SkillGap]) -> Vec<String> {
    let mut items = Vec::with_capacity(HABITS.len() + 2);
    if let Some(top) = missing.first() {
        items.push(format!(
            "Start learning {} now, it is your highest-priority gap",
            top.skill_name
        ));
    }
    if let Some(top) = improve.first() {
        items.push(format!(
            "Find a mentor or advanced course for {}",
            top.skill_name
        ));
    }
    items.extend(HABITS.iter().map(|h| h.to_string()));
    items
}
