//! Project match scoring.

use super::{EmployeeSnapshot, MatchSignal, ScoredCandidate, Scorer, Selection};
use crate::reference::ReferenceData;
use careerpath_domain::{Confidence, Priority, ProjectCandidate};

const MATCH_WEIGHT: f64 = 0.40;
const GROWTH_WEIGHT: f64 = 0.30;
const SAME_DEPARTMENT_WEIGHT: f64 = 0.20;
const RELATED_DEPARTMENT_WEIGHT: f64 = 0.10;
const TIMING_WEIGHT: f64 = 0.10;

const NO_REQUIREMENTS_MATCH: f64 = 0.8;
const NO_REQUIREMENTS_GROWTH: f64 = 0.5;
/// Above this share of unmet skills the project is a poor fit, not an opportunity.
const GROWTH_OVERLOAD: f64 = 0.7;
const OVERLOADED_GROWTH: f64 = 0.3;

/// Scores open projects by skill fit, room to grow and department proximity.
pub struct ProjectScorer<'r> {
    reference: &'r ReferenceData,
    selection: Selection,
}

impl<'r> ProjectScorer<'r> {
    pub fn new(reference: &'r ReferenceData, selection: Selection) -> Self {
        Self {
            reference,
            selection,
        }
    }
}

/// Returns `(match_fraction, growth_fraction)` over the project's skill requirements.
fn skill_fit(employee: &EmployeeSnapshot<'_>, project: &ProjectCandidate) -> (f64, f64) {
    let total = project.required_skills.len();
    if total == 0 {
        return (NO_REQUIREMENTS_MATCH, NO_REQUIREMENTS_GROWTH);
    }
    let met = project
        .required_skills
        .iter()
        .filter(|(skill_id, req)| {
            employee
                .levels_by_id
                .get(skill_id)
                .is_some_and(|level| *level >= req.required_level)
        })
        .count();
    let matched = met as f64 / total as f64;
    let unmet = (total - met) as f64 / total as f64;
    let growth = if unmet > GROWTH_OVERLOAD {
        OVERLOADED_GROWTH
    } else {
        unmet
    };
    (matched, growth)
}

impl Scorer for ProjectScorer<'_> {
    type Item = ProjectCandidate;

    const FALLBACK_REASON: &'static str = "Suitable for your skill level.";

    fn eligible(&self, _employee: &EmployeeSnapshot<'_>, project: &ProjectCandidate) -> bool {
        project.accepts_members()
    }

    fn score<'p>(
        &self,
        employee: &EmployeeSnapshot<'_>,
        project: &'p ProjectCandidate,
    ) -> ScoredCandidate<'p, ProjectCandidate> {
        let mut score = 0.0;
        let mut signals = Vec::new();

        let (matched, growth) = skill_fit(employee, project);
        score += matched * MATCH_WEIGHT;
        if matched > 0.7 {
            signals.push(MatchSignal::ExcellentSkillMatch { fraction: matched });
        } else if matched > 0.5 {
            signals.push(MatchSignal::GoodSkillMatch { fraction: matched });
        }

        score += growth * GROWTH_WEIGHT;
        if growth > 0.6 {
            signals.push(MatchSignal::LearningOpportunities);
        }

        let department = &employee.profile.department;
        if project.department == *department {
            score += SAME_DEPARTMENT_WEIGHT;
            signals.push(MatchSignal::WithinDepartment);
        } else if self
            .reference
            .is_related_department(&project.department, department)
        {
            score += RELATED_DEPARTMENT_WEIGHT;
            signals.push(MatchSignal::CrossFunctional);
        }

        if project.status.is_open() {
            score += TIMING_WEIGHT;
            signals.push(MatchSignal::OpenForJoining);
        }

        ScoredCandidate::new(project, score, signals)
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn priority(
        &self,
        _employee: &EmployeeSnapshot<'_>,
        candidate: &ScoredCandidate<'_, ProjectCandidate>,
    ) -> Priority {
        let score = candidate.score;
        if score > 0.9 {
            Priority::MAX
        } else if score > 0.7 {
            Priority::new(4)
        } else if score > 0.5 {
            Priority::new(3)
        } else {
            Priority::new(2)
        }
    }

    fn confidence(&self, score: f64) -> Confidence {
        Confidence::scaled(score, 0.7, 0.3, 0.95)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringThresholds;
    use careerpath_domain::{EmployeeProfile, ProjectId, ProjectStatus, SkillLevel};
    use careerpath_test_utils::{employee, project};

    fn scorer(reference: &ReferenceData) -> ProjectScorer<'_> {
        ProjectScorer::new(reference, ScoringThresholds::default().project)
    }

    fn backend_dev() -> EmployeeProfile {
        employee(1, "Backend Developer", "Engineering", 4)
            .skill(1, "C#", "Programming", SkillLevel::Advanced)
            .skill(2, "SQL", "Database", SkillLevel::Intermediate)
            .build()
    }

    #[test]
    fn test_partial_match_in_department() {
        let reference = ReferenceData::builtin();
        let e = backend_dev();
        let snap = EmployeeSnapshot::new(&e);
        let p = project(
            1,
            "Billing Rewrite",
            "Engineering",
            ProjectStatus::Active,
            &[(1, SkillLevel::Advanced), (2, SkillLevel::Advanced)],
        );

        let scored = scorer(&reference).score(&snap, &p);
        // match 0.5 * 0.4 + growth 0.5 * 0.3 + dept 0.2 + timing 0.1
        assert!((scored.score - 0.65).abs() < 1e-9);
        assert_eq!(
            scored.signals,
            vec![MatchSignal::WithinDepartment, MatchSignal::OpenForJoining]
        );
        assert_eq!(scorer(&reference).priority(&snap, &scored).value(), 3);
    }

    #[test]
    fn test_no_requirements_defaults() {
        let reference = ReferenceData::builtin();
        let e = backend_dev();
        let snap = EmployeeSnapshot::new(&e);
        let p = project(2, "Hack Week", "Security", ProjectStatus::Planning, &[]);

        let scored = scorer(&reference).score(&snap, &p);
        // 0.8 * 0.4 + 0.5 * 0.3 + related 0.1 + timing 0.1
        assert!((scored.score - 0.67).abs() < 1e-9);
        assert!(matches!(
            scored.signals[0],
            MatchSignal::ExcellentSkillMatch { .. }
        ));
    }

    #[test]
    fn test_growth_is_capped_when_most_skills_are_missing() {
        let e = backend_dev();
        let snap = EmployeeSnapshot::new(&e);
        let p = project(
            3,
            "ML Platform",
            "Engineering",
            ProjectStatus::Active,
            &[
                (7, SkillLevel::Advanced),
                (8, SkillLevel::Advanced),
                (9, SkillLevel::Advanced),
                (10, SkillLevel::Advanced),
            ],
        );
        let (matched, growth) = skill_fit(&snap, &p);
        assert_eq!(matched, 0.0);
        assert_eq!(growth, 0.3);
    }

    #[test]
    fn test_closed_or_full_projects_are_skipped() {
        let reference = ReferenceData::builtin();
        let e = backend_dev();
        let snap = EmployeeSnapshot::new(&e);
        let mut full = project(
            4,
            "Full",
            "Engineering",
            ProjectStatus::Active,
            &[(1, SkillLevel::Advanced)],
        );
        full.open_seats = 0;
        let pool = vec![
            project(5, "Done", "Engineering", ProjectStatus::Completed, &[]),
            project(6, "Paused", "Engineering", ProjectStatus::OnHold, &[]),
            full,
            project(
                7,
                "Open",
                "Engineering",
                ProjectStatus::Planning,
                &[(1, SkillLevel::Intermediate)],
            ),
        ];

        let ranked = scorer(&reference).rank(&snap, &pool);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item.id, ProjectId(7));
    }

    #[test]
    fn test_inclusive_cutoff_and_top_n() {
        let reference = ReferenceData::builtin();
        let e = employee(1, "Designer", "Design", 2).build();
        let snap = EmployeeSnapshot::new(&e);
        // 0.8 * 0.4 + 0.5 * 0.3 = 0.47, + timing 0.1 = 0.57 for each
        let pool: Vec<ProjectCandidate> = (1..=6)
            .map(|i| project(i, &format!("P{i}"), "Legal", ProjectStatus::Active, &[]))
            .collect();

        let ranked = scorer(&reference).rank(&snap, &pool);
        assert_eq!(ranked.len(), 4);
        let ids: Vec<u64> = ranked.iter().map(|c| c.item.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
