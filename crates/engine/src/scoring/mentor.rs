//! Mentor eligibility scoring.

use super::{EmployeeSnapshot, MatchSignal, ScoredCandidate, Scorer, Selection};
use crate::reference::ReferenceData;
use careerpath_domain::{Confidence, EmployeeProfile, Priority, SkillId, SkillLevel};
use std::collections::HashMap;

const MIN_EXPERIENCE_GAP: i64 = 3;
const MAX_FOCUSED_GAP: i64 = 8;
const FOCUSED_GAP_WEIGHT: f64 = 0.30;
const WIDE_GAP_WEIGHT: f64 = 0.20;
const SAME_DEPARTMENT_WEIGHT: f64 = 0.30;
const RELATED_DEPARTMENT_WEIGHT: f64 = 0.20;
const ADVANCEMENT_WEIGHT: f64 = 0.40;

/// Scores senior colleagues on the employee's career track as mentors.
pub struct MentorScorer<'r> {
    reference: &'r ReferenceData,
    selection: Selection,
}

impl<'r> MentorScorer<'r> {
    pub fn new(reference: &'r ReferenceData, selection: Selection) -> Self {
        Self {
            reference,
            selection,
        }
    }

    /// Whether `mentor` sits on a position the employee can progress into.
    ///
    /// Unmapped positions fall back to same department with strictly more
    /// seniority keywords in the mentor's title.
    pub fn on_same_track(&self, mentor: &EmployeeProfile, employee: &EmployeeProfile) -> bool {
        match self.reference.progression_from(&employee.position) {
            Some(reachable) => reachable.iter().any(|p| *p == mentor.position),
            None => {
                mentor.department == employee.department
                    && self.reference.seniority_signal(&mentor.position)
                        > self.reference.seniority_signal(&employee.position)
            }
        }
    }
}

/// Share of shared skills where the mentor is ahead of the employee.
fn advancement_potential(
    mentor: &EmployeeProfile,
    employee_levels: &HashMap<SkillId, SkillLevel>,
) -> f64 {
    let (ahead, shared) = mentor
        .skills
        .iter()
        .filter_map(|skill| {
            employee_levels
                .get(&skill.skill_id)
                .map(|own| skill.level > *own)
        })
        .fold((0usize, 0usize), |(ahead, shared), is_ahead| {
            (ahead + usize::from(is_ahead), shared + 1)
        });
    if shared == 0 {
        0.0
    } else {
        ahead as f64 / shared as f64
    }
}

impl Scorer for MentorScorer<'_> {
    type Item = EmployeeProfile;

    const FALLBACK_REASON: &'static str = "Same career track mentor opportunity.";

    fn eligible(&self, employee: &EmployeeSnapshot<'_>, mentor: &EmployeeProfile) -> bool {
        mentor.id != employee.profile.id && mentor.years_of_experience > employee.years()
    }

    fn score<'p>(
        &self,
        employee: &EmployeeSnapshot<'_>,
        mentor: &'p EmployeeProfile,
    ) -> ScoredCandidate<'p, EmployeeProfile> {
        let profile = employee.profile;
        if !self.on_same_track(mentor, profile) {
            return ScoredCandidate::disqualified(mentor, MatchSignal::OffTrack);
        }

        let gap = i64::from(mentor.years_of_experience) - i64::from(profile.years_of_experience);
        if gap < MIN_EXPERIENCE_GAP {
            return ScoredCandidate::disqualified(mentor, MatchSignal::InsufficientExperienceGap);
        }

        let mut score = 0.0;
        let mut signals = Vec::new();
        let years = u32::try_from(gap).unwrap_or(u32::MAX);

        if gap <= MAX_FOCUSED_GAP {
            score += FOCUSED_GAP_WEIGHT;
            signals.push(MatchSignal::ExperienceGap { years });
        } else {
            score += WIDE_GAP_WEIGHT;
            signals.push(MatchSignal::SeniorMentor { years });
        }

        if mentor.department == profile.department {
            score += SAME_DEPARTMENT_WEIGHT;
            signals.push(MatchSignal::SameDepartmentTrack);
        } else if self
            .reference
            .is_related_department(&mentor.department, &profile.department)
        {
            score += RELATED_DEPARTMENT_WEIGHT;
            signals.push(MatchSignal::RelatedDepartmentTrack);
        }

        let potential = advancement_potential(mentor, &employee.levels_by_id);
        score += potential * ADVANCEMENT_WEIGHT;
        if potential > 0.7 {
            signals.push(MatchSignal::StrongAdvancement);
        } else if potential > 0.4 {
            signals.push(MatchSignal::GoodAdvancement);
        }

        ScoredCandidate::new(mentor, score, signals)
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn priority(
        &self,
        employee: &EmployeeSnapshot<'_>,
        candidate: &ScoredCandidate<'_, EmployeeProfile>,
    ) -> Priority {
        let score = candidate.score;
        let same_department = candidate.item.department == employee.profile.department;
        if score > 0.8 || (score > 0.6 && same_department) {
            Priority::MAX
        } else if score > 0.5 {
            Priority::new(4)
        } else {
            Priority::new(3)
        }
    }

    fn confidence(&self, score: f64) -> Confidence {
        Confidence::scaled(score, 0.65, 0.35, 0.92)
    }
}
