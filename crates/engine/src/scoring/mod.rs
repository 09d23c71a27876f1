//! Threshold-gated candidate scoring.
//!
//! Each scorer maps candidates to a relevance score in `[0, 1]` plus the
//! [`MatchSignal`]s that produced it. Ranking is a map-then-filter-then-sort
//! pipeline; only the map step runs in parallel.

mod course;
mod explainer;
mod mentor;
mod project;

pub use course::CourseScorer;
pub use explainer::{explain, MatchSignal};
pub use mentor::MentorScorer;
pub use project::ProjectScorer;

use careerpath_domain::{
    CandidateRef, Confidence, Course, EmployeeProfile, Priority, ProjectCandidate,
    RecommendationTarget, SkillId, SkillLevel,
};
use careerpath_state::ThresholdOverrides;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Read-only view of the employee a run is scoring for.
#[derive(Debug)]
pub struct EmployeeSnapshot<'a> {
    pub profile: &'a EmployeeProfile,
    pub levels_by_id: HashMap<SkillId, SkillLevel>,
    pub categories: HashSet<&'a str>,
}

impl<'a> EmployeeSnapshot<'a> {
    pub fn new(profile: &'a EmployeeProfile) -> Self {
        Self {
            profile,
            levels_by_id: profile.skill_levels_by_id(),
            categories: profile.skills.iter().map(|s| s.category.as_str()).collect(),
        }
    }

    pub fn years(&self) -> u32 {
        self.profile.years_of_experience
    }
}

/// A candidate with its relevance score. Never persisted.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a, T> {
    pub item: &'a T,
    /// Clamped to `[0, 1]`.
    pub score: f64,
    pub signals: Vec<MatchSignal>,
}

impl<'a, T> ScoredCandidate<'a, T> {
    pub fn new(item: &'a T, score: f64, signals: Vec<MatchSignal>) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 1.0)
        };
        Self {
            item,
            score,
            signals,
        }
    }

    /// A hard disqualification: score zero, one explanatory signal.
    pub fn disqualified(item: &'a T, signal: MatchSignal) -> Self {
        Self {
            item,
            score: 0.0,
            signals: vec![signal],
        }
    }

    /// Human-readable reason, or `fallback` when no signal fired.
    pub fn reason(&self, fallback: &str) -> String {
        explain(&self.signals, fallback)
    }
}

/// Inclusion cutoff and top-N limit for one scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub min_score: f64,
    /// Whether a score equal to `min_score` is kept.
    pub inclusive: bool,
    pub top_n: usize,
}

impl Selection {
    pub fn admits(&self, score: f64) -> bool {
        if self.inclusive {
            score >= self.min_score
        } else {
            score > self.min_score
        }
    }
}

/// Cutoffs for all three scorers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringThresholds {
    pub course: Selection,
    pub mentor: Selection,
    pub project: Selection,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            course: Selection {
                min_score: 0.3,
                inclusive: false,
                top_n: 5,
            },
            mentor: Selection {
                min_score: 0.4,
                inclusive: false,
                top_n: 3,
            },
            project: Selection {
                min_score: 0.5,
                inclusive: true,
                top_n: 4,
            },
        }
    }
}

impl ScoringThresholds {
    /// Applies configured overrides on top of these cutoffs.
    pub fn with_overrides(mut self, overrides: &ThresholdOverrides) -> Self {
        fn apply(sel: &mut Selection, min: Option<f64>, top: Option<usize>) {
            if let Some(min) = min {
                sel.min_score = min;
            }
            if let Some(top) = top {
                sel.top_n = top;
            }
        }
        apply(
            &mut self.course,
            overrides.course_min_score,
            overrides.course_top_n,
        );
        apply(
            &mut self.mentor,
            overrides.mentor_min_score,
            overrides.mentor_top_n,
        );
        apply(
            &mut self.project,
            overrides.project_min_score,
            overrides.project_top_n,
        );
        self
    }
}

/// A catalog item that can become a [`careerpath_domain::Recommendation`].
pub trait Recommendable {
    fn target(&self) -> RecommendationTarget;
    fn title(&self) -> String;
    fn description(&self) -> String;
    fn as_candidate(&self) -> CandidateRef<'_>;
}

impl Recommendable for Course {
    fn target(&self) -> RecommendationTarget {
        RecommendationTarget::Course(self.id)
    }

    fn title(&self) -> String {
        format!("Complete: {}", self.title)
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn as_candidate(&self) -> CandidateRef<'_> {
        CandidateRef::Course(self)
    }
}

impl Recommendable for EmployeeProfile {
    fn target(&self) -> RecommendationTarget {
        RecommendationTarget::Mentor(self.id)
    }

    fn title(&self) -> String {
        format!("Connect with: {}", self.name)
    }

    fn description(&self) -> String {
        format!(
            "{} in {} • {} years experience",
            self.position, self.department, self.years_of_experience
        )
    }

    fn as_candidate(&self) -> CandidateRef<'_> {
        CandidateRef::Mentor(self)
    }
}

impl Recommendable for ProjectCandidate {
    fn target(&self) -> RecommendationTarget {
        RecommendationTarget::Project(self.id)
    }

    fn title(&self) -> String {
        format!("Join Project: {}", self.name)
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn as_candidate(&self) -> CandidateRef<'_> {
        CandidateRef::Project(self)
    }
}

/// Scores one kind of candidate against an employee.
pub trait Scorer: Sync {
    type Item: Recommendable + Sync;

    /// Reason used when no signal fired.
    const FALLBACK_REASON: &'static str;

    /// Pre-filter applied before scoring. Ineligible items are never scored.
    fn eligible(&self, _employee: &EmployeeSnapshot<'_>, _item: &Self::Item) -> bool {
        true
    }

    fn score<'p>(
        &self,
        employee: &EmployeeSnapshot<'_>,
        item: &'p Self::Item,
    ) -> ScoredCandidate<'p, Self::Item>;

    fn selection(&self) -> Selection;

    fn priority(
        &self,
        employee: &EmployeeSnapshot<'_>,
        candidate: &ScoredCandidate<'_, Self::Item>,
    ) -> Priority;

    fn confidence(&self, score: f64) -> Confidence;

    /// Scores the pool in parallel, then keeps the admitted candidates in
    /// descending score order, at most `top_n` of them.
    ///
    /// Ties keep pool order.
    fn rank<'p>(
        &self,
        employee: &EmployeeSnapshot<'_>,
        pool: &'p [Self::Item],
    ) -> Vec<ScoredCandidate<'p, Self::Item>> {
        let selection = self.selection();
        let mut scored: Vec<ScoredCandidate<'p, Self::Item>> = pool
            .par_iter()
            .filter(|item| self.eligible(employee, item))
            .map(|item| self.score(employee, item))
            .collect();
        scored.retain(|c| selection.admits(c.score));
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(selection.top_n);
        scored
    }
}
