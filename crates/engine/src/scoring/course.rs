//! Course relevance scoring.

use super::{EmployeeSnapshot, MatchSignal, ScoredCandidate, Scorer, Selection};
use crate::reference::ReferenceData;
use careerpath_domain::{Confidence, Course, CourseId, Priority};
use std::collections::HashSet;

const CATEGORY_MATCH_WEIGHT: f64 = 0.30;
const CAREER_BOOST_WEIGHT: f64 = 0.25;
const QUALITY_WEIGHT: f64 = 0.20;
const DURATION_WEIGHT: f64 = 0.15;
const HIGH_DEMAND_WEIGHT: f64 = 0.10;

/// Scores unenrolled courses by category fit, career relevance, quality,
/// length and market demand.
pub struct CourseScorer<'r> {
    reference: &'r ReferenceData,
    selection: Selection,
    enrolled: HashSet<CourseId>,
}

impl<'r> CourseScorer<'r> {
    pub fn new(reference: &'r ReferenceData, selection: Selection) -> Self {
        Self {
            reference,
            selection,
            enrolled: HashSet::new(),
        }
    }

    /// Excludes courses the employee is already enrolled in.
    pub fn excluding(mut self, enrolled: impl IntoIterator<Item = CourseId>) -> Self {
        self.enrolled.extend(enrolled);
        self
    }

    fn duration_fit(&self, duration_hours: u32, years: u32) -> f64 {
        let optimal = f64::from(self.reference.optimal_course_hours(years));
        let difference = (f64::from(duration_hours) - optimal).abs();
        (1.0 - difference / optimal).max(0.0)
    }

    fn base_priority(course: &Course) -> u8 {
        if course.category.contains("AI") || course.category.contains("Cloud") {
            5
        } else if course.rating >= 4.5 {
            4
        } else if course.rating >= 4.0 {
            3
        } else {
            2
        }
    }

    fn is_leadership_track(category: &str, position: &str) -> bool {
        category.contains("Leadership")
            || category.contains("Management")
            || (position.contains("Senior") && category.contains("Soft Skills"))
    }
}

impl Scorer for CourseScorer<'_> {
    type Item = Course;

    const FALLBACK_REASON: &'static str = "Relevant to your professional development.";

    fn eligible(&self, _employee: &EmployeeSnapshot<'_>, course: &Course) -> bool {
        !self.enrolled.contains(&course.id)
    }

    fn score<'p>(
        &self,
        employee: &EmployeeSnapshot<'_>,
        course: &'p Course,
    ) -> ScoredCandidate<'p, Course> {
        let profile = employee.profile;
        let mut score = 0.0;
        let mut signals = Vec::new();

        if employee.categories.contains(course.category.as_str()) {
            score += CATEGORY_MATCH_WEIGHT;
            signals.push(MatchSignal::CategoryExpertise {
                category: course.category.clone(),
            });
        }

        let boost = self
            .reference
            .career_boost_categories(&profile.position, profile.years_of_experience);
        if boost.contains(course.category.as_str()) {
            score += CAREER_BOOST_WEIGHT;
            signals.push(MatchSignal::CareerBoost {
                position: profile.position.clone(),
            });
        }

        score += (course.rating / 5.0) * QUALITY_WEIGHT;
        if course.rating >= 4.5 {
            signals.push(MatchSignal::HighlyRated {
                rating: course.rating,
            });
        }

        let fit = self.duration_fit(course.duration_hours, profile.years_of_experience);
        score += fit * DURATION_WEIGHT;
        if fit > 0.7 {
            signals.push(MatchSignal::DurationFit);
        }

        if self.reference.is_high_demand(&course.category, &course.title) {
            score += HIGH_DEMAND_WEIGHT;
            signals.push(MatchSignal::HighDemand);
        }

        ScoredCandidate::new(course, score, signals)
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn priority(
        &self,
        employee: &EmployeeSnapshot<'_>,
        candidate: &ScoredCandidate<'_, Course>,
    ) -> Priority {
        let course = candidate.item;
        let score = candidate.score;
        let base = Priority::new(Self::base_priority(course));

        if score > 0.8 && employee.years() < 3 {
            return Priority::MAX;
        }
        if score > 0.7
            && Self::is_leadership_track(&course.category, &employee.profile.position)
        {
            return Priority::MAX;
        }
        if score > 0.6 {
            return base.raised();
        }
        base
    }

    fn confidence(&self, score: f64) -> Confidence {
        Confidence::scaled(score, 0.6, 0.4, 0.95)
    }
}
