//! Deterministic template-based reasoning generator.

use crate::ports::ReasoningGenerator;
use anyhow::Result;
use async_trait::async_trait;
use careerpath_domain::{CandidateRef, Course, EmployeeProfile, ProjectCandidate};
use careerpath_state::{ReasoningSettings, ReasoningStrategy};

const TEMPLATES_PER_KIND: usize = 4;

/// Which of the templates a candidate gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateChoice {
    /// The same template for every candidate.
    Fixed(usize),
    /// Varies with the candidate id, offset by `seed`.
    Rotating { seed: u64 },
}

impl Default for TemplateChoice {
    fn default() -> Self {
        Self::Fixed(0)
    }
}

impl From<ReasoningSettings> for TemplateChoice {
    fn from(settings: ReasoningSettings) -> Self {
        match settings.strategy {
            ReasoningStrategy::Fixed => {
                Self::Fixed((settings.seed % TEMPLATES_PER_KIND as u64) as usize)
            }
            ReasoningStrategy::Rotating => Self::Rotating {
                seed: settings.seed,
            },
        }
    }
}

impl TemplateChoice {
    fn index(self, candidate_id: u64) -> usize {
        match self {
            Self::Fixed(i) => i % TEMPLATES_PER_KIND,
            Self::Rotating { seed } => {
                (candidate_id.wrapping_add(seed) % TEMPLATES_PER_KIND as u64) as usize
            }
        }
    }
}

/// Explains recommendations from fixed sentence templates. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateReasoning {
    choice: TemplateChoice,
}

impl TemplateReasoning {
    pub fn new(choice: TemplateChoice) -> Self {
        Self { choice }
    }

    /// Renders the text synchronously.
    pub fn render(&self, employee: &EmployeeProfile, candidate: CandidateRef<'_>) -> String {
        match candidate {
            CandidateRef::Course(course) => {
                course_text(self.choice.index(course.id.0), employee, course)
            }
            CandidateRef::Mentor(mentor) => {
                mentor_text(self.choice.index(mentor.id.0), employee, mentor)
            }
            CandidateRef::Project(project) => {
                project_text(self.choice.index(project.id.0), employee, project)
            }
        }
    }
}

fn course_text(index: usize, employee: &EmployeeProfile, course: &Course) -> String {
    match index {
        0 => format!(
            "With {} years as a {}, this {} course keeps your skills current and moves you forward.",
            employee.years_of_experience, employee.position, course.category
        ),
        1 => format!(
            "Learners rate it {:.1}/5, and it fits where the {} department is heading. Expect a deeper command of {}.",
            course.rating, employee.department, course.title
        ),
        2 => format!(
            "At {} hours, the course has enough depth for your current level without crowding your schedule.",
            course.duration_hours
        ),
        _ => format!(
            "{} covers concepts you can apply directly as a {}, which strengthens your next career step.",
            course.provider, employee.position
        ),
    }
}

fn mentor_text(index: usize, employee: &EmployeeProfile, mentor: &EmployeeProfile) -> String {
    match index {
        0 => format!(
            "{} has {} years in {} and strengths that complement yours, which can speed up your growth.",
            mentor.name, mentor.years_of_experience, mentor.department
        ),
        1 => format!(
            "As a {}, {} has already made the move you are working toward from {}.",
            mentor.position, mentor.name, employee.position
        ),
        2 => format!(
            "{} brings {} more years of experience, a good source of career strategy and industry context.",
            mentor.name,
            mentor
                .years_of_experience
                .saturating_sub(employee.years_of_experience)
        ),
        _ => format!(
            "{}'s background in {} makes them well placed to help you build leadership and technical depth.",
            mentor.name, mentor.department
        ),
    }
}

fn project_text(index: usize, employee: &EmployeeProfile, project: &ProjectCandidate) -> String {
    match index {
        0 => format!(
            "{} gives you hands-on time with practices that match your development goals.",
            project.name
        ),
        1 => format!(
            "{} lets you apply what you know while picking up new skills alongside the team.",
            project.name
        ),
        2 => format!(
            "Working on {} builds a portfolio of visible, high-impact work in {}.",
            project.name, project.department
        ),
        _ => format!(
            "The scope of {} suits {} years of experience: challenging but achievable.",
            project.name, employee.years_of_experience
        ),
    }
}

#[async_trait]
impl ReasoningGenerator for TemplateReasoning {
    async fn reasoning(
        &self,
        employee: &EmployeeProfile,
        candidate: CandidateRef<'_>,
    ) -> Result<String> {
        Ok(self.render(employee, candidate))
    }
}
