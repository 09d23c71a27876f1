//! Human-readable explanations for scored candidates.

use serde::{Deserialize, Serialize};

/// Why a candidate scored the way it did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchSignal {
    // Course signals
    CategoryExpertise { category: String },
    CareerBoost { position: String },
    HighlyRated { rating: f64 },
    DurationFit,
    HighDemand,
    // Mentor signals
    OffTrack,
    InsufficientExperienceGap,
    ExperienceGap { years: u32 },
    SeniorMentor { years: u32 },
    SameDepartmentTrack,
    RelatedDepartmentTrack,
    StrongAdvancement,
    GoodAdvancement,
    // Project signals
    ExcellentSkillMatch { fraction: f64 },
    GoodSkillMatch { fraction: f64 },
    LearningOpportunities,
    WithinDepartment,
    CrossFunctional,
    OpenForJoining,
}

impl MatchSignal {
    fn describe(&self) -> String {
        match self {
            Self::CategoryExpertise { category } => format!("Matches your {category} expertise"),
            Self::CareerBoost { position } => {
                format!("Essential for advancing to senior {position} role")
            }
            Self::HighlyRated { rating } => format!("Highly rated course ({rating:.1}/5.0)"),
            Self::DurationFit => "Perfect duration for your experience level".to_string(),
            Self::HighDemand => "High-demand skill in current market".to_string(),
            Self::OffTrack => "Not on same career progression track".to_string(),
            Self::InsufficientExperienceGap => {
                "Insufficient experience gap for mentoring".to_string()
            }
            Self::ExperienceGap { years } => {
                format!("{years} years more experience in same track")
            }
            Self::SeniorMentor { years } => {
                format!("{years} years more experience (senior mentor)")
            }
            Self::SameDepartmentTrack => "Same department and career track expertise".to_string(),
            Self::RelatedDepartmentTrack => "Related department in same career track".to_string(),
            Self::StrongAdvancement => {
                "Excellent skill advancement opportunities in same track".to_string()
            }
            Self::GoodAdvancement => "Good skill development potential in career track".to_string(),
            Self::ExcellentSkillMatch { fraction } => {
                format!("Excellent skill match ({:.0}%)", fraction * 100.0)
            }
            Self::GoodSkillMatch { fraction } => {
                format!("Good skill match ({:.0}%)", fraction * 100.0)
            }
            Self::LearningOpportunities => "Significant learning opportunities".to_string(),
            Self::WithinDepartment => "Within your department".to_string(),
            Self::CrossFunctional => "Cross-functional opportunity".to_string(),
            Self::OpenForJoining => "Perfect timing to join".to_string(),
        }
    }
}

/// Joins signal descriptions with `"; "` and ends the sentence.
///
/// Returns `fallback` unchanged when there are no signals.
pub fn explain(signals: &[MatchSignal], fallback: &str) -> String {
    if signals.is_empty() {
        return fallback.to_string();
    }
    let parts: Vec<String> = signals.iter().map(MatchSignal::describe).collect();
    format!("{}.", parts.join("; "))
}
