//! Built-in reference tables.

use super::{
    ExperienceTier, KeywordRule, PositionCategoryRule, PositionPattern, ReferenceData,
    RequirementRule, SkillRequirement,
};
use careerpath_domain::SkillLevel::{self, Advanced, Expert, Intermediate};
use std::collections::BTreeMap;

const VERSION: &str = "2024.1";

const CAREER_TRACKS: &[(&str, &[&str])] = &[
    // Engineering
    (
        "Junior Developer",
        &[
            "Developer",
            "Software Developer",
            "Senior Developer",
            "Tech Lead",
            "Principal Engineer",
            "Engineering Manager",
            "VP of Engineering",
            "Chief Technology Officer",
            "Chief Architect",
        ],
    ),
    (
        "Developer",
        &[
            "Software Developer",
            "Senior Developer",
            "Tech Lead",
            "Principal Engineer",
            "Engineering Manager",
            "VP of Engineering",
        ],
    ),
    (
        "Software Developer",
        &[
            "Senior Developer",
            "Tech Lead",
            "Principal Engineer",
            "Engineering Manager",
            "VP of Engineering",
        ],
    ),
    (
        "Frontend Developer",
        &[
            "Senior Frontend Developer",
            "Tech Lead",
            "Principal Engineer",
            "Engineering Manager",
            "VP of Engineering",
        ],
    ),
    (
        "Backend Developer",
        &[
            "Senior Backend Developer",
            "DevOps Engineer",
            "Senior Systems Architect",
            "Tech Lead",
            "Principal Engineer",
            "Engineering Manager",
        ],
    ),
    (
        "Mobile Developer",
        &[
            "Senior Mobile Developer",
            "Tech Lead",
            "Principal Engineer",
            "Engineering Manager",
        ],
    ),
    (
        "Database Developer",
        &[
            "Senior Database Administrator",
            "Senior Systems Architect",
            "Tech Lead",
            "Principal Engineer",
        ],
    ),
    (
        "Senior Developer",
        &[
            "Tech Lead",
            "Principal Engineer",
            "Engineering Manager",
            "VP of Engineering",
        ],
    ),
    (
        "Senior Frontend Developer",
        &["Tech Lead", "Principal Engineer", "Engineering Manager"],
    ),
    (
        "Senior Backend Developer",
        &[
            "DevOps Engineer",
            "Senior Systems Architect",
            "Tech Lead",
            "Principal Engineer",
            "Engineering Manager",
        ],
    ),
    (
        "Senior Mobile Developer",
        &["Tech Lead", "Principal Engineer", "Engineering Manager"],
    ),
    (
        "DevOps Engineer",
        &[
            "Senior Cloud Engineer",
            "Senior Systems Architect",
            "Tech Lead",
            "Principal Engineer",
            "Engineering Manager",
        ],
    ),
    (
        "Tech Lead",
        &["Principal Engineer", "Engineering Manager", "VP of Engineering"],
    ),
    (
        "Principal Engineer",
        &[
            "Chief Architect",
            "Engineering Manager",
            "VP of Engineering",
            "Chief Technology Officer",
        ],
    ),
    (
        "Engineering Manager",
        &["VP of Engineering", "Chief Technology Officer"],
    ),
    // Quality assurance
    ("QA Engineer", &["Senior QA Engineer", "QA Manager"]),
    ("Senior QA Engineer", &["QA Manager"]),
    // Data and analytics
    (
        "Data Analyst",
        &["Senior Data Scientist", "Director of Analytics"],
    ),
    ("Senior Data Scientist", &["Director of Analytics"]),
    (
        "Business Analyst",
        &[
            "Senior Business Analyst",
            "Senior Product Manager",
            "Director of Product",
        ],
    ),
    (
        "Senior Business Analyst",
        &["Senior Product Manager", "Director of Product"],
    ),
    // Design
    ("UX Designer", &["Senior UX Designer"]),
    ("UI Designer", &["Senior UX Designer"]),
    ("Senior UX Designer", &["Director of Product"]),
    // Product
    (
        "Product Owner",
        &["Senior Product Manager", "Director of Product"],
    ),
    ("Senior Product Manager", &["Director of Product"]),
    // Marketing
    (
        "Marketing Coordinator",
        &["Marketing Manager", "VP of Marketing"],
    ),
    (
        "Content Writer",
        &["Senior Content Strategist", "Marketing Manager"],
    ),
    ("Marketing Manager", &["VP of Marketing"]),
    (
        "Senior Content Strategist",
        &["Marketing Manager", "VP of Marketing"],
    ),
    // Operations and support
    (
        "Systems Administrator",
        &[
            "Senior Database Administrator",
            "Senior Systems Architect",
            "VP of Operations",
        ],
    ),
    (
        "Support Engineer",
        &["Senior Systems Architect", "Engineering Manager"],
    ),
    (
        "Security Analyst",
        &["Senior Security Engineer", "Chief Security Officer"],
    ),
    ("Senior Security Engineer", &["Chief Security Officer"]),
    // People and sales
    ("HR Coordinator", &["Senior HR Manager"]),
    ("Senior HR Manager", &["VP of Operations"]),
    ("Sales Associate", &["Senior Sales Manager"]),
    ("Senior Sales Manager", &["VP of Marketing"]),
];

const RELATED_DEPARTMENTS: &[(&str, &[&str])] = &[
    (
        "Engineering",
        &["IT Operations", "Quality Assurance", "Security", "Analytics"],
    ),
    ("Product", &["Engineering", "Marketing", "Design"]),
    ("Marketing", &["Product", "Sales", "Design"]),
    ("Analytics", &["Engineering", "Business", "Marketing"]),
];

const SENIORITY_KEYWORDS: &[&str] = &[
    "Senior",
    "Principal",
    "Lead",
    "Manager",
    "Director",
    "VP",
    "Chief",
];

const HIGH_DEMAND_KEYWORDS: &[&str] = &[
    "AI",
    "Machine Learning",
    "Cloud",
    "Kubernetes",
    "Docker",
    "React",
    "Angular",
    "Vue",
    "Python",
    "JavaScript",
    "TypeScript",
    "DevOps",
    "Microservices",
    "Blockchain",
    "Cybersecurity",
];

const SENIOR_ENGINEER: &[(&str, SkillLevel)] = &[
    ("C#", Advanced),
    ("JavaScript", Advanced),
    ("SQL", Advanced),
    ("Cloud Computing", Intermediate),
    ("System Design", Advanced),
    ("Leadership", Advanced),
    ("Mentoring", Intermediate),
    ("Problem Solving", Advanced),
];

const LEAD: &[(&str, SkillLevel)] = &[
    ("Leadership", Advanced),
    ("Project Management", Advanced),
    ("Communication", Advanced),
    ("Mentoring", Advanced),
    ("Technical Architecture", Advanced),
    ("C#", Expert),
    ("System Design", Expert),
];

const MANAGER: &[(&str, SkillLevel)] = &[
    ("Leadership", Expert),
    ("Project Management", Expert),
    ("Team Management", Expert),
    ("Strategic Planning", Advanced),
    ("Budgeting", Intermediate),
    ("Communication", Expert),
    ("Performance Management", Advanced),
];

const ARCHITECT: &[(&str, SkillLevel)] = &[
    ("System Design", Expert),
    ("Technical Architecture", Expert),
    ("Cloud Computing", Expert),
    ("Microservices", Advanced),
    ("Database Design", Advanced),
    ("Security", Advanced),
    ("Performance Optimization", Advanced),
];

const FULL_STACK: &[(&str, SkillLevel)] = &[
    ("C#", Advanced),
    ("JavaScript", Advanced),
    ("React", Advanced),
    ("SQL", Advanced),
    ("HTML/CSS", Advanced),
    ("API Development", Advanced),
    ("Database Design", Intermediate),
];

const DEFAULT: &[(&str, SkillLevel)] = &[
    ("C#", Intermediate),
    ("JavaScript", Intermediate),
    ("SQL", Intermediate),
    ("Problem Solving", Intermediate),
    ("Communication", Intermediate),
];

const CRITICAL_SKILLS: &[&str] = &[
    "Leadership",
    "Communication",
    "System Design",
    "Technical Architecture",
];

const SKILL_CATEGORIES: &[(&[&str], &str)] = &[
    (&["c#", "javascript", "sql"], "Programming"),
    (&["leadership", "communication", "management"], "Soft Skills"),
    (&["cloud", "architecture", "design"], "Architecture & Cloud"),
    (&["project"], "Project Management"),
];

const LEARNING_RESOURCES: &[(&str, [&str; 3])] = &[
    (
        "c#",
        [
            "Microsoft Learn C# Path",
            "Pluralsight C# Courses",
            "C# in Depth Book",
        ],
    ),
    (
        "javascript",
        [
            "MDN JavaScript Guide",
            "freeCodeCamp",
            "You Don't Know JS Series",
        ],
    ),
    (
        "leadership",
        [
            "LinkedIn Leadership Courses",
            "Harvard Business Review",
            "The 7 Habits of Highly Effective People",
        ],
    ),
    (
        "cloud",
        [
            "Azure Fundamentals",
            "AWS Cloud Practitioner",
            "Google Cloud Platform Training",
        ],
    ),
    (
        "sql",
        [
            "SQL Server Documentation",
            "W3Schools SQL Tutorial",
            "PostgreSQL Tutorial",
        ],
    ),
];

const DEFAULT_RESOURCES: [&str; 3] = ["Online Courses", "Documentation", "Hands-on Practice"];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn graph(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(from, to)| (from.to_string(), strings(to)))
        .collect()
}

fn table(entries: &[(&str, SkillLevel)]) -> Vec<SkillRequirement> {
    entries
        .iter()
        .map(|(skill, level)| SkillRequirement {
            skill: skill.to_string(),
            level: *level,
        })
        .collect()
}

fn rule(
    name: &str,
    all_of: &[&str],
    any_of: &[&str],
    requirements: &[(&str, SkillLevel)],
) -> RequirementRule {
    RequirementRule {
        name: name.to_string(),
        pattern: PositionPattern {
            all_of: strings(all_of),
            any_of: strings(any_of),
        },
        requirements: table(requirements),
    }
}

fn tier(below_years: Option<u32>, categories: &[&str], hours: u32) -> ExperienceTier {
    ExperienceTier {
        below_years,
        boost_categories: strings(categories),
        optimal_course_hours: hours,
    }
}

pub(super) fn tables() -> ReferenceData {
    ReferenceData {
        version: VERSION.to_string(),
        career_tracks: graph(CAREER_TRACKS),
        requirement_rules: vec![
            rule("senior", &["senior"], &["developer", "engineer"], SENIOR_ENGINEER),
            rule("lead", &[], &["lead", "team lead"], LEAD),
            rule("manager", &[], &["manager", "engineering manager"], MANAGER),
            rule("architect", &["architect"], &[], ARCHITECT),
            rule("full-stack", &["full stack"], &[], FULL_STACK),
        ],
        default_requirements: table(DEFAULT),
        related_departments: graph(RELATED_DEPARTMENTS),
        seniority_keywords: strings(SENIORITY_KEYWORDS),
        high_demand_keywords: strings(HIGH_DEMAND_KEYWORDS),
        experience_tiers: vec![
            tier(Some(2), &["Programming", "Frontend", "Backend"], 20),
            tier(Some(5), &["Cloud", "DevOps", "Database", "Management"], 35),
            tier(None, &["Leadership", "Management", "Analytics", "AI"], 50),
        ],
        position_categories: vec![
            PositionCategoryRule {
                any_of: strings(&["Developer", "Engineer"]),
                categories: strings(&["Programming", "Cloud", "DevOps"]),
            },
            PositionCategoryRule {
                any_of: strings(&["Manager", "Lead"]),
                categories: strings(&["Leadership", "Management", "Analytics"]),
            },
            PositionCategoryRule {
                any_of: strings(&["Designer"]),
                categories: strings(&["Design", "Frontend"]),
            },
        ],
        critical_skills: strings(CRITICAL_SKILLS),
        skill_categories: SKILL_CATEGORIES
            .iter()
            .map(|(keywords, category)| KeywordRule {
                keywords: strings(keywords),
                value: category.to_string(),
            })
            .collect(),
        default_skill_category: "Technical".to_string(),
        learning_resources: LEARNING_RESOURCES
            .iter()
            .map(|(keyword, resources)| KeywordRule {
                keywords: vec![keyword.to_string()],
                value: strings(resources),
            })
            .collect(),
        default_learning_resources: strings(&DEFAULT_RESOURCES),
    }
}
