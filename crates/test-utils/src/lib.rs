//! Shared test utilities for careerpath crates.
//!
//! Provides environment guards for configuration tests and compact builders
//! for employee profiles, courses and projects.

use careerpath_domain::{
    Course, CourseId, EmployeeId, EmployeeProfile, EmployeeSkill, ProjectCandidate, ProjectId,
    ProjectSkillRequirement, ProjectStatus, SkillId, SkillLevel,
};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = careerpath_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value" until _guard drops
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Builder for [`EmployeeProfile`] fixtures.
pub struct EmployeeBuilder {
    profile: EmployeeProfile,
}

impl EmployeeBuilder {
    pub fn new(id: u64, position: &str, department: &str, years: u32) -> Self {
        Self {
            profile: EmployeeProfile {
                id: EmployeeId(id),
                name: format!("Employee {id}"),
                position: position.to_string(),
                department: department.to_string(),
                years_of_experience: years,
                skills: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.profile.name = name.to_string();
        self
    }

    /// Adds a skill. The skill id is what project and mentor matching compare on.
    pub fn skill(mut self, skill_id: u64, name: &str, category: &str, level: SkillLevel) -> Self {
        self.profile.skills.push(EmployeeSkill {
            skill_id: SkillId(skill_id),
            name: name.to_string(),
            category: category.to_string(),
            level,
            acquired_date: None,
        });
        self
    }

    pub fn build(self) -> EmployeeProfile {
        self.profile
    }
}

/// Shorthand for [`EmployeeBuilder::new`].
pub fn employee(id: u64, position: &str, department: &str, years: u32) -> EmployeeBuilder {
    EmployeeBuilder::new(id, position, department, years)
}

/// A course fixture with an empty provider, url and description.
pub fn course(id: u64, title: &str, category: &str, duration_hours: u32, rating: f64) -> Course {
    Course {
        id: CourseId(id),
        title: title.to_string(),
        provider: "Internal Academy".to_string(),
        category: category.to_string(),
        duration_hours,
        rating,
        price: 0.0,
        url: String::new(),
        description: format!("{title} course"),
    }
}

/// A project fixture. `skills` pairs a skill id with its required level.
pub fn project(
    id: u64,
    name: &str,
    department: &str,
    status: ProjectStatus,
    skills: &[(u64, SkillLevel)],
) -> ProjectCandidate {
    let required_skills: HashMap<SkillId, ProjectSkillRequirement> = skills
        .iter()
        .map(|(skill_id, level)| {
            (
                SkillId(*skill_id),
                ProjectSkillRequirement {
                    required_level: *level,
                    is_required: true,
                },
            )
        })
        .collect();
    ProjectCandidate {
        id: ProjectId(id),
        name: name.to_string(),
        description: format!("{name} project"),
        department: department.to_string(),
        status,
        required_skills,
        open_seats: 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_env_var_sets_and_restores() {
        let _g = env_guard();
        const KEY: &str = "CAREERPATH_TEST_UTILS_TEST_VAR";
        std::env::remove_var(KEY);

        {
            let _guard = set_env_var(KEY, Some("test_value"));
            assert_eq!(std::env::var(KEY).ok(), Some("test_value".to_string()));
        }
        assert!(std::env::var(KEY).is_err());
    }

    #[test]
    fn test_set_env_var_restores_previous_value() {
        let _g = env_guard();
        const KEY: &str = "CAREERPATH_TEST_RESTORE_VAR";
        std::env::set_var(KEY, "original");

        {
            let _guard = set_env_var(KEY, None);
            assert!(std::env::var(KEY).is_err());
        }
        assert_eq!(std::env::var(KEY).ok(), Some("original".to_string()));

        std::env::remove_var(KEY);
    }

    #[test]
    fn test_employee_builder() {
        let e = employee(3, "Developer", "Engineering", 4)
            .name("Ari Moss")
            .skill(1, "C#", "Programming", SkillLevel::Advanced)
            .build();
        assert_eq!(e.id, EmployeeId(3));
        assert_eq!(e.name, "Ari Moss");
        assert_eq!(e.skills.len(), 1);
        assert_eq!(
            e.skill_levels_by_name().get("C#"),
            Some(&SkillLevel::Advanced)
        );
    }

    #[test]
    fn test_project_fixture_requirements() {
        let p = project(
            1,
            "Billing",
            "Engineering",
            ProjectStatus::Active,
            &[(1, SkillLevel::Advanced), (2, SkillLevel::Intermediate)],
        );
        assert_eq!(p.required_skills.len(), 2);
        assert!(p.accepts_members());
    }
}
