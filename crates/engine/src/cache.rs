//! Per-employee memoization of recommendation lists.
//!
//! Generated and stored lists are cached separately, each with its own TTL.
//! Accepting a recommendation drops both entries for its employee. Skill-gap
//! analysis always goes to the wrapped service.
//!
//! An empty generated list is never cached: the engine answers a run that hit
//! a repository failure with an empty list, and the next call must retry.
//! Expired entries are dropped when looked up and swept on every insert.
//!
//! The maps sit behind `parking_lot::Mutex` and the lock is never held across
//! an await point.

use crate::service::RecommendationService;
use async_trait::async_trait;
use careerpath_domain::{
    EmployeeId, EngineError, Recommendation, RecommendationId, SkillGapAnalysis,
};
use careerpath_state::Settings;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

const DEFAULT_GENERATED_TTL: Duration = Duration::from_secs(15 * 60);
const DEFAULT_STORED_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtls {
    pub generated: Duration,
    pub stored: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            generated: DEFAULT_GENERATED_TTL,
            stored: DEFAULT_STORED_TTL,
        }
    }
}

impl From<&Settings> for CacheTtls {
    fn from(settings: &Settings) -> Self {
        Self {
            generated: settings.cache_ttl(),
            stored: settings.employee_cache_ttl(),
        }
    }
}

struct Entry {
    recommendations: Vec<Recommendation>,
    cached_at: Instant,
}

#[derive(Default)]
struct Slots {
    generated: HashMap<EmployeeId, Entry>,
    stored: HashMap<EmployeeId, Entry>,
}

impl Entry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() < ttl
    }
}

fn fresh(
    map: &mut HashMap<EmployeeId, Entry>,
    id: EmployeeId,
    ttl: Duration,
) -> Option<Vec<Recommendation>> {
    let is_fresh = map.get(&id)?.is_fresh(ttl);
    if is_fresh {
        map.get(&id).map(|entry| entry.recommendations.clone())
    } else {
        map.remove(&id);
        None
    }
}

fn insert_fresh(
    map: &mut HashMap<EmployeeId, Entry>,
    id: EmployeeId,
    ttl: Duration,
    recommendations: &[Recommendation],
) {
    map.retain(|_, entry| entry.is_fresh(ttl));
    map.insert(
        id,
        Entry {
            recommendations: recommendations.to_vec(),
            cached_at: Instant::now(),
        },
    );
}

/// Wraps a [`RecommendationService`] with TTL caching.
pub struct CachedRecommendations<S> {
    inner: S,
    ttls: CacheTtls,
    slots: Mutex<Slots>,
}

impl<S: RecommendationService> CachedRecommendations<S> {
    pub fn new(inner: S, ttls: CacheTtls) -> Self {
        Self {
            inner,
            ttls,
            slots: Mutex::new(Slots::default()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drops every cached list for the employee.
    pub fn invalidate(&self, employee_id: EmployeeId) {
        let mut slots = self.slots.lock();
        slots.generated.remove(&employee_id);
        slots.stored.remove(&employee_id);
        tracing::debug!(target: "careerpath::cache", employee_id = %employee_id, "invalidated");
    }
}

#[async_trait]
impl<S: RecommendationService> RecommendationService for CachedRecommendations<S> {
    async fn generate_recommendations(
        &self,
        employee_id: EmployeeId,
        cancel: &CancellationToken,
    ) -> Result<Vec<Recommendation>, EngineError> {
        let hit = {
            let mut slots = self.slots.lock();
            fresh(&mut slots.generated, employee_id, self.ttls.generated)
        };
        if let Some(recommendations) = hit {
            tracing::debug!(
                target: "careerpath::cache",
                employee_id = %employee_id,
                "generated hit"
            );
            return Ok(recommendations);
        }

        let recommendations = self
            .inner
            .generate_recommendations(employee_id, cancel)
            .await?;
        if recommendations.is_empty() {
            tracing::debug!(
                target: "careerpath::cache",
                employee_id = %employee_id,
                "empty generated list not cached"
            );
        } else {
            let mut slots = self.slots.lock();
            insert_fresh(
                &mut slots.generated,
                employee_id,
                self.ttls.generated,
                &recommendations,
            );
        }
        Ok(recommendations)
    }

    async fn accept_recommendation(
        &self,
        id: RecommendationId,
    ) -> Result<Recommendation, EngineError> {
        let accepted = self.inner.accept_recommendation(id).await?;
        self.invalidate(accepted.employee_id);
        Ok(accepted)
    }

    async fn employee_recommendations(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<Recommendation>, EngineError> {
        let hit = {
            let mut slots = self.slots.lock();
            fresh(&mut slots.stored, employee_id, self.ttls.stored)
        };
        if let Some(recommendations) = hit {
            tracing::debug!(
                target: "careerpath::cache",
                employee_id = %employee_id,
                "stored hit"
            );
            return Ok(recommendations);
        }

        let recommendations = self.inner.employee_recommendations(employee_id).await?;
        {
            let mut slots = self.slots.lock();
            insert_fresh(
                &mut slots.stored,
                employee_id,
                self.ttls.stored,
                &recommendations,
            );
        }
        Ok(recommendations)
    }

    async fn analyze_skill_gaps(
        &self,
        employee_id: EmployeeId,
        target_position: &str,
    ) -> Result<SkillGapAnalysis, EngineError> {
        self.inner
            .analyze_skill_gaps(employee_id, target_position)
            .await
    }
}
