use crate::{
    database::RecordStore,
    models::achievement::{Achievement, MILESTONES, Milestone, SAMPLE_ACHIEVEMENTS},
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementSource {
    Store,
    Sample,
}

/// An achievement as its card shows it: the stored fields plus the image
/// to display and the long-form date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineEntry {
    #[serde(flatten)]
    pub achievement: Achievement,
    pub image: String,
    pub display_date: String,
}

impl From<Achievement> for TimelineEntry {
    fn from(achievement: Achievement) -> Self {
        Self {
            image: achievement.image().to_string(),
            display_date: achievement.display_date(),
            achievement,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearGroup {
    pub year: i32,
    pub achievements: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementTimeline {
    pub source: AchievementSource,
    /// Tab selected on first view: the most recent year.
    pub default_year: Option<i32>,
    pub years: Vec<YearGroup>,
    pub milestones: &'static [Milestone],
}

/// Fetches achievements, falling back to the built-in sample set when the
/// store is empty, errors, or does not answer in time.
pub async fn load_achievements(
    store: &dyn RecordStore,
    timeout: Duration,
) -> (Vec<Achievement>, AchievementSource) {
    match tokio::time::timeout(timeout, store.list_achievements()).await {
        Ok(Ok(achievements)) if !achievements.is_empty() => {
            info!("Loaded {} achievements from {} store", achievements.len(), store.name());
            return (achievements, AchievementSource::Store);
        }
        Ok(Ok(_)) => info!("Using sample achievements instead of store data"),
        Ok(Err(e)) => error!("Error fetching achievements: {}", e),
        Err(_) => warn!("Achievements fetch timed out after {:?}", timeout),
    }

    (SAMPLE_ACHIEVEMENTS.clone(), AchievementSource::Sample)
}

/// Groups entries by year, most recent year first; entries keep their
/// incoming order within a year.
pub fn group_by_year(achievements: Vec<Achievement>) -> Vec<YearGroup> {
    let mut by_year: BTreeMap<i32, Vec<TimelineEntry>> = BTreeMap::new();
    for achievement in achievements {
        by_year
            .entry(achievement.year())
            .or_default()
            .push(TimelineEntry::from(achievement));
    }

    by_year
        .into_iter()
        .rev()
        .map(|(year, achievements)| YearGroup { year, achievements })
        .collect()
}

impl AchievementTimeline {
    pub fn from_achievements(achievements: Vec<Achievement>, source: AchievementSource) -> Self {
        let years = group_by_year(achievements);
        Self {
            source,
            default_year: years.first().map(|group| group.year),
            years,
            milestones: &MILESTONES,
        }
    }

    pub async fn load(store: &dyn RecordStore, timeout: Duration) -> Self {
        let (achievements, source) = load_achievements(store, timeout).await;
        Self::from_achievements(achievements, source)
    }
}
