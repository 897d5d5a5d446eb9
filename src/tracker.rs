//! The four operations a front end needs: set tasks, check in, read experience, read streak.
//!
//! [Tracker] is the only place that writes state. Rejected input never reaches storage.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    scoring::{
        assess, messages::Occasion, picker::MessagePicker, score_check_in, Assessment, CheckIn,
        CheckInOutcome, ScoringConfig,
    },
    storage::{entities::TaskList, state_store::StateStore},
};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("任务不能为空！")]
    EmptyTaskInput,
    #[error("今日无任务，请先设定任务再打卡！")]
    NoTasks,
    #[error("完成数{completed}无效，请输入0到{task_count}之间的整数！")]
    CompletedOutOfRange { completed: i64, task_count: usize },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl TrackerError {
    /// Rejections are the user's to fix. Everything else is a storage failure.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, TrackerError::Storage(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceReport {
    pub total: i64,
    pub assessment: Assessment,
}

pub struct Tracker<S, P> {
    store: S,
    config: ScoringConfig,
    picker: P,
}

impl<S: StateStore, P: MessagePicker> Tracker<S, P> {
    pub fn new(store: S, config: ScoringConfig, picker: P) -> Self {
        Self {
            store,
            config,
            picker,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Replaces the task list with the tasks parsed from `input`.
    #[instrument(skip(self))]
    pub async fn set_tasks(&self, input: &str) -> Result<TaskList, TrackerError> {
        let tasks = TaskList::from_input(input);
        if tasks.is_empty() {
            return Err(TrackerError::EmptyTaskInput);
        }
        self.store.write_tasks(&tasks).await?;
        info!("Task list replaced with {} tasks", tasks.len());
        Ok(tasks)
    }

    pub async fn tasks(&self) -> Result<TaskList, TrackerError> {
        Ok(self.store.read_tasks().await?)
    }

    /// Records today's completed count and persists the new streak and experience.
    #[instrument(skip(self))]
    pub async fn check_in(&mut self, completed: i64) -> Result<CheckInOutcome, TrackerError> {
        let tasks = self.store.read_tasks().await?;
        if tasks.is_empty() {
            return Err(TrackerError::NoTasks);
        }
        let out_of_range = || TrackerError::CompletedOutOfRange {
            completed,
            task_count: tasks.len(),
        };
        let completed = u32::try_from(completed).map_err(|_| out_of_range())?;
        let task_count = u32::try_from(tasks.len()).unwrap_or(u32::MAX);

        let check_in = CheckIn {
            completed,
            task_count,
            prior_streak: self.store.read_unmet_streak().await?,
            prior_total: self.store.read_experience().await?,
        };
        if !check_in.is_in_range() {
            return Err(out_of_range());
        }

        let outcome = score_check_in(&self.config, check_in, &mut self.picker);

        self.store.write_unmet_streak(outcome.new_streak).await?;
        self.store.write_experience(outcome.new_total).await?;
        info!(
            "Checked in {completed}/{task_count}: streak {} -> {}, experience {} -> {}",
            check_in.prior_streak, outcome.new_streak, check_in.prior_total, outcome.new_total
        );
        Ok(outcome)
    }

    pub async fn experience(&mut self) -> Result<ExperienceReport, TrackerError> {
        let total = self.store.read_experience().await?;
        Ok(ExperienceReport {
            total,
            assessment: assess(total, Occasion::Review, &mut self.picker),
        })
    }

    pub async fn unmet_streak(&self) -> Result<u32, TrackerError> {
        Ok(self.store.read_unmet_streak().await?)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::{tempdir, TempDir};

    use crate::{
        config::FilePaths,
        scoring::{
            picker::MockMessagePicker, tiers::Severity, Assessment, ScoringConfig, StreakStatus,
        },
        storage::state_store::{FileStateStore, StateStore},
        utils::logging::TEST_LOGGING,
    };

    use super::{Tracker, TrackerError};

    fn tracker(dir: &TempDir) -> Result<Tracker<FileStateStore, MockMessagePicker>> {
        *TEST_LOGGING;
        let store = FileStateStore::new(dir.path(), &FilePaths::default())?;
        let mut picker = MockMessagePicker::new();
        picker.expect_pick().returning(|_| 0);
        Ok(Tracker::new(store, ScoringConfig::default(), picker))
    }

    fn snapshot(dir: &TempDir) -> Vec<Option<String>> {
        ["list.txt", "record.txt", "experience.txt"]
            .iter()
            .map(|name| std::fs::read_to_string(dir.path().join(name)).ok())
            .collect()
    }

    #[tokio::test]
    async fn check_in_persists_streak_and_experience() -> Result<()> {
        let dir = tempdir()?;
        let mut tracker = tracker(&dir)?;
        tracker.set_tasks("a,b,c,d,e,f").await?;

        let outcome = tracker.check_in(6).await?;
        assert_eq!(outcome.new_total, 60);
        assert_eq!(outcome.streak_status, StreakStatus::Met);

        for _ in 0..2 {
            tracker.check_in(1).await?;
        }
        let outcome = tracker.check_in(1).await?;
        assert_eq!(outcome.new_streak, 3);
        assert_eq!(outcome.delta, 10 - 30);
        assert_eq!(outcome.new_total, 60 + 10 + 10 - 20);

        assert_eq!(tracker.unmet_streak().await?, 3);
        assert_eq!(tracker.experience().await?.total, 60);
        Ok(())
    }

    #[tokio::test]
    async fn rejected_check_in_leaves_state_untouched() -> Result<()> {
        let dir = tempdir()?;
        let mut tracker = tracker(&dir)?;

        let error = tracker.check_in(0).await.unwrap_err();
        assert!(matches!(error, TrackerError::NoTasks));
        assert!(error.is_rejection());
        assert_eq!(snapshot(&dir), vec![None, None, None]);

        tracker.set_tasks("read，run").await?;
        tracker.check_in(2).await?;
        let before = snapshot(&dir);

        for completed in [3, -1, i64::MAX] {
            let error = tracker.check_in(completed).await.unwrap_err();
            assert!(
                matches!(error, TrackerError::CompletedOutOfRange { task_count: 2, .. }),
                "{error:?}"
            );
            assert_eq!(
                error.to_string(),
                format!("完成数{completed}无效，请输入0到2之间的整数！")
            );
        }
        assert_eq!(snapshot(&dir), before);
        Ok(())
    }

    #[tokio::test]
    async fn empty_task_input_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        let tracker = tracker(&dir)?;
        tracker.set_tasks("keep").await?;

        let error = tracker.set_tasks(" ，, ").await.unwrap_err();
        assert!(matches!(error, TrackerError::EmptyTaskInput));
        assert_eq!(
            tracker.tasks().await?.iter().collect::<Vec<_>>(),
            vec!["keep"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn set_tasks_replaces_the_list() -> Result<()> {
        let dir = tempdir()?;
        let tracker = tracker(&dir)?;
        tracker.set_tasks("a,b,c").await?;
        let tasks = tracker.set_tasks("x，y").await?;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tracker.tasks().await?, tasks);
        Ok(())
    }

    #[tokio::test]
    async fn experience_reads_negative_totals() -> Result<()> {
        let dir = tempdir()?;
        let mut tracker = tracker(&dir)?;
        FileStateStore::new(dir.path(), &FilePaths::default())?
            .write_experience(-2500)
            .await?;

        let report = tracker.experience().await?;
        assert_eq!(report.total, -2500);
        match report.assessment {
            Assessment::Negative {
                severity,
                easter_egg,
                ..
            } => {
                assert_eq!(severity, Severity::Heavy);
                assert!(easter_egg.is_some());
            }
            other => panic!("unexpected assessment {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn storage_failures_are_not_rejections() -> Result<()> {
        let dir = tempdir()?;
        // Make the task list path a directory so reading it fails.
        std::fs::create_dir(dir.path().join("list.txt"))?;
        let mut tracker = tracker(&dir)?;
        let error = tracker.check_in(1).await.unwrap_err();
        assert!(!error.is_rejection());
        Ok(())
    }
}
