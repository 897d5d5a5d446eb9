use std::{future::Future, path::Path};

use anyhow::Result;

use crate::config::FilePaths;

use super::{entities::TaskList, slot::Slot};

/// Interface for abstracting storage of the tracker state.
pub trait StateStore {
    fn read_tasks(&self) -> impl Future<Output = Result<TaskList>>;

    /// Replaces the whole task list.
    fn write_tasks(&self, tasks: &TaskList) -> impl Future<Output = Result<()>>;

    fn read_unmet_streak(&self) -> impl Future<Output = Result<u32>>;

    fn write_unmet_streak(&self, streak: u32) -> impl Future<Output = Result<()>>;

    fn read_experience(&self) -> impl Future<Output = Result<i64>>;

    fn write_experience(&self, total: i64) -> impl Future<Output = Result<()>>;
}

/// The main realization of [StateStore].
#[derive(Debug)]
pub struct FileStateStore {
    tasks: Slot<TaskList>,
    unmet_streak: Slot<u32>,
    experience: Slot<i64>,
}

impl FileStateStore {
    pub fn new(dir: &Path, files: &FilePaths) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(dir)?;

        Ok(Self {
            tasks: Slot::new(dir.join(&files.task_list)),
            unmet_streak: Slot::new(dir.join(&files.unmet_record)),
            experience: Slot::new(dir.join(&files.experience)),
        })
    }
}

impl StateStore for FileStateStore {
    async fn read_tasks(&self) -> Result<TaskList> {
        self.tasks.read().await
    }

    async fn write_tasks(&self, tasks: &TaskList) -> Result<()> {
        self.tasks.write(tasks).await
    }

    async fn read_unmet_streak(&self) -> Result<u32> {
        self.unmet_streak.read().await
    }

    async fn write_unmet_streak(&self, streak: u32) -> Result<()> {
        self.unmet_streak.write(&streak).await
    }

    async fn read_experience(&self) -> Result<i64> {
        self.experience.read().await
    }

    async fn write_experience(&self, total: i64) -> Result<()> {
        self.experience.write(&total).await
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use crate::{
        config::FilePaths,
        storage::{
            entities::TaskList,
            state_store::{FileStateStore, StateStore},
        },
    };

    #[tokio::test]
    async fn slots_are_independent() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStateStore::new(dir.path(), &FilePaths::default())?;

        store.write_unmet_streak(2).await?;
        assert_eq!(store.read_unmet_streak().await?, 2);
        assert_eq!(store.read_experience().await?, 0);
        assert!(store.read_tasks().await?.is_empty());

        store.write_experience(-80).await?;
        store.write_tasks(&TaskList::from_input("a,b")).await?;
        assert_eq!(store.read_experience().await?, -80);
        assert_eq!(store.read_unmet_streak().await?, 2);
        assert_eq!(store.read_tasks().await?.len(), 2);

        assert!(dir.path().join("list.txt").exists());
        assert!(dir.path().join("record.txt").exists());
        assert!(dir.path().join("experience.txt").exists());
        Ok(())
    }

    #[tokio::test]
    async fn creates_missing_directory_and_honours_names() -> Result<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("nested/state");
        let files = FilePaths {
            task_list: "tasks".into(),
            unmet_record: "streak".into(),
            experience: "exp".into(),
        };
        let store = FileStateStore::new(&nested, &files)?;
        store.write_experience(5).await?;
        assert_eq!(std::fs::read_to_string(nested.join("exp"))?, "5");
        Ok(())
    }
}
