use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Result};

use uuid::Uuid;

use crate::error::TaskError;
use crate::model::task::Task;
use crate::store::traits::TaskStore;

const DEFAULT_FILE_NAME: &str = "tasks.json";

/// Task store persisted as a JSON array on disk. Every primitive is a full
/// read-modify-write cycle under an internal lock, which is what gives
/// `delete_all` its "no lost writes" guarantee within one process.
pub struct FileTaskStore {
    file_path: PathBuf,
    lock: Mutex<()>,
}

impl FileTaskStore {
    /// Opens (creating if needed) the store under `base_dir`, defaulting to
    /// `~/.taskdeck`. The file is initialized to an empty JSON array.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self, TaskError> {
        Self::open(base_dir).map_err(TaskError::Storage)
    }

    fn open(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".taskdeck")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Task>::new())?;
            writer.flush()?;
        }

        Ok(FileTaskStore {
            file_path: path,
            lock: Mutex::new(()),
        })
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn read_tasks(&self) -> Result<Vec<Task>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let tasks = serde_json::from_reader(reader)?;
        Ok(tasks)
    }

    fn write_tasks(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.flush()?;
        Ok(())
    }
}

impl TaskStore for FileTaskStore {
    fn create(&self, title: String) -> Result<Task, TaskError> {
        let _guard = self.guard();
        let task = Task::new(title);
        let mut tasks = self.read_tasks().map_err(TaskError::Storage)?;
        tasks.push(task.clone());
        self.write_tasks(&tasks).map_err(TaskError::Storage)?;
        Ok(task)
    }

    fn list(&self) -> Result<Vec<Task>, TaskError> {
        let _guard = self.guard();
        self.read_tasks().map_err(TaskError::Storage)
    }

    fn update(&self, task: &Task) -> Result<bool, TaskError> {
        let _guard = self.guard();
        let mut tasks = self.read_tasks().map_err(TaskError::Storage)?;
        match tasks.iter().position(|t| t.id == task.id) {
            Some(pos) => {
                tasks[pos] = task.clone();
                self.write_tasks(&tasks).map_err(TaskError::Storage)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_by_id(&self, id: &Uuid) -> Result<bool, TaskError> {
        let _guard = self.guard();
        let mut tasks = self.read_tasks().map_err(TaskError::Storage)?;
        let initial_len = tasks.len();
        tasks.retain(|t| t.id != *id);

        if tasks.len() == initial_len {
            return Ok(false);
        }

        self.write_tasks(&tasks).map_err(TaskError::Storage)?;
        Ok(true)
    }

    fn delete_all(&self) -> Result<usize, TaskError> {
        let _guard = self.guard();
        let tasks = self.read_tasks().map_err(TaskError::Storage)?;
        let removed = tasks.len();
        self.write_tasks(&[]).map_err(TaskError::Storage)?;
        Ok(removed)
    }
}
