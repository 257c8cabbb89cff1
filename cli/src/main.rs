mod tui;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use taskdeck_core::{FileTaskStore, Task, TaskError, TaskService};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "A task list with safe bulk deletion", long_about = None)]
struct Cli {
    /// Directory holding the JSON task store (defaults to ~/.taskdeck)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task title (words are joined with spaces)
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },
    /// List all tasks
    List,
    /// Toggle a task between done and pending
    Done { id: Uuid },
    /// Remove a single task
    Rm { id: Uuid },
    /// Remove every task
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Open the terminal UI
    Tui {
        /// Base URL of a running task API server; without it the TUI works
        /// directly against the local store
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Title")]
    title: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        let id_str = task.id.to_string();
        TaskRow {
            id: id_str.chars().take(8).collect(),
            done: if task.completed { "✔" } else { "☐" },
            created: task.created_at.format("%Y-%m-%d").to_string(),
            title: task.title.clone(),
        }
    }
}

fn confirm_clear(count: usize) -> Result<bool> {
    print!("Delete all {} task(s)? [y/N]: ", count);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = FileTaskStore::new(cli.store_dir.clone())?;
    let service = TaskService::new(store);

    match cli.command {
        Some(Commands::Add { title }) => {
            let title = title.join(" ");
            match service.create_task(&title) {
                Ok(task) => println!("Task added: {} (ID: {})", task.title, task.id),
                Err(TaskError::Validation(msg)) => println!("Error: {}", msg),
                Err(err) => return Err(err.into()),
            }
        }
        Some(Commands::List) => {
            let tasks = service.list_tasks()?;
            if tasks.is_empty() {
                println!("No tasks found.");
            } else {
                let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
                println!("{}", Table::new(rows).with(Style::rounded()));
            }
        }
        Some(Commands::Done { id }) => {
            if service.toggle_task(&id)? {
                println!("Toggled task {}.", id);
            } else {
                println!("No task with ID {}.", id);
            }
        }
        Some(Commands::Rm { id }) => {
            if service.delete_task(&id)? {
                println!("Task removed.");
            } else {
                println!("No task with ID {} (nothing to remove).", id);
            }
        }
        Some(Commands::Clear { yes }) => {
            let count = service.list_tasks()?.len();
            if !yes && count > 0 && !confirm_clear(count)? {
                println!("Cancelled.");
                return Ok(());
            }
            let removed = service.delete_all_tasks()?;
            println!("Removed {} task(s).", removed);
        }
        Some(Commands::Tui { base_url }) => {
            tui::run(service, base_url)?;
        }
        None => {
            tui::run(service, None)?;
        }
    }

    Ok(())
}
