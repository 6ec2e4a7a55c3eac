use clap::{Args, Subcommand};
use diario_core::{Clock, KvStore, RecordId, Task, TaskService};

#[derive(Args, Debug)]
pub struct Command {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Add a new task
    Add { text: String },
    /// Show tasks, newest first
    List,
    /// Mark a task done, or reopen it
    Toggle { id: RecordId },
    /// Delete one task
    Delete { id: RecordId },
}

pub fn handle<S: KvStore, C: Clock>(command: Command, store: S, clock: C) -> eyre::Result<()> {
    let service = TaskService::new(store, clock);
    match command.action {
        Action::Add { text } => {
            let tasks = service.add_task(&text)?;
            if let Some(task) = tasks.first() {
                println!("added task {}", task.id);
            }
        }
        Action::List => print_tasks(&service.list_tasks()?),
        Action::Toggle { id } => {
            let tasks = service.toggle_task(id)?;
            let done = tasks.iter().any(|task| task.id == id && task.completed);
            println!("task {id} {}", if done { "completed" } else { "reopened" });
        }
        Action::Delete { id } => {
            service.delete_task(id)?;
            println!("deleted task {id}");
        }
    }
    Ok(())
}

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("no tasks yet");
        return;
    }
    for task in tasks {
        let mark = if task.completed { "x" } else { " " };
        println!("{} [{mark}] {}", task.id, task.text);
    }
}
