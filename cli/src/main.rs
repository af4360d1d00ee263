//! Interactive terminal client for the remote to-do list
//!
//! A thin rendering shell over the view-model: it maps line commands onto
//! the view-model operations and prints the current snapshot after each
//! one. Remote failures are logged and otherwise swallowed, so a failed
//! action simply leaves the rendered list unchanged.

mod command;

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_core::config::RemoteConfig;
use todo_core::task::{HttpTaskService, Task, TaskList};

use crate::command::Command;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_cli=info,todo_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RemoteConfig::from_env();
    tracing::info!("Using remote service at {}", config.base_url);

    let list = TaskList::new(HttpTaskService::new(config));

    // The service may not be up yet; start with whatever we can get.
    let _ = list.load().await;
    render(&list.snapshot().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Add(title) => {
                list.set_draft_title(title.clone()).await;
                let _ = list.create(&title).await;
            }
            Command::Toggle(id) => {
                let _ = list.toggle(id).await;
            }
            Command::Remove(id) => {
                let _ = list.remove(id).await;
            }
            Command::List => {
                let _ = list.load().await;
            }
            Command::Help => {
                print_help();
                continue;
            }
            Command::Quit => break,
        }

        render(&list.snapshot().await);
    }

    Ok(())
}

fn render(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("(no tasks)");
        return;
    }
    for task in tasks {
        let mark = if task.completed { "x" } else { " " };
        println!("[{}] {:>4}  {}", mark, task.id, task.title);
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  add <title>     create a task");
    println!("  toggle <id>     flip a task's completion flag");
    println!("  rm <id>         delete a task");
    println!("  list            re-fetch the list from the service");
    println!("  quit            exit");
}
