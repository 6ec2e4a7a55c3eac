use clap::{Args, Subcommand};
use diario_core::{Collection, DataService, KvStore};

#[derive(Args, Debug)]
pub struct Command {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Count stored records
    Summary,
    /// Delete stored data
    Clear {
        /// diary|tasks|audio; every collection when omitted
        collection: Option<String>,
        /// Required, the deletion cannot be undone
        #[arg(long)]
        yes: bool,
    },
}

pub fn handle<S: KvStore + Copy>(command: Command, store: S) -> eyre::Result<()> {
    let service = DataService::new(store);
    match command.action {
        Action::Summary => {
            let summary = service.summary()?;
            println!("diary entries: {}", summary.diary_entries);
            println!("tasks:         {} ({} open)", summary.tasks, summary.open_tasks);
            println!("recordings:    {}", summary.audio_notes);
        }
        Action::Clear { collection, yes } => {
            if !yes {
                eyre::bail!("refusing to delete without --yes");
            }
            match collection {
                Some(name) => {
                    let collection = Collection::parse(&name)
                        .ok_or_else(|| eyre::eyre!("unknown collection `{name}`"))?;
                    let removed = service.clear(collection)?;
                    println!(
                        "{} {}",
                        collection.key(),
                        if removed { "cleared" } else { "was already empty" }
                    );
                }
                None => {
                    service.clear_all()?;
                    println!("all data deleted");
                }
            }
        }
    }
    Ok(())
}
