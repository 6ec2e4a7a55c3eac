use clap::{Args, Subcommand};
use diario_core::{Clock, DiaryEntry, DiaryService, Emotion, KvStore, RecordId};

#[derive(Args, Debug)]
pub struct Command {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Save how you feel right now
    Add {
        /// Key, emoji or name, see `diario emotions`
        emotion: String,
        /// Optional free-text note
        #[arg(long, short)]
        note: Option<String>,
    },
    /// Show the history, newest first
    List,
    /// Delete one entry
    Delete { id: RecordId },
}

pub fn handle<S: KvStore, C: Clock>(command: Command, store: S, clock: C) -> eyre::Result<()> {
    let service = DiaryService::new(store, clock);
    match command.action {
        Action::Add { emotion, note } => {
            let emotion = Emotion::parse(&emotion).ok_or_else(|| {
                eyre::eyre!("unknown emotion `{emotion}`; run `diario emotions` for the list")
            })?;
            let entries = service.add_entry(emotion, note)?;
            if let Some(entry) = entries.first() {
                println!("saved entry {}", entry.id);
            }
        }
        Action::List => print_entries(&service.list_entries()?),
        Action::Delete { id } => {
            service.delete_entry(id)?;
            println!("deleted entry {id}");
        }
    }
    Ok(())
}

fn print_entries(entries: &[DiaryEntry]) {
    if entries.is_empty() {
        println!("no diary entries yet");
        return;
    }
    for entry in entries {
        println!(
            "{} {} {} às {}",
            entry.id,
            entry.emotion.emoji(),
            entry.date,
            entry.time
        );
        if let Some(note) = &entry.note {
            println!("    {note}");
        }
    }
}
