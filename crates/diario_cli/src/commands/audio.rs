use clap::{Args, Subcommand};
use diario_core::{AudioNoteService, Clock, KvStore, RecordId};

#[derive(Args, Debug)]
pub struct Command {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Register a finished recording
    Add {
        /// Location of the recorded file
        uri: String,
        #[arg(long)]
        duration_ms: Option<u64>,
    },
    /// Show recordings, newest first
    List,
    /// Forget one recording (the file is left in place)
    Delete { id: RecordId },
}

pub fn handle<S: KvStore, C: Clock>(command: Command, store: S, clock: C) -> eyre::Result<()> {
    let service = AudioNoteService::new(store, clock);
    match command.action {
        Action::Add { uri, duration_ms } => {
            let notes = service.add_note(&uri, duration_ms)?;
            if let Some(note) = notes.first() {
                println!("saved recording {}", note.id);
            }
        }
        Action::List => {
            let notes = service.list_notes()?;
            if notes.is_empty() {
                println!("no recordings yet");
            }
            for note in notes {
                let length = note.duration_label().unwrap_or_else(|| "-:--".to_string());
                println!(
                    "{} {} {} [{length}] {}",
                    note.id, note.date, note.time, note.uri
                );
            }
        }
        Action::Delete { id } => {
            service.delete_note(id)?;
            println!("deleted recording {id}");
        }
    }
    Ok(())
}
