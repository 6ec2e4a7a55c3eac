use clap::Subcommand;
use diario_core::{core_version, ping, Emotion, SqliteKvStore, SystemClock};

pub mod audio;
pub mod data;
pub mod diary;
pub mod task;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record and review emotions
    Diary(diary::Command),
    /// Manage the to-do list
    Task(task::Command),
    /// Keep track of voice-memo recordings
    Audio(audio::Command),
    /// Show counts or delete stored data
    Data(data::Command),
    /// List the emotions accepted by `diary add`
    Emotions,
    /// Check that the core library is linked
    Ping,
}

impl Command {
    pub fn needs_storage(&self) -> bool {
        !matches!(self, Self::Emotions | Self::Ping)
    }

    pub fn execute_offline(self) -> eyre::Result<()> {
        match self {
            Self::Emotions => {
                for emotion in Emotion::ALL {
                    println!("{:<9} {}", emotion.key(), emotion);
                }
            }
            Self::Ping => {
                println!("diario_core ping={}", ping());
                println!("diario_core version={}", core_version());
            }
            other => eyre::bail!("`{other:?}` needs the diary database"),
        }
        Ok(())
    }

    pub fn execute(self, store: SqliteKvStore<'_>) -> eyre::Result<()> {
        match self {
            Self::Diary(command) => diary::handle(command, store, SystemClock),
            Self::Task(command) => task::handle(command, store, SystemClock),
            Self::Audio(command) => audio::handle(command, store, SystemClock),
            Self::Data(command) => data::handle(command, store),
            offline => offline.execute_offline(),
        }
    }
}
