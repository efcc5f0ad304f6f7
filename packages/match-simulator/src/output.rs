//! Output writers for simulation results.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use points::DayGroup;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use crate::simulator::GameResult;

#[derive(Serialize)]
struct JsonlRow<'a> {
    game: u32,
    rallies: u32,
    undos: u32,
    games: u32,
    #[serde(flatten)]
    record: &'a points::Match,
}

pub struct OutputWriter {
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Writes to `path` when given, stdout otherwise.
    pub fn new(path: Option<&Path>) -> io::Result<Self> {
        let writer: Box<dyn Write> = match path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(Self { writer })
    }

    pub fn write_game(&mut self, game: u32, result: &GameResult) -> io::Result<()> {
        let row = JsonlRow {
            game,
            rallies: result.rallies,
            undos: result.undos,
            games: result.games,
            record: &result.record,
        };
        serde_json::to_writer(&mut self.writer, &row)?;
        self.writer.write_all(b"\n")
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Print the archive the way the history screen lists it: by day, newest first.
pub fn print_history(groups: &[DayGroup]) {
    if groups.is_empty() {
        println!("No matches recorded yet");
        return;
    }
    for group in groups {
        println!("\n{}", group.date);
        for m in &group.matches {
            let at = m
                .timestamp
                .format(&Rfc3339)
                .unwrap_or_else(|_| "unknown".to_string());
            let duration = m
                .elapsed_secs
                .map(points::services::format_elapsed)
                .unwrap_or_default();
            let (left, right) = m.avatars.split_at(m.avatars.len() / 2);
            println!(
                "  {:<10} {} {} {}  {}  {}",
                m.sport.name(),
                left.join("+"),
                m.tally(),
                right.join("+"),
                duration,
                at
            );
        }
    }
}
