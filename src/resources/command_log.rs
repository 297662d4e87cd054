use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

use crate::components::CommandRecord;
use crate::utils::SimError;

/// Ordered, append-only record of every accepted command.
///
/// Persisted as a bare JSON array of `{"command", "arguments"}` objects; the
/// array order is the replay order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandLog {
    records: Vec<CommandRecord>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: CommandRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommandRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&CommandRecord> {
        self.records.last()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    /// Canonical text of every record, in order.
    pub fn canonical_lines(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SimError::FileNotFound(path.to_path_buf()),
            _ => SimError::Io(e),
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

impl<'a> IntoIterator for &'a CommandLog {
    type Item = &'a CommandRecord;
    type IntoIter = std::slice::Iter<'a, CommandRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<CommandRecord> for CommandLog {
    fn from_iter<I: IntoIterator<Item = CommandRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CommandArg;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_log() -> CommandLog {
        [
            CommandRecord::bare("command"),
            CommandRecord::bare("takeoff"),
            CommandRecord::new("forward", vec![CommandArg::Int(100)]),
            CommandRecord::new("flip", vec![CommandArg::Text("b".into())]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_save_load_preserves_order_and_content() -> Result<(), SimError> {
        let dir = tempdir()?;
        let path = dir.path().join("commands.json");
        let log = sample_log();

        log.save(&path)?;
        let loaded = CommandLog::load(&path)?;

        assert_eq!(loaded, log);
        Ok(())
    }

    #[test]
    fn test_file_format_is_record_array() -> Result<(), SimError> {
        let dir = tempdir()?;
        let path = dir.path().join("commands.json");
        sample_log().save(&path)?;

        let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(
            raw,
            serde_json::json!([
                {"command": "command", "arguments": []},
                {"command": "takeoff", "arguments": []},
                {"command": "forward", "arguments": [100]},
                {"command": "flip", "arguments": ["b"]},
            ])
        );
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = CommandLog::load("definitely/not/here.json");
        assert!(matches!(result, Err(SimError::FileNotFound(_))));
    }

    #[test]
    fn test_malformed_file() -> Result<(), SimError> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"command\": ")?;
        assert!(matches!(CommandLog::load(&path), Err(SimError::Json(_))));
        Ok(())
    }

    #[test]
    fn test_canonical_lines() {
        assert_eq!(
            sample_log().canonical_lines(),
            vec!["command", "takeoff", "forward 100", "flip b"]
        );
    }
}
