use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};

use anyhow::Context;
use log::{debug, info};
use spotter_domain as domain;
use uuid::Uuid;

use crate::{json, templates};

/// Workout history and templates held in memory, loaded from and saved to the JSON log format.
///
/// Records are kept in their serialized form and validated on every read, so a corrupt record
/// surfaces as a storage error instead of failing the whole load.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    logs: Vec<json::WorkoutLog>,
    templates: Vec<domain::Template>,
}

impl MemoryStore {
    /// An empty history with the built-in templates.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            logs: vec![],
            templates: templates::builtin()?,
        })
    }

    /// Reads a log document of the form `{"logs": [...]}`.
    pub fn from_reader(reader: impl Read) -> anyhow::Result<Self> {
        let document: json::WorkoutLogs =
            serde_json::from_reader(reader).context("invalid workout log document")?;
        let mut store = Self::new()?;
        store.logs = document.logs.into_iter().map(with_stable_id).collect();
        Ok(store)
    }

    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let store = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to load {}", path.display()))?;
        info!(
            "loaded {} workout logs from {}",
            store.logs.len(),
            path.display()
        );
        Ok(store)
    }

    /// Writes all records, including soft-deleted ones, as a log document.
    pub fn write(&self, writer: impl Write) -> anyhow::Result<()> {
        let document = json::WorkoutLogs {
            logs: self.logs.clone(),
        };
        serde_json::to_writer_pretty(writer, &document).context("failed to write workout logs")
    }

    /// Adds a log and returns its id. A nil id is replaced by a random one.
    pub fn add_log(&mut self, log: &domain::WorkoutLog) -> domain::WorkoutLogID {
        let id = if log.id.is_nil() {
            domain::WorkoutLogID::random()
        } else {
            log.id
        };
        let mut record = json::WorkoutLog::from(log);
        record.id = id.to_string();
        debug!(
            "adding {} workout {} on {}",
            log.workout_type, record.id, log.date
        );
        self.logs.push(record);
        id
    }

    /// Marks a log as deleted. Returns false if no log has the given id.
    pub fn delete_log(&mut self, id: domain::WorkoutLogID) -> bool {
        let id = id.to_string();
        match self.logs.iter_mut().find(|log| log.id == id && !log.deleted) {
            Some(log) => {
                log.deleted = true;
                true
            }
            None => false,
        }
    }

    /// Adds a custom template, replacing any template with the same id.
    pub fn add_template(&mut self, template: domain::Template) {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template,
            None => self.templates.push(template),
        }
    }

    /// Number of logs that have not been deleted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.logs.iter().filter(|log| !log.deleted).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn with_stable_id(mut log: json::WorkoutLog) -> json::WorkoutLog {
    if Uuid::parse_str(&log.id).is_err() {
        let id = Uuid::new_v4().to_string();
        debug!("assigning id {id} to legacy workout {}", log.id);
        log.id = id;
    }
    log
}

impl domain::HistoryRepository for MemoryStore {
    fn read_logs(
        &self,
        interval: &domain::Interval,
    ) -> Result<Vec<domain::WorkoutLog>, domain::ReadError> {
        let mut logs = self
            .logs
            .iter()
            .filter(|log| !log.deleted && interval.contains(log.date))
            .map(|log| {
                domain::WorkoutLog::try_from(log.clone()).map_err(|err| {
                    domain::StorageError::CorruptRecord(format!("workout {}: {err}", log.id))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        logs.sort_by_key(|log| log.date);
        Ok(logs)
    }
}

impl domain::TemplateRepository for MemoryStore {
    fn read_templates(&self) -> Result<Vec<domain::Template>, domain::ReadError> {
        Ok(self.templates.clone())
    }
}

impl domain::ExerciseCatalog for MemoryStore {
    fn lookup(&self, text: &str) -> Option<domain::CatalogMatch<'_>> {
        domain::lookup(text)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use spotter_domain::{HistoryRepository, TemplateRepository};

    use crate::tests::data::{CLOCK, LOG_DOCUMENT, WORKOUT_LOG, push_log};

    use super::*;

    #[fixture]
    fn store() -> MemoryStore {
        MemoryStore::from_reader(LOG_DOCUMENT.as_bytes()).unwrap()
    }

    fn all() -> domain::Interval {
        domain::Lookback::All.interval(CLOCK.today)
    }

    #[rstest]
    fn test_from_reader(store: MemoryStore) {
        let logs = store.read_logs(&all()).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(
            logs.iter().map(|log| log.date.to_string()).collect::<Vec<_>>(),
            vec!["2024-06-10", "2024-06-17", "2024-06-24"]
        );
        assert!(logs.iter().all(|log| !log.id.is_nil()));
        assert_eq!(logs[1].workout_type, domain::WorkoutType::Other);
    }

    #[rstest]
    fn test_read_logs_interval(store: MemoryStore) {
        let interval = domain::Interval {
            first: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            last: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        };
        let logs = store.read_logs(&interval).unwrap();
        assert_eq!(logs.len(), 2);
    }

    #[rstest]
    fn test_read_exercise_history(store: MemoryStore) {
        let history = store
            .read_exercise_history("bench", &all(), domain::NameMatch::Contains)
            .unwrap();
        assert_eq!(
            history
                .iter()
                .map(|entry| entry.max_weight.map(f32::from))
                .collect::<Vec<_>>(),
            vec![Some(135.0), Some(140.0)]
        );
    }

    #[test]
    fn test_corrupt_record() {
        let store = MemoryStore::from_reader(
            r#"{"logs": [{"id": "2024-06-03-001", "date": "2024-06-03", "type": "Push",
                "exercises": [{"name": "", "sets": []}]}]}"#
                .as_bytes(),
        )
        .unwrap();
        assert!(matches!(
            store.read_logs(&all()),
            Err(domain::ReadError::Storage(
                domain::StorageError::CorruptRecord(_)
            ))
        ));
    }

    #[test]
    fn test_from_reader_invalid_document() {
        assert_eq!(
            MemoryStore::from_reader(r#"{"logs": 5}"#.as_bytes())
                .unwrap_err()
                .to_string(),
            "invalid workout log document"
        );
    }

    #[test]
    fn test_open_missing_file() {
        let err = MemoryStore::open("/nonexistent/workout_logs.json").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to open /nonexistent/workout_logs.json"
        );
    }

    #[test]
    fn test_add_log() {
        let mut store = MemoryStore::new().unwrap();
        let id = store.add_log(&WORKOUT_LOG);

        assert_eq!(id, WORKOUT_LOG.id);
        assert_eq!(store.read_logs(&all()).unwrap(), vec![WORKOUT_LOG.clone()]);
    }

    #[test]
    fn test_add_log_assigns_id() {
        let mut store = MemoryStore::new().unwrap();
        let id = store.add_log(&domain::WorkoutLog {
            id: domain::WorkoutLogID::nil(),
            ..WORKOUT_LOG.clone()
        });

        assert!(!id.is_nil());
        assert_eq!(store.read_logs(&all()).unwrap()[0].id, id);
    }

    #[test]
    fn test_delete_log() {
        let mut store = MemoryStore::new().unwrap();
        let id = store.add_log(&WORKOUT_LOG);

        assert!(store.delete_log(id));
        assert!(!store.delete_log(id));
        assert!(store.is_empty());
        assert_eq!(store.read_logs(&all()).unwrap(), vec![]);
    }

    #[rstest]
    fn test_write_round_trip(store: MemoryStore) {
        let mut buffer = vec![];
        store.write(&mut buffer).unwrap();
        let reloaded = MemoryStore::from_reader(buffer.as_slice()).unwrap();

        assert_eq!(
            reloaded.read_logs(&all()).unwrap(),
            store.read_logs(&all()).unwrap()
        );
    }

    #[test]
    fn test_add_template_replaces() {
        let mut store = MemoryStore::new().unwrap();
        let mut template = store.read_templates().unwrap()[0].clone();
        template.name = "My Push".to_string();
        store.add_template(template);

        let templates = store.read_templates().unwrap();
        assert_eq!(templates.len(), 5);
        assert_eq!(
            domain::resolve_base_template(&templates, domain::WorkoutType::Push)
                .map(|t| t.name.as_str()),
            Some("My Push")
        );
    }

    #[test]
    fn test_coach_with_store() {
        let mut store = MemoryStore::new().unwrap();
        for (date, weight) in [
            ("2024-06-03", 135.0),
            ("2024-06-10", 140.0),
            ("2024-06-17", 145.0),
            ("2024-06-24", 150.0),
        ] {
            store.add_log(&push_log(date, weight));
        }
        let coach = domain::Coach::new(store).at(*CLOCK);

        let progression = coach
            .progression_velocity("Barbell Bench Press", domain::Lookback::All)
            .unwrap();
        assert_eq!(progression.velocity, domain::Velocity::Fast);

        let template = coach.workout_template(domain::WorkoutType::Push, true);
        assert_eq!(template.id, "push_a");
        assert_eq!(template.mode, domain::TemplateMode::Static);

        let session = coach.start_session(domain::WorkoutType::Push, false);
        assert_eq!(
            session.next_planned().map(|(_, e)| e.name.to_string()),
            Some("Barbell Bench Press".to_string())
        );
    }
}
