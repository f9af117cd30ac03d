//! File-backed form store
//!
//! Two files under the data directory:
//! - the schema document (`FormSchema::to_document` output)
//! - the submission list, oldest first
//!
//! Both are framed with a checksum header (see `frame`) and replaced
//! atomically: written to a temporary sibling, synced, then renamed.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{StorageError, StorageResult};
use super::frame::{decode_frame, encode_frame};
use super::submission::Submission;
use crate::config::Config;
use crate::observability::{log_event_with_fields, Event};
use crate::schema::{FormDocument, FormSchema};
use crate::validation::ValueMap;

/// Persistent home of one form's schema and submissions.
#[derive(Debug, Clone)]
pub struct FormStore {
    data_dir: PathBuf,
    schema_path: PathBuf,
    submissions_path: PathBuf,
}

impl FormStore {
    /// Opens the store described by `config`, creating the data directory
    /// if needed.
    pub fn open(config: &Config) -> StorageResult<Self> {
        Self::open_with(
            config.data_path(),
            &config.schema_file,
            &config.submissions_file,
        )
    }

    /// Opens a store in `data_dir` with the default file names.
    pub fn open_dir(data_dir: &Path) -> StorageResult<Self> {
        Self::open(&Config::new(data_dir.display().to_string()))
    }

    fn open_with(data_dir: &Path, schema_file: &str, submissions_file: &str) -> StorageResult<Self> {
        fs::create_dir_all(data_dir).map_err(|e| {
            StorageError::io(
                format!("Failed to create data directory: {}", data_dir.display()),
                e,
            )
        })?;

        log_event_with_fields(
            Event::StoreOpened,
            &[("data_dir", data_dir.display().to_string().as_str())],
        );

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            schema_path: data_dir.join(schema_file),
            submissions_path: data_dir.join(submissions_file),
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Persists the current schema.
    pub fn save_schema(&self, schema: &FormSchema) -> StorageResult<()> {
        self.save_document(&schema.to_document())
    }

    /// Persists a schema document as given.
    pub fn save_document(&self, doc: &FormDocument) -> StorageResult<()> {
        self.write_json(&self.schema_path, doc)?;
        log_event_with_fields(
            Event::SchemaSaved,
            &[("fields", doc.fields.len().to_string().as_str())],
        );
        Ok(())
    }

    /// Reads the stored schema document, or `None` if none was saved.
    pub fn load_document(&self) -> StorageResult<Option<FormDocument>> {
        self.read_json(&self.schema_path)
    }

    /// Restores the stored schema, or `None` if none was saved.
    ///
    /// The id counter resumes from the saved counter when that is ahead of
    /// the restored ids, so ids of removed fields are not handed out again.
    /// A document that names an unknown field type counts as corruption.
    pub fn load_schema(&self) -> StorageResult<Option<FormSchema>> {
        let Some(doc) = self.load_document()? else {
            return Ok(None);
        };

        let saved_next_id = doc.next_id;
        let mut schema = FormSchema::from_document(doc).map_err(|e| {
            self.corrupted(format!("{}: {}", self.schema_path.display(), e))
        })?;
        if let Some(next_id) = saved_next_id {
            schema.reserve_ids(next_id);
        }

        log_event_with_fields(
            Event::SchemaLoaded,
            &[
                ("fields", schema.len().to_string().as_str()),
                ("next_id", schema.next_id().to_string().as_str()),
            ],
        );
        Ok(Some(schema))
    }

    /// Loads the stored schema, or an empty one.
    pub fn load_schema_or_default(&self) -> StorageResult<FormSchema> {
        Ok(self.load_schema()?.unwrap_or_default())
    }

    /// Deletes the stored schema. Clearing an absent schema succeeds.
    pub fn clear_schema(&self) -> StorageResult<()> {
        remove_if_present(&self.schema_path)?;
        log_event_with_fields(Event::SchemaCleared, &[]);
        Ok(())
    }

    /// Appends a submission with a fresh id and timestamp.
    pub fn save_submission(&self, data: ValueMap) -> StorageResult<Submission> {
        let mut submissions = self.submissions()?;
        let submission = Submission::new(data);
        submissions.push(submission.clone());
        self.write_json(&self.submissions_path, &submissions)?;

        log_event_with_fields(
            Event::SubmissionSaved,
            &[
                ("submission_id", submission.id.to_string().as_str()),
                ("total", submissions.len().to_string().as_str()),
            ],
        );
        Ok(submission)
    }

    /// All stored submissions, oldest first.
    pub fn submissions(&self) -> StorageResult<Vec<Submission>> {
        Ok(self.read_json(&self.submissions_path)?.unwrap_or_default())
    }

    /// Deletes every stored submission.
    pub fn clear_submissions(&self) -> StorageResult<()> {
        remove_if_present(&self.submissions_path)?;
        log_event_with_fields(Event::SubmissionsCleared, &[]);
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> StorageResult<Option<T>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::io(
                    format!("Failed to read {}", path.display()),
                    e,
                ))
            }
        };

        let origin = path.display().to_string();
        let payload = decode_frame(&bytes, &origin).map_err(|e| {
            log_event_with_fields(Event::StoreCorruption, &[("path", origin.as_str())]);
            e
        })?;

        serde_json::from_slice(payload)
            .map(Some)
            .map_err(|e| self.corrupted(format!("{}: undecodable content: {}", origin, e)))
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> StorageResult<()> {
        let payload = serde_json::to_vec_pretty(value).map_err(|e| {
            StorageError::io(
                format!("Failed to encode {}", path.display()),
                io::Error::new(io::ErrorKind::InvalidData, e),
            )
        })?;

        let tmp_path = path.with_extension("tmp");
        let write = |tmp: &Path| -> io::Result<()> {
            let mut file = File::create(tmp)?;
            file.write_all(&encode_frame(&payload))?;
            file.sync_all()?;
            fs::rename(tmp, path)
        };

        write(&tmp_path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            StorageError::io(format!("Failed to write {}", path.display()), e)
        })
    }

    fn corrupted(&self, message: String) -> StorageError {
        log_event_with_fields(Event::StoreCorruption, &[("reason", message.as_str())]);
        StorageError::corruption(message)
    }
}

fn remove_if_present(path: &Path) -> StorageResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::io(
            format!("Failed to remove {}", path.display()),
            e,
        )),
    }
}
