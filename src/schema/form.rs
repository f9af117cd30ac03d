//! The ordered field collection of a form
//!
//! `FormSchema` is the only owner of field identity and order:
//! - ids come from an internal counter and are never reused, except after
//!   `clear_fields` which resets the counter
//! - order changes only through `move_field_up` / `move_field_down`
//!
//! Operations never validate their input. Callers run the checks in
//! `schema::definition` first; an id that matches no field is a no-op.

use chrono::Utc;

use super::errors::{SchemaError, SchemaResult};
use super::record::{FieldRecord, FormDocument};
use super::types::{Field, FieldDraft, FieldId, FieldKind, FieldUpdate};

/// Ordered, uniquely identified collection of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<Field>,
    next_id: FieldId,
}

impl FormSchema {
    /// Creates an empty schema whose first field gets id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new field and returns it.
    ///
    /// The id is taken from the counter. A missing or empty error message is
    /// replaced by the type's default message. Fails without changing the
    /// schema once the counter has no successor.
    pub fn add_field(&mut self, draft: FieldDraft) -> SchemaResult<&Field> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| SchemaError::id_overflow(id))?;

        let error_message = draft
            .error_message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| draft.field_type.default_error_message().to_string());

        self.fields.push(Field {
            id,
            name: draft.name,
            kind: FieldKind::from_parts(
                draft.field_type,
                draft.options,
                draft.min_length,
                draft.max_length,
            ),
            required: draft.required,
            error_message,
        });

        Ok(&self.fields[self.fields.len() - 1])
    }

    /// Removes a field permanently. Returns the removed field, or `None` if no
    /// field has this id.
    pub fn remove_field(&mut self, id: FieldId) -> Option<Field> {
        let index = self.position(id)?;
        Some(self.fields.remove(index))
    }

    /// Looks up a field by id
    pub fn get_field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Looks up the first field with the given name
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Merges `update` into an existing field.
    ///
    /// Attributes absent from the update keep their value; the id is never
    /// touched. An empty error message falls back to the default message of
    /// the field's (possibly new) type. Returns `None` if no field has this id.
    pub fn update_field(&mut self, id: FieldId, update: FieldUpdate) -> Option<&Field> {
        let index = self.position(id)?;
        let field = &mut self.fields[index];

        if let Some(name) = update.name {
            field.name = name;
        }
        if let Some(required) = update.required {
            field.required = required;
        }

        let field_type = update.field_type.unwrap_or_else(|| field.kind.field_type());
        let options = update
            .options
            .unwrap_or_else(|| field.kind.options().to_vec());
        let min_length = update.min_length.unwrap_or_else(|| field.kind.min_length());
        let max_length = update.max_length.unwrap_or_else(|| field.kind.max_length());
        field.kind = FieldKind::from_parts(field_type, options, min_length, max_length);

        if let Some(message) = update.error_message {
            field.error_message = if message.is_empty() {
                field_type.default_error_message().to_string()
            } else {
                message
            };
        }

        Some(&self.fields[index])
    }

    /// Swaps a field with its predecessor. Returns false for the first field or
    /// an unknown id.
    pub fn move_field_up(&mut self, id: FieldId) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                self.fields.swap(index, index - 1);
                true
            }
            _ => false,
        }
    }

    /// Swaps a field with its successor. Returns false for the last field or
    /// an unknown id.
    pub fn move_field_down(&mut self, id: FieldId) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.fields.len() => {
                self.fields.swap(index, index + 1);
                true
            }
            _ => false,
        }
    }

    /// Removes every field and resets the id counter to 0.
    pub fn clear_fields(&mut self) {
        self.fields.clear();
        self.next_id = 0;
    }

    /// Fields in form order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Id the next `add_field` will assign
    pub fn next_id(&self) -> FieldId {
        self.next_id
    }

    /// Exports the fields as plain records, stamped with the current time.
    pub fn to_document(&self) -> FormDocument {
        FormDocument {
            fields: self.fields.iter().map(FieldRecord::from).collect(),
            next_id: Some(self.next_id),
            created_at: Some(Utc::now()),
        }
    }

    /// Builds a schema from a document. See `restore`.
    pub fn from_document(doc: FormDocument) -> SchemaResult<Self> {
        let mut schema = Self::new();
        schema.restore(doc)?;
        Ok(schema)
    }

    /// Replaces the fields with those of `doc`.
    ///
    /// The counter becomes one past the largest restored id, or 0 for an
    /// empty document. Ids are taken as stored: a document with duplicate ids
    /// keeps them. A stored `nextId` is ignored here; see `reserve_ids`. On
    /// error the schema is left unchanged.
    pub fn restore(&mut self, doc: FormDocument) -> SchemaResult<()> {
        let fields = doc
            .fields
            .into_iter()
            .map(Field::try_from)
            .collect::<SchemaResult<Vec<_>>>()?;

        let next_id = match fields.iter().map(|f| f.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| SchemaError::id_overflow(max))?,
            None => 0,
        };

        self.next_id = next_id;
        self.fields = fields;
        Ok(())
    }

    /// Raises the counter to `next_id` if it is lower.
    ///
    /// Used after `restore` to carry a counter that was persisted alongside
    /// the document, so ids freed by removals stay unused across reloads.
    pub fn reserve_ids(&mut self, next_id: FieldId) {
        self.next_id = self.next_id.max(next_id);
    }

    fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }
}
