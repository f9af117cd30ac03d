//! Field type definitions
//!
//! Supported field types:
//! - text: free text with optional length bounds
//! - email: `local@domain.tld` shaped text
//! - number: numeric text
//! - select / radio: exactly one choice out of `options`
//! - checkbox: any number of choices out of `options`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field identifier, assigned by `FormSchema` only.
pub type FieldId = u64;

/// Message used when no type-specific default exists.
pub const FALLBACK_ERROR_MESSAGE: &str = "This field is invalid";

/// Field type tag, as it appears in stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Select,
    Radio,
    Checkbox,
}

impl FieldType {
    /// All field types, in builder menu order.
    pub const ALL: [FieldType; 6] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Number,
        FieldType::Select,
        FieldType::Radio,
        FieldType::Checkbox,
    ];

    /// Returns the type name used in records and on the command line
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
        }
    }

    /// Whether fields of this type must carry a non-empty option list
    pub fn requires_options(&self) -> bool {
        matches!(
            self,
            FieldType::Select | FieldType::Radio | FieldType::Checkbox
        )
    }

    /// Returns the message shown when a field of this type fails validation
    /// and no custom message was configured.
    pub fn default_error_message(&self) -> &'static str {
        match self {
            FieldType::Text => "This field is required",
            FieldType::Email => "Please enter a valid email address",
            FieldType::Number => "Please enter a valid number",
            FieldType::Select | FieldType::Radio => "Please select an option",
            FieldType::Checkbox => "Please select at least one option",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .iter()
            .copied()
            .find(|t| t.type_name() == s)
            .ok_or_else(|| format!("unknown field type '{}'", s))
    }
}

/// Default message for a raw type name, falling back for unknown names.
pub fn default_error_message_for(type_name: &str) -> &'static str {
    type_name
        .parse::<FieldType>()
        .map(|t| t.default_error_message())
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
}

/// Field type together with the attributes only that type uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text {
        min_length: Option<u32>,
        max_length: Option<u32>,
    },
    Email,
    Number,
    Select {
        options: Vec<String>,
    },
    Radio {
        options: Vec<String>,
    },
    Checkbox {
        options: Vec<String>,
    },
}

impl FieldKind {
    /// Builds a kind from its flat parts.
    ///
    /// Options are dropped for types that don't use them, length bounds are
    /// dropped for everything but text, and a bound of 0 counts as unset.
    pub fn from_parts(
        field_type: FieldType,
        options: Vec<String>,
        min_length: Option<u32>,
        max_length: Option<u32>,
    ) -> Self {
        match field_type {
            FieldType::Text => FieldKind::Text {
                min_length: min_length.filter(|n| *n > 0),
                max_length: max_length.filter(|n| *n > 0),
            },
            FieldType::Email => FieldKind::Email,
            FieldType::Number => FieldKind::Number,
            FieldType::Select => FieldKind::Select { options },
            FieldType::Radio => FieldKind::Radio { options },
            FieldType::Checkbox => FieldKind::Checkbox { options },
        }
    }

    /// Returns the type tag
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::Text { .. } => FieldType::Text,
            FieldKind::Email => FieldType::Email,
            FieldKind::Number => FieldType::Number,
            FieldKind::Select { .. } => FieldType::Select,
            FieldKind::Radio { .. } => FieldType::Radio,
            FieldKind::Checkbox { .. } => FieldType::Checkbox,
        }
    }

    /// Choice options; empty for types without choices
    pub fn options(&self) -> &[String] {
        match self {
            FieldKind::Select { options }
            | FieldKind::Radio { options }
            | FieldKind::Checkbox { options } => options,
            _ => &[],
        }
    }

    pub fn min_length(&self) -> Option<u32> {
        match self {
            FieldKind::Text { min_length, .. } => *min_length,
            _ => None,
        }
    }

    pub fn max_length(&self) -> Option<u32> {
        match self {
            FieldKind::Text { max_length, .. } => *max_length,
            _ => None,
        }
    }
}

/// One configured input of a form.
///
/// Fields are created and changed only through `FormSchema`; the accessors
/// here are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub(crate) id: FieldId,
    pub(crate) name: String,
    pub(crate) kind: FieldKind,
    pub(crate) required: bool,
    pub(crate) error_message: String,
}

impl Field {
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Label of the field and key of its value in a submission
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    pub fn options(&self) -> &[String] {
        self.kind.options()
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn min_length(&self) -> Option<u32> {
        self.kind.min_length()
    }

    pub fn max_length(&self) -> Option<u32> {
        self.kind.max_length()
    }

    /// Message reported when this field fails validation
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

/// Input to `FormSchema::add_field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    pub name: String,
    pub field_type: FieldType,
    pub options: Vec<String>,
    pub required: bool,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    /// `None` selects the type's default message
    pub error_message: Option<String>,
}

impl FieldDraft {
    /// Create a draft with every optional attribute at its default
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            options: Vec::new(),
            required: false,
            min_length: None,
            max_length: None,
            error_message: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_length(mut self, min_length: u32) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// Partial update for `FormSchema::update_field`.
///
/// `None` leaves an attribute unchanged. Length bounds use a nested option so
/// an update can clear a bound (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdate {
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
    pub options: Option<Vec<String>>,
    pub required: Option<bool>,
    pub min_length: Option<Option<u32>>,
    pub max_length: Option<Option<u32>>,
    pub error_message: Option<String>,
}

impl FieldUpdate {
    /// Returns true if the update changes nothing
    pub fn is_empty(&self) -> bool {
        self == &FieldUpdate::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_error_messages() {
        assert_eq!(FieldType::Text.default_error_message(), "This field is required");
        assert_eq!(
            FieldType::Email.default_error_message(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldType::Number.default_error_message(),
            "Please enter a valid number"
        );
        assert_eq!(FieldType::Select.default_error_message(), "Please select an option");
        assert_eq!(FieldType::Radio.default_error_message(), "Please select an option");
        assert_eq!(
            FieldType::Checkbox.default_error_message(),
            "Please select at least one option"
        );
        assert_eq!(default_error_message_for("date"), "This field is invalid");
    }

    #[test]
    fn test_type_name_parse() {
        for t in FieldType::ALL {
            assert_eq!(t.type_name().parse::<FieldType>().unwrap(), t);
        }
        assert!("Text".parse::<FieldType>().is_err());
    }

    #[test]
    fn test_requires_options() {
        assert!(FieldType::Select.requires_options());
        assert!(FieldType::Radio.requires_options());
        assert!(FieldType::Checkbox.requires_options());
        assert!(!FieldType::Text.requires_options());
        assert!(!FieldType::Number.requires_options());
    }

    #[test]
    fn test_kind_from_parts_drops_unused_attributes() {
        let kind = FieldKind::from_parts(FieldType::Email, vec!["a".into()], Some(3), Some(5));
        assert_eq!(kind, FieldKind::Email);
        assert!(kind.options().is_empty());
        assert_eq!(kind.min_length(), None);

        let kind = FieldKind::from_parts(FieldType::Select, vec!["a".into()], Some(3), None);
        assert_eq!(kind.options(), ["a".to_string()]);
        assert_eq!(kind.min_length(), None);
    }

    #[test]
    fn test_zero_length_bound_is_unset() {
        let kind = FieldKind::from_parts(FieldType::Text, vec![], Some(0), Some(4));
        assert_eq!(kind.min_length(), None);
        assert_eq!(kind.max_length(), Some(4));
    }

    #[test]
    fn test_field_update_is_empty() {
        assert!(FieldUpdate::default().is_empty());
        let update = FieldUpdate {
            required: Some(true),
            ..FieldUpdate::default()
        };
        assert!(!update.is_empty());
    }
}
