//! POI file editing
//!
//! A POI file is a JSON object with a `"locations"` array of names plus any
//! number of other categories. Edits keep unknown keys and their order, keep
//! the locations sorted, and save with 2-space indentation through an atomic
//! replace.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::app::atomic::write_atomic;
use crate::constants::poi::LOCATIONS_FIELD;
use crate::errors::{PoiError, PoiResult};

/// In-memory POI document
#[derive(Debug, Clone, PartialEq)]
pub struct PoiDocument {
    fields: Map<String, Value>,
}

impl Default for PoiDocument {
    fn default() -> Self {
        let mut fields = Map::new();
        fields.insert(LOCATIONS_FIELD.to_string(), Value::Array(Vec::new()));
        Self { fields }
    }
}

impl PoiDocument {
    /// Parse a document, `None` unless the text is a JSON object
    pub fn parse(text: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(text).ok()?;
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Load a POI file
    ///
    /// # Errors
    ///
    /// `PoiError::NotFound` for a missing file, `PoiError::InvalidJson` or
    /// `PoiError::NotAnObject` for content that is not a JSON object.
    pub fn load(path: &Path) -> PoiResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                PoiError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PoiError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|source| PoiError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(PoiError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Load a POI file, starting an empty document if it does not exist
    pub fn load_or_default(path: &Path) -> PoiResult<Self> {
        match Self::load(path) {
            Err(PoiError::NotFound { .. }) => {
                debug!("Starting new POI file at {}", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Location names in file order; non-string entries are skipped
    pub fn locations(&self) -> Vec<&str> {
        match self.fields.get(LOCATIONS_FIELD) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether any location contains `needle`, ignoring case
    ///
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.locations()
            .iter()
            .any(|loc| loc.to_lowercase().contains(needle))
    }

    /// Value of a category
    pub fn category(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Category names other than the locations list, in file order
    pub fn category_names(&self) -> Vec<&str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|key| *key != LOCATIONS_FIELD)
            .collect()
    }

    /// Add a location; returns `false` if it was already listed
    pub fn add_location(&mut self, name: &str) -> PoiResult<bool> {
        let name = non_empty(name, "Location")?;
        let mut items = self.location_items();
        if items.iter().any(|item| item.as_str() == Some(name)) {
            return Ok(false);
        }

        items.push(Value::String(name.to_string()));
        self.store_locations(items);
        Ok(true)
    }

    /// Rename a location; returns `false` if the names are the same
    pub fn rename_location(&mut self, from: &str, to: &str) -> PoiResult<bool> {
        let to = non_empty(to, "Location")?;
        let mut items = self.location_items();
        let index = position_of(&items, from).ok_or_else(|| PoiError::LocationNotFound {
            name: from.to_string(),
        })?;

        if from == to {
            return Ok(false);
        }
        if position_of(&items, to).is_some() {
            return Err(PoiError::LocationExists {
                name: to.to_string(),
            });
        }

        items[index] = Value::String(to.to_string());
        self.store_locations(items);
        Ok(true)
    }

    /// Remove the first location with this exact name
    pub fn remove_location(&mut self, name: &str) -> PoiResult<()> {
        let mut items = self.location_items();
        let index = position_of(&items, name).ok_or_else(|| PoiError::LocationNotFound {
            name: name.to_string(),
        })?;

        items.remove(index);
        self.store_locations(items);
        Ok(())
    }

    /// Add or replace a category
    pub fn set_category(&mut self, name: &str, value: Value) -> PoiResult<()> {
        let name = non_empty(name, "Category")?;
        reject_reserved(name)?;
        self.fields.insert(name.to_string(), value);
        Ok(())
    }

    /// Remove a category, returning its old value
    pub fn remove_category(&mut self, name: &str) -> PoiResult<Value> {
        reject_reserved(name)?;
        self.fields
            .shift_remove(name)
            .ok_or_else(|| PoiError::CategoryNotFound {
                name: name.to_string(),
            })
    }

    /// Pretty-printed JSON with 2-space indentation
    pub fn to_json(&self) -> PoiResult<String> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }

    /// Save the document atomically
    pub fn save(&self, path: &Path) -> PoiResult<()> {
        write_atomic(path, &self.to_json()?)?;
        info!("Saved POI file {}", path.display());
        Ok(())
    }

    /// Current locations array; a missing or malformed entry reads as empty
    fn location_items(&self) -> Vec<Value> {
        match self.fields.get(LOCATIONS_FIELD) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    fn store_locations(&mut self, mut items: Vec<Value>) {
        items.sort_by(|a, b| a.as_str().cmp(&b.as_str()));
        self.fields
            .insert(LOCATIONS_FIELD.to_string(), Value::Array(items));
    }
}

fn position_of(items: &[Value], name: &str) -> Option<usize> {
    items.iter().position(|item| item.as_str() == Some(name))
}

fn non_empty<'a>(name: &'a str, kind: &'static str) -> PoiResult<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PoiError::EmptyName { kind });
    }
    Ok(name)
}

fn reject_reserved(name: &str) -> PoiResult<()> {
    if name == LOCATIONS_FIELD {
        return Err(PoiError::ReservedCategory {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Interpret a typed-in category value
///
/// `true`/`false` (any case) become booleans, integers become numbers, text
/// starting with `[` or `{` is parsed as JSON when it is valid, and anything
/// else is kept as a string.
pub fn parse_category_value(raw: &str) -> Value {
    let lowered = raw.to_lowercase();
    if lowered == "true" || lowered == "false" {
        return Value::Bool(lowered == "true");
    }

    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::from(n);
        }
    }

    if raw.starts_with(['[', '{']) {
        if let Ok(value) = serde_json::from_str(raw) {
            return value;
        }
    }

    Value::String(raw.to_string())
}

/// Interpret a comma-separated list: trimmed, blanks dropped, sorted
pub fn parse_category_items(raw: &str) -> Value {
    let mut items: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();
    items.sort_unstable();
    Value::from(items)
}

/// One edit to a POI file
#[derive(Debug, Clone, PartialEq)]
pub enum PoiEdit {
    AddLocation { name: String },
    RenameLocation { from: String, to: String },
    RemoveLocation { name: String },
    SetCategory { name: String, value: Value },
    RemoveCategory { name: String },
}

impl PoiEdit {
    /// Whether the edit may start from a file that does not exist yet
    fn creates_file(&self) -> bool {
        matches!(self, Self::AddLocation { .. } | Self::SetCategory { .. })
    }

    /// Apply to a document; returns `false` when nothing changed
    pub fn apply(&self, doc: &mut PoiDocument) -> PoiResult<bool> {
        match self {
            Self::AddLocation { name } => doc.add_location(name),
            Self::RenameLocation { from, to } => doc.rename_location(from, to),
            Self::RemoveLocation { name } => doc.remove_location(name).map(|()| true),
            Self::SetCategory { name, value } => {
                doc.set_category(name, value.clone()).map(|()| true)
            }
            Self::RemoveCategory { name } => doc.remove_category(name).map(|_| true),
        }
    }
}

impl fmt::Display for PoiEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddLocation { name } => write!(f, "add location '{}'", name),
            Self::RenameLocation { from, to } => {
                write!(f, "rename location '{}' to '{}'", from, to)
            }
            Self::RemoveLocation { name } => write!(f, "remove location '{}'", name),
            Self::SetCategory { name, .. } => write!(f, "set category '{}'", name),
            Self::RemoveCategory { name } => write!(f, "remove category '{}'", name),
        }
    }
}

/// Load `path`, apply `edit` and save if anything changed
///
/// Returns whether the file was written.
pub fn edit_poi_file(path: &Path, edit: &PoiEdit) -> PoiResult<bool> {
    let mut doc = if edit.creates_file() {
        PoiDocument::load_or_default(path)?
    } else {
        PoiDocument::load(path)?
    };

    if !edit.apply(&mut doc)? {
        debug!("{} left {} unchanged", edit, path.display());
        return Ok(false);
    }

    doc.save(path)?;
    Ok(true)
}
