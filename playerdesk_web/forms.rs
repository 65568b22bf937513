use rust_i18n::t;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::collections::HashMap;

use playerdesk_types::player::{Player, PlayerId};

use crate::handlers::HasCsrfToken;

pub const ACTIVE_FIELD: &str = "active";
const CSRF_FIELD: &str = "csrf_token";

/// Input widget chosen from the type of the attribute's wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Attribute that was `null` on the wire; an empty input sends `null` back.
    OptionalText,
    Integer,
    Decimal,
    Checkbox,
}

impl FieldKind {
    /// Arrays and objects have no widget and are passed through read-only.
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => Some(FieldKind::Text),
            Value::Null => Some(FieldKind::OptionalText),
            Value::Bool(_) => Some(FieldKind::Checkbox),
            Value::Number(n) if n.is_f64() => Some(FieldKind::Decimal),
            Value::Number(_) => Some(FieldKind::Integer),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::OptionalText => "text",
            FieldKind::Integer | FieldKind::Decimal => "number",
            FieldKind::Checkbox => "checkbox",
        }
    }

    pub fn step(&self) -> Option<&'static str> {
        match self {
            FieldKind::Integer => Some("1"),
            FieldKind::Decimal => Some("any"),
            _ => None,
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, FieldKind::Checkbox)
    }

    /// `Ok(None)` leaves the attribute untouched.
    fn parse(&self, raw: Option<&str>) -> Result<Option<Value>, String> {
        match self {
            FieldKind::Checkbox => Ok(Some(Value::Bool(is_checked(raw)))),
            FieldKind::Text => Ok(raw.map(|raw| Value::String(raw.to_string()))),
            FieldKind::OptionalText => Ok(raw.map(|raw| match raw {
                "" => Value::Null,
                raw => Value::String(raw.to_string()),
            })),
            FieldKind::Integer => {
                let Some(raw) = raw else { return Ok(None) };
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(t!("form.blank").to_string());
                }
                if let Ok(n) = raw.parse::<i64>() {
                    return Ok(Some(Value::Number(n.into())));
                }
                raw.parse::<u64>()
                    .map(|n| Some(Value::Number(n.into())))
                    .map_err(|_| t!("form.not_integer").to_string())
            }
            FieldKind::Decimal => {
                let Some(raw) = raw else { return Ok(None) };
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(t!("form.blank").to_string());
                }
                raw.parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(|n| Some(Value::Number(n)))
                    .ok_or_else(|| t!("form.not_number").to_string())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub input_name: String,
    pub kind: FieldKind,
    pub value: String,
    pub checked: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReadonlyField {
    pub name: String,
    pub value: String,
}

/// Editable view of one remote player.
///
/// `bind` turns the record into widgets, `submit` applies a submission and
/// either yields the edited record or hands the form back with field errors.
#[derive(Debug, Clone)]
pub struct PlayerForm {
    record: Player,
    pub active: bool,
    pub fields: Vec<FormField>,
    pub readonly: Vec<ReadonlyField>,
}

impl PlayerForm {
    pub fn bind(player: Player) -> Self {
        let mut fields = Vec::new();
        let mut readonly = Vec::new();

        for (name, value) in &player.attributes {
            match FieldKind::of(value) {
                Some(kind) => fields.push(FormField {
                    name: name.clone(),
                    input_name: input_name(name),
                    kind,
                    value: display_value(value),
                    checked: matches!(value, Value::Bool(true)),
                    error: None,
                }),
                None => readonly.push(ReadonlyField {
                    name: name.clone(),
                    value: value.to_string(),
                }),
            }
        }

        Self {
            active: player.active,
            record: player,
            fields,
            readonly,
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.record.id
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|field| field.error.is_some())
    }

    pub fn submit(mut self, submission: &PlayerSubmission) -> Result<Player, PlayerForm> {
        let mut player = self.record.clone();

        self.active = is_checked(submission.get(ACTIVE_FIELD));
        player.active = self.active;

        for field in &mut self.fields {
            let raw = submission.get(&field.input_name);

            match field.kind.parse(raw) {
                Ok(Some(value)) => {
                    player.attributes.insert(field.name.clone(), value);
                }
                Ok(None) => {}
                Err(message) => field.error = Some(message),
            }

            if field.kind.is_checkbox() {
                field.checked = is_checked(raw);
            } else if let Some(raw) = raw {
                field.value = raw.to_string();
            }
        }

        if self.has_errors() {
            Err(self)
        } else {
            Ok(player)
        }
    }
}

/// Raw urlencoded body of the edit form.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct PlayerSubmission(HashMap<String, String>);

impl PlayerSubmission {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PlayerSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl HasCsrfToken for PlayerSubmission {
    fn csrf_token(&self) -> &str {
        self.get(CSRF_FIELD).unwrap_or_default()
    }
}

pub fn input_name(attribute: &str) -> String {
    format!("attributes[{attribute}]")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null | Value::Bool(_) => String::new(),
        other => other.to_string(),
    }
}

fn is_checked(raw: Option<&str>) -> bool {
    matches!(raw, Some(raw) if !raw.is_empty() && raw != "0")
}
