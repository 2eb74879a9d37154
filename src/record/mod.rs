//! Receipt data model
//!
//! A [`ReceiptRecord`] is the mutable record a user edits for one receipt
//! kind. Fields live in ordered maps so that two records with the same
//! content serialize identically no matter how they were built, which the
//! barcode pattern relies on.
//!
//! Every edit replaces the touched field wholesale: the current value is
//! cloned, modified and written back, so readers never observe a half
//! applied change.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

mod kind;
mod seed;

pub use kind::ReceiptKind;

/// One line of an item list (orders, purchases, merch)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: Option<f64>,
}

impl LineItem {
    /// Unnamed lines stay in the list but are not drawn.
    pub fn is_displayable(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A typed field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Free text: names, places, notes
    Text(String),
    /// Key into a fixed option dictionary, e.g. `"NORMAL"`
    Choice(String),
    Number(f64),
    /// A price that may be left blank
    Price(Option<f64>),
    /// Named scores, e.g. sleep quality metrics
    Metrics(BTreeMap<String, f64>),
    Items(Vec<LineItem>),
    /// Activity checklist
    Toggles(BTreeMap<String, bool>),
    List(Vec<String>),
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Choice(_) => "choice",
            FieldValue::Number(_) => "number",
            FieldValue::Price(_) => "price",
            FieldValue::Metrics(_) => "metrics",
            FieldValue::Items(_) => "items",
            FieldValue::Toggles(_) => "toggles",
            FieldValue::List(_) => "list",
        }
    }

    fn same_type(&self, other: &FieldValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Replace { field: String, value: FieldValue },
    SetMetric { field: String, key: String, value: f64 },
    SetToggle { field: String, key: String, on: bool },
    AddItem { field: String },
    SetItemName { field: String, index: usize, name: String },
    SetItemPrice { field: String, index: usize, price: Option<f64> },
    RemoveItem { field: String, index: usize },
    AddEntry { field: String },
    SetEntry { field: String, index: usize, text: String },
    RemoveEntry { field: String, index: usize },
}

/// The record behind one receipt preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub kind: ReceiptKind,
    pub fields: BTreeMap<String, FieldValue>,
}

impl ReceiptRecord {
    pub fn new(kind: ReceiptKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
        }
    }

    /// The sample record a freshly opened receipt page starts from.
    pub fn seeded(kind: ReceiptKind, date: &str) -> Self {
        seed::seed(kind, date)
    }

    /// Builder-style insert used by seeds and tests.
    pub fn with(mut self, key: &str, value: FieldValue) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Text or choice content; empty when absent.
    pub fn text(&self, key: &str) -> &str {
        match self.fields.get(key) {
            Some(FieldValue::Text(s)) | Some(FieldValue::Choice(s)) => s,
            _ => "",
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.fields.get(key) {
            Some(FieldValue::Number(n)) => Some(*n),
            Some(FieldValue::Price(p)) => *p,
            _ => None,
        }
    }

    pub fn metrics(&self, key: &str) -> Option<&BTreeMap<String, f64>> {
        match self.fields.get(key) {
            Some(FieldValue::Metrics(m)) => Some(m),
            _ => None,
        }
    }

    pub fn items(&self, key: &str) -> &[LineItem] {
        match self.fields.get(key) {
            Some(FieldValue::Items(items)) => items,
            _ => &[],
        }
    }

    pub fn toggles(&self, key: &str) -> Option<&BTreeMap<String, bool>> {
        match self.fields.get(key) {
            Some(FieldValue::Toggles(t)) => Some(t),
            _ => None,
        }
    }

    pub fn list(&self, key: &str) -> &[String] {
        match self.fields.get(key) {
            Some(FieldValue::List(l)) => l,
            _ => &[],
        }
    }

    fn current(&self, field: &str) -> Result<&FieldValue> {
        self.fields
            .get(field)
            .ok_or_else(|| Error::InvalidEdit(format!("unknown field '{}' on {}", field, self.kind)))
    }

    /// Apply one edit. The affected field is rebuilt and replaced in full.
    pub fn apply(&mut self, edit: Edit) -> Result<()> {
        let (field, next) = match edit {
            Edit::Replace { field, value } => {
                let cur = self.current(&field)?;
                if !cur.same_type(&value) {
                    return Err(Error::InvalidEdit(format!(
                        "field '{}' holds {} but got {}",
                        field,
                        cur.type_name(),
                        value.type_name()
                    )));
                }
                (field, value)
            }
            Edit::SetMetric { field, key, value } => match self.current(&field)? {
                FieldValue::Metrics(m) => {
                    let mut m = m.clone();
                    m.insert(key, value);
                    (field, FieldValue::Metrics(m))
                }
                other => return Err(type_mismatch(&field, other, "metrics")),
            },
            Edit::SetToggle { field, key, on } => match self.current(&field)? {
                FieldValue::Toggles(t) => {
                    let mut t = t.clone();
                    t.insert(key, on);
                    (field, FieldValue::Toggles(t))
                }
                other => return Err(type_mismatch(&field, other, "toggles")),
            },
            Edit::AddItem { field } => {
                let mut items = self.items_of(&field)?;
                items.push(LineItem::default());
                (field, FieldValue::Items(items))
            }
            Edit::SetItemName { field, index, name } => {
                let mut items = self.items_of(&field)?;
                item_at(&mut items, &field, index)?.name = name;
                (field, FieldValue::Items(items))
            }
            Edit::SetItemPrice {
                field,
                index,
                price,
            } => {
                let mut items = self.items_of(&field)?;
                item_at(&mut items, &field, index)?.price = price;
                (field, FieldValue::Items(items))
            }
            Edit::RemoveItem { field, index } => {
                let mut items = self.items_of(&field)?;
                if index >= items.len() {
                    return Err(out_of_range(&field, index, items.len()));
                }
                items.remove(index);
                (field, FieldValue::Items(items))
            }
            Edit::AddEntry { field } => {
                let mut list = self.list_of(&field)?;
                list.push(String::new());
                (field, FieldValue::List(list))
            }
            Edit::SetEntry { field, index, text } => {
                let mut list = self.list_of(&field)?;
                let len = list.len();
                let slot = list
                    .get_mut(index)
                    .ok_or_else(|| out_of_range(&field, index, len))?;
                *slot = text;
                (field, FieldValue::List(list))
            }
            Edit::RemoveEntry { field, index } => {
                let mut list = self.list_of(&field)?;
                if index >= list.len() {
                    return Err(out_of_range(&field, index, list.len()));
                }
                list.remove(index);
                (field, FieldValue::List(list))
            }
        };
        self.fields.insert(field, next);
        Ok(())
    }

    /// Form-style change: `path` addresses a field or a part of one and
    /// `value` is the raw control value.
    ///
    /// Supported paths: `date`, `metrics.quality`, `preSleepActivities.phone`,
    /// `items[1].name`, `items[1].price`, `setlist[3]`.
    pub fn apply_change(&mut self, path: &str, value: Value) -> Result<()> {
        let edit = self.edit_for(&FieldPath::parse(path)?, value)?;
        self.apply(edit)
    }

    fn edit_for(&self, path: &FieldPath, value: Value) -> Result<Edit> {
        let field = path.field.clone();
        let cur = self.current(&field)?;
        match (&path.index, &path.member, cur) {
            (None, None, _) => Ok(Edit::Replace {
                value: coerce(cur, value, &field)?,
                field,
            }),
            (None, Some(key), FieldValue::Metrics(_)) => Ok(Edit::SetMetric {
                field,
                key: key.clone(),
                value: number_from(&value)
                    .ok_or_else(|| Error::InvalidEdit(format!("'{}' expects a number", path)))?,
            }),
            (None, Some(key), FieldValue::Toggles(_)) => Ok(Edit::SetToggle {
                field,
                key: key.clone(),
                on: value
                    .as_bool()
                    .ok_or_else(|| Error::InvalidEdit(format!("'{}' expects a boolean", path)))?,
            }),
            (Some(index), Some(member), FieldValue::Items(_)) if member == "name" => {
                Ok(Edit::SetItemName {
                    field,
                    index: *index,
                    name: string_from(&value),
                })
            }
            (Some(index), Some(member), FieldValue::Items(_)) if member == "price" => {
                Ok(Edit::SetItemPrice {
                    field,
                    index: *index,
                    price: price_from(&value),
                })
            }
            (Some(index), None, FieldValue::List(_)) => Ok(Edit::SetEntry {
                field,
                index: *index,
                text: string_from(&value),
            }),
            _ => Err(Error::InvalidEdit(format!(
                "path '{}' does not address a {} field",
                path,
                cur.type_name()
            ))),
        }
    }

    fn items_of(&self, field: &str) -> Result<Vec<LineItem>> {
        match self.current(field)? {
            FieldValue::Items(items) => Ok(items.clone()),
            other => Err(type_mismatch(field, other, "items")),
        }
    }

    fn list_of(&self, field: &str) -> Result<Vec<String>> {
        match self.current(field)? {
            FieldValue::List(l) => Ok(l.clone()),
            other => Err(type_mismatch(field, other, "list")),
        }
    }
}

fn type_mismatch(field: &str, cur: &FieldValue, wanted: &str) -> Error {
    Error::InvalidEdit(format!(
        "field '{}' holds {}, not {}",
        field,
        cur.type_name(),
        wanted
    ))
}

fn out_of_range(field: &str, index: usize, len: usize) -> Error {
    Error::InvalidEdit(format!(
        "index {} out of range for '{}' (len {})",
        index, field, len
    ))
}

fn item_at<'a>(items: &'a mut [LineItem], field: &str, index: usize) -> Result<&'a mut LineItem> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or_else(|| out_of_range(field, index, len))
}

fn string_from(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Blank or unparseable input clears the price.
fn price_from(value: &Value) -> Option<f64> {
    number_from(value)
}

fn coerce(cur: &FieldValue, value: Value, field: &str) -> Result<FieldValue> {
    let bad = |what: &str| Error::InvalidEdit(format!("field '{}' expects {}", field, what));
    Ok(match cur {
        FieldValue::Text(_) => FieldValue::Text(string_from(&value)),
        FieldValue::Choice(_) => FieldValue::Choice(string_from(&value)),
        FieldValue::Number(_) => FieldValue::Number(number_from(&value).ok_or_else(|| bad("a number"))?),
        FieldValue::Price(_) => FieldValue::Price(price_from(&value)),
        FieldValue::Metrics(_) => FieldValue::Metrics(serde_json::from_value(value)?),
        FieldValue::Items(_) => FieldValue::Items(serde_json::from_value(value)?),
        FieldValue::Toggles(_) => FieldValue::Toggles(serde_json::from_value(value)?),
        FieldValue::List(_) => FieldValue::List(serde_json::from_value(value)?),
    })
}

/// Parsed form of a change path like `items[2].price`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    pub field: String,
    pub index: Option<usize>,
    pub member: Option<String>,
}

impl FieldPath {
    pub fn parse(path: &str) -> Result<Self> {
        let bad = || Error::InvalidEdit(format!("malformed field path '{}'", path));
        let (head, member) = match path.split_once('.') {
            Some((h, m)) if !m.is_empty() && !m.contains('.') => (h, Some(m.to_string())),
            Some(_) => return Err(bad()),
            None => (path, None),
        };
        let (field, index) = match head.split_once('[') {
            Some((f, rest)) => {
                let idx = rest.strip_suffix(']').ok_or_else(bad)?;
                (f, Some(idx.parse::<usize>().map_err(|_| bad())?))
            }
            None => (head, None),
        };
        if field.is_empty() {
            return Err(bad());
        }
        Ok(Self {
            field: field.to_string(),
            index,
            member,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field)?;
        if let Some(i) = self.index {
            write!(f, "[{}]", i)?;
        }
        if let Some(m) = &self.member {
            write!(f, ".{}", m)?;
        }
        Ok(())
    }
}
