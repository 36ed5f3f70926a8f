use serde::{Deserialize, Serialize};
use std::fmt;

/// One taxonomy snapshot as returned by the metadata endpoint.
///
/// The hierarchy is class → subject → chapter → topic; question levels and
/// question types are flat facets that apply across the whole hierarchy.
/// A snapshot is immutable once loaded — re-fetching produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Ordered class sequence. Order is meaningful: "first" drives defaults.
    #[serde(default)]
    pub classes: Vec<Class>,
    /// Ordered difficulty levels.
    #[serde(default)]
    pub question_levels: Vec<QuestionLevel>,
    /// Ordered question types (single choice, numeric, ...).
    #[serde(default)]
    pub question_types: Vec<QuestionType>,
}

impl Metadata {
    /// First class in the snapshot, if any.
    pub fn first_class(&self) -> Option<&Class> {
        self.classes.first()
    }

    /// Look up a class by id.
    pub fn class(&self, id: u64) -> Option<&Class> {
        self.classes.iter().find(|c| c.id == id)
    }

    /// True when the snapshot carries no selectable data at all.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.question_levels.is_empty() && self.question_types.is_empty()
    }
}

/// A school class (grade). Top level of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: u64,
    /// Display label. Optional on the wire; `display_name` falls back to the id.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Class {
    pub fn subject(&self, id: u64) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn display_name(&self) -> String {
        label_or_id("Class", self.name.as_deref(), self.id)
    }
}

/// A subject within a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Subject {
    pub fn chapter(&self, id: u64) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    pub fn display_name(&self) -> String {
        label_or_id("Subject", self.name.as_deref(), self.id)
    }
}

/// A chapter within a subject. Chapters may legitimately have no topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Chapter {
    pub fn display_name(&self) -> String {
        label_or_id("Chapter", self.name.as_deref(), self.id)
    }
}

/// A topic within a chapter. Leaf of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

impl Topic {
    pub fn display_name(&self) -> String {
        label_or_id("Topic", self.name.as_deref(), self.id)
    }
}

/// A difficulty level facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionLevel {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

impl QuestionLevel {
    pub fn display_name(&self) -> String {
        label_or_id("Level", self.name.as_deref(), self.id)
    }
}

/// A question type facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionType {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

impl QuestionType {
    pub fn display_name(&self) -> String {
        label_or_id("Type", self.name.as_deref(), self.id)
    }
}

fn label_or_id(kind: &str, name: Option<&str>, id: u64) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => format!("{kind} {id}"),
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Display for QuestionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
