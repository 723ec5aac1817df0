use std::fmt;

use serde::Serialize;

pub mod api;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_CONTENT: &str = "none";

const NOT_FOUND: &str = "Not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paste {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Reserved. Nothing increments it.
    pub views: i64,
}

impl Paste {
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Paste {
            id,
            title: title.into(),
            content: content.into(),
            views: 0,
        }
    }

    /// The paste handed out for ids that do not exist.
    pub fn not_found() -> Self {
        Paste::new(-1, NOT_FOUND, NOT_FOUND)
    }

    pub fn is_not_found(&self) -> bool {
        self.id == -1
    }

    /// Whether the lowercased content followed by the lowercased title contains
    /// `needle`. The caller lowercases `needle`.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        let haystack = format!("{}{}", self.content, self.title).to_lowercase();
        haystack.contains(needle)
    }

    pub fn property(&self, property: Property) -> String {
        match property {
            Property::Id => self.id.to_string(),
            Property::Title => self.title.clone(),
            Property::Views => self.views.to_string(),
            Property::Content => self.content.clone(),
        }
    }
}

/// A single field of a [`Paste`], addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Id,
    Title,
    Views,
    Content,
}

impl Property {
    /// Case-insensitive lookup by field name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "id" => Some(Property::Id),
            "title" => Some(Property::Title),
            "views" => Some(Property::Views),
            "content" => Some(Property::Content),
            _ => None,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::Id => "id",
            Property::Title => "title",
            Property::Views => "views",
            Property::Content => "content",
        };
        f.write_str(name)
    }
}
