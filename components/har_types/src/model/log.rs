// Document root, log, creator and page objects

use serde::Serialize;

use super::{Additional, Entry, NOT_APPLICABLE};

/// Root of a HAR document; owns exactly one log
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub log: Log,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(Document, "document", ["log"]);

impl Document {
    /// Empty document for the current format version
    pub fn new(creator: Creator) -> Self {
        Self {
            log: Log {
                version: Some(Log::CURRENT_VERSION.to_string()),
                creator: Some(creator),
                ..Default::default()
            },
            additional: Additional::new(),
        }
    }
}

/// Exported data of one recording session
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Log {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<Creator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser: Option<Creator>,
    pub pages: Vec<Page>,
    pub entries: Vec<Entry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(
    Log,
    "log",
    ["version", "creator", "browser", "pages", "entries", "comment"]
);

impl Log {
    /// Format version written for newly built documents
    pub const CURRENT_VERSION: &'static str = "1.2";

    /// Page with the given id, if the log has one
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id.as_deref() == Some(id))
    }

    /// Entries that reference the given page id, in log order
    pub fn entries_for_page<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.page_ref.as_deref() == Some(id))
    }
}

/// Application that produced the log (also used for `browser`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Creator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(Creator, "creator", ["name", "version", "comment"]);

impl Creator {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
            ..Default::default()
        }
    }
}

/// Exported page (one navigation in a browser tab)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_date_time: Option<String>,
    /// Unique id referenced by `Entry::page_ref`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_timings: Option<PageTimings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(
    Page,
    "page",
    ["startedDateTime", "id", "title", "pageTimings", "comment"]
);

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// Page load milestones in milliseconds since page start
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTimings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_content_load: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_load: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub additional: Additional,
}

har_entity!(
    PageTimings,
    "pageTimings",
    ["onContentLoad", "onLoad", "comment"]
);

impl PageTimings {
    /// DOMContentLoaded offset, -1 when not available
    pub fn on_content_load(&self) -> f64 {
        self.on_content_load.unwrap_or(NOT_APPLICABLE)
    }

    /// Load event offset, -1 when not available
    pub fn on_load(&self) -> f64 {
        self.on_load.unwrap_or(NOT_APPLICABLE)
    }
}
