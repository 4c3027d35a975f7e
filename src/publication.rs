use serde::Serialize;

/// One bibliographic record, extracted from a single BibTeX entry.
///
/// `title`, `author` and `year` are always present (empty when the entry did
/// not carry them); the remaining fields are set only when the corresponding
/// key was found. All string fields hold normalized text — LaTeX escapes are
/// resolved before a value is stored here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Publication {
    /// Citation key, e.g. "knuth1973".
    pub id: String,
    /// Lowercased entry type, e.g. "article" or "inproceedings".
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub author: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booktitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arxiv: Option<String>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_: Option<String>,
    /// Whether the entry was marked `selected = {true}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    /// Citation count. Present whenever the `citations` key appeared in the
    /// entry; an unparsable value degrades to 0 rather than being dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<i64>,
}

impl Publication {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Publication {
            id: id.into(),
            kind: kind.into(),
            title: String::new(),
            author: String::new(),
            year: String::new(),
            journal: None,
            booktitle: None,
            volume: None,
            pages: None,
            doi: None,
            url: None,
            arxiv: None,
            abstract_: None,
            selected: None,
            citations: None,
        }
    }
}
