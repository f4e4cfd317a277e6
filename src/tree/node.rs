use indexmap::IndexMap;
use serde::Serialize;

/// Text extracted from a single page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    /// Paragraph texts in document order
    pub texts: Vec<String>,

    /// Code-block texts in document order
    #[serde(rename = "codeBlocks")]
    pub code_blocks: Vec<String>,
}

/// A page's own content plus the nodes of its successfully crawled children
///
/// `children` is `None` when no child link of the page was crawled
/// successfully; it is never `Some` of an empty vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageBody {
    #[serde(flatten)]
    pub content: ContentRecord,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PageNode>>,
}

impl PageBody {
    /// Builds a body, collapsing an empty child list to `None`
    pub fn new(content: ContentRecord, children: Vec<PageNode>) -> Self {
        Self {
            content,
            children: if children.is_empty() {
                None
            } else {
                Some(children)
            },
        }
    }

    /// Returns the child nodes, or an empty slice for a leaf
    pub fn children(&self) -> &[PageNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of nodes below this body, at any depth
    pub fn descendant_count(&self) -> usize {
        self.children()
            .iter()
            .map(|child| 1 + child.body.descendant_count())
            .sum()
    }
}

/// One node of the result tree below a top-level entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageNode {
    /// Display text of the link that led to this page
    pub name: String,

    /// Resolved absolute URL of the page
    #[serde(skip)]
    pub url: String,

    #[serde(rename = "data")]
    pub body: PageBody,
}

/// A top-level link of the index page and everything crawled below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionEntry {
    /// Display text of the top-level link
    pub name: String,

    /// Heading of the index section the link was listed under
    #[serde(skip)]
    pub section: String,

    /// Resolved absolute URL of the top-level page
    #[serde(skip)]
    pub url: String,

    #[serde(rename = "children")]
    pub body: PageBody,
}

/// Ordered mapping from top-level link text to its entry
///
/// Keys are not unique in the source document: a later entry with the same
/// name replaces the earlier one but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultMapping {
    entries: IndexMap<String, SectionEntry>,
}

impl ResultMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry under its name, returning the entry it replaced
    pub fn insert(&mut self, entry: SectionEntry) -> Option<SectionEntry> {
        self.entries.insert(entry.name.clone(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&SectionEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SectionEntry> {
        self.entries.values()
    }

    /// Iterates entry names in first-insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
