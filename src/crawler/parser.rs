//! HTML extraction for documentation pages
//!
//! This module handles parsing fetched pages to extract:
//! - The page's own content (paragraph and code-block texts)
//! - Child links to descend into (table-of-contents anchors)
//! - The top-level sections and links of the index page
//!
//! Parsed documents never leave this module: every function parses, queries,
//! and returns owned data, so the document handle is released before the
//! crawler issues its next request.

use crate::config::{SectionLayout, SiteConfig};
use crate::tree::ContentRecord;
use crate::url::resolve_link;
use crate::HarvestError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// A link discovered on a page, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildLink {
    /// Display text of the anchor
    pub name: String,

    /// Absolute URL the anchor points at
    pub url: Url,
}

/// A top-level link of the index page with the section it was listed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelLink {
    pub section: String,
    pub name: String,
    pub url: Url,
}

/// Everything the crawler needs from a content page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub content: ContentRecord,
    pub links: Vec<ChildLink>,
}

/// A parsed selector that remembers its source text for error messages
#[derive(Debug)]
struct NamedSelector {
    source: String,
    selector: Selector,
}

impl NamedSelector {
    fn parse(source: &str) -> Result<Self, HarvestError> {
        let selector = Selector::parse(source).map_err(|e| HarvestError::InvalidSelector {
            selector: source.to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self {
            source: source.to_string(),
            selector,
        })
    }
}

/// Compiled selectors for one site
#[derive(Debug)]
pub struct PageSelectors {
    required: Option<NamedSelector>,
    paragraphs: Vec<NamedSelector>,
    code_blocks: Vec<NamedSelector>,
    child_links: Option<NamedSelector>,
}

impl PageSelectors {
    /// Compiles every content and child-link selector of the site
    pub fn compile(site: &SiteConfig) -> Result<Self, HarvestError> {
        let compile_all = |sources: &[String]| {
            sources
                .iter()
                .map(|s| NamedSelector::parse(s))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(Self {
            required: site
                .content
                .required
                .as_deref()
                .map(NamedSelector::parse)
                .transpose()?,
            paragraphs: compile_all(&site.content.paragraphs)?,
            code_blocks: compile_all(&site.content.code_blocks)?,
            child_links: site
                .child_link_selector
                .as_deref()
                .map(NamedSelector::parse)
                .transpose()?,
        })
    }
}

/// Parses a page and extracts its content and child links
///
/// # Errors
///
/// Returns `HarvestError::ContentExtraction` if the site's required content
/// node is absent from the page. Child links are not discovered in that case.
///
/// # Example
///
/// ```
/// use docs_harvest::config::SiteKind;
/// use docs_harvest::crawler::{extract_page, PageSelectors};
/// use url::Url;
///
/// let site = SiteKind::PythonDocs.preset().site;
/// let selectors = PageSelectors::compile(&site).unwrap();
/// let url = Url::parse("https://docs.python.org/3/tutorial/index.html").unwrap();
/// let html = r#"<html><body><div class="body"><section><p>Hello</p></section>
///     <ul><li class="toctree-l1"><a href="appetite.html">Whetting</a></li></ul>
///     </div></body></html>"#;
///
/// let page = extract_page(html, &url, &selectors).unwrap();
/// assert_eq!(page.links[0].url.as_str(), "https://docs.python.org/3/tutorial/appetite.html");
/// ```
pub fn extract_page(
    body: &str,
    page_url: &Url,
    selectors: &PageSelectors,
) -> Result<ExtractedPage, HarvestError> {
    let document = Html::parse_document(body);

    let content = extract_content(&document, page_url, selectors)?;

    let links = match &selectors.child_links {
        Some(link_selector) => collect_links(document.select(&link_selector.selector), page_url),
        None => Vec::new(),
    };

    Ok(ExtractedPage { content, links })
}

/// Extracts the paragraph and code-block texts of a page
fn extract_content(
    document: &Html,
    page_url: &Url,
    selectors: &PageSelectors,
) -> Result<ContentRecord, HarvestError> {
    if let Some(required) = &selectors.required {
        if document.select(&required.selector).next().is_none() {
            return Err(HarvestError::ContentExtraction {
                url: page_url.to_string(),
                message: format!("no element matches '{}'", required.source),
            });
        }
    }

    let select_texts = |named: &[NamedSelector]| {
        named
            .iter()
            .flat_map(|n| document.select(&n.selector).map(element_text))
            .collect::<Vec<_>>()
    };

    Ok(ContentRecord {
        texts: select_texts(&selectors.paragraphs),
        code_blocks: select_texts(&selectors.code_blocks),
    })
}

/// Parses the index page and lists its top-level links in document order
///
/// # Errors
///
/// Returns `HarvestError::InvalidSelector` if a layout selector does not
/// parse. An index page without any matching section yields an empty list.
pub fn discover_sections(
    body: &str,
    root_url: &Url,
    layout: &SectionLayout,
) -> Result<Vec<TopLevelLink>, HarvestError> {
    let document = Html::parse_document(body);
    let mut top_level = Vec::new();

    match layout {
        SectionLayout::PairedTables {
            header_selector,
            table_selector,
            link_selector,
        } => {
            let header_selector = NamedSelector::parse(header_selector)?;
            let table_selector = NamedSelector::parse(table_selector)?;
            let link_selector = NamedSelector::parse(link_selector)?;

            let headers: Vec<String> = document
                .select(&header_selector.selector)
                .map(|h| normalize_whitespace(&element_text(h)))
                .collect();
            let tables: Vec<ElementRef> = document.select(&table_selector.selector).collect();

            if headers.len() != tables.len() {
                tracing::warn!(
                    "Index page has {} section headers but {} link tables; pairing the first {}",
                    headers.len(),
                    tables.len(),
                    headers.len().min(tables.len())
                );
            }

            for (header, table) in headers.iter().zip(tables) {
                let links = collect_links(table.select(&link_selector.selector), root_url);
                top_level.extend(links.into_iter().map(|link| TopLevelLink {
                    section: header.clone(),
                    name: link.name,
                    url: link.url,
                }));
            }
        }

        SectionLayout::NamedSections {
            sections,
            link_selector,
        } => {
            for section in sections {
                let selector = NamedSelector::parse(&SectionLayout::named_section_selector(
                    section,
                    link_selector,
                ))?;
                let links = collect_links(document.select(&selector.selector), root_url);
                if links.is_empty() {
                    tracing::debug!("Section '{}' has no links", section);
                }
                top_level.extend(links.into_iter().map(|link| TopLevelLink {
                    section: section.clone(),
                    name: link.name,
                    url: link.url,
                }));
            }
        }
    }

    Ok(top_level)
}

/// Resolves anchors to child links, skipping those without a usable href
fn collect_links<'a>(
    anchors: impl Iterator<Item = ElementRef<'a>>,
    page_url: &Url,
) -> Vec<ChildLink> {
    anchors
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            match resolve_link(href, page_url) {
                Some(url) => Some(ChildLink {
                    name: normalize_whitespace(&element_text(anchor)),
                    url,
                }),
                None => {
                    tracing::debug!("Skipping link '{}' on {}", href, page_url);
                    None
                }
            }
        })
        .collect()
}

/// Full text content of an element, descendants included
fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
