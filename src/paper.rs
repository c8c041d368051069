//! Paper - a literature item
//!
//! Ingestion sources deliver wildly uneven metadata, so every structural
//! field is independently optional; only title and abstract are required.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codec::Record;
use crate::identity::Identity;

/// A literature item.
///
/// The `embed` vector is supplied by an embedding provider and stored
/// without interpretation. `domain` is a single tag here, unlike the tag
/// list on profiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paper {
    /// Identity base.
    #[serde(flatten)]
    pub identity: Identity,
    /// Author names, ordered; free strings or profile names.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Paper title.
    pub title: String,
    /// Paper abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Introduction text, when the source provides full text.
    #[serde(default)]
    pub introduction: Option<String>,
    /// arXiv identifier, when ingested from arXiv.
    #[serde(default)]
    pub arxiv_id: Option<String>,
    /// Source URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Publication timestamp as epoch seconds, ingestion-supplied.
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Section label to section text.
    #[serde(default)]
    pub sections: Option<BTreeMap<String, String>>,
    /// Table label to caption text.
    #[serde(default)]
    pub table_captions: Option<BTreeMap<String, String>>,
    /// Figure label to caption text.
    #[serde(default)]
    pub figure_captions: Option<BTreeMap<String, String>>,
    /// Bibliography label to entry text.
    #[serde(default)]
    pub bibliography: Option<BTreeMap<String, String>>,
    /// Keywords, when the source provides them.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    /// Topic tag.
    #[serde(default)]
    pub domain: Option<String>,
    /// Citation records as key-value maps (e.g. title, year, venue).
    #[serde(default)]
    pub references: Option<Vec<BTreeMap<String, String>>>,
    /// Citation count; 0 until a citation source fills it in.
    #[serde(default)]
    pub citation_count: u64,
    /// Award the paper received, if any.
    #[serde(default)]
    pub award: Option<String>,
    /// Opaque embedding vector, stored and forwarded without interpretation.
    #[serde(default)]
    pub embed: Option<Vec<f32>>,
}

impl Paper {
    /// Create a paper with the required fields; all metadata fields start
    /// absent and `citation_count` starts at 0.
    #[must_use]
    pub fn new(title: impl Into<String>, abstract_text: impl Into<String>) -> Self {
        PaperBuilder::new(title, abstract_text).build()
    }

    /// Create a builder for constructing a paper with optional metadata.
    #[must_use]
    pub fn builder(title: impl Into<String>, abstract_text: impl Into<String>) -> PaperBuilder {
        PaperBuilder::new(title, abstract_text)
    }
}

impl Record for Paper {
    const KIND: &'static str = "paper";

    fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Builder for [`Paper`].
#[derive(Debug)]
pub struct PaperBuilder {
    paper: Paper,
}

impl PaperBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, abstract_text: impl Into<String>) -> Self {
        Self {
            paper: Paper {
                identity: Identity::new(),
                authors: Vec::new(),
                title: title.into(),
                abstract_text: abstract_text.into(),
                introduction: None,
                arxiv_id: None,
                url: None,
                timestamp: None,
                sections: None,
                table_captions: None,
                figure_captions: None,
                bibliography: None,
                keywords: None,
                domain: None,
                references: None,
                citation_count: 0,
                award: None,
                embed: None,
            },
        }
    }

    /// Set a caller-chosen primary key.
    #[must_use]
    pub fn pk(mut self, pk: impl Into<String>) -> Self {
        self.paper.identity.pk = pk.into();
        self
    }

    /// Set the project tag.
    #[must_use]
    pub fn project_name(mut self, project_name: impl Into<String>) -> Self {
        self.paper.identity.project_name = Some(project_name.into());
        self
    }

    /// Set the ordered author names.
    #[must_use]
    pub fn authors(mut self, authors: Vec<String>) -> Self {
        self.paper.authors = authors;
        self
    }

    /// Set the introduction text.
    #[must_use]
    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.paper.introduction = Some(introduction.into());
        self
    }

    /// Set the arXiv identifier.
    #[must_use]
    pub fn arxiv_id(mut self, arxiv_id: impl Into<String>) -> Self {
        self.paper.arxiv_id = Some(arxiv_id.into());
        self
    }

    /// Set the source URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.paper.url = Some(url.into());
        self
    }

    /// Set the publication timestamp (epoch seconds).
    #[must_use]
    pub const fn timestamp(mut self, timestamp: i64) -> Self {
        self.paper.timestamp = Some(timestamp);
        self
    }

    /// Set the section texts.
    #[must_use]
    pub fn sections(mut self, sections: BTreeMap<String, String>) -> Self {
        self.paper.sections = Some(sections);
        self
    }

    /// Set the table captions.
    #[must_use]
    pub fn table_captions(mut self, table_captions: BTreeMap<String, String>) -> Self {
        self.paper.table_captions = Some(table_captions);
        self
    }

    /// Set the figure captions.
    #[must_use]
    pub fn figure_captions(mut self, figure_captions: BTreeMap<String, String>) -> Self {
        self.paper.figure_captions = Some(figure_captions);
        self
    }

    /// Set the bibliography entries.
    #[must_use]
    pub fn bibliography(mut self, bibliography: BTreeMap<String, String>) -> Self {
        self.paper.bibliography = Some(bibliography);
        self
    }

    /// Set the keywords.
    #[must_use]
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.paper.keywords = Some(keywords);
        self
    }

    /// Set the topic tag.
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.paper.domain = Some(domain.into());
        self
    }

    /// Set the citation records.
    #[must_use]
    pub fn references(mut self, references: Vec<BTreeMap<String, String>>) -> Self {
        self.paper.references = Some(references);
        self
    }

    /// Set the citation count.
    #[must_use]
    pub const fn citation_count(mut self, citation_count: u64) -> Self {
        self.paper.citation_count = citation_count;
        self
    }

    /// Set the award.
    #[must_use]
    pub fn award(mut self, award: impl Into<String>) -> Self {
        self.paper.award = Some(award.into());
        self
    }

    /// Set the opaque embedding vector.
    #[must_use]
    pub fn embed(mut self, embed: Vec<f32>) -> Self {
        self.paper.embed = Some(embed);
        self
    }

    /// Build the [`Paper`].
    #[must_use]
    pub fn build(self) -> Paper {
        self.paper
    }
}
