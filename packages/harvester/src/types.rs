//! Core data types: repository references and bibliographic records.

use serde::{Deserialize, Serialize};

/// A repository in `owner/name` form, as reported by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse an `owner/name` pair.
    ///
    /// # Examples
    /// ```
    /// use se_corpus::types::RepoRef;
    ///
    /// let repo = RepoRef::parse("standardebooks/jane-austen_emma").unwrap();
    /// assert_eq!(repo.owner, "standardebooks");
    /// assert_eq!(repo.name, "jane-austen_emma");
    /// assert!(RepoRef::parse("no-slash").is_none());
    /// ```
    #[must_use]
    pub fn parse(full_name: &str) -> Option<Self> {
        let (owner, name) = full_name.split_once('/')?;
        if owner.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(owner, name))
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// One column of the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    SeSubject,
    Artist,
    Painting,
    Producer,
    PubDate,
    RevDate,
    Description,
}

impl Field {
    /// All fields in output column order.
    pub const ALL: [Field; 9] = [
        Field::Title,
        Field::Author,
        Field::SeSubject,
        Field::Artist,
        Field::Painting,
        Field::Producer,
        Field::PubDate,
        Field::RevDate,
        Field::Description,
    ];

    /// Column header text.
    #[must_use]
    pub fn header(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::SeSubject => "SE subject",
            Self::Artist => "Artist",
            Self::Painting => "Painting",
            Self::Producer => "Producer",
            Self::PubDate => "Pub date",
            Self::RevDate => "Rev date",
            Self::Description => "Description",
        }
    }

    /// Whether values of this field are reduced to their `YYYY-MM-DD` prefix.
    #[must_use]
    pub fn is_date(&self) -> bool {
        matches!(self, Self::PubDate | Self::RevDate)
    }
}

/// Bibliographic fields of one book repository.
///
/// Struct field order is the output column order; the serde names are the
/// column headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "SE subject")]
    pub se_subject: String,
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "Painting")]
    pub painting: String,
    #[serde(rename = "Producer")]
    pub producer: String,
    #[serde(rename = "Pub date")]
    pub pub_date: String,
    #[serde(rename = "Rev date")]
    pub rev_date: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl BookRecord {
    /// The header row: every field holds its own column name.
    #[must_use]
    pub fn header() -> Self {
        let mut record = Self::default();
        for field in Field::ALL {
            record.set(field, field.header());
        }
        record
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::SeSubject => &self.se_subject,
            Field::Artist => &self.artist,
            Field::Painting => &self.painting,
            Field::Producer => &self.producer,
            Field::PubDate => &self.pub_date,
            Field::RevDate => &self.rev_date,
            Field::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::SeSubject => &mut self.se_subject,
            Field::Artist => &mut self.artist,
            Field::Painting => &mut self.painting,
            Field::Producer => &mut self.producer,
            Field::PubDate => &mut self.pub_date,
            Field::RevDate => &mut self.rev_date,
            Field::Description => &mut self.description,
        };
        *slot = value.into();
    }

    /// Builder-style setter for the colophon painting.
    #[must_use]
    pub fn with_painting(mut self, painting: impl Into<String>) -> Self {
        self.painting = painting.into();
        self
    }
}

/// Records in repository discovery order.
pub type Corpus = Vec<BookRecord>;
