use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AppError;

/// Separator used to pack the tag list into a single CSV field.
///
/// `["a", "b"]` is written as `a;b`, an empty list as an empty field.
///
/// Two tag lists do not survive a write/read cycle: tags containing `;` are
/// split apart, and a list holding a single empty tag (`[""]`) reads back as
/// no tags, since both pack to an empty field.
pub const TAG_SEPARATOR: &str = ";";

/// One quote extracted from a listing page.
///
/// Field declaration order is the column order of the output file; the
/// header row is derived from these declarations (see [`Quote::field_names`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    text: String,
    author: String,
    #[serde(serialize_with = "join_tags", deserialize_with = "split_tags")]
    tags: Vec<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Tags in source-page order, duplicates preserved.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Column names in declaration order, taken from the serde derivation.
    ///
    /// Serializes a blank quote with the csv header enabled and reads the
    /// header back, so the names can never drift from the struct.
    pub fn field_names() -> Result<Vec<String>, AppError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(Quote::default())?;
        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::WriteError(e.into_error()))?;

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        Ok(reader.headers()?.iter().map(str::to_string).collect())
    }

    /// Flat row of values in column order, tags packed with [`TAG_SEPARATOR`].
    pub fn to_row(&self) -> [String; 3] {
        [self.text.clone(), self.author.clone(), pack_tags(&self.tags)]
    }
}

fn pack_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}

fn unpack_tags(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(TAG_SEPARATOR).map(str::to_string).collect()
}

fn join_tags<S: Serializer>(tags: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&pack_tags(tags))
}

fn split_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let field = String::deserialize(deserializer)?;
    Ok(unpack_tags(&field))
}

/// Everything extracted from one listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Quotes in document order.
    pub quotes: Vec<Quote>,
    /// Whether the pager advertises a following page.
    pub has_next: bool,
}
