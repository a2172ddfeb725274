use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::{
    books::book_code,
    error::{BibleQRError, BibleQRResult},
};

/// Host and path every bible.com reference link starts with.
pub const BASE_URL: &str = "https://www.bible.com/en-GB/bible";

/// Language id bible.com uses for English. The only language supported.
pub const LANGUAGE_CODE: &str = "1";

/// Builds the bible.com deep link for a passage.
///
/// A `verse_end` without a `verse_start` starts the passage at `verse_end`. Nothing else is
/// checked: ranges may run backwards and chapters or verses need not exist.
///
/// ```rust
/// use bibleqr::build_reference_url;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let url = build_reference_url("Genesis", 1, Some(1), None, Some("KJV"))?;
/// assert_eq!(url, "https://www.bible.com/en-GB/bible/1/GEN.1.1.KJV");
/// # Ok(())
/// # }
/// ```
pub fn build_reference_url(
    book_name: &str,
    chapter: u32,
    verse_start: Option<u32>,
    verse_end: Option<u32>,
    version: Option<&str>,
) -> BibleQRResult<String> {
    let mut builder = ReferenceBuilder::new(book_name, chapter);
    if let Some(s) = verse_start {
        builder.verse_start(s);
    }
    if let Some(e) = verse_end {
        builder.verse_end(e);
    }
    if let Some(v) = version {
        builder.version(v);
    }
    builder.build().map(|r| r.url())
}

// Reference
//------------------------------------------------------------------------------

/// A resolved passage. Displays as its bible.com URL.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Reference {
    book_code: &'static str,
    chapter: u32,
    verse_start: Option<u32>,
    verse_end: Option<u32>,
    version: Option<String>,
}

impl Reference {
    pub fn book_code(&self) -> &'static str {
        self.book_code
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn verse_start(&self) -> Option<u32> {
        self.verse_start
    }

    pub fn verse_end(&self) -> Option<u32> {
        self.verse_end
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{BASE_URL}/{LANGUAGE_CODE}/{}.{}", self.book_code, self.chapter)?;
        if let Some(s) = self.verse_start {
            write!(f, ".{s}")?;
        }
        if let Some(e) = self.verse_end {
            write!(f, "-{e}")?;
        }
        if let Some(v) = &self.version {
            write!(f, ".{v}")?;
        }
        Ok(())
    }
}

// Builder
//------------------------------------------------------------------------------

pub struct ReferenceBuilder<'a> {
    book_name: &'a str,
    chapter: u32,
    verse_start: Option<u32>,
    verse_end: Option<u32>,
    version: Option<&'a str>,
}

impl<'a> ReferenceBuilder<'a> {
    pub fn new(book_name: &'a str, chapter: u32) -> Self {
        Self { book_name, chapter, verse_start: None, verse_end: None, version: None }
    }

    pub fn book(&mut self, book_name: &'a str) -> &mut Self {
        self.book_name = book_name;
        self
    }

    pub fn chapter(&mut self, chapter: u32) -> &mut Self {
        self.chapter = chapter;
        self
    }

    pub fn verse_start(&mut self, verse: u32) -> &mut Self {
        self.verse_start = Some(verse);
        self
    }

    pub fn unset_verse_start(&mut self) -> &mut Self {
        self.verse_start = None;
        self
    }

    pub fn verse_end(&mut self, verse: u32) -> &mut Self {
        self.verse_end = Some(verse);
        self
    }

    pub fn unset_verse_end(&mut self) -> &mut Self {
        self.verse_end = None;
        self
    }

    /// Version code such as `KJV`. Inserted into the URL as given.
    pub fn version(&mut self, version: &'a str) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Book: {:?}, Chapter: {}, Verses: {:?}-{:?}, Version: {:?} }}",
            self.book_name, self.chapter, self.verse_start, self.verse_end, self.version
        )
    }

    pub fn build(&self) -> BibleQRResult<Reference> {
        debug!("Building reference {}", self.metadata());

        let verse_start = match (self.verse_start, self.verse_end) {
            (None, Some(e)) => {
                debug!("No start verse, starting at end verse {e}");
                Some(e)
            }
            (s, _) => s,
        };

        let book_code = book_code(self.book_name)
            .ok_or_else(|| BibleQRError::UnknownBook(self.book_name.to_string()))?;

        Ok(Reference {
            book_code,
            chapter: self.chapter,
            verse_start,
            verse_end: self.verse_end,
            version: self.version.map(str::to_string),
        })
    }
}
