//! # bibleqr
//!
//! Generate QR codes that open the bible.com (YouVersion) app at a chosen passage.
//!
//! ## Features
//!
//! - **Reference links**: Map an English book name, chapter, verses and version to a bible.com
//!   deep link such as `https://www.bible.com/en-GB/bible/1/JHN.3.16.KJV`
//! - **QR rendering**: Encode the link as a PNG, an in-memory grayscale image or a terminal string
//! - **All 66 books**: Exact, case-sensitive names from Genesis to Revelation
//!
//! ## Quick Start
//!
//! ### Building a link
//!
//! ```rust
//! use bibleqr::ReferenceBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reference = ReferenceBuilder::new("Psalms", 23)
//!     .verse_start(1)    // If not provided, the link opens the whole chapter
//!     .verse_end(6)      // If provided without a start verse, the start verse is set to it
//!     .version("NIV")    // If not provided, the app picks the reader's version
//!     .build()?;
//!
//! assert_eq!(reference.url(), "https://www.bible.com/en-GB/bible/1/PSA.23.1-6.NIV");
//! # Ok(())
//! # }
//! ```
//!
//! ### Saving a QR code
//!
//! ```rust,no_run
//! use bibleqr::{build_reference_url, qr::encode_to_png, ECLevel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let url = build_reference_url("Genesis", 1, Some(1), None, Some("KJV"))?;
//! encode_to_png(&url, "genesis.png", 5, ECLevel::H)?;  // 5x scale factor
//! # Ok(())
//! # }
//! ```

pub mod books;
pub mod error;
pub mod qr;
pub mod reference;

pub use books::{book_code, Book, BOOKS};
pub use error::{BibleQRError, BibleQRResult};
pub use qr::ECLevel;
pub use reference::{build_reference_url, Reference, ReferenceBuilder};
