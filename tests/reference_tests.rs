use test_case::test_case;

use bibleqr::*;

const PREFIX: &str = "https://www.bible.com/en-GB/bible/1/";

#[test]
fn test_every_book() {
    for book in BOOKS {
        let url = build_reference_url(book.name, 1, None, None, None).unwrap();
        assert_eq!(url, format!("{PREFIX}{}.1", book.code), "Wrong url for {}", book.name);
    }
}

#[test_case("Genesis", "GEN")]
#[test_case("Deuteronomy", "DEU")]
#[test_case("Judges", "JDG")]
#[test_case("1 Samuel", "1SA")]
#[test_case("2 Chronicles", "2CH")]
#[test_case("Ecclesiastes", "ECC")]
#[test_case("Ezekiel", "EZK")]
#[test_case("Joel", "JOL")]
#[test_case("Nahum", "NAM")]
#[test_case("Mark", "MRK")]
#[test_case("John", "JHN")]
#[test_case("Philippians", "PHP")]
#[test_case("Philemon", "PHM")]
#[test_case("1 John", "1JN")]
#[test_case("Revelation", "REV")]
fn test_book_code_in_url(book: &str, code: &str) {
    let url = build_reference_url(book, 2, Some(3), None, Some("KJV")).unwrap();
    assert_eq!(url, format!("{PREFIX}{code}.2.3.KJV"));
}

#[test]
fn test_default_cli_reference() {
    let url = build_reference_url("Genesis", 1, Some(1), None, Some("KJV")).unwrap();
    assert_eq!(url, "https://www.bible.com/en-GB/bible/1/GEN.1.1.KJV");
}

#[test]
fn test_chapter_only() {
    let url = build_reference_url("Genesis", 1, None, None, None).unwrap();
    assert!(url.ends_with("/1/GEN.1"));
}

#[test]
fn test_end_verse_only() {
    let url = build_reference_url("John", 3, None, Some(16), None).unwrap();
    assert!(url.contains("JHN.3.16-16"));
}

#[test]
fn test_full_range() {
    let url = build_reference_url("Psalms", 23, Some(1), Some(6), Some("NIV")).unwrap();
    assert!(url.ends_with("PSA.23.1-6.NIV"));
}

#[test_case("Nonexistent Book")]
#[test_case("john")]
#[test_case("John ")]
#[test_case("Psalm")]
fn test_unknown_book(book: &str) {
    match build_reference_url(book, 1, None, None, None) {
        Err(BibleQRError::UnknownBook(name)) => assert_eq!(name, book),
        other => panic!("Expected unknown book, got {other:?}"),
    }
}

#[test]
fn test_reference_fields() {
    let reference =
        ReferenceBuilder::new("Romans", 8).verse_end(28).version("NKJV").build().unwrap();
    assert_eq!(reference.book_code(), "ROM");
    assert_eq!(reference.chapter(), 8);
    assert_eq!(reference.verse_start(), Some(28));
    assert_eq!(reference.verse_end(), Some(28));
    assert_eq!(reference.version(), Some("NKJV"));
    assert_eq!(reference.to_string(), format!("{PREFIX}ROM.8.28-28.NKJV"));
}
