//! Book names accepted by the URL builder and the codes bible.com uses for them.

/// One book of the Bible as addressed by bible.com.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Book {
    pub name: &'static str,
    pub code: &'static str,
}

impl Book {
    /// Exact, case-sensitive lookup by English name.
    pub fn find(name: &str) -> Option<&'static Book> {
        BOOKS.iter().find(|b| b.name == name)
    }
}

/// Looks up the bible.com code for `name`. No trimming or case folding.
pub fn book_code(name: &str) -> Option<&'static str> {
    Book::find(name).map(|b| b.code)
}

macro_rules! books {
    ($($name:literal => $code:literal),* $(,)?) => {
        &[$(Book { name: $name, code: $code }),*]
    };
}

/// The 66 books in canonical order.
pub const BOOKS: &[Book] = books![
    // Old testament
    "Genesis" => "GEN",
    "Exodus" => "EXO",
    "Leviticus" => "LEV",
    "Numbers" => "NUM",
    "Deuteronomy" => "DEU",
    "Joshua" => "JOS",
    "Judges" => "JDG",
    "Ruth" => "RUT",
    "1 Samuel" => "1SA",
    "2 Samuel" => "2SA",
    "1 Kings" => "1KI",
    "2 Kings" => "2KI",
    "1 Chronicles" => "1CH",
    "2 Chronicles" => "2CH",
    "Ezra" => "EZR",
    "Nehemiah" => "NEH",
    "Esther" => "EST",
    "Job" => "JOB",
    "Psalms" => "PSA",
    "Proverbs" => "PRO",
    "Ecclesiastes" => "ECC",
    "Song of Solomon" => "SNG",
    "Isaiah" => "ISA",
    "Jeremiah" => "JER",
    "Lamentations" => "LAM",
    "Ezekiel" => "EZK",
    "Daniel" => "DAN",
    "Hosea" => "HOS",
    "Joel" => "JOL",
    "Amos" => "AMO",
    "Obadiah" => "OBA",
    "Jonah" => "JON",
    "Micah" => "MIC",
    "Nahum" => "NAM",
    "Habakkuk" => "HAB",
    "Zephaniah" => "ZEP",
    "Haggai" => "HAG",
    "Zechariah" => "ZEC",
    "Malachi" => "MAL",
    // New testament
    "Matthew" => "MAT",
    "Mark" => "MRK",
    "Luke" => "LUK",
    "John" => "JHN",
    "Acts" => "ACT",
    "Romans" => "ROM",
    "1 Corinthians" => "1CO",
    "2 Corinthians" => "2CO",
    "Galatians" => "GAL",
    "Ephesians" => "EPH",
    "Philippians" => "PHP",
    "Colossians" => "COL",
    "1 Thessalonians" => "1TH",
    "2 Thessalonians" => "2TH",
    "1 Timothy" => "1TI",
    "2 Timothy" => "2TI",
    "Titus" => "TIT",
    "Philemon" => "PHM",
    "Hebrews" => "HEB",
    "James" => "JAS",
    "1 Peter" => "1PE",
    "2 Peter" => "2PE",
    "1 John" => "1JN",
    "2 John" => "2JN",
    "3 John" => "3JN",
    "Jude" => "JUD",
    "Revelation" => "REV",
];
