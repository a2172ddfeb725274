use std::error::Error;

use bibleqr::{qr, ECLevel, ReferenceBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    let reference = ReferenceBuilder::new("Psalms", 23)
        .verse_start(1)   // Start verse - if not provided, the link opens the whole chapter
        .verse_end(6)     // End verse - if provided alone, the start verse is set to it
        .version("NIV")   // Version code - if not provided, the app picks the reader's version
        .build()?;

    let url = reference.url();
    qr::encode_to_png(&url, "psalm_23.png", 6, ECLevel::H)?; // 6x scale factor

    println!("Reference QR code saved to: psalm_23.png");
    println!("URL: {url}");

    Ok(())
}
