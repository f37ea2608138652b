//! Bible reference resolution: parsing, book and version tables, link formatting.

pub mod books;
pub mod reference;
pub mod url;
pub mod versions;

pub use books::{resolve_book, BOOK_MAP};
pub use reference::{parse_reference, BibleReference};
pub use url::{format_url, format_url_with_base};
pub use versions::VERSION_MAP;
