//! Extract structured publication records from BibTeX text.
//!
//! The crate does three things, in the order a caller usually needs them:
//!
//! - [`parser::parse_bib`] scans raw text for `@type{id, ...}` blocks and
//!   returns one [`publication::Publication`] per entry, newest year first.
//! - [`latex::clean_latex`] turns LaTeX accent escapes into plain Unicode
//!   and is applied to every field value during extraction.
//! - [`authors::format_authors`] renders an author field for display.
//!
//! ```rust
//! use pubparse::parser::parse_bib;
//!
//! let pubs = parse_bib("@article{key,\n  title = {An {Example}},\n  year = {2024}\n}\n");
//! assert_eq!(pubs[0].title, "An Example");
//! ```
//!
//! Everything is pure and synchronous; sourcing the text and rendering the
//! records are the caller's business. Full BibTeX grammar support (string
//! macros, crossrefs, comments) is a non-goal — the target is the subset
//! common reference managers produce.

pub mod authors;
pub mod cli;
pub mod latex;
pub mod parser;
pub mod publication;
