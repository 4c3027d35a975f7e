//! BibTeX entry extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::latex::clean_latex;
use crate::publication::Publication;

/// One `@type{id, body}` block. The terminating `}` must start its own line;
/// this is a heuristic rather than true brace balancing across the entry,
/// and matches the layout every common reference manager emits.
static ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)@(\w+)\{([^,]+),\s*(.*?)\n\}").unwrap());

/// Start of a braced field value: `key = {`. Bare values (`year = 2020`)
/// are deliberately not matched and leave the field at its default.
static FIELD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s*=\s*\{").unwrap());

/// Extract all BibTeX entries from `input`, most recent year first.
///
/// Entries with a non-numeric or missing year sort after all numeric years;
/// the sort is stable, so equal years keep their input order. Malformed or
/// unrecognized material is skipped, never an error: no matches means an
/// empty vector.
pub fn parse_bib(input: &str) -> Vec<Publication> {
    let mut entries: Vec<Publication> = ENTRY_RE
        .captures_iter(input)
        .map(|caps| {
            let mut entry = Publication::new(&caps[2], caps[1].to_lowercase());
            populate_fields(&mut entry, caps.get(3).unwrap().as_str());
            entry
        })
        .collect();

    entries.sort_by(|a, b| leading_int(&b.year).cmp(&leading_int(&a.year)));
    entries
}

fn populate_fields(entry: &mut Publication, body: &str) {
    for caps in FIELD_RE.captures_iter(body) {
        let start = caps.get(0).unwrap().end();
        let value = braced_value(body, start);
        let value = clean_latex(value.trim());

        match caps[1].to_lowercase().as_str() {
            "title" => entry.title = value,
            "author" => entry.author = value,
            "year" => entry.year = value,
            "journal" => entry.journal = Some(value),
            "booktitle" => entry.booktitle = Some(value),
            "volume" => entry.volume = Some(value),
            "pages" => entry.pages = Some(value),
            "doi" => entry.doi = Some(value),
            "url" => entry.url = Some(value),
            "arxiv" => entry.arxiv = Some(value),
            "abstract" => entry.abstract_ = Some(value),
            "selected" => entry.selected = Some(value == "true"),
            // Present-but-unparsable degrades to 0; an absent key stays None.
            "citations" => entry.citations = Some(leading_int(&value).unwrap_or(0)),
            _ => {}
        }
    }
}

/// Scan forward from `start` (just past an opening brace) and return the
/// value span, tracking brace depth so nested groups stay intact. An
/// unterminated value runs to the end of the body.
fn braced_value(body: &str, start: usize) -> &str {
    let mut depth = 1u32;
    for (idx, ch) in body[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return &body[start..start + idx];
                }
            }
            _ => {}
        }
    }
    &body[start..]
}

/// Integer prefix of a string: optional sign, then leading digits. Used for
/// both the year sort key and the citation count, mirroring how lenient
/// numeric fields in .bib exports tend to be ("2020a", "12 citations").
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: &str = &rest[..rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len())];
    digits.parse::<i64>().ok().map(|n| sign * n)
}
