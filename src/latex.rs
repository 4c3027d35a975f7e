//! LaTeX markup normalization.
//!
//! Rewrites the accent and special-character escapes that reference managers
//! emit into precomposed Unicode, strips one level of grouping braces, and
//! maps `--`/`---` to typographic dashes.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// One diacritic family: the braced (`{\'a}`) and bare (`\'a`) spellings
/// share a single base-letter table so the two variants cannot drift apart.
struct Diacritic {
    braced: Regex,
    bare: Regex,
    map: HashMap<char, char>,
}

impl Diacritic {
    fn new(braced: &str, bare: &str, pairs: &[(char, char)]) -> Self {
        Diacritic {
            braced: Regex::new(braced).unwrap(),
            bare: Regex::new(bare).unwrap(),
            map: pairs.iter().copied().collect(),
        }
    }

    fn apply(&self, text: &str) -> String {
        let sub = |caps: &Captures| -> String {
            let letter = caps[1].chars().next().unwrap();
            // The letter classes already restrict candidates; identity is
            // only reachable if a pattern and its table disagree.
            self.map.get(&letter).copied().unwrap_or(letter).to_string()
        };
        let text = self.braced.replace_all(text, sub);
        self.bare.replace_all(&text, sub).into_owned()
    }
}

static DIACRITICS: Lazy<Vec<Diacritic>> = Lazy::new(|| {
    vec![
        // Acute
        Diacritic::new(
            r"\{\\'([aeiouAEIOUcnsy])\}",
            r"\\'([aeiouAEIOUcnsy])",
            &[
                ('a', 'á'), ('e', 'é'), ('i', 'í'), ('o', 'ó'), ('u', 'ú'),
                ('A', 'Á'), ('E', 'É'), ('I', 'Í'), ('O', 'Ó'), ('U', 'Ú'),
                ('c', 'ć'), ('n', 'ń'), ('s', 'ś'), ('y', 'ý'),
            ],
        ),
        // Grave
        Diacritic::new(
            r"\{\\`([aeiouAEIOU])\}",
            r"\\`([aeiouAEIOU])",
            &[
                ('a', 'à'), ('e', 'è'), ('i', 'ì'), ('o', 'ò'), ('u', 'ù'),
                ('A', 'À'), ('E', 'È'), ('I', 'Ì'), ('O', 'Ò'), ('U', 'Ù'),
            ],
        ),
        // Tilde
        Diacritic::new(
            r"\{\\~([aonAON])\}",
            r"\\~([aonAON])",
            &[
                ('a', 'ã'), ('o', 'õ'), ('n', 'ñ'),
                ('A', 'Ã'), ('O', 'Õ'), ('N', 'Ñ'),
            ],
        ),
        // Diaeresis
        Diacritic::new(
            r#"\{\\"([aeiouyAEIOUY])\}"#,
            r#"\\"([aeiouyAEIOUY])"#,
            &[
                ('a', 'ä'), ('e', 'ë'), ('i', 'ï'), ('o', 'ö'), ('u', 'ü'), ('y', 'ÿ'),
                ('A', 'Ä'), ('E', 'Ë'), ('I', 'Ï'), ('O', 'Ö'), ('U', 'Ü'), ('Y', 'Ÿ'),
            ],
        ),
        // Circumflex
        Diacritic::new(
            r"\{\\\^([aeiouAEIOU])\}",
            r"\\\^([aeiouAEIOU])",
            &[
                ('a', 'â'), ('e', 'ê'), ('i', 'î'), ('o', 'ô'), ('u', 'û'),
                ('A', 'Â'), ('E', 'Ê'), ('I', 'Î'), ('O', 'Ô'), ('U', 'Û'),
            ],
        ),
        // Caron; the letter itself may carry an inner brace (\v{s} or \v s)
        Diacritic::new(
            r"\{\\v\{?([scrzSCRZ])\}?\}",
            r"\\v\{?([scrzSCRZ])\}?",
            &[
                ('s', 'š'), ('c', 'č'), ('r', 'ř'), ('z', 'ž'),
                ('S', 'Š'), ('C', 'Č'), ('R', 'Ř'), ('Z', 'Ž'),
            ],
        ),
        // Cedilla
        Diacritic::new(
            r"\{\\c\{?([cC])\}?\}",
            r"\\c\{?([cC])\}?",
            &[('c', 'ç'), ('C', 'Ç')],
        ),
    ]
});

/// Dotless `\i`/`\j` before whitespace, a backslash, a brace, or the end of
/// the string. They only exist to suppress the dot under an accent; once
/// accents become precomposed characters the plain letter is what we want.
static DOTLESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\([ij])([\s\\{}]|$)").unwrap());

/// Single-command special letters, matched only at a word boundary so that
/// e.g. `\over` is not mistaken for `\o`.
static SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\(aa|AA|ae|AE|ss|o|O)\b").unwrap());

static SPECIAL_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("o", "ø");
    m.insert("O", "Ø");
    m.insert("aa", "å");
    m.insert("AA", "Å");
    m.insert("ae", "æ");
    m.insert("AE", "Æ");
    m.insert("ss", "ß");
    m
});

/// A `{...}` group containing no further braces; one pass un-nests exactly
/// one level, which suffices once the accent patterns above have consumed
/// the common nested cases.
static GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Normalize a raw BibTeX field value to plain text.
///
/// The steps are ordered: dotless markers first (so accent tables see plain
/// letters), then the diacritic families, then special letters, brace
/// stripping, and finally dash mapping (which must run after braces are
/// gone). Already-plain input passes through unchanged apart from trimming.
pub fn clean_latex(text: &str) -> String {
    let text = DOTLESS.replace_all(text, "$1$2");

    let mut text = text.into_owned();
    for family in DIACRITICS.iter() {
        text = family.apply(&text);
    }

    let text = SPECIAL.replace_all(&text, |caps: &Captures| SPECIAL_MAP[&caps[1]].to_string());
    let text = GROUP.replace_all(&text, "$1");

    text.replace("---", "—").replace("--", "–").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acute_braced_and_bare() {
        assert_eq!(clean_latex(r"{\'a}"), "á");
        assert_eq!(clean_latex(r"\'e"), "é");
        assert_eq!(clean_latex(r"Garc\'ia, Mar\'ia"), "García, María");
    }

    #[test]
    fn grave_tilde_circumflex() {
        assert_eq!(clean_latex(r"\`a la carte"), "à la carte");
        assert_eq!(clean_latex(r"ma\~nana"), "mañana");
        assert_eq!(clean_latex(r"h\^otel"), "hôtel");
        assert_eq!(clean_latex(r"{\~O}"), "Õ");
    }

    #[test]
    fn diaeresis_both_cases() {
        assert_eq!(clean_latex(r#"M\"uller"#), "Müller");
        assert_eq!(clean_latex(r#"{\"O}sterreich"#), "Österreich");
    }

    #[test]
    fn caron_and_cedilla_variants() {
        assert_eq!(clean_latex(r"\v{c}"), "č");
        assert_eq!(clean_latex(r"{\v{s}}"), "š");
        assert_eq!(clean_latex(r"Dvo\v{r}\'ak"), "Dvořák");
        assert_eq!(clean_latex(r"\c{c}"), "ç");
        assert_eq!(clean_latex(r"Fran\c{c}ois"), "François");
        // A space after \v is not the inner-brace form; left alone.
        assert_eq!(clean_latex(r"\v c"), r"\v c");
    }

    #[test]
    fn dotless_letters_flatten() {
        assert_eq!(clean_latex(r"\i"), "i");
        assert_eq!(clean_latex(r"\j"), "j");
        assert_eq!(clean_latex(r"Garc{\'\i}a"), "García");
    }

    #[test]
    fn special_letters_at_word_boundary() {
        assert_eq!(clean_latex(r"\o"), "ø");
        assert_eq!(clean_latex(r"{\O}rsted"), "Ørsted");
        assert_eq!(clean_latex(r"\aa"), "å");
        assert_eq!(clean_latex(r"Strau\ss"), "Strauß");
        // \over must not be read as \o + "ver".
        assert_eq!(clean_latex(r"\over"), r"\over");
    }

    #[test]
    fn brace_groups_stripped_one_level() {
        assert_eq!(clean_latex("A {B} C"), "A B C");
        assert_eq!(clean_latex("{DNA} sequencing"), "DNA sequencing");
        // Only groups without inner braces are collapsed in one call.
        assert_eq!(clean_latex("{{a}}"), "{a}");
    }

    #[test]
    fn dashes_after_braces() {
        assert_eq!(clean_latex("word---word"), "word—word");
        assert_eq!(clean_latex("word--word"), "word–word");
        assert_eq!(clean_latex("pages 1--10"), "pages 1–10");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(clean_latex("  plain text \n"), "plain text");
    }

    #[test]
    fn plain_text_is_idempotent() {
        proptest::proptest!(|(s in "[A-Za-z0-9 .,:;!?']{0,64}")| {
            let once = clean_latex(&s);
            proptest::prop_assert_eq!(clean_latex(&once), once);
        })
    }
}
