use std::io::{Cursor, Read, Seek};

use log::debug;

use crate::error::Incompatibility;
use crate::parse::{ParsedTiff, TagField};

/// Pairs a disqualifying tag with the reason reported when a file carries it.
///
/// A rule fires only when both the numeric ID and the canonical name match
/// the field; vendor tag spaces reuse IDs under different names, so a
/// half-match never rejects a file.
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub id: u16,
    pub name: &'static str,
    pub reason: Incompatibility,
}

impl TagRule {
    fn matches(&self, field: &TagField) -> bool {
        self.id == field.id && self.name == field.name
    }
}

/// Tags the document-assembly importer cannot digest.
///
/// New disqualifying tags are added by appending a row.
pub const IMPORT_RULES: &[TagRule] = &[
    // https://www.awaresystems.be/imaging/tiff/tifftags/imagesourcedata.html
    TagRule {
        id: 37724,
        name: "ImageSourceData",
        reason: Incompatibility::EmbeddedLayers,
    },
    // https://www.awaresystems.be/imaging/tiff/tifftags/predictor.html
    TagRule {
        id: 317,
        name: "Predictor",
        reason: Incompatibility::Predictor,
    },
];

/// How far the rule scan keeps looking once a disqualifying tag turns up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Stop at the first matching field and report that single reason.
    FailFast,
    /// Finish the current directory and report every distinct reason found
    /// in it; directories after the first tainted one are not scanned.
    #[default]
    CollectAll,
}

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    compatible: bool,
    reasons: Vec<Incompatibility>,
}

impl Verdict {
    fn pass() -> Self {
        Self {
            compatible: true,
            reasons: Vec::new(),
        }
    }

    fn fail(reasons: Vec<Incompatibility>) -> Self {
        debug_assert!(!reasons.is_empty());
        Self {
            compatible: false,
            reasons,
        }
    }

    /// Whether the importer will accept the file.
    pub fn is_compatible(&self) -> bool {
        self.compatible
    }

    /// Reasons the file was rejected, in the order they were found.
    /// Empty exactly when the file is compatible.
    pub fn reasons(&self) -> &[Incompatibility] {
        &self.reasons
    }
}

/// Checks a random-access byte source in the default collect-all mode.
pub fn check<R: Read + Seek>(source: R) -> Verdict {
    check_with_mode(source, ScanMode::default())
}

/// Checks an in-memory byte slice in the default collect-all mode.
///
/// # Example
/// ```
/// let verdict = tiffcheck::check_bytes(&[]);
/// assert!(!verdict.is_compatible());
/// ```
pub fn check_bytes(bytes: &[u8]) -> Verdict {
    check(Cursor::new(bytes))
}

/// Checks a random-access byte source under an explicit scan mode.
///
/// Pure function of the input bytes: no side effects, and identical input
/// always produces an identical verdict. Any parse failure, including a
/// read error surfaced while the parser pulls bytes lazily, yields the
/// single [`Incompatibility::NotTiff`] reason.
pub fn check_with_mode<R: Read + Seek>(source: R, mode: ScanMode) -> Verdict {
    match ParsedTiff::from_reader(source) {
        Ok(parsed) => evaluate(&parsed, mode),
        Err(err) => {
            debug!("treating unparseable input as non-TIFF: {err}");
            Verdict::fail(vec![Incompatibility::NotTiff])
        }
    }
}

/// Runs the rule scan over an already-parsed tag tree.
///
/// Directories and fields are visited in the order the parser yields them;
/// no sort order is assumed. Under [`ScanMode::CollectAll`] the scan
/// finishes the directory that produced the first match before stopping.
pub fn evaluate(parsed: &ParsedTiff, mode: ScanMode) -> Verdict {
    let mut reasons: Vec<Incompatibility> = Vec::new();

    for directory in &parsed.directories {
        for field in &directory.fields {
            for rule in IMPORT_RULES {
                if !rule.matches(field) {
                    continue;
                }
                if !reasons.contains(&rule.reason) {
                    reasons.push(rule.reason);
                }
                if mode == ScanMode::FailFast {
                    return Verdict::fail(reasons);
                }
            }
        }
        // A tainted directory settles the verdict.
        if !reasons.is_empty() {
            break;
        }
    }

    if reasons.is_empty() {
        Verdict::pass()
    } else {
        Verdict::fail(reasons)
    }
}
