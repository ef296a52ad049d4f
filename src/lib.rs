//! # tiffcheck
//!
//! Classifies TIFF files as compatible or incompatible with a downstream
//! document-assembly importer.
//!
//! The importer only accepts flattened, predictor-free TIFFs. Two tags give
//! an unusable file away: `ImageSourceData` (37724), which Photoshop uses to
//! embed the unflattened layer stack, and `Predictor` (317), which marks a
//! compression pre-processing step the importer cannot undo. This crate
//! parses a file's tag directories (via the [`tiff`] crate), scans every
//! field against a fixed rule table and returns a [`Verdict`] with the
//! reasons for rejection.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = File::open("scan.tif").expect("open file");
//! let verdict = tiffcheck::check(BufReader::new(file));
//!
//! if verdict.is_compatible() {
//!     println!("safe to import");
//! } else {
//!     for reason in verdict.reasons() {
//!         println!("{reason}");
//!     }
//! }
//! ```
//!
//! A stream the parser cannot digest (wrong magic bytes, truncated data, an
//! I/O error halfway through) is reported as the single
//! [`Incompatibility::NotTiff`] reason rather than as an error:
//!
//! ```
//! use tiffcheck::{check_bytes, Incompatibility};
//!
//! let verdict = check_bytes(b"not remotely a TIFF");
//! assert!(!verdict.is_compatible());
//! assert_eq!(verdict.reasons(), [Incompatibility::NotTiff]);
//! ```

// Public API
mod checker;
mod error;
mod parse;
mod tags;

pub use checker::{check, check_bytes, check_with_mode, evaluate};
pub use checker::{ScanMode, TagRule, Verdict, IMPORT_RULES};
pub use error::Incompatibility;
pub use parse::{ParsedTiff, TagDirectory, TagField};
pub use tags::canonical_name;
