use thiserror::Error;

/// Reasons a file is rejected by the importer compatibility check.
///
/// A closed set, produced fresh for every check. The `Display` output of
/// each variant is the exact sentence shown to the user, so the variants
/// double as the tool's vocabulary of failure messages.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Incompatibility {
    /// The byte stream could not be parsed as a TIFF at all. Also covers
    /// lower-level read errors surfaced while the parser pulls bytes lazily;
    /// the caller only needs to distinguish usable from not usable.
    #[error("The file does not appear to be a TIFF file")]
    NotTiff,

    /// An `ImageSourceData` tag is present: the file still carries its
    /// unflattened layer stack.
    #[error("The file contains embedded layers (not flattened)")]
    EmbeddedLayers,

    /// A `Predictor` tag is present: the file was compressed with a
    /// prediction step the importer cannot undo.
    #[error("The file uses a compression predictor")]
    Predictor,
}
