//! forge_core - request model and wire format for the Forge rendering service.
//!
//! Following the Functional Core pattern, these are pure data types with no
//! I/O: a `RenderRequest` describes one rendering job and serializes to the
//! JSON document the server expects.

pub mod render;

pub use render::{
    Barcode, BarcodeAnchor, BarcodeType, DitherMethod, EmbedRelationship, EmbeddedFile, Flow,
    Orientation, OutputFormat, Palette, PaletteSpec, PdfStandard, RenderRequest, WatermarkLayer,
};
