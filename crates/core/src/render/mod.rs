mod request;
mod types;

pub use request::{Barcode, EmbeddedFile, PaletteSpec, RenderRequest};
pub use types::{
    BarcodeAnchor, BarcodeType, DitherMethod, EmbedRelationship, Flow, Orientation, OutputFormat,
    Palette, PdfStandard, WatermarkLayer,
};
