//! Wire enums for the Forge render protocol.
//!
//! Each variant serializes to the exact token the server expects. Enums the
//! CLI accepts on the command line also implement `FromStr` over the same
//! tokens.

use std::str::FromStr;

use serde::Serialize;

/// Output format for rendered content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pdf,
    Png,
    Jpeg,
    Bmp,
    Tga,
    Qoi,
    Svg,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(OutputFormat::Pdf),
            "png" => Ok(OutputFormat::Png),
            "jpeg" => Ok(OutputFormat::Jpeg),
            "bmp" => Ok(OutputFormat::Bmp),
            "tga" => Ok(OutputFormat::Tga),
            "qoi" => Ok(OutputFormat::Qoi),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(format!("unknown orientation: {s}")),
        }
    }
}

/// Document flow mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Auto,
    Paginate,
    Continuous,
}

impl FromStr for Flow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Flow::Auto),
            "paginate" => Ok(Flow::Paginate),
            "continuous" => Ok(Flow::Continuous),
            _ => Err(format!("unknown flow mode: {s}")),
        }
    }
}

/// Built-in color palette presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Auto,
    Bw,
    Grayscale,
    Eink,
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Palette::Auto),
            "bw" => Ok(Palette::Bw),
            "grayscale" => Ok(Palette::Grayscale),
            "eink" => Ok(Palette::Eink),
            _ => Err(format!("unknown palette preset: {s}")),
        }
    }
}

/// Dithering algorithm for color quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherMethod {
    None,
    FloydSteinberg,
    Atkinson,
    Ordered,
}

impl FromStr for DitherMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(DitherMethod::None),
            "floyd-steinberg" => Ok(DitherMethod::FloydSteinberg),
            "atkinson" => Ok(DitherMethod::Atkinson),
            "ordered" => Ok(DitherMethod::Ordered),
            _ => Err(format!("unknown dither method: {s}")),
        }
    }
}

/// PDF standard compliance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PdfStandard {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "pdf/a-2b")]
    A2b,
    #[serde(rename = "pdf/a-3b")]
    A3b,
}

impl FromStr for PdfStandard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(PdfStandard::None),
            "pdf/a-2b" => Ok(PdfStandard::A2b),
            "pdf/a-3b" => Ok(PdfStandard::A3b),
            _ => Err(format!("unknown pdf standard: {s}")),
        }
    }
}

/// Watermark layer position relative to page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WatermarkLayer {
    Over,
    Under,
}

impl FromStr for WatermarkLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "over" => Ok(WatermarkLayer::Over),
            "under" => Ok(WatermarkLayer::Under),
            _ => Err(format!("unknown watermark layer: {s}")),
        }
    }
}

/// Relationship of an embedded file to the PDF document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedRelationship {
    Alternative,
    Supplement,
    Data,
    Source,
    Unspecified,
}

/// Barcode symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarcodeType {
    // 2D symbologies
    Qr,
    DataMatrix,
    Pdf417,
    Aztec,
    // 1D symbologies
    Code128,
    Ean13,
    Ean8,
    UpcA,
    Code39,
    Code93,
    Codabar,
    Itf,
    Code11,
}

impl FromStr for BarcodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "qr" => Ok(BarcodeType::Qr),
            "datamatrix" => Ok(BarcodeType::DataMatrix),
            "pdf417" => Ok(BarcodeType::Pdf417),
            "aztec" => Ok(BarcodeType::Aztec),
            "code128" => Ok(BarcodeType::Code128),
            "ean13" => Ok(BarcodeType::Ean13),
            "ean8" => Ok(BarcodeType::Ean8),
            "upca" => Ok(BarcodeType::UpcA),
            "code39" => Ok(BarcodeType::Code39),
            "code93" => Ok(BarcodeType::Code93),
            "codabar" => Ok(BarcodeType::Codabar),
            "itf" => Ok(BarcodeType::Itf),
            "code11" => Ok(BarcodeType::Code11),
            _ => Err(format!("unknown barcode type: {s}")),
        }
    }
}

/// Anchor corner for barcode placement on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarcodeAnchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}
