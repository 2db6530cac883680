//! Render CLI command.

use std::path::PathBuf;

use base64::Engine;
use clap::Parser;
use forge_core::{
    Barcode, BarcodeType, DitherMethod, EmbeddedFile, Flow, Orientation, OutputFormat, Palette,
    PdfStandard, RenderRequest, WatermarkLayer,
};

/// Render a document and write the result bytes.
#[derive(Debug, Parser)]
pub struct RenderCommand {
    /// Inline HTML source.
    #[arg(long, conflicts_with_all = ["html_file", "url"])]
    pub html: Option<String>,

    /// Read the HTML source from a file.
    #[arg(long, conflicts_with = "url")]
    pub html_file: Option<PathBuf>,

    /// Render the page at a URL.
    #[arg(long)]
    pub url: Option<String>,

    /// Output format (pdf, png, jpeg, bmp, tga, qoi, svg).
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Viewport width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Named paper size, e.g. "a4".
    #[arg(long)]
    pub paper: Option<String>,

    /// Page orientation (portrait, landscape).
    #[arg(long)]
    pub orientation: Option<Orientation>,

    /// Page margins spec, e.g. "1in".
    #[arg(long)]
    pub margins: Option<String>,

    /// Document flow mode (auto, paginate, continuous).
    #[arg(long)]
    pub flow: Option<Flow>,

    /// Rendering density in DPI.
    #[arg(long)]
    pub density: Option<f64>,

    /// Page background color.
    #[arg(long)]
    pub background: Option<String>,

    /// Server-side rendering time budget in seconds.
    #[arg(long)]
    pub timeout: Option<u32>,

    /// Quantization color count.
    #[arg(long)]
    pub colors: Option<u32>,

    /// Named palette preset (auto, bw, grayscale, eink).
    #[arg(long)]
    pub palette: Option<Palette>,

    /// Dithering method (none, floyd-steinberg, atkinson, ordered).
    #[arg(long)]
    pub dither: Option<DitherMethod>,

    /// PDF document title.
    #[arg(long)]
    pub title: Option<String>,

    /// PDF document author.
    #[arg(long)]
    pub author: Option<String>,

    /// PDF document subject.
    #[arg(long)]
    pub subject: Option<String>,

    /// PDF keyword list.
    #[arg(long)]
    pub keywords: Option<String>,

    /// PDF creator application name.
    #[arg(long)]
    pub creator: Option<String>,

    /// Enable or disable outline bookmarks.
    #[arg(long)]
    pub bookmarks: Option<bool>,

    /// PDF standard compliance level (none, pdf/a-2b, pdf/a-3b).
    #[arg(long)]
    pub standard: Option<PdfStandard>,

    /// Watermark text.
    #[arg(long)]
    pub watermark_text: Option<String>,

    /// Watermark opacity.
    #[arg(long)]
    pub watermark_opacity: Option<f64>,

    /// Watermark rotation in degrees.
    #[arg(long)]
    pub watermark_rotation: Option<f64>,

    /// Watermark layer (over, under).
    #[arg(long)]
    pub watermark_layer: Option<WatermarkLayer>,

    /// Watermark page range, e.g. "1,3-5".
    #[arg(long)]
    pub watermark_pages: Option<String>,

    /// Attach a file to the PDF (repeatable).
    #[arg(long = "attach")]
    pub attachments: Vec<PathBuf>,

    /// Add a barcode as TYPE:DATA, e.g. "qr:https://example.com" (repeatable).
    #[arg(long = "barcode")]
    pub barcodes: Vec<String>,

    /// Write the rendered bytes to this file (stdout otherwise).
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    /// Build the render request from the parsed arguments.
    pub fn to_request(&self) -> Result<RenderRequest, String> {
        let mut request = match (&self.html, &self.html_file, &self.url) {
            (Some(html), _, _) => RenderRequest::html(html),
            (_, Some(path), _) => {
                let html = std::fs::read_to_string(path)
                    .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
                RenderRequest::html(html)
            }
            (_, _, Some(url)) => RenderRequest::url(url),
            _ => return Err("one of --html, --html-file, or --url is required".to_string()),
        };

        if let Some(format) = self.format {
            request = request.with_format(format);
        }
        if let Some(width) = self.width {
            request = request.with_width(width);
        }
        if let Some(height) = self.height {
            request = request.with_height(height);
        }
        if let Some(paper) = &self.paper {
            request = request.with_paper(paper);
        }
        if let Some(orientation) = self.orientation {
            request = request.with_orientation(orientation);
        }
        if let Some(margins) = &self.margins {
            request = request.with_margins(margins);
        }
        if let Some(flow) = self.flow {
            request = request.with_flow(flow);
        }
        if let Some(density) = self.density {
            request = request.with_density(density);
        }
        if let Some(background) = &self.background {
            request = request.with_background(background);
        }
        if let Some(timeout) = self.timeout {
            request = request.with_timeout(timeout);
        }
        if let Some(colors) = self.colors {
            request = request.with_colors(colors);
        }
        if let Some(palette) = self.palette {
            request = request.with_palette(palette);
        }
        if let Some(dither) = self.dither {
            request = request.with_dither(dither);
        }
        if let Some(title) = &self.title {
            request = request.with_title(title);
        }
        if let Some(author) = &self.author {
            request = request.with_author(author);
        }
        if let Some(subject) = &self.subject {
            request = request.with_subject(subject);
        }
        if let Some(keywords) = &self.keywords {
            request = request.with_keywords(keywords);
        }
        if let Some(creator) = &self.creator {
            request = request.with_creator(creator);
        }
        if let Some(bookmarks) = self.bookmarks {
            request = request.with_bookmarks(bookmarks);
        }
        if let Some(standard) = self.standard {
            request = request.with_standard(standard);
        }
        if let Some(text) = &self.watermark_text {
            request = request.with_watermark_text(text);
        }
        if let Some(opacity) = self.watermark_opacity {
            request = request.with_watermark_opacity(opacity);
        }
        if let Some(rotation) = self.watermark_rotation {
            request = request.with_watermark_rotation(rotation);
        }
        if let Some(layer) = self.watermark_layer {
            request = request.with_watermark_layer(layer);
        }
        if let Some(pages) = &self.watermark_pages {
            request = request.with_watermark_pages(pages);
        }
        for path in &self.attachments {
            request = request.with_attachment(read_attachment(path)?);
        }
        for spec in &self.barcodes {
            request = request.with_barcode(parse_barcode(spec)?);
        }

        Ok(request)
    }
}

/// Read a file and base64-encode it as a PDF attachment.
fn read_attachment(path: &PathBuf) -> Result<EmbeddedFile, String> {
    let bytes =
        std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let data = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(EmbeddedFile::new(name, data))
}

/// Parse a TYPE:DATA barcode argument.
fn parse_barcode(spec: &str) -> Result<Barcode, String> {
    let (kind, data) = spec
        .split_once(':')
        .ok_or_else(|| format!("invalid barcode spec (expected TYPE:DATA): {spec}"))?;
    let kind: BarcodeType = kind.parse()?;
    Ok(Barcode::new(kind, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_barcode_splits_on_first_colon() {
        let barcode = parse_barcode("qr:https://example.com").unwrap();
        let value = serde_json::to_value(&barcode).unwrap();
        assert_eq!(value["type"], json!("qr"));
        assert_eq!(value["data"], json!("https://example.com"));
    }

    #[test]
    fn parse_barcode_rejects_bad_specs() {
        assert!(parse_barcode("no-separator").is_err());
        assert!(parse_barcode("nope:data").is_err());
    }
}
