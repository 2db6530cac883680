//! Render request model and its JSON wire serialization.
//!
//! A `RenderRequest` collects one job's options through fluent `with_*`
//! setters and serializes to the nested document the server expects. Absent
//! options are omitted entirely (never null), and the `quantize`/`pdf`
//! groups only appear once one of their fields has been set — the groups are
//! allocated lazily by their setters, so the omission rules hold
//! structurally.

use serde::Serialize;

use super::types::{
    BarcodeAnchor, BarcodeType, DitherMethod, EmbedRelationship, Flow, Orientation, OutputFormat,
    Palette, PdfStandard, WatermarkLayer,
};

/// Content source for a render job. Exactly one, fixed at construction.
#[derive(Debug, Clone, Serialize)]
enum Source {
    #[serde(rename = "html")]
    Html(String),
    #[serde(rename = "url")]
    Url(String),
}

/// A color palette: either a named preset or a literal ordered color list.
///
/// One slot holds either shape; setting one after the other overwrites
/// (last write wins, no validation error).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    Preset(Palette),
    Custom(Vec<String>),
}

/// Color quantization options, nested under the `quantize` wire key.
#[derive(Debug, Clone, Default, Serialize)]
struct Quantize {
    #[serde(skip_serializing_if = "Option::is_none")]
    colors: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    palette: Option<PaletteSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dither: Option<DitherMethod>,
}

/// Watermark overlay options, nested under `pdf.watermark`.
#[derive(Debug, Clone, Default, Serialize)]
struct Watermark {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layer: Option<WatermarkLayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pages: Option<String>,
}

/// A file attached inside the PDF container.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddedFile {
    path: String,
    data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relationship: Option<EmbedRelationship>,
}

impl EmbeddedFile {
    /// Creates an attachment from a path label and base64-encoded contents.
    pub fn new(path: impl Into<String>, base64_data: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            data: base64_data.into(),
            mime_type: None,
            description: None,
            relationship: None,
        }
    }

    /// Sets the declared MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Sets the human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the relationship of the file to the document.
    pub fn with_relationship(mut self, relationship: EmbedRelationship) -> Self {
        self.relationship = Some(relationship);
        self
    }
}

/// A barcode stamped onto PDF pages.
///
/// `Barcode::new` is the minimal form (symbology + data); position, size,
/// colors, and page scoping are added through the `with_*` setters.
#[derive(Debug, Clone, Serialize)]
pub struct Barcode {
    #[serde(rename = "type")]
    kind: BarcodeType,
    data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchor: Option<BarcodeAnchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    draw_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pages: Option<String>,
}

impl Barcode {
    /// Creates a barcode with only symbology and data.
    pub fn new(kind: BarcodeType, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
            x: None,
            y: None,
            width: None,
            height: None,
            anchor: None,
            foreground: None,
            background: None,
            draw_background: None,
            pages: None,
        }
    }

    /// Sets the page-relative position.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Sets the rendered size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets the page corner the position is measured from.
    pub fn with_anchor(mut self, anchor: BarcodeAnchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Sets the foreground color.
    pub fn with_foreground(mut self, color: impl Into<String>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    /// Sets the background color.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Controls whether the background rectangle is drawn.
    pub fn with_draw_background(mut self, draw: bool) -> Self {
        self.draw_background = Some(draw);
        self
    }

    /// Scopes the barcode to a page range, e.g. "1,3-5".
    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }
}

/// PDF-specific options, nested under the `pdf` wire key.
#[derive(Debug, Clone, Default, Serialize)]
struct PdfOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bookmarks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    standard: Option<PdfStandard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    watermark: Option<Watermark>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    embedded_files: Vec<EmbeddedFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    barcodes: Vec<Barcode>,
}

/// One render job's configuration.
///
/// Created with exactly one content source (`html` or `url`), mutated by
/// fluent setters (last write wins, no validation), and serialized as often
/// as needed — serialization is pure and non-destructive.
#[derive(Debug, Clone, Serialize)]
pub struct RenderRequest {
    format: OutputFormat,
    #[serde(flatten)]
    source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paper: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    margins: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flow: Option<Flow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantize: Option<Quantize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pdf: Option<PdfOptions>,
}

impl RenderRequest {
    fn with_source(source: Source) -> Self {
        Self {
            format: OutputFormat::default(),
            source,
            width: None,
            height: None,
            paper: None,
            orientation: None,
            margins: None,
            flow: None,
            density: None,
            background: None,
            timeout: None,
            quantize: None,
            pdf: None,
        }
    }

    /// Creates a request rendering an HTML string.
    pub fn html(html: impl Into<String>) -> Self {
        Self::with_source(Source::Html(html.into()))
    }

    /// Creates a request rendering the page at a URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self::with_source(Source::Url(url.into()))
    }

    /// Sets the output format (defaults to PDF).
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the viewport width in pixels.
    pub fn with_width(mut self, pixels: u32) -> Self {
        self.width = Some(pixels);
        self
    }

    /// Sets the viewport height in pixels.
    pub fn with_height(mut self, pixels: u32) -> Self {
        self.height = Some(pixels);
        self
    }

    /// Sets a named paper size, e.g. "a4".
    pub fn with_paper(mut self, size: impl Into<String>) -> Self {
        self.paper = Some(size.into());
        self
    }

    /// Sets the page orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Sets the page margins spec, e.g. "1in" or "10mm 20mm".
    pub fn with_margins(mut self, margins: impl Into<String>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Sets the document flow mode.
    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flow = Some(flow);
        self
    }

    /// Sets the rendering density in DPI.
    pub fn with_density(mut self, dpi: f64) -> Self {
        self.density = Some(dpi);
        self
    }

    /// Sets the page background color.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Sets the server-side rendering time budget in seconds.
    ///
    /// Forwarded as a hint; not enforced by the client.
    pub fn with_timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds);
        self
    }

    // --- quantization ---

    fn quantize_mut(&mut self) -> &mut Quantize {
        self.quantize.get_or_insert_with(Quantize::default)
    }

    /// Sets the quantization color count.
    pub fn with_colors(mut self, count: u32) -> Self {
        self.quantize_mut().colors = Some(count);
        self
    }

    /// Sets a named palette preset, replacing any custom palette.
    pub fn with_palette(mut self, preset: Palette) -> Self {
        self.quantize_mut().palette = Some(PaletteSpec::Preset(preset));
        self
    }

    /// Sets a literal ordered color list, replacing any preset.
    pub fn with_custom_palette(mut self, colors: Vec<String>) -> Self {
        self.quantize_mut().palette = Some(PaletteSpec::Custom(colors));
        self
    }

    /// Sets the dithering method.
    pub fn with_dither(mut self, method: DitherMethod) -> Self {
        self.quantize_mut().dither = Some(method);
        self
    }

    // --- PDF metadata and features ---

    fn pdf_mut(&mut self) -> &mut PdfOptions {
        self.pdf.get_or_insert_with(PdfOptions::default)
    }

    fn watermark_mut(&mut self) -> &mut Watermark {
        self.pdf_mut().watermark.get_or_insert_with(Watermark::default)
    }

    /// Sets the PDF document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.pdf_mut().title = Some(title.into());
        self
    }

    /// Sets the PDF document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.pdf_mut().author = Some(author.into());
        self
    }

    /// Sets the PDF document subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.pdf_mut().subject = Some(subject.into());
        self
    }

    /// Sets the PDF keyword list.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.pdf_mut().keywords = Some(keywords.into());
        self
    }

    /// Sets the PDF creator application name.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.pdf_mut().creator = Some(creator.into());
        self
    }

    /// Enables or disables outline bookmarks.
    pub fn with_bookmarks(mut self, enabled: bool) -> Self {
        self.pdf_mut().bookmarks = Some(enabled);
        self
    }

    /// Sets the PDF standard compliance level.
    pub fn with_standard(mut self, standard: PdfStandard) -> Self {
        self.pdf_mut().standard = Some(standard);
        self
    }

    /// Sets the watermark text.
    pub fn with_watermark_text(mut self, text: impl Into<String>) -> Self {
        self.watermark_mut().text = Some(text.into());
        self
    }

    /// Sets a base64-encoded watermark image.
    pub fn with_watermark_image(mut self, base64_data: impl Into<String>) -> Self {
        self.watermark_mut().image_data = Some(base64_data.into());
        self
    }

    /// Sets the watermark opacity.
    pub fn with_watermark_opacity(mut self, opacity: f64) -> Self {
        self.watermark_mut().opacity = Some(opacity);
        self
    }

    /// Sets the watermark rotation in degrees.
    pub fn with_watermark_rotation(mut self, degrees: f64) -> Self {
        self.watermark_mut().rotation = Some(degrees);
        self
    }

    /// Sets the watermark text color as a hex string.
    pub fn with_watermark_color(mut self, hex: impl Into<String>) -> Self {
        self.watermark_mut().color = Some(hex.into());
        self
    }

    /// Sets the watermark font size.
    pub fn with_watermark_font_size(mut self, size: f64) -> Self {
        self.watermark_mut().font_size = Some(size);
        self
    }

    /// Sets the watermark image scale factor.
    pub fn with_watermark_scale(mut self, scale: f64) -> Self {
        self.watermark_mut().scale = Some(scale);
        self
    }

    /// Places the watermark over or under page content.
    pub fn with_watermark_layer(mut self, layer: WatermarkLayer) -> Self {
        self.watermark_mut().layer = Some(layer);
        self
    }

    /// Scopes the watermark to a page range, e.g. "1,3-5".
    pub fn with_watermark_pages(mut self, pages: impl Into<String>) -> Self {
        self.watermark_mut().pages = Some(pages.into());
        self
    }

    /// Appends a file attachment. Order is preserved on the wire.
    pub fn with_attachment(mut self, file: EmbeddedFile) -> Self {
        self.pdf_mut().embedded_files.push(file);
        self
    }

    /// Appends a barcode. Order is preserved on the wire.
    pub fn with_barcode(mut self, barcode: Barcode) -> Self {
        self.pdf_mut().barcodes.push(barcode);
        self
    }

    // --- serialization ---

    /// The wire document as a JSON value, for inspection.
    pub fn payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// The wire document as a compact JSON string.
    ///
    /// Output is byte-stable for a fixed sequence of setter calls: scalar
    /// keys follow declaration order and the repeated arrays follow
    /// insertion order.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_request_has_only_format_and_source() {
        let p = RenderRequest::html("<h1>Test</h1>").payload();
        let obj = p.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(p["format"], json!("pdf"));
        assert_eq!(p["html"], json!("<h1>Test</h1>"));
        assert!(!obj.contains_key("quantize"));
        assert!(!obj.contains_key("pdf"));
    }

    #[test]
    fn url_source_emits_url_key_only() {
        let p = RenderRequest::url("https://example.com").payload();
        let obj = p.as_object().unwrap();
        assert_eq!(p["url"], json!("https://example.com"));
        assert!(!obj.contains_key("html"));
    }

    #[test]
    fn scalar_options_use_wire_keys() {
        let p = RenderRequest::html("x")
            .with_format(OutputFormat::Png)
            .with_width(800)
            .with_height(600)
            .with_paper("a4")
            .with_orientation(Orientation::Landscape)
            .with_margins("1in")
            .with_flow(Flow::Paginate)
            .with_density(150.0)
            .with_background("#FFFFFF")
            .with_timeout(30)
            .payload();

        assert_eq!(p["format"], json!("png"));
        assert_eq!(p["width"], json!(800));
        assert_eq!(p["height"], json!(600));
        assert_eq!(p["paper"], json!("a4"));
        assert_eq!(p["orientation"], json!("landscape"));
        assert_eq!(p["margins"], json!("1in"));
        assert_eq!(p["flow"], json!("paginate"));
        assert_eq!(p["density"], json!(150.0));
        assert_eq!(p["background"], json!("#FFFFFF"));
        assert_eq!(p["timeout"], json!(30));
    }

    #[test]
    fn quantize_group_appears_with_single_field() {
        let p = RenderRequest::html("x").with_colors(16).payload();
        let q = p["quantize"].as_object().unwrap();
        assert_eq!(q.len(), 1);
        assert_eq!(q["colors"], json!(16));
    }

    #[test]
    fn preset_palette_serializes_as_string() {
        let p = RenderRequest::html("x").with_palette(Palette::Eink).payload();
        assert_eq!(p["quantize"]["palette"], json!("eink"));
    }

    #[test]
    fn custom_palette_serializes_as_ordered_array() {
        let p = RenderRequest::html("x")
            .with_custom_palette(vec!["#000000".into(), "#FF0000".into(), "#FFFFFF".into()])
            .payload();
        assert_eq!(
            p["quantize"]["palette"],
            json!(["#000000", "#FF0000", "#FFFFFF"])
        );
    }

    #[test]
    fn palette_slot_is_last_write_wins() {
        let p = RenderRequest::html("x")
            .with_palette(Palette::Grayscale)
            .with_custom_palette(vec!["#123456".into()])
            .payload();
        assert_eq!(p["quantize"]["palette"], json!(["#123456"]));

        let p = RenderRequest::html("x")
            .with_custom_palette(vec!["#123456".into()])
            .with_palette(Palette::Bw)
            .payload();
        assert_eq!(p["quantize"]["palette"], json!("bw"));
    }

    #[test]
    fn pdf_group_appears_with_single_metadata_field() {
        let p = RenderRequest::html("x").with_title("Invoice").payload();
        let pdf = p["pdf"].as_object().unwrap();
        assert_eq!(pdf.len(), 1);
        assert_eq!(pdf["title"], json!("Invoice"));
    }

    #[test]
    fn watermark_pages_alone_creates_watermark_object() {
        let p = RenderRequest::html("x").with_watermark_pages("2-4").payload();
        let wm = p["pdf"]["watermark"].as_object().unwrap();
        assert_eq!(wm.len(), 1);
        assert_eq!(wm["pages"], json!("2-4"));
    }

    #[test]
    fn watermark_text_and_pages() {
        let p = RenderRequest::html("x")
            .with_watermark_text("DRAFT")
            .with_watermark_pages("1,3-5")
            .payload();
        assert_eq!(p["pdf"]["watermark"]["text"], json!("DRAFT"));
        assert_eq!(p["pdf"]["watermark"]["pages"], json!("1,3-5"));
    }

    #[test]
    fn minimal_barcode_has_exactly_type_and_data() {
        let p = RenderRequest::html("<h1>Test</h1>")
            .with_barcode(Barcode::new(BarcodeType::Qr, "https://example.com"))
            .payload();

        let barcodes = p["pdf"]["barcodes"].as_array().unwrap();
        assert_eq!(barcodes.len(), 1);
        let bc = barcodes[0].as_object().unwrap();
        assert_eq!(bc.len(), 2);
        assert_eq!(bc["type"], json!("qr"));
        assert_eq!(bc["data"], json!("https://example.com"));
    }

    #[test]
    fn full_barcode_emits_every_wire_key() {
        let p = RenderRequest::html("x")
            .with_barcode(
                Barcode::new(BarcodeType::Code128, "ABC-123")
                    .with_position(10.0, 20.0)
                    .with_size(100.0, 50.0)
                    .with_anchor(BarcodeAnchor::BottomRight)
                    .with_foreground("#000000")
                    .with_background("#FFFFFF")
                    .with_draw_background(true)
                    .with_pages("1,3-5"),
            )
            .payload();

        let bc = &p["pdf"]["barcodes"][0];
        assert_eq!(bc["type"], json!("code128"));
        assert_eq!(bc["data"], json!("ABC-123"));
        assert_eq!(bc["x"], json!(10.0));
        assert_eq!(bc["y"], json!(20.0));
        assert_eq!(bc["width"], json!(100.0));
        assert_eq!(bc["height"], json!(50.0));
        assert_eq!(bc["anchor"], json!("bottom-right"));
        assert_eq!(bc["foreground"], json!("#000000"));
        assert_eq!(bc["background"], json!("#FFFFFF"));
        assert_eq!(bc["draw_background"], json!(true));
        assert_eq!(bc["pages"], json!("1,3-5"));
        assert!(bc["x"].is_f64());
        assert!(bc["draw_background"].is_boolean());
    }

    #[test]
    fn barcode_order_is_insertion_order() {
        let p = RenderRequest::html("x")
            .with_barcode(Barcode::new(BarcodeType::Qr, "data1"))
            .with_barcode(Barcode::new(BarcodeType::Ean13, "5901234123457"))
            .payload();

        let barcodes = p["pdf"]["barcodes"].as_array().unwrap();
        assert_eq!(barcodes.len(), 2);
        assert_eq!(barcodes[0]["type"], json!("qr"));
        assert_eq!(barcodes[1]["type"], json!("ean13"));
    }

    #[test]
    fn attachment_optionals_omitted_individually() {
        let p = RenderRequest::html("x")
            .with_attachment(EmbeddedFile::new("report.csv", "Zm9v"))
            .with_attachment(
                EmbeddedFile::new("source.xml", "YmFy")
                    .with_mime_type("application/xml")
                    .with_description("machine-readable source")
                    .with_relationship(EmbedRelationship::Source),
            )
            .payload();

        let files = p["pdf"]["embedded_files"].as_array().unwrap();
        assert_eq!(files.len(), 2);

        let bare = files[0].as_object().unwrap();
        assert_eq!(bare.len(), 2);
        assert_eq!(bare["path"], json!("report.csv"));
        assert_eq!(bare["data"], json!("Zm9v"));

        assert_eq!(files[1]["mime_type"], json!("application/xml"));
        assert_eq!(files[1]["description"], json!("machine-readable source"));
        assert_eq!(files[1]["relationship"], json!("source"));
    }

    #[test]
    fn barcode_with_metadata_shares_pdf_group() {
        let p = RenderRequest::html("x")
            .with_title("Invoice")
            .with_barcode(Barcode::new(BarcodeType::Code39, "INV-001"))
            .payload();

        assert_eq!(p["pdf"]["title"], json!("Invoice"));
        assert_eq!(p["pdf"]["barcodes"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn watermark_and_barcode_combined() {
        let p = RenderRequest::html("x")
            .with_watermark_text("CONFIDENTIAL")
            .with_watermark_pages("1")
            .with_barcode(Barcode::new(BarcodeType::Qr, "https://verify.example.com"))
            .payload();

        assert_eq!(p["pdf"]["watermark"]["text"], json!("CONFIDENTIAL"));
        assert_eq!(p["pdf"]["watermark"]["pages"], json!("1"));
        assert_eq!(p["pdf"]["barcodes"][0]["type"], json!("qr"));
    }

    #[test]
    fn serialization_is_deterministic_and_declaration_ordered() {
        let build = || {
            RenderRequest::html("<p>hi</p>")
                .with_width(640)
                .with_colors(4)
                .with_title("T")
                .with_barcode(Barcode::new(BarcodeType::Aztec, "a"))
        };
        let json = build().to_json();
        assert_eq!(json, build().to_json());
        assert!(json.starts_with(r#"{"format":"pdf","html":"<p>hi</p>","width":640"#));

        // Re-serializing the same instance is non-destructive.
        let request = build();
        assert_eq!(request.to_json(), request.to_json());
    }

    #[test]
    fn float_fields_keep_fractional_form() {
        let json = RenderRequest::html("x")
            .with_density(96.0)
            .with_watermark_opacity(0.5)
            .to_json();
        assert!(json.contains(r#""density":96.0"#));
        assert!(json.contains(r#""opacity":0.5"#));
    }

    #[test]
    fn integer_fields_stay_integers() {
        let json = RenderRequest::html("x").with_width(800).to_json();
        assert!(json.contains(r#""width":800"#));
        assert!(!json.contains(r#""width":800.0"#));
    }
}
