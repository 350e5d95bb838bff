//! PDF renderer — flows the same title/section structure onto A4 pages.
//!
//! Mirrors the docx renderer's visual contract: bold 18pt title, bold 14pt
//! headings with a 12pt spacer before, 11pt body paragraphs with 6pt after.
//! Long body lines are word-wrapped from an average-character-width estimate;
//! the flow breaks onto a new page when the frame bottom is reached.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::document::{
    RenderError, Section, BODY_SIZE_PT, HEADING_SIZE_PT, PARAGRAPH_SPACE_PT, SECTION_SPACE_PT,
    TITLE_SIZE_PT,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
/// Frame margin on all sides (1"), matching the default document frame.
const MARGIN_MM: f32 = 25.4;
const LAYER_NAME: &str = "Layer 1";

const PT_TO_MM: f32 = 0.352_778;
/// Baseline-to-baseline distance as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.3;
/// Average glyph width in em units. Helvetica body text averages close to
/// half an em; a static approximation is enough for wrapping since the frame
/// leaves slack on both sides.
const AVG_CHAR_WIDTH_EM: f32 = 0.5;

/// Renders the document as a complete PDF byte stream.
pub fn render_pdf(title: &str, sections: &[Section]) -> Result<Vec<u8>, RenderError> {
    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
    let regular = builtin_font(&doc, BuiltinFont::Helvetica)?;
    let bold = builtin_font(&doc, BuiltinFont::HelveticaBold)?;

    let mut flow = Flow {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    flow.text_line(title, TITLE_SIZE_PT as f32, &bold);
    flow.spacer(BODY_SIZE_PT as f32 * LINE_HEIGHT_FACTOR);

    for section in sections {
        if let Some(heading) = &section.heading {
            flow.spacer(SECTION_SPACE_PT as f32);
            flow.text_line(heading, HEADING_SIZE_PT as f32, &bold);
        }
        for line in section.body.lines() {
            let line = line.trim_end();
            if line.trim().is_empty() {
                flow.spacer(PARAGRAPH_SPACE_PT as f32);
                continue;
            }
            for wrapped in wrap_line(line, max_chars_per_line(BODY_SIZE_PT as f32)) {
                flow.text_line(&wrapped, BODY_SIZE_PT as f32, &regular);
            }
            flow.spacer(PARAGRAPH_SPACE_PT as f32);
        }
    }

    doc.save_to_bytes().map_err(|e| RenderError::Pdf(e.to_string()))
}

fn builtin_font(
    doc: &PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, RenderError> {
    doc.add_builtin_font(font).map_err(|e| RenderError::Pdf(e.to_string()))
}

/// Write cursor over the current page. Tracks the baseline position and opens
/// a fresh page when the next line would cross the bottom margin.
struct Flow<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y_mm: f32,
}

impl Flow<'_> {
    fn text_line(&mut self, text: &str, size_pt: f32, font: &IndirectFontRef) {
        let line_mm = size_pt * LINE_HEIGHT_FACTOR * PT_TO_MM;
        if self.y_mm - line_mm < MARGIN_MM {
            self.break_page();
        }
        self.y_mm -= line_mm;
        self.layer.use_text(text, size_pt, Mm(MARGIN_MM), Mm(self.y_mm), font);
    }

    /// Vertical whitespace. May leave the cursor below the margin; the next
    /// text line triggers the page break.
    fn spacer(&mut self, pt: f32) {
        self.y_mm -= pt * PT_TO_MM;
    }

    fn break_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
    }
}

/// How many average-width characters fit on one line inside the frame.
fn max_chars_per_line(size_pt: f32) -> usize {
    let usable_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    let char_mm = size_pt * PT_TO_MM * AVG_CHAR_WIDTH_EM;
    (usable_mm / char_mm).floor() as usize
}

/// Greedy word wrap. A single word longer than the limit gets its own line
/// rather than being split mid-word.
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };
        if !current.is_empty() && needed > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
