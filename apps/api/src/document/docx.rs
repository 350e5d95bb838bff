//! Word-processing renderer — turns a title and section list into docx bytes.
//!
//! Layout contract: bold 18pt title, one blank line, then per section a bold
//! 14pt heading (12pt space before) and one paragraph per non-empty body line
//! with 6pt after. 0.8" page margins on all four sides. Blank body lines
//! become empty paragraphs so paragraph breaks stay visible.

use std::io::Cursor;

use docx_rs::{Docx, LineSpacing, PageMargin, Paragraph, Run};

use crate::document::{
    RenderError, Section, BODY_SIZE_PT, HEADING_SIZE_PT, PARAGRAPH_SPACE_PT, SECTION_SPACE_PT,
    TITLE_SIZE_PT,
};

/// Page margin on all four sides, in twips (0.8" × 1440 twips/inch).
const MARGIN_TWIPS: i32 = (0.8 * 1440.0) as i32;

/// Twips per point. Word spacing values are twentieths of a point.
const TWIPS_PER_PT: u32 = 20;

/// Renders the document as a complete .docx byte stream.
pub fn render_docx(title: &str, sections: &[Section]) -> Result<Vec<u8>, RenderError> {
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(MARGIN_TWIPS)
                .bottom(MARGIN_TWIPS)
                .left(MARGIN_TWIPS)
                .right(MARGIN_TWIPS),
        )
        .add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(title).bold().size(half_points(TITLE_SIZE_PT))),
        )
        .add_paragraph(Paragraph::new());

    for section in sections {
        if let Some(heading) = &section.heading {
            docx = docx.add_paragraph(heading_paragraph(heading));
        }
        for line in section.body.lines() {
            let line = line.trim_end();
            if line.trim().is_empty() {
                docx = docx.add_paragraph(Paragraph::new());
            } else {
                docx = docx.add_paragraph(body_paragraph(line));
            }
        }
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| RenderError::Docx(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn heading_paragraph(heading: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(heading).bold().size(half_points(HEADING_SIZE_PT)))
        .line_spacing(
            LineSpacing::new()
                .before(SECTION_SPACE_PT * TWIPS_PER_PT)
                .after(PARAGRAPH_SPACE_PT * TWIPS_PER_PT),
        )
}

fn body_paragraph(line: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(line).size(half_points(BODY_SIZE_PT)))
        .line_spacing(LineSpacing::new().after(PARAGRAPH_SPACE_PT * TWIPS_PER_PT))
}

/// Word run sizes are half-points.
fn half_points(pt: u32) -> usize {
    (pt * 2) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: Option<&str>, body: &str) -> Section {
        Section {
            heading: heading.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_render_docx_produces_zip_container() {
        let sections = vec![
            section(None, "John Doe"),
            section(Some("Summary"), "Experienced engineer."),
        ];
        let bytes = render_docx("Senior Backend Engineer", &sections).unwrap();
        // docx is a ZIP package; the stream must start with the PK magic.
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_render_docx_accepts_empty_section_list() {
        let bytes = render_docx("Updated CV", &[]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_render_docx_accepts_empty_bodies_and_duplicates() {
        let sections = vec![
            section(Some("Education"), ""),
            section(Some("Education"), "BSc"),
        ];
        let bytes = render_docx("Updated CV", &sections).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_render_docx_accepts_unicode_body() {
        let sections = vec![section(Some("Summary"), "Ingénieur logiciel — Zürich, 简历")];
        let bytes = render_docx("Développeur Sénior", &sections).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_margin_is_0_8_inch_in_twips() {
        assert_eq!(MARGIN_TWIPS, 1152);
    }
}
