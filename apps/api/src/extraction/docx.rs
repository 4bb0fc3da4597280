//! DOCX text: the `w:t` runs of `word/document.xml`, one paragraph per blank-line block.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";
const PARAGRAPH_BREAK: &str = "\n\n";

fn docx_err(e: impl std::fmt::Display) -> ExtractError {
    ExtractError::Docx(e.to_string())
}

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(docx_err)?;
    let mut part = archive.by_name(DOCUMENT_PART).map_err(docx_err)?;
    let mut xml = String::new();
    part.read_to_string(&mut xml).map_err(docx_err)?;
    document_text(&xml)
}

fn document_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run = false;

    loop {
        match reader.read_event().map_err(docx_err)? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run = false,
                b"w:p" => text.push_str(PARAGRAPH_BREAK),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run => text.push_str(&t.unescape().map_err(docx_err)?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

/// Minimal single-part .docx with one `w:p` per paragraph. Paragraphs must be XML-escaped.
#[cfg(test)]
pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let body: String = paragraphs
        .iter()
        .map(|p| format!(r#"<w:p><w:r><w:t xml:space="preserve">{p}</w:t></w:r></w:p>"#))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(DOCUMENT_PART, SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_are_separated() {
        let bytes = build_docx(&["Work Experience", "Acme, 5 years"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Work Experience\n\nAcme, 5 years\n\n");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let bytes = build_docx(&["R&amp;D lead &lt;platform&gt;"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text.trim(), "R&D lead <platform>");
    }

    #[test]
    fn test_tabs_breaks_and_split_runs() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Skills:</w:t><w:tab/><w:t>Rust</w:t><w:br/></w:r><w:r><w:t>, SQL</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(document_text(xml).unwrap(), "Skills:\tRust\n, SQL\n\n");
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let xml = r#"<w:document><w:body><w:p><w:pPr>Heading1</w:pPr><w:r><w:t>Summary</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(document_text(xml).unwrap(), "Summary\n\n");
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        let err = extract_docx_text(b"plain text, not a zip").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }

    #[test]
    fn test_zip_without_document_part_is_an_error() {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_docx_text(&bytes).unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }
}
