use crate::error::DocumentError;
use crate::models::Card;
use crate::parser::parse_cards;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

const DOCX_BODY: &str = "word/document.xml";

fn is_docx(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
}

/// Read the document as paragraphs: `.docx` through its XML body, anything else as text lines.
pub fn load_paragraphs(path: &Path) -> Result<Vec<String>, DocumentError> {
    if is_docx(path) {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;
        let mut xml = String::new();
        archive.by_name(DOCX_BODY)?.read_to_string(&mut xml)?;
        docx_paragraphs(&xml)
    } else {
        let content = fs::read_to_string(path)?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

pub fn load_flashcards(path: &Path) -> Result<Vec<Card>, DocumentError> {
    let paragraphs = load_paragraphs(path)?;
    Ok(parse_cards(paragraphs))
}

/// Elements whose content belongs to a drawing or text box, not to the enclosing paragraph.
const EMBEDDED_CONTENT: [&[u8]; 4] = [
    b"w:drawing",
    b"w:pict",
    b"w:txbxContent",
    b"mc:AlternateContent",
];

/// Collect the text of every body-level `<w:p>`, joining its runs.
pub fn docx_paragraphs(xml: &str) -> Result<Vec<String>, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_run = false;
    let mut in_text = false;
    // open elements inside a drawing or text box
    let mut embedded_depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) if embedded_depth > 0 => embedded_depth += 1,
            Event::End(_) if embedded_depth > 0 => embedded_depth -= 1,
            Event::Start(ref e) => match e.name().as_ref() {
                b"w:p" => current.clear(),
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                name if EMBEDDED_CONTENT.contains(&name) => embedded_depth = 1,
                _ => {}
            },
            Event::End(ref e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(_) if embedded_depth > 0 => {}
            Event::Empty(ref e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                // tab stops in paragraph properties share the name, only runs count
                b"w:tab" if in_run => current.push('\t'),
                b"w:br" | b"w:cr" if in_run => current.push('\n'),
                _ => {}
            },
            Event::Text(ref e) if in_text && embedded_depth == 0 => {
                current.push_str(&e.unescape()?)
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
