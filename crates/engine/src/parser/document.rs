use lopdf::{Document, ObjectId};

use super::ParseError;

/// Source formats the parser can open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    /// UTF-8 text, pages separated by form feed.
    PlainText,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::PlainText => "text",
        }
    }
}

/// An opened document that yields page text on demand.
///
/// Opening can fail (the document is unreadable); reading one page can fail
/// independently without affecting the others.
pub trait PageSource {
    fn kind(&self) -> DocumentKind;

    fn page_count(&self) -> u32;

    /// Text of the page at 0-based `index`, or the reason it could not be read.
    fn page_text(&self, index: u32) -> Result<String, String>;
}

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Detect the format from magic bytes and open the document.
///
/// A PDF header at the start wins. Otherwise valid UTF-8 is text, even when
/// it mentions `%PDF-`. Binary input is still opened as PDF when the header
/// shows up within the first 1024 bytes.
pub fn open(bytes: &[u8]) -> Result<Box<dyn PageSource>, ParseError> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(ParseError::Empty);
    }

    if starts_with_pdf_header(bytes) {
        return Ok(Box::new(PdfSource::load(bytes)?));
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(Box::new(TextSource::new(text)));
    }

    if has_prefixed_pdf_header(bytes) {
        return Ok(Box::new(PdfSource::load(bytes)?));
    }

    Err(ParseError::UnsupportedFormat)
}

fn starts_with_pdf_header(bytes: &[u8]) -> bool {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    bytes[start..].starts_with(PDF_MAGIC)
}

fn has_prefixed_pdf_header(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    head.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}

/// PDF backed by lopdf.
pub struct PdfSource {
    doc: Document,
    /// lopdf page numbers and page object ids, in document order.
    pages: Vec<(u32, ObjectId)>,
}

impl PdfSource {
    pub fn load(bytes: &[u8]) -> Result<Self, ParseError> {
        let doc = Document::load_mem(bytes).map_err(|e| ParseError::Pdf(e.to_string()))?;
        let pages = doc.get_pages().into_iter().collect();
        Ok(Self { doc, pages })
    }
}

impl PageSource for PdfSource {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, index: u32) -> Result<String, String> {
        let &(page_number, page_id) = self
            .pages
            .get(index as usize)
            .ok_or_else(|| format!("page {} out of range", index + 1))?;

        // lopdf skips content streams it cannot resolve and returns no text for them.
        for (num, generation) in self.doc.get_page_contents(page_id) {
            self.doc
                .get_object((num, generation))
                .map_err(|e| format!("content stream {num} {generation} R unreadable: {e}"))?;
        }

        self.doc
            .extract_text(&[page_number])
            .map_err(|e| e.to_string())
    }
}

/// Plain text split into pages on form feed characters.
pub struct TextSource {
    pages: Vec<String>,
}

impl TextSource {
    pub fn new(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut pages: Vec<String> = text.split('\x0c').map(String::from).collect();

        // A trailing form feed terminates the last page rather than starting a new one.
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }

        Self { pages }
    }
}

impl PageSource for TextSource {
    fn kind(&self) -> DocumentKind {
        DocumentKind::PlainText
    }

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, index: u32) -> Result<String, String> {
        self.pages
            .get(index as usize)
            .cloned()
            .ok_or_else(|| format!("page {} out of range", index + 1))
    }
}
