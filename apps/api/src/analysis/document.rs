//! Uploaded-document → plain text. Runs before the engine; the engine itself only ever
//! sees (possibly empty) strings.

use tokio::task::JoinError;
use tracing::{info, warn};

use crate::errors::AppError;

/// How an uploaded part is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Classifies by content type first, then by file extension. Parts with neither
    /// (plain form fields) are treated as text.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Result<Self, AppError> {
        let content_type = content_type.map(|ct| {
            ct.split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        });
        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match (content_type.as_deref(), extension.as_deref()) {
            (Some("application/pdf"), _) | (_, Some("pdf")) => Ok(Self::Pdf),
            (Some(ct), _) if ct.starts_with("text/") => Ok(Self::PlainText),
            (_, Some("txt" | "text" | "md")) => Ok(Self::PlainText),
            (None | Some("application/octet-stream"), None) => Ok(Self::PlainText),
            (ct, ext) => Err(AppError::UnsupportedDocument(format!(
                "Cannot read document (content type: {}, extension: {})",
                ct.unwrap_or("none"),
                ext.unwrap_or("none")
            ))),
        }
    }
}

/// Extracts the text of one uploaded document.
///
/// A PDF that parses but yields no text has no text layer (scanned or image-only) and
/// is rejected with `NoTextLayer` rather than passed on as an empty document.
pub async fn extract_document_text(
    kind: DocumentKind,
    bytes: Vec<u8>,
) -> Result<String, AppError> {
    match kind {
        DocumentKind::PlainText => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        DocumentKind::Pdf => {
            let size = bytes.len();
            let text = tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem(&bytes)
            })
            .await
            .map_err(join_failure)?
            .map_err(|e| AppError::DocumentExtraction(format!("PDF could not be parsed: {e:?}")))?;

            if text.trim().is_empty() {
                return Err(AppError::NoTextLayer);
            }
            info!("Extracted {} chars from {size}-byte PDF", text.len());
            Ok(text)
        }
    }
}

/// A panic inside the PDF parser means the document is malformed; any other join
/// failure (runtime shutdown, cancellation) is ours.
fn join_failure(err: JoinError) -> AppError {
    if err.is_panic() {
        warn!("PDF parser panicked: {err}");
        AppError::DocumentExtraction("PDF could not be parsed".to_string())
    } else {
        AppError::Internal(anyhow::Error::new(err).context("PDF extraction task failed"))
    }
}

/// In-memory PDF documents for tests.
#[cfg(test)]
pub(crate) mod fixtures {
    /// A single-page PDF whose page draws `content` with Helvetica as `/F1`.
    pub fn single_page_pdf(content: &str) -> Vec<u8> {
        let stream = format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        );
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            stream,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_offset = pdf.len();
        let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            tail.push_str(&format!("{offset:010} 00000 n \n"));
        }
        tail.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.extend_from_slice(tail.as_bytes());
        pdf
    }

    /// A page with an empty content stream: what a scan without OCR looks like to a
    /// text extractor.
    pub fn blank_page_pdf() -> Vec<u8> {
        single_page_pdf("")
    }
}
