use crate::core::DocumentExporter;
use crate::domain::story::StoryDocument;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    title: &'a str,
    pages: Vec<String>,
    illustrations: usize,
    generated_at: String,
}

/// Writes a storybook as a ZIP bundle with one entry per page.
#[derive(Debug, Clone, Default)]
pub struct ZipDocumentExporter;

impl ZipDocumentExporter {
    pub fn new() -> Self {
        Self
    }
}

fn page_name(number: usize, extension: &str) -> String {
    format!("page-{:02}.{}", number, extension)
}

impl DocumentExporter for ZipDocumentExporter {
    fn export(&self, document: &StoryDocument) -> Result<Vec<u8>> {
        let mut pages = Vec::new();
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        // 第一頁: 標題與故事內容
        let first = page_name(1, "txt");
        zip.start_file::<_, ()>(first.as_str(), FileOptions::default())?;
        zip.write_all(format!("{}\n\n{}\n", document.title, document.body).as_bytes())?;
        pages.push(first);

        // 每張插圖各佔一頁
        for (idx, illustration) in document.illustrations.iter().enumerate() {
            let number = idx + 2;

            let text_page = page_name(number, "txt");
            zip.start_file::<_, ()>(text_page.as_str(), FileOptions::default())?;
            zip.write_all(
                format!("Scene {}\n\n{}\n", idx + 1, illustration.scene_text).as_bytes(),
            )?;
            pages.push(text_page);

            let image_page = page_name(number, "svg");
            zip.start_file::<_, ()>(image_page.as_str(), FileOptions::default())?;
            zip.write_all(illustration.svg.as_bytes())?;
        }

        let manifest = Manifest {
            title: &document.title,
            pages,
            illustrations: document.illustrations.len(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        };
        zip.start_file::<_, ()>("manifest.json", FileOptions::default())?;
        zip.write_all(serde_json::to_string_pretty(&manifest)?.as_bytes())?;

        let cursor = zip.finish()?;
        let data = cursor.into_inner();
        tracing::debug!(
            "Exported '{}' as {} bytes ({} illustrations)",
            document.title,
            data.len(),
            document.illustrations.len()
        );
        Ok(data)
    }
}
