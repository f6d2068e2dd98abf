use crate::core::api::MediaApi;
use crate::core::files::format_file_size;
use crate::core::models::{HealthStatus, MediaFile, MediaKind, PhotoCategory};
use crate::core::pages::Page;
use std::fmt::Write;

/// Plain-text rendering of pages and listings for the CLI.
pub fn render_page<A: MediaApi>(api: &A, page: &Page) -> String {
    match page {
        Page::Home { health, categories } => {
            let mut out = render_health(health);
            out.push('\n');
            out.push_str(&render_categories(api, categories));
            out
        }
        Page::Images { categories } => render_categories(api, categories),
        Page::ImagesCategory { category, photos } => {
            let mut out = format!("── Category: {category} ──\n");
            out.push_str(&render_files(api, photos));
            out
        }
        Page::Videos { videos } => {
            let mut out = String::from("── Videos ──\n");
            out.push_str(&render_files(api, videos));
            out
        }
    }
}

pub fn render_health(health: &HealthStatus) -> String {
    format!(
        "Server: {} — {} ({})\n",
        health.status, health.message, health.timestamp
    )
}

pub fn render_categories<A: MediaApi>(api: &A, categories: &[PhotoCategory]) -> String {
    if categories.is_empty() {
        return "No categories.\n".into();
    }

    let mut out = String::new();
    for (idx, c) in categories.iter().enumerate() {
        let _ = write!(
            out,
            "  {}. {} / {} [{}] — {} photo(s)",
            idx + 1,
            c.name,
            c.english_name,
            c.id,
            c.photo_count
        );
        if let Some(cover) = &c.cover_image {
            let _ = write!(out, " · cover: {}", api.get_media_url(&cover.url));
        }
        out.push('\n');
    }
    out
}

pub fn render_files<A: MediaApi>(api: &A, files: &[MediaFile]) -> String {
    if files.is_empty() {
        return "No files.\n".into();
    }

    let mut out = String::new();
    for (idx, f) in files.iter().enumerate() {
        let category = f
            .category_name
            .as_deref()
            .or(f.category.as_deref())
            .map(|c| format!(" ({c})"))
            .unwrap_or_default();

        // Server type wins; only flag a known extension that disagrees
        let mismatch = MediaKind::from_filename(&f.name)
            .filter(|by_ext| *by_ext != f.kind)
            .map(|by_ext| format!(" [extension suggests {}]", by_ext.label()))
            .unwrap_or_default();

        let _ = writeln!(
            out,
            "  {}. [{}] {}{}{} — {} — {}",
            idx + 1,
            f.kind.label(),
            f.name,
            category,
            mismatch,
            format_file_size(f.size),
            api.get_media_url(&f.url)
        );
    }
    out
}
