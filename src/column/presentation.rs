//! Icon and label resolution for column items.

use serde::Serialize;

use crate::config::Config;
use crate::vault::{ends_with_ignore_ascii_case, normalize_path, DocumentEntry, Entry, Vault};

/// Compound extension of drawing documents.
pub const DRAWING_SUFFIX: &str = ".excalidraw.md";

/// Built-in icon chosen from the entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Folder,
    Document,
    Canvas,
    Image,
    Pdf,
    Code,
    Css,
    Json,
    Pencil,
}

impl Glyph {
    /// Icon-set name understood by the host.
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Folder => "folder",
            Glyph::Document => "document",
            Glyph::Canvas => "lucide-layout-dashboard",
            Glyph::Image => "image-file",
            Glyph::Pdf => "pdf-file",
            Glyph::Code => "code-glyph",
            Glyph::Css => "css3",
            Glyph::Json => "braces",
            Glyph::Pencil => "lucide-pencil",
        }
    }

    /// Single-character rendition for text output.
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Folder => "📁",
            Glyph::Document => "📄",
            Glyph::Canvas => "🧩",
            Glyph::Image => "🖼",
            Glyph::Pdf => "📕",
            Glyph::Code => "📜",
            Glyph::Css => "🎨",
            Glyph::Json => "🔣",
            Glyph::Pencil => "✏",
        }
    }
}

/// What an item shows in front of its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Icon {
    /// User-supplied image, already resolved to a loadable reference
    Custom { src: String, alt: String },
    Emoji { text: String },
    Glyph { glyph: Glyph },
}

/// Default glyph for a document. Drawings win over the simple extension.
pub fn document_glyph(document: &DocumentEntry) -> Glyph {
    if ends_with_ignore_ascii_case(&document.name, DRAWING_SUFFIX) {
        return Glyph::Pencil;
    }

    match document.extension.to_lowercase().as_str() {
        "md" => Glyph::Document,
        "canvas" => Glyph::Canvas,
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" => Glyph::Image,
        "pdf" => Glyph::Pdf,
        "js" | "ts" => Glyph::Code,
        "css" => Glyph::Css,
        "json" => Glyph::Json,
        _ => Glyph::Document,
    }
}

pub fn default_glyph(entry: &Entry) -> Glyph {
    match entry {
        Entry::Folder(_) => Glyph::Folder,
        Entry::Document(d) => document_glyph(d),
    }
}

/// Resolve an entry's icon: custom image, then emoji, then the kind default.
///
/// A custom image that cannot be resolved falls back to the kind default,
/// not to the emoji.
pub fn resolve_icon<V: Vault + ?Sized>(entry: &Entry, vault: &V, config: &Config) -> Icon {
    let path = entry.path();

    if let Some(filename) = config.icons.get(path) {
        let icon_path = normalize_path(&format!("{}/{}", config.columns.icon_dir, filename));
        let src = vault.resource_url(&icon_path);
        if !src.is_empty() && src != icon_path {
            return Icon::Custom {
                src,
                alt: entry.name().to_string(),
            };
        }
        tracing::warn!(%path, icon = %icon_path, "Could not resolve custom icon, falling back");
    } else if let Some(emoji) = config.emoji.get(path) {
        return Icon::Emoji {
            text: emoji.clone(),
        };
    }

    Icon::Glyph {
        glyph: default_glyph(entry),
    }
}

/// Text shown for an entry. Folders show their name; markdown documents
/// prefer their first heading, drawings drop the compound extension, and
/// everything else shows the base name.
pub fn display_label<V: Vault + ?Sized>(entry: &Entry, vault: &V) -> String {
    let document = match entry {
        Entry::Folder(f) => return f.name.clone(),
        Entry::Document(d) => d,
    };

    if !document.extension.eq_ignore_ascii_case("md") {
        return document.basename.clone();
    }

    if let Some(heading) = vault.first_heading(document).filter(|h| !h.is_empty()) {
        return heading;
    }

    if ends_with_ignore_ascii_case(&document.name, DRAWING_SUFFIX) {
        return document.name[..document.name.len() - DRAWING_SUFFIX.len()].to_string();
    }

    document.basename.clone()
}
