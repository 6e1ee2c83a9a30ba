//! Embed classification and render descriptor assembly.

use indexmap::IndexMap;

use crate::fields::LinkFields;
use crate::options::WikiLinkOptions;
use crate::resolve::ResolvedLink;

/// File extensions rendered as inline images when embedded.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "svg", "webp"];

const PDF_EXTENSION: &str = "pdf";

/// A renderable tag/attributes/children triple.
///
/// Fully determines the markup a later stage emits; the core never renders
/// markup text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDescriptor {
    pub tag_name: String,
    /// Attribute order is preserved as built.
    pub attributes: IndexMap<String, String>,
    pub children: Vec<RenderChild>,
}

/// One entry in a descriptor's child sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderChild {
    Text(String),
    Node(RenderDescriptor),
}

/// Lowercases a heading and collapses whitespace runs into single dashes.
///
/// Punctuation is deliberately left alone; only whitespace is rewritten.
pub fn slug(heading: &str) -> String {
    let mut out = String::with_capacity(heading.len());
    let mut in_whitespace = false;
    for ch in heading.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Extracts a lowercased file extension from the raw target, if it has one.
fn extension(target: &str) -> Option<String> {
    let (stem, ext) = target.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Builds the render descriptor for a resolved link.
///
/// The decision table is evaluated top to bottom, first match wins:
/// plain hyperlink, image embed, pdf embed, unsupported-embed passthrough,
/// page transclusion. Classification is a pure function of the embed flag
/// and the target's extension; the existence flag only influences class
/// attributes, never the tag choice.
pub fn build_descriptor(
    options: &WikiLinkOptions,
    fields: &LinkFields<'_>,
    resolved: &ResolvedLink,
    is_embed: bool,
    raw_source: &str,
) -> RenderDescriptor {
    if !is_embed {
        return hyperlink(options, fields, resolved, false);
    }
    match extension(fields.target) {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => image(fields, resolved),
        Some(ext) if ext == PDF_EXTENSION => pdf(resolved),
        // Unknown file format: degrade to the un-rendered source text.
        Some(_) => passthrough(raw_source),
        // Page-like target: a transclusion-styled link for a later stage to
        // inline; this core never fetches the target's content.
        None => hyperlink(options, fields, resolved, true),
    }
}

fn hyperlink(
    options: &WikiLinkOptions,
    fields: &LinkFields<'_>,
    resolved: &ResolvedLink,
    transclusion: bool,
) -> RenderDescriptor {
    let mut class = match &options.wiki_link_class_name {
        Some(name) => name.clone(),
        None => {
            let mut class = String::from("internal");
            if !resolved.exists {
                class.push(' ');
                class.push_str(options.new_class_name.as_deref().unwrap_or("new"));
            }
            class
        }
    };
    if transclusion {
        class.push_str(" transclusion");
    }

    let base = match &options.href_template {
        Some(template) => template(&resolved.permalink),
        None => resolved.permalink.clone(),
    };
    let href = match fields.heading {
        Some(heading) => format!("{base}#{}", slug(heading)),
        None => base,
    };

    let mut attributes = IndexMap::new();
    attributes.insert("class".to_string(), class);
    attributes.insert("href".to_string(), href);
    RenderDescriptor {
        tag_name: "a".to_string(),
        attributes,
        children: vec![RenderChild::Text(display_text(fields))],
    }
}

fn image(fields: &LinkFields<'_>, resolved: &ResolvedLink) -> RenderDescriptor {
    let mut attributes = IndexMap::new();
    attributes.insert("src".to_string(), resolved.permalink.clone());
    attributes.insert(
        "alt".to_string(),
        fields.alias.unwrap_or(fields.target).to_string(),
    );
    RenderDescriptor {
        tag_name: "img".to_string(),
        attributes,
        children: Vec::new(),
    }
}

fn pdf(resolved: &ResolvedLink) -> RenderDescriptor {
    let mut attributes = IndexMap::new();
    attributes.insert(
        "src".to_string(),
        format!("{}#toolbar=0", resolved.permalink),
    );
    RenderDescriptor {
        tag_name: "iframe".to_string(),
        attributes,
        children: Vec::new(),
    }
}

fn passthrough(raw_source: &str) -> RenderDescriptor {
    RenderDescriptor {
        tag_name: "p".to_string(),
        attributes: IndexMap::new(),
        children: vec![RenderChild::Text(raw_source.to_string())],
    }
}

/// Display text: the alias when given, otherwise the reference as written
/// (heading-qualified target, bare heading for same-page links, or target).
fn display_text(fields: &LinkFields<'_>) -> String {
    if let Some(alias) = fields.alias {
        return alias.to_string();
    }
    match fields.heading {
        Some(heading) if fields.target.is_empty() => heading.to_string(),
        Some(heading) => format!("{}#{}", fields.target, heading),
        None => fields.target.to_string(),
    }
}
