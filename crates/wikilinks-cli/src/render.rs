//! HTML serialisation of render descriptors.

use html_escape::{encode_double_quoted_attribute, encode_text};
use wikilinks_engine::{RenderChild, RenderDescriptor};

/// Elements with no closing tag.
const VOID_ELEMENTS: &[&str] = &["img"];

pub fn to_html(descriptor: &RenderDescriptor) -> String {
    let mut out = String::new();
    write_descriptor(descriptor, &mut out);
    out
}

fn write_descriptor(descriptor: &RenderDescriptor, out: &mut String) {
    out.push('<');
    out.push_str(&descriptor.tag_name);
    for (name, value) in &descriptor.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&encode_double_quoted_attribute(value));
        out.push('"');
    }

    if VOID_ELEMENTS.contains(&descriptor.tag_name.as_str()) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &descriptor.children {
        match child {
            RenderChild::Text(text) => out.push_str(&encode_text(text)),
            RenderChild::Node(node) => write_descriptor(node, out),
        }
    }
    out.push_str("</");
    out.push_str(&descriptor.tag_name);
    out.push('>');
}
