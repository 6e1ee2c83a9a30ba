//! Full-pipeline tests: scan, split, normalize, resolve and build in one
//! pass through [`WikiLinkParser::parse_all`].

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::node::{WikiLinkNode, WikiLinkParser};
use crate::options::{PathFormat, WikiLinkOptions};
use crate::render::RenderChild;

fn parse_one(options: WikiLinkOptions, text: &str) -> WikiLinkNode {
    let nodes = WikiLinkParser::new(options).parse_all(text);
    assert_eq!(nodes.len(), 1, "expected exactly one link in {text:?}");
    nodes.into_iter().next().unwrap()
}

fn child_text(node: &WikiLinkNode) -> &str {
    match &node.html.children[0] {
        RenderChild::Text(text) => text,
        RenderChild::Node(_) => panic!("expected a text child"),
    }
}

#[test]
fn raw_format_without_matching_permalink() {
    let node = parse_one(WikiLinkOptions::default(), "[[Wiki Link]]");
    assert!(!node.exists);
    assert_eq!(node.permalink, "Wiki Link");
    assert_eq!(node.alias, None);
    assert_eq!(node.html.tag_name, "a");
    assert_eq!(node.html.attributes["class"], "internal new");
    assert_eq!(node.html.attributes["href"], "Wiki Link");
    assert_eq!(child_text(&node), "Wiki Link");
}

#[test]
fn raw_format_with_matching_permalink() {
    let options = WikiLinkOptions::new().permalinks(["Wiki Link"]);
    let node = parse_one(options, "[[Wiki Link]]");
    assert!(node.exists);
    assert_eq!(node.permalink, "Wiki Link");
    assert_eq!(node.html.attributes["class"], "internal");
}

#[test]
fn obsidian_short_without_matching_permalink() {
    let options = WikiLinkOptions::new().path_format(PathFormat::ObsidianShort);
    let node = parse_one(options, "[[Wiki Link]]");
    assert!(!node.exists);
    assert_eq!(node.permalink, "Wiki Link");
    assert_eq!(node.html.attributes["class"], "internal new");
}

#[test]
fn obsidian_short_matches_any_folder_depth() {
    let options = WikiLinkOptions::new()
        .permalinks(["/some/folder/Wiki Link"])
        .path_format(PathFormat::ObsidianShort);
    let node = parse_one(options, "[[Wiki Link]]");
    assert!(node.exists);
    assert_eq!(node.permalink, "/some/folder/Wiki Link");
    assert_eq!(node.html.attributes["href"], "/some/folder/Wiki Link");
    // Display stays the shortened name as written.
    assert_eq!(child_text(&node), "Wiki Link");
}

#[test]
fn obsidian_absolute_without_matching_permalink() {
    let options = WikiLinkOptions::new().path_format(PathFormat::ObsidianAbsolute);
    let node = parse_one(options, "[[some/folder/Wiki Link]]");
    assert!(!node.exists);
    assert_eq!(node.permalink, "/some/folder/Wiki Link");
    assert_eq!(node.html.attributes["href"], "/some/folder/Wiki Link");
    assert_eq!(child_text(&node), "some/folder/Wiki Link");
}

#[test]
fn obsidian_absolute_with_matching_permalink() {
    let options = WikiLinkOptions::new()
        .permalinks(["/some/folder/Wiki Link"])
        .path_format(PathFormat::ObsidianAbsolute);
    let node = parse_one(options, "[[some/folder/Wiki Link]]");
    assert!(node.exists);
    assert_eq!(node.permalink, "/some/folder/Wiki Link");
    assert_eq!(node.html.attributes["class"], "internal");
}

#[test]
fn heading_link() {
    let node = parse_one(WikiLinkOptions::default(), "[[Wiki Link#Some Heading]]");
    assert!(!node.exists);
    assert_eq!(node.permalink, "Wiki Link");
    assert_eq!(node.heading.as_deref(), Some("Some Heading"));
    assert_eq!(node.html.attributes["href"], "Wiki Link#some-heading");
    assert_eq!(child_text(&node), "Wiki Link#Some Heading");
}

#[test]
fn heading_and_alias() {
    let node = parse_one(
        WikiLinkOptions::default(),
        "[[Wiki Link#Some Heading|Alias]]",
    );
    assert_eq!(node.permalink, "Wiki Link");
    assert_eq!(node.alias.as_deref(), Some("Alias"));
    assert_eq!(node.html.attributes["href"], "Wiki Link#some-heading");
    assert_eq!(child_text(&node), "Alias");
}

#[test]
fn same_page_heading_link() {
    let node = parse_one(WikiLinkOptions::default(), "[[#Some Heading]]");
    assert!(!node.exists);
    // Empty-string permalink, kept for compatibility with existing
    // renderers; arguably this should be an absent permalink instead.
    assert_eq!(node.permalink, "");
    assert_eq!(node.html.attributes["href"], "#some-heading");
    assert_eq!(child_text(&node), "Some Heading");
}

#[rstest]
#[case(PathFormat::Raw)]
#[case(PathFormat::ObsidianShort)]
#[case(PathFormat::ObsidianAbsolute)]
fn same_page_heading_link_in_every_path_format(#[case] format: PathFormat) {
    let options = WikiLinkOptions::new().path_format(format);
    let node = parse_one(options, "[[#Some Heading]]");
    assert_eq!(node.permalink, "");
    assert_eq!(node.html.attributes["href"], "#some-heading");
    assert_eq!(child_text(&node), "Some Heading");
}

#[rstest]
#[case("[[link|Alias with àcèôíã]]", "link", "Alias with àcèôíã")]
#[case("[[link|Alias-with-dashes]]", "link", "Alias-with-dashes")]
fn alias_text_is_verbatim(#[case] text: &str, #[case] permalink: &str, #[case] alias: &str) {
    let node = parse_one(WikiLinkOptions::default(), text);
    assert_eq!(node.permalink, permalink);
    assert_eq!(node.alias.as_deref(), Some(alias));
    assert_eq!(node.html.attributes["href"], permalink);
    assert_eq!(child_text(&node), alias);
}

#[rstest]
#[case("[[link with àcèôíã]]", "link with àcèôíã")]
#[case("[[link-with-dashes]]", "link-with-dashes")]
#[case("[[link_with_underscores]]", "link_with_underscores")]
#[case("[[(link wi(th) (p)arenthesis)]]", "(link wi(th) (p)arenthesis)")]
fn special_characters_pass_through(#[case] text: &str, #[case] permalink: &str) {
    let node = parse_one(WikiLinkOptions::default(), text);
    assert!(!node.exists);
    assert_eq!(node.permalink, permalink);
    assert_eq!(node.html.attributes["href"], permalink);
    assert_eq!(child_text(&node), permalink);
}

#[test]
fn symbols_with_heading_divider() {
    let node = parse_one(WikiLinkOptions::default(), r"[[my file !:ª%@'*º$#°~./\]]");
    assert_eq!(node.permalink, r"my file !:ª%@'*º$");
    assert_eq!(node.html.attributes["href"], r"my file !:ª%@'*º$#°~./\");
    assert_eq!(child_text(&node), r"my file !:ª%@'*º$#°~./\");
}

#[test]
fn image_embed() {
    let node = parse_one(WikiLinkOptions::default(), "![[My Image.png]]");
    assert!(node.is_embed);
    assert_eq!(node.target, "My Image.png");
    assert_eq!(node.permalink, "My Image.png");
    assert_eq!(node.html.tag_name, "img");
    assert_eq!(node.html.attributes["src"], "My Image.png");
    assert_eq!(node.html.attributes["alt"], "My Image.png");
}

#[test]
fn image_embed_unsupported_format() {
    let node = parse_one(WikiLinkOptions::default(), "![[My Image.xyz]]");
    assert!(node.is_embed);
    assert_eq!(node.target, "My Image.xyz");
    assert_eq!(node.permalink, "My Image.xyz");
    assert_eq!(node.html.tag_name, "p");
    assert_eq!(child_text(&node), "![[My Image.xyz]]");
}

#[test]
fn image_embed_with_matching_permalink() {
    let options = WikiLinkOptions::new().permalinks(["Pasted Image 123.png"]);
    let node = parse_one(options, "![[Pasted Image 123.png]]");
    assert!(node.exists);
    assert_eq!(node.html.tag_name, "img");
    assert_eq!(node.html.attributes["src"], "Pasted Image 123.png");
}

#[test]
fn image_embed_shortened_path_resolves_into_folder() {
    let options = WikiLinkOptions::new()
        .path_format(PathFormat::ObsidianShort)
        .permalinks(["/assets/Pasted Image 123.png"]);
    let node = parse_one(options, "![[Pasted Image 123.png]]");
    assert!(node.exists);
    assert_eq!(node.permalink, "/assets/Pasted Image 123.png");
    assert_eq!(node.html.attributes["src"], "/assets/Pasted Image 123.png");
    assert_eq!(node.html.attributes["alt"], "Pasted Image 123.png");
}

#[test]
fn image_embed_with_alt_text() {
    let node = parse_one(WikiLinkOptions::default(), "![[My Image.png|Alt Text]]");
    assert_eq!(node.html.attributes["src"], "My Image.png");
    assert_eq!(node.html.attributes["alt"], "Alt Text");
}

#[test]
fn pdf_embed() {
    let node = parse_one(WikiLinkOptions::default(), "![[My Document.pdf]]");
    assert!(node.is_embed);
    assert_eq!(node.html.tag_name, "iframe");
    assert_eq!(node.html.attributes["src"], "My Document.pdf#toolbar=0");
}

#[test]
fn page_embed_renders_as_transclusion_link() {
    let node = parse_one(WikiLinkOptions::default(), "![[Some Page]]");
    assert!(node.is_embed);
    assert!(!node.exists);
    assert_eq!(node.permalink, "Some Page");
    assert_eq!(node.html.tag_name, "a");
    assert_eq!(node.html.attributes["class"], "internal new transclusion");
    assert_eq!(node.html.attributes["href"], "Some Page");
    assert_eq!(child_text(&node), "Some Page");
}

#[rstest]
#[case("[[Wiki Link")]
#[case("[[Wiki Link]")]
#[case("Wiki Link]]")]
#[case("[Wiki Link]")]
fn invalid_syntax_produces_no_node(#[case] text: &str) {
    assert!(WikiLinkParser::default().parse_all(text).is_empty());
}

#[test]
fn combined_custom_options() {
    let options = WikiLinkOptions::new()
        .alias_divider(":")
        .path_format(PathFormat::ObsidianShort)
        .permalinks(["/some/folder/123/real-page"])
        .wiki_link_resolver(Arc::new(|name: &str| {
            vec![format!("123/{}", name.replace(' ', "-").to_lowercase())]
        }))
        .wiki_link_class_name("my-wiki-link-class")
        .href_template(Arc::new(|permalink: &str| {
            format!("https://my-site.com{permalink}")
        }));

    let node = parse_one(options, "[[Real Page#Some Heading:Page Alias]]");
    assert!(node.exists);
    assert_eq!(node.permalink, "/some/folder/123/real-page");
    assert_eq!(node.alias.as_deref(), Some("Page Alias"));
    assert_eq!(node.html.attributes["class"], "my-wiki-link-class");
    assert_eq!(
        node.html.attributes["href"],
        "https://my-site.com/some/folder/123/real-page#some-heading"
    );
    assert_eq!(child_text(&node), "Page Alias");
}

#[test]
fn folder_index_link_without_match() {
    let node = parse_one(WikiLinkOptions::default(), "[[/some/folder/index]]");
    assert!(!node.exists);
    assert_eq!(node.permalink, "/some/folder");
    assert_eq!(node.html.attributes["href"], "/some/folder");
    assert_eq!(child_text(&node), "/some/folder/index");
}

#[test]
fn folder_index_link_with_match() {
    let options = WikiLinkOptions::new().permalinks(["/some/folder"]);
    let node = parse_one(options, "[[/some/folder/index]]");
    assert!(node.exists);
    assert_eq!(node.permalink, "/some/folder");
    assert_eq!(node.html.attributes["class"], "internal");
}

#[test]
fn root_index_link_without_match() {
    let node = parse_one(WikiLinkOptions::default(), "[[/index]]");
    assert!(!node.exists);
    assert_eq!(node.permalink, "/");
    assert_eq!(node.html.attributes["href"], "/");
    assert_eq!(child_text(&node), "/index");
}

#[test]
fn root_index_link_with_match() {
    let options = WikiLinkOptions::new().permalinks(["/"]);
    let node = parse_one(options, "[[/index]]");
    assert!(node.exists);
    assert_eq!(node.permalink, "/");
    assert_eq!(node.html.attributes["class"], "internal");
}

#[test]
fn split_round_trips_plain_targets() {
    // For targets with no divider characters the pipeline preserves the
    // exact text end to end.
    for target in ["Wiki Link", "a b c", "weird !$% name"] {
        let node = parse_one(WikiLinkOptions::default(), &format!("[[{target}]]"));
        assert_eq!(node.target, target);
    }
}
