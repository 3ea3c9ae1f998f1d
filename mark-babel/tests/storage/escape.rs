//! Reserved macro tag tests

use crate::common::compile;
use mark_babel::formats::storage::escape::ReservedTags;
use mark_babel::{compile_markdown_with_options, CompileOptions, TemplateRegistry};
use proptest::prelude::*;

#[test]
fn test_inline_macro_tags_pass_through() {
    let html = compile("Text <ac:placeholder>hint</ac:placeholder>\n");
    assert_eq!(html, "<p>Text <ac:placeholder>hint</ac:placeholder></p>\n");
}

#[test]
fn test_document_containing_placeholder_text() {
    let html = compile("mkCOLONmk stays <ac:placeholder>hint</ac:placeholder>\n");
    assert_eq!(
        html,
        "<p>mkCOLONmk stays <ac:placeholder>hint</ac:placeholder></p>\n"
    );
}

#[test]
fn test_configured_prefixes() {
    let options = CompileOptions {
        reserved_prefixes: vec!["ac".to_string(), "ri".to_string()],
        ..Default::default()
    };
    let html = compile_markdown_with_options(
        "Link <ri:page>target</ri:page>\n",
        &TemplateRegistry::default(),
        &options,
    )
    .unwrap();
    assert_eq!(html, "<p>Link <ri:page>target</ri:page></p>\n");
}

/// Documents mixing reserved tags with text that already uses the placeholder
/// token and its numbered variants.
const CODEC_DOCUMENT: &str =
    "(<(/)?ac:[a-z-]{1,8}>|mkCOLONmk[0-9]?|<(/)?mkCOLONmk[0-9]?:?[a-z]{0,3}>|[a-zA-Z0-9 :</>]{0,6}){0,12}";

proptest! {
    #[test]
    fn prop_decode_inverts_encode(doc in CODEC_DOCUMENT) {
        let codec = ReservedTags::for_document(&doc);
        prop_assert_eq!(codec.decode(&codec.encode(&doc)), doc);
    }

    #[test]
    fn prop_placeholder_absent_from_document(doc in CODEC_DOCUMENT) {
        let codec = ReservedTags::for_document(&doc);
        prop_assert!(!doc.contains(codec.placeholder()));
    }
}
