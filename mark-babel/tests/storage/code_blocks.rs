//! Code block rendering tests
//!
//! Code blocks are the only node type rendered through a template; these tests
//! check the record the template receives and the default macro markup.

use crate::common::{compile, compile_recording};
use mark_babel::templates::CodeMacro;

#[test]
fn test_directives_reach_template() {
    let (html, calls) = compile_recording("```go collapse title Example\nfmt.Println()\n```\n");

    assert_eq!(html, "<recorded/>\n");
    assert_eq!(
        calls,
        vec![CodeMacro {
            language: "go".to_string(),
            collapse: true,
            title: " Example".to_string(),
            text: "fmt.Println()".to_string(),
        }]
    );
}

#[test]
fn test_each_code_block_executes_template_once() {
    let md = "```rust\nfn a() {}\n```\n\ntext\n\n```\nplain\n```\n";
    let (html, calls) = compile_recording(md);

    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].language, "rust");
    assert_eq!(calls[1].language, "");
    assert_eq!(calls[1].text, "plain");
    assert!(html.contains("<p>text</p>"));
}

#[test]
fn test_code_block_in_quote() {
    let (html, calls) = compile_recording("> ```sh\n> ls\n> ```\n");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].text, "ls");
    assert!(html.starts_with("<blockquote>"));
}

#[test]
fn test_default_code_macro_markup() {
    let html = compile("```go collapse title Example\nfmt.Println()\n```\n");

    assert_eq!(
        html,
        concat!(
            "<ac:structured-macro ac:name=\"code\">\n",
            "<ac:parameter ac:name=\"language\">go</ac:parameter>\n",
            "<ac:parameter ac:name=\"collapse\">true</ac:parameter>\n",
            "<ac:parameter ac:name=\"title\">Example</ac:parameter>\n",
            "<ac:plain-text-body><![CDATA[fmt.Println()]]></ac:plain-text-body>\n",
            "</ac:structured-macro>\n",
        )
    );
}

#[test]
fn test_code_body_is_not_html_escaped() {
    let html = compile("```html\n<b>\"x\" & y</b>\n```\n");
    assert!(html.contains("<![CDATA[<b>\"x\" & y</b>]]>"));
}

#[test]
fn test_mermaid_block_uses_diagram_macro() {
    let html = compile("```mermaid\ngraph TD; A-->B\n```\n");
    assert!(html.contains(r#"ac:name="cloudscript-confluence-mermaid""#));
    assert!(html.contains("<![CDATA[graph TD; A-->B]]>"));
}
