//! Document-level tests for the parsing module.
//!
//! Fixtures (.md) and their expected output (.html) are co-located in `fixtures/`.

mod invariants;

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::BlockType, markdown_to_html, parse_document, render::RenderError,
};

// Fixture-based tests

#[test]
fn fixture_mixed_content() {
    assert_fixture("mixed_content");
}

#[test]
fn fixture_code_and_quotes() {
    assert_fixture("code_and_quotes");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let doc = parse_document(&md);
    invariants::check(&md, &doc.blocks);

    assert_eq!(markdown_to_html(&md).unwrap(), expected.trim_end_matches('\n'));
}

// End-to-end scenarios

#[test]
fn heading_and_paragraph() {
    insta::assert_snapshot!(
        markdown_to_html("# Title\n\nBody **bold** text").unwrap(),
        @"<div><h1>Title</h1><p>Body <b>bold</b> text</p></div>"
    );
}

#[test]
fn unordered_list() {
    insta::assert_snapshot!(
        markdown_to_html("- a\n- b").unwrap(),
        @"<div><ul><li>a</li><li>b</li></ul></div>"
    );
}

#[test]
fn ordered_list() {
    insta::assert_snapshot!(
        markdown_to_html("1. x\n2. y").unwrap(),
        @"<div><ol><li>x</li><li>y</li></ol></div>"
    );
}

#[test]
fn empty_document() {
    insta::assert_snapshot!(markdown_to_html("").unwrap(), @"<div></div>");
}

#[test]
fn image_is_not_a_link() {
    let html = markdown_to_html("![alt](http://a/b.png)").unwrap();
    assert_eq!(
        html,
        r#"<div><p><img src="http://a/b.png" alt="alt"></img></p></div>"#
    );
    assert!(!html.contains("<a "));
}

// Invariant tests

#[test]
fn blank_lines_only() {
    let doc = parse_document("\n\n\n");
    assert!(doc.blocks.is_empty());
}

#[test]
#[should_panic(expected = "text dropped before block")]
fn invariants_catch_a_missing_middle_block() {
    let md = "first\n\nsecond\n\nthird";
    let mut blocks = parse_document(md).blocks;
    blocks.remove(1);
    invariants::check(md, &blocks);
}

#[test]
#[should_panic(expected = "text dropped after last block")]
fn invariants_catch_a_missing_last_block() {
    let md = "first\n\nsecond";
    let mut blocks = parse_document(md).blocks;
    blocks.pop();
    invariants::check(md, &blocks);
}

#[test]
fn invariants_accept_surrounding_blank_lines() {
    let md = "\n\n  first\n\n\n\nsecond  \n\n";
    invariants::check(md, &parse_document(md).blocks);
}

#[test]
fn every_block_type_in_one_document() {
    let md = "# h\n\n```\nc\n```\n\n> q\n\n- u\n\n1. o\n\np";
    let doc = parse_document(md);
    invariants::check(md, &doc.blocks);

    let kinds: Vec<_> = doc.blocks.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockType::Heading { level: 1 },
            BlockType::Code,
            BlockType::Quote,
            BlockType::UnorderedList,
            BlockType::OrderedList,
            BlockType::Paragraph,
        ]
    );
}

#[test]
fn unbalanced_delimiter_aborts_whole_document() {
    let result = markdown_to_html("# Fine\n\nnot `fine");
    assert!(matches!(result, Err(RenderError::Inline(_))));
}

#[test]
fn error_in_one_document_does_not_affect_another() {
    assert!(markdown_to_html("a `b").is_err());
    assert_eq!(markdown_to_html("a `b`").unwrap(), "<div><p>a <code>b</code></p></div>");
}

#[test]
fn documents_render_concurrently() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || markdown_to_html(&format!("# Page {i}")).unwrap()))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("<div><h1>Page {i}</h1></div>"));
    }
}
