// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code` text.\n\n- Bullet with a [link](/somewhere)\n- Another item\n\n1. First\n2. Second\n\n> quoted line\n> another\n\n![image](/img.png)\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_paragraph(repeats: usize) -> String {
    "Some **bold** and _italic_ with `code`, a [link](https://example.com) and ![img](/a.png). "
        .repeat(repeats)
}
