use super::{
    InlineError,
    kinds::{Delimiter, Image, Link, LinkMatch},
    types::TextSpan,
};

/// Tokenizes a run of text into inline spans.
///
/// Runs the delimiter passes in [`Delimiter::ORDER`], then images, then links.
///
/// # Errors
/// Fails with [`InlineError::UnbalancedDelimiter`] when a plain span contains an
/// odd number of one delimiter.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let mut spans = vec![TextSpan::plain(text)];
    for delimiter in Delimiter::ORDER {
        spans = split_delimiter(spans, delimiter)?;
    }
    Ok(split_links(split_images(spans)))
}

/// Splits every plain span on `delimiter`.
///
/// Parts alternate plain/typed, starting and ending with plain, so empty plain
/// spans appear when a delimiter sits at either end of the text.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: Delimiter,
) -> Result<Vec<TextSpan>, InlineError> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(marker).collect();
        if parts.len() % 2 == 0 {
            return Err(InlineError::UnbalancedDelimiter {
                delimiter: marker,
                text: span.text.clone(),
            });
        }

        out.extend(parts.into_iter().enumerate().map(|(index, part)| {
            if index % 2 == 0 {
                TextSpan::plain(part)
            } else {
                delimiter.span(part)
            }
        }));
    }

    Ok(out)
}

/// Extracts `![alt](url)` from plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, Image::find, Image::span)
}

/// Extracts `[text](url)` from plain spans. Image syntax is left alone.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, Link::find, Link::span)
}

/// Replaces every match in each plain span with the span built by `build`.
///
/// Plain text between matches is kept; empty pieces are not emitted. A span
/// with no match is passed through unchanged. The text after each match is
/// scanned again, and every match consumes at least one byte.
fn split_matches(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Option<LinkMatch>,
    build: fn(LinkMatch) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() || find(&span.text).is_none() {
            out.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        while let Some(found) = find(rest) {
            let (start, end) = (found.range.start, found.range.end);
            if start > 0 {
                out.push(TextSpan::plain(&rest[..start]));
            }
            out.push(build(found));
            rest = &rest[end..];
        }
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }

    out
}
