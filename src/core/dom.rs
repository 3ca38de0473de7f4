use crate::utils::error::{Result, StitchError};
use regex::Regex;

/// Replaces the inner content of the element carrying `id`, keeping the
/// inserted string verbatim (innerHTML semantics).
pub fn set_markup_by_id(html: &str, id: &str, markup: &str) -> Result<String> {
    replace_inner(html, id, markup)
}

/// Replaces the inner content of the element carrying `id` with escaped
/// text (textContent semantics).
pub fn set_text_by_id(html: &str, id: &str, text: &str) -> Result<String> {
    replace_inner(html, id, &escape_text(text))
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn open_tag_regex(id: &str) -> Regex {
    // id 屬性前必須有空白，避免誤中 data-id 之類的屬性
    let pattern = format!(
        r#"<([A-Za-z][A-Za-z0-9-]*)[^>]*\sid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(id)
    );
    Regex::new(&pattern).unwrap()
}

fn replace_inner(html: &str, id: &str, new_inner: &str) -> Result<String> {
    let re = open_tag_regex(id);
    let caps = re
        .captures(html)
        .ok_or_else(|| StitchError::ElementNotFoundError { id: id.to_string() })?;
    let open = caps.get(0).expect("whole match");
    let tag = caps.get(1).expect("tag capture").as_str();

    // 空元素寫法 <div id="x"/>：展開成一組開閉標籤再塞內容
    if open.as_str().ends_with("/>") {
        let head = open.as_str().trim_end_matches("/>").trim_end();
        let mut out = String::with_capacity(html.len() + new_inner.len());
        out.push_str(&html[..open.start()]);
        out.push_str(head);
        out.push('>');
        out.push_str(new_inner);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        out.push_str(&html[open.end()..]);
        return Ok(out);
    }

    let inner_start = open.end();
    let inner_end =
        matching_close(html, tag, inner_start).ok_or_else(|| StitchError::MarkupError {
            message: format!("element #{} (<{}>) is never closed", id, tag),
        })?;

    let mut out = String::with_capacity(html.len() + new_inner.len());
    out.push_str(&html[..inner_start]);
    out.push_str(new_inner);
    out.push_str(&html[inner_end..]);
    Ok(out)
}

/// Byte offset of the close tag balancing the open tag that ends at `pos`.
/// Same-named nested elements are counted so the splice lands on the close
/// tag that belongs to the addressed element.
fn matching_close(html: &str, tag: &str, mut pos: usize) -> Option<usize> {
    let open_probe = format!("<{}", tag);
    let close_probe = format!("</{}", tag);
    let mut depth = 0usize;

    loop {
        let rest = &html[pos..];
        let next_close = find_probe(rest, &close_probe)?;
        let next_open = find_probe(rest, &open_probe);

        if let Some(o) = next_open {
            if o < next_close {
                depth += 1;
                pos += o + open_probe.len();
                continue;
            }
        }

        if depth == 0 {
            return Some(pos + next_close);
        }
        depth -= 1;
        pos += next_close + close_probe.len();
    }
}

/// Finds `probe` followed by a tag boundary, so `<div` never matches `<divider`.
fn find_probe(hay: &str, probe: &str) -> Option<usize> {
    let mut start = 0;
    while let Some(i) = hay[start..].find(probe) {
        let at = start + i;
        match hay.as_bytes().get(at + probe.len()) {
            Some(b'>') | Some(b'/') => return Some(at),
            Some(b) if b.is_ascii_whitespace() => return Some(at),
            None => return None,
            _ => start = at + 1,
        }
    }
    None
}
