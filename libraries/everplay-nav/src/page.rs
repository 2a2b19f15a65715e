//! Page snapshot extraction
//!
//! Pulls the two pieces a soft navigation needs out of a fetched HTML
//! document: the `<title>` text and the inner markup of the content
//! region (the first element carrying the configured class). The scan is
//! deliberately tolerant; a document it cannot make sense of yields
//! `None` and the caller degrades to a full navigation rather than
//! swapping in half a page.

/// The swappable parts of a fetched document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Text of the document `<title>`; empty when the document has none
    pub title: String,

    /// Inner markup of the content region, untouched
    pub content: String,
}

impl PageSnapshot {
    /// Extract a snapshot from `html`
    ///
    /// `region_class` names the class that marks the content region. The
    /// region is required; the title is not.
    pub fn extract(html: &str, region_class: &str) -> Option<Self> {
        let content = extract_region(html, region_class)?;
        Some(Self {
            title: extract_title(html).unwrap_or_default(),
            content,
        })
    }
}

// ===== Title =====

fn extract_title(html: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let open = lower.find("<title")?;
    let text_start = open + lower[open..].find('>')? + 1;
    let text_end = text_start + lower[text_start..].find("</title")?;
    Some(html[text_start..text_end].trim().to_string())
}

// ===== Content region =====

fn extract_region(html: &str, region_class: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let mut at = 0;

    while let Some(rel) = lower[at..].find('<') {
        let open = at + rel;
        at = open + 1;
        let rest = &lower[open + 1..];
        if rest.starts_with("!--") {
            match lower[open..].find("-->") {
                Some(end) => {
                    at = open + end + 3;
                    continue;
                }
                None => return None,
            }
        }
        if rest.starts_with('/') || rest.starts_with('!') {
            continue;
        }
        let Some(end_rel) = rest.find('>') else {
            return None;
        };
        let tag_end = open + 1 + end_rel;
        let tag = &lower[open..=tag_end];
        if !has_class(tag, region_class) {
            continue;
        }
        // Self-closing region would have no inner markup worth swapping
        if tag.ends_with("/>") {
            return None;
        }
        let name_end = lower[open + 1..tag_end]
            .find(|c: char| c.is_ascii_whitespace())
            .map(|n| open + 1 + n)
            .unwrap_or(tag_end);
        let name = &lower[open + 1..name_end];
        let inner_start = tag_end + 1;
        let close = find_matching_close(&lower, inner_start, name)?;
        return Some(html[inner_start..close].to_string());
    }
    None
}

/// Whether a lowercased open tag carries `class` among its class tokens
fn has_class(tag: &str, class: &str) -> bool {
    let mut from = 0;
    while let Some(rel) = tag[from..].find("class") {
        let at = from + rel;
        from = at + 5;
        // Must be an attribute name, not a substring of another one
        let before = tag[..at].chars().last();
        if !matches!(before, Some(c) if c.is_ascii_whitespace()) {
            continue;
        }
        let after = tag[at + 5..].trim_start();
        let Some(value) = after.strip_prefix('=') else {
            continue;
        };
        let value = value.trim_start();
        let list = match value.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let inner = &value[1..];
                match inner.find(q) {
                    Some(end) => &inner[..end],
                    None => inner,
                }
            }
            _ => value
                .split(|c: char| c.is_ascii_whitespace() || c == '>')
                .next()
                .unwrap_or(""),
        };
        return list.split_ascii_whitespace().any(|token| token == class);
    }
    false
}

/// Index of the `<` of the close tag matching an element named `name`
/// whose inner markup starts at `from`, counting nested same-name tags
fn find_matching_close(lower: &str, from: usize, name: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut at = from;

    while let Some(rel) = lower[at..].find('<') {
        let pos = at + rel;
        at = pos + 1;
        let rest = &lower[pos + 1..];
        if rest.starts_with("!--") {
            at = pos + lower[pos..].find("-->")? + 3;
            continue;
        }
        if let Some(close_rest) = rest.strip_prefix('/') {
            if close_rest.starts_with(name) && is_tag_boundary(close_rest, name.len()) {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
        } else if rest.starts_with(name) && is_tag_boundary(rest, name.len()) {
            // Void/self-closing nested tags of the same name don't nest,
            // but elements carrying a class here are div-like in practice
            let tag_end = rest.find('>')?;
            if !rest[..tag_end].ends_with('/') {
                depth += 1;
            }
        }
    }
    None
}

fn is_tag_boundary(rest: &str, name_len: usize) -> bool {
    match rest.as_bytes().get(name_len) {
        Some(b'>') | Some(b'/') => true,
        Some(c) => c.is_ascii_whitespace(),
        None => false,
    }
}
