//! Attach rendered markup to the mount node of a hosting document.

use regex::Regex;

/// Replace the content of the element whose `id` is `mount_id` with `content`.
///
/// Returns `None` when the shell has no such element (or it is never closed),
/// in which case the caller leaves the document untouched.
pub fn mount(shell: &str, mount_id: &str, content: &str) -> Option<String> {
    let id = regex::escape(mount_id);
    let opening = Regex::new(&format!(
        r#"(?i)<([a-z][a-z0-9-]*)\b[^>]*?\sid\s*=\s*(?:"{id}"|'{id}')[^>]*>"#
    ))
    .ok()?;

    let open = opening.captures(shell)?;
    let tag_match = open.get(0)?;
    let tag = open.get(1)?.as_str();
    let opening_tag = tag_match.as_str();

    if opening_tag.ends_with("/>") {
        let expanded = opening_tag.trim_end_matches("/>").trim_end();
        return Some(format!(
            "{}{expanded}>{content}</{tag}>{}",
            &shell[..tag_match.start()],
            &shell[tag_match.end()..],
        ));
    }

    let close_start = tag_match.end() + matching_close(&shell[tag_match.end()..], tag)?;
    Some(format!(
        "{}{content}{}",
        &shell[..tag_match.end()],
        &shell[close_start..],
    ))
}

/// Offset of the closing tag that balances an already-open `tag` in `rest`.
fn matching_close(rest: &str, tag: &str) -> Option<usize> {
    let name = regex::escape(tag);
    let tags = Regex::new(&format!(r"(?i)<(/?){name}\b[^>]*?(/?)>")).ok()?;

    let mut depth = 1usize;
    for caps in tags.captures_iter(rest) {
        let closing = caps.get(1).is_some_and(|m| !m.is_empty());
        let self_closing = caps.get(2).is_some_and(|m| !m.is_empty());
        if closing {
            depth -= 1;
            if depth == 0 {
                return caps.get(0).map(|m| m.start());
            }
        } else if !self_closing {
            depth += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL: &str = r#"<html><body><div id="root"></div></body></html>"#;

    #[test]
    fn mounts_into_empty_node() {
        let doc = mount(SHELL, "root", "<p>hi</p>").unwrap();
        assert_eq!(doc, r#"<html><body><div id="root"><p>hi</p></div></body></html>"#);
    }

    #[test]
    fn missing_node_is_a_noop() {
        assert_eq!(mount(SHELL, "app", "<p>hi</p>"), None);
        assert_eq!(mount("", "root", "<p>hi</p>"), None);
    }

    #[test]
    fn replaces_existing_content_as_sole_child() {
        let shell = r#"<main><div class="x" id="root"><span>Loading</span><div>old</div></div><p>after</p></main>"#;
        let doc = mount(shell, "root", "NEW").unwrap();
        assert_eq!(
            doc,
            r#"<main><div class="x" id="root">NEW</div><p>after</p></main>"#
        );
    }

    #[test]
    fn expands_self_closing_node() {
        let doc = mount(r#"<body><div id="root" /></body>"#, "root", "X").unwrap();
        assert_eq!(doc, r#"<body><div id="root">X</div></body>"#);
    }

    #[test]
    fn matches_single_quotes_and_ignores_other_attributes() {
        let shell = r#"<div data-id="root">a</div><section id='root'></section>"#;
        let doc = mount(shell, "root", "X").unwrap();
        assert_eq!(doc, r#"<div data-id="root">a</div><section id='root'>X</section>"#);
    }

    #[test]
    fn id_must_match_exactly() {
        assert_eq!(mount(r#"<div id="rooted"></div>"#, "root", "X"), None);
    }

    #[test]
    fn unclosed_node_is_left_alone() {
        assert_eq!(mount(r#"<div id="root"><p>"#, "root", "X"), None);
    }
}
