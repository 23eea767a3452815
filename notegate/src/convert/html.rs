//! Markup to interchange conversion
//!
//! A small, never-failing HTML scanner that flattens the store's rich markup
//! into markdown. The mapping is lossy: structural elements
//! (headings, paragraphs, lists, block quotes, code blocks) and inline
//! emphasis and links survive; everything else is dropped while its text
//! content is kept. Malformed input degrades into literal text.

/// Convert rich markup to markdown
pub fn html_to_markdown(html: &str) -> String {
    let mut writer = Writer::default();
    let mut rest = html;

    while let Some(pos) = rest.find('<') {
        writer.text(&rest[..pos]);
        match parse_tag(&rest[pos..]) {
            Some((tag, consumed)) => {
                writer.tag(tag);
                rest = &rest[pos + consumed..];
            }
            None => {
                // A '<' that does not open a well-formed tag is literal text.
                writer.text("<");
                rest = &rest[pos + 1..];
            }
        }
    }
    writer.text(rest);

    writer.finish()
}

enum Tag<'a> {
    /// Comments, doctypes, processing instructions
    Skip,
    Element {
        name: String,
        closing: bool,
        attrs: &'a str,
    },
}

/// Parse a tag starting at `input` (which begins with `<`), returning the tag
/// and the number of bytes consumed, or `None` when the input is not a tag.
fn parse_tag(input: &str) -> Option<(Tag<'_>, usize)> {
    if let Some(rest) = input.strip_prefix("<!--") {
        let end = rest.find("-->")?;
        return Some((Tag::Skip, 4 + end + 3));
    }
    if input.starts_with("<!") || input.starts_with("<?") {
        let end = input.find('>')?;
        return Some((Tag::Skip, end + 1));
    }

    let inner_start = if input[1..].starts_with('/') { 2 } else { 1 };
    let closing = inner_start == 2;
    if !input[inner_start..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
    {
        return None;
    }

    // Find the closing '>' outside quoted attribute values.
    let mut quote: Option<char> = None;
    let mut end = None;
    for (i, ch) in input.char_indices().skip(inner_start) {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '>' => {
                    end = Some(i);
                    break;
                }
                _ => {}
            },
        }
    }
    let end = end?;

    let body = input[inner_start..end].trim_end_matches('/').trim();
    let name_end = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    let name = body[..name_end].to_ascii_lowercase();
    let attrs = &body[name_end..];

    Some((Tag::Element { name, closing, attrs }, end + 1))
}

enum ListKind {
    Unordered,
    Ordered(u32),
}

#[derive(Default)]
struct Writer {
    out: String,
    lists: Vec<ListKind>,
    links: Vec<String>,
    in_pre: bool,
    /// Element whose text content is being discarded (`script`/`style`)
    suppress: Option<String>,
}

impl Writer {
    fn text(&mut self, text: &str) {
        if text.is_empty() || self.suppress.is_some() {
            return;
        }
        let decoded = decode_entities(text);
        if self.in_pre {
            self.out.push_str(&decoded);
            return;
        }

        // HTML collapses runs of whitespace into a single space.
        let mut collapsed = String::with_capacity(decoded.len());
        let mut last_ws = false;
        for ch in decoded.chars() {
            if ch.is_whitespace() {
                if !last_ws {
                    collapsed.push(' ');
                }
                last_ws = true;
            } else {
                collapsed.push(ch);
                last_ws = false;
            }
        }

        let at_line_start = self.out.is_empty() || self.out.ends_with('\n');
        if at_line_start {
            let trimmed = collapsed.trim_start();
            self.out.push_str(trimmed);
        } else {
            self.out.push_str(&collapsed);
        }
    }

    fn tag(&mut self, tag: Tag<'_>) {
        let Tag::Element {
            name,
            closing,
            attrs,
        } = tag
        else {
            return;
        };

        if let Some(suppressed) = &self.suppress {
            if closing && *suppressed == name {
                self.suppress = None;
            }
            return;
        }

        match name.as_str() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                if closing {
                    self.end_block();
                } else {
                    self.ensure_block();
                    let level = name[1..].parse::<usize>().unwrap_or(1);
                    self.out.push_str(&"#".repeat(level));
                    self.out.push(' ');
                }
            }
            "p" | "div" => {
                if closing {
                    self.end_block();
                } else {
                    self.ensure_block();
                }
            }
            "br" => self.ensure_newline_hard(),
            "hr" => {
                if !closing {
                    self.ensure_block();
                    self.out.push_str("---");
                    self.end_block();
                }
            }
            "strong" | "b" => self.out.push_str("**"),
            "em" | "i" => self.out.push('*'),
            "code" => {
                if !self.in_pre {
                    self.out.push('`');
                }
            }
            "pre" => {
                if closing {
                    self.in_pre = false;
                    self.ensure_newline();
                    self.out.push_str("```");
                    self.end_block();
                } else {
                    self.ensure_block();
                    self.out.push_str("```\n");
                    self.in_pre = true;
                }
            }
            "a" => {
                if closing {
                    if let Some(href) = self.links.pop() {
                        self.out.push_str("](");
                        self.out.push_str(&href);
                        self.out.push(')');
                    }
                } else {
                    self.out.push('[');
                    self.links
                        .push(attr_value(attrs, "href").unwrap_or_default());
                }
            }
            "ul" | "ol" => {
                if closing {
                    self.lists.pop();
                    if self.lists.is_empty() {
                        self.end_block();
                    }
                } else {
                    if self.lists.is_empty() {
                        self.ensure_block();
                    } else {
                        self.ensure_newline();
                    }
                    self.lists.push(if name == "ul" {
                        ListKind::Unordered
                    } else {
                        ListKind::Ordered(0)
                    });
                }
            }
            "li" => {
                if !closing {
                    self.ensure_newline();
                    let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                    self.out.push_str(&indent);
                    match self.lists.last_mut() {
                        Some(ListKind::Ordered(n)) => {
                            *n += 1;
                            let n = *n;
                            self.out.push_str(&format!("{n}. "));
                        }
                        _ => self.out.push_str("- "),
                    }
                }
            }
            "blockquote" => {
                if closing {
                    self.end_block();
                } else {
                    self.ensure_block();
                    self.out.push_str("> ");
                }
            }
            "script" | "style" => {
                if !closing {
                    self.suppress = Some(name);
                }
            }
            // Unknown elements are dropped; their text content flows through.
            _ => {}
        }
    }

    /// Separate what follows from what came before with a blank line
    fn ensure_block(&mut self) {
        while self.out.ends_with(' ') {
            self.out.pop();
        }
        if self.out.is_empty() {
            return;
        }
        if !self.out.ends_with("\n\n") {
            if self.out.ends_with('\n') {
                self.out.push('\n');
            } else {
                self.out.push_str("\n\n");
            }
        }
    }

    fn end_block(&mut self) {
        self.ensure_block();
    }

    /// Terminate the current line unless it is already terminated
    fn ensure_newline(&mut self) {
        while self.out.ends_with(' ') {
            self.out.pop();
        }
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    /// A line break that survives even mid-line (`<br>`)
    fn ensure_newline_hard(&mut self) {
        while self.out.ends_with(' ') {
            self.out.pop();
        }
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out.trim().to_string()
    }
}

/// Extract an attribute value from a tag's raw attribute text
fn attr_value(attrs: &str, name: &str) -> Option<String> {
    let lower = attrs.to_ascii_lowercase();
    let mut search = 0;
    while let Some(rel) = lower[search..].find(name) {
        let pos = search + rel;
        let preceded_by_word = pos > 0 && {
            let b = lower.as_bytes()[pos - 1];
            b.is_ascii_alphanumeric() || b == b'-'
        };
        search = pos + name.len();
        if preceded_by_word {
            continue;
        }

        let rest = attrs[pos + name.len()..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        let value = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let rest = &rest[1..];
                &rest[..rest.find(q)?]
            }
            Some(_) => {
                let end = rest
                    .find(|c: char| c.is_whitespace())
                    .unwrap_or(rest.len());
                &rest[..end]
            }
            None => continue,
        };
        return Some(decode_entities(value));
    }
    None
}

/// Decode the common character entities; unknown entities stay literal
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let limit = rest.len().min(12);
        let semicolon = rest.as_bytes()[..limit].iter().position(|&b| b == b';');
        let decoded = semicolon.and_then(|end| {
            let entity = &rest[1..end];
            let ch = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => {
                    let code = if let Some(hex) = entity
                        .strip_prefix("#x")
                        .or_else(|| entity.strip_prefix("#X"))
                    {
                        u32::from_str_radix(hex, 16).ok()
                    } else if let Some(dec) = entity.strip_prefix('#') {
                        dec.parse::<u32>().ok()
                    } else {
                        None
                    };
                    code.and_then(char::from_u32)
                }
            };
            ch.map(|ch| (ch, end + 1))
        });

        match decoded {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_text_survives_without_tags() {
        assert_eq!(html_to_markdown("<h1>Top</h1>"), "# Top");
        assert_eq!(html_to_markdown("<h3>Deep</h3>"), "### Deep");
    }

    #[test]
    fn test_paragraphs_are_separated_by_blank_lines() {
        let markdown = html_to_markdown("<p>First</p><p>Second</p>");
        assert_eq!(markdown, "First\n\nSecond");
    }

    #[test]
    fn test_inline_emphasis_markers() {
        let markdown =
            html_to_markdown("<p>Hello <strong>bold</strong> and <em>italic</em>.</p>");
        assert_eq!(markdown, "Hello **bold** and *italic*.");
    }

    #[test]
    fn test_b_and_i_aliases() {
        assert_eq!(html_to_markdown("<b>x</b> <i>y</i>"), "**x** *y*");
    }

    #[test]
    fn test_unordered_list_markers() {
        let markdown = html_to_markdown("<ul><li>One</li><li>Two</li></ul>");
        assert_eq!(markdown, "- One\n- Two");
    }

    #[test]
    fn test_ordered_list_numbering() {
        let markdown = html_to_markdown("<ol><li>First</li><li>Second</li></ol>");
        assert_eq!(markdown, "1. First\n2. Second");
    }

    #[test]
    fn test_nested_list_indentation() {
        let markdown = html_to_markdown(
            "<ul><li>Outer<ul><li>Inner</li></ul></li><li>Next</li></ul>",
        );
        assert_eq!(markdown, "- Outer\n  - Inner\n- Next");
    }

    #[test]
    fn test_link_text_and_target() {
        let markdown =
            html_to_markdown(r#"<p>See <a href="https://example.com/page">the docs</a>.</p>"#);
        assert_eq!(markdown, "See [the docs](https://example.com/page).");
    }

    #[test]
    fn test_link_without_target() {
        assert_eq!(html_to_markdown("<a>bare</a>"), "[bare]()");
    }

    #[test]
    fn test_inline_code_and_pre_block() {
        assert_eq!(html_to_markdown("<p>run <code>ls</code></p>"), "run `ls`");
        let markdown = html_to_markdown("<pre><code>let x = 1;\nlet y = 2;</code></pre>");
        assert_eq!(markdown, "```\nlet x = 1;\nlet y = 2;\n```");
    }

    #[test]
    fn test_blockquote_marker() {
        assert_eq!(html_to_markdown("<blockquote>wise words</blockquote>"), "> wise words");
    }

    #[test]
    fn test_unknown_tags_keep_their_text() {
        assert_eq!(html_to_markdown("<figure><span>caption</span></figure>"), "caption");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(html_to_markdown("<p>a &amp; b &lt;c&gt; &#39;d&#39;</p>"), "a & b <c> 'd'");
        assert_eq!(html_to_markdown("&#x41;&#66;"), "AB");
    }

    #[test]
    fn test_unknown_entity_stays_literal() {
        assert_eq!(html_to_markdown("<p>&bogus; &x</p>"), "&bogus; &x");
    }

    #[test]
    fn test_stray_angle_bracket_is_literal() {
        assert_eq!(html_to_markdown("<p>a < b</p>"), "a < b");
        assert_eq!(html_to_markdown("1 <2 and >3"), "1 <2 and >3");
    }

    #[test]
    fn test_comments_and_doctype_are_dropped() {
        assert_eq!(html_to_markdown("<!doctype html><!-- hidden -->visible"), "visible");
    }

    #[test]
    fn test_script_and_style_content_is_dropped() {
        let markdown =
            html_to_markdown("<p>before</p><script>alert(1)</script><p>after</p>");
        assert_eq!(markdown, "before\n\nafter");
    }

    #[test]
    fn test_interstitial_whitespace_is_collapsed() {
        let markdown = html_to_markdown("<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>");
        assert_eq!(markdown, "- One\n- Two");
    }

    #[test]
    fn test_br_breaks_the_line() {
        assert_eq!(html_to_markdown("<p>one<br>two</p>"), "one\ntwo");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(html_to_markdown("just text"), "just text");
        assert_eq!(html_to_markdown(""), "");
    }

    #[test]
    fn test_representative_document() {
        let html = concat!(
            "<h2>Status</h2>",
            "<p>The <strong>main</strong> branch is <em>green</em>.</p>",
            "<ul><li>build</li><li>tests</li></ul>",
            "<p><a href=\"https://ci.example.com\">dashboard</a></p>",
        );
        let markdown = html_to_markdown(html);
        assert_eq!(
            markdown,
            "## Status\n\nThe **main** branch is *green*.\n\n- build\n- tests\n\n[dashboard](https://ci.example.com)"
        );
    }
}
