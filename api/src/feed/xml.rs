//! Small XML writing helpers shared by the RSS and Atom encoders

use std::borrow::Cow;

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Replace characters XML 1.0 forbids (C0 controls other than tab, LF, CR) with U+FFFD
fn sanitize(value: &str) -> Cow<'_, str> {
    let forbidden = |c: char| c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r');

    if value.contains(forbidden) {
        Cow::Owned(
            value
                .chars()
                .map(|c| if forbidden(c) { '\u{FFFD}' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(value)
    }
}

pub fn text(value: &str) -> String {
    encode_text(&sanitize(value)).into_owned()
}

pub fn attr(value: &str) -> String {
    encode_double_quoted_attribute(&sanitize(value)).into_owned()
}

/// Wrap in CDATA, splitting any `]]>` so the section can't be closed early
pub fn cdata(value: &str) -> String {
    format!(
        "<![CDATA[{}]]>",
        sanitize(value).replace("]]>", "]]]]><![CDATA[>")
    )
}

/// `<name>escaped text</name>` on its own indented line
pub fn element(buf: &mut String, indent: usize, name: &str, value: &str) {
    buf.push_str(&format!(
        "{:indent$}<{name}>{}</{name}>\n",
        "",
        text(value),
        indent = indent,
        name = name
    ));
}
