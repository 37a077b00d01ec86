use std::borrow::Cow;

use crate::models::{PlainText, RichText};

/// Escapes `&`, `<`, `>`, `"` and `'`.
///
/// The single escape routine used for every plain-text field and attribute.
/// The first four become `&amp;`, `&lt;`, `&gt;` and `&quot;`; `'` becomes
/// the numeric reference `&#x27;`, since `&apos;` is not defined in HTML 4.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Conversion of a text field into markup.
///
/// The trust boundary lives in the type: [`RichText`] is author markup and is
/// inserted verbatim, [`PlainText`] is always escaped.
pub trait ToHtml {
    fn to_html(&self) -> Cow<'_, str>;
}

impl ToHtml for RichText {
    fn to_html(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl ToHtml for PlainText {
    fn to_html(&self) -> Cow<'_, str> {
        escape_html(self.as_str())
    }
}
