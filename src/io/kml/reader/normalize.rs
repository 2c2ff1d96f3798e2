use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// CDATA sections, matched in any case and removed together with their content.
static CDATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!\[cdata\[.*?\]\]>").expect("valid CDATA pattern"));

/// Start and end tags. Declarations, comments and processing instructions are left alone.
static ELEMENT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^!?][^>]*>").expect("valid tag pattern"));

/// Prepare raw KML text for parsing.
///
/// CDATA blocks are stripped and every element tag is lower-cased, which makes tag and
/// attribute names case-insensitive for the rest of the reader. Character data between tags
/// keeps its case.
pub(crate) fn normalize(text: &str) -> Cow<'_, str> {
    let stripped = CDATA.replace_all(text, "");
    if let Cow::Owned(lowered) =
        ELEMENT_TAG.replace_all(&stripped, |caps: &Captures| caps[0].to_lowercase())
    {
        return Cow::Owned(lowered);
    }
    stripped
}
