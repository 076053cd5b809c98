//! RFC 5988 `Link` header rendering.
//!
//! Values are wrapped in double quotes and otherwise written verbatim: no
//! escaping of embedded quotes or backslashes is performed.

use std::fmt::{self, Write as _};

use crate::affordance::Affordance;

/// Header name, including the separator, that prefixes a full header line.
const LINK_PREFIX: &str = "Link: ";

impl Affordance {
    /// Full header line, e.g. `Link: <http://example.com/things>; rel="next"`.
    pub fn to_link_header(&self) -> String {
        format!("{LINK_PREFIX}{}", self.header_value())
    }

    /// Header value without the `Link: ` prefix.
    pub fn header_value(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_link_value(&mut out, self);
        out
    }
}

impl fmt::Display for Affordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_link_value(f, self)
    }
}

/// Renders several links as one header line, values separated by `, `.
/// Returns `None` when there is nothing to render.
pub fn join_link_header(affordances: &[Affordance]) -> Option<String> {
    if affordances.is_empty() {
        return None;
    }
    let mut out = String::from(LINK_PREFIX);
    for (i, affordance) in affordances.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write_link_value(&mut out, affordance);
    }
    Some(out)
}

fn write_link_value<W: fmt::Write>(out: &mut W, affordance: &Affordance) -> fmt::Result {
    write!(out, "<{}>", affordance.href())?;
    out.write_str("; rel=\"")?;
    for (i, rel) in affordance.rels().iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        out.write_str(rel)?;
    }
    out.write_char('"')?;
    for (name, value) in affordance.link_params().iter() {
        write!(out, "; {name}=\"{value}\"")?;
    }
    Ok(())
}
