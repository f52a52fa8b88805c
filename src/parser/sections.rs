use regex::Regex;

pub const SECTION_COUNT: u32 = 7;

/// Slice the raw body of each of the seven numbered sections.
///
/// Sections are located positionally by their `### N.` marker; the header
/// wording after the number is ignored, so the seven-part contract holds in
/// any language. A missing marker leaves that slot empty without affecting
/// the other slots - each section is extracted independently.
pub fn split_sections(markdown: &str) -> [&str; SECTION_COUNT as usize] {
    let mut sections = [""; SECTION_COUNT as usize];
    for (i, slot) in sections.iter_mut().enumerate() {
        if let Some(body) = section_body(markdown, i as u32 + 1) {
            *slot = body;
        }
    }
    sections
}

/// Body of section `index`: everything after its header line up to the next
/// numbered marker (end of string for the last section).
fn section_body(markdown: &str, index: u32) -> Option<&str> {
    let header = Regex::new(&format!(r"###\s*{}\.[^\n]*", index)).ok()?;
    let start = header.find(markdown)?;
    let rest = &markdown[start.end()..];

    let end = if index < SECTION_COUNT {
        Regex::new(&format!(r"###\s*{}", index + 1))
            .ok()
            .and_then(|re| re.find(rest))
            .map_or(rest.len(), |m| m.start())
    } else {
        rest.len()
    };

    Some(rest[..end].trim())
}
