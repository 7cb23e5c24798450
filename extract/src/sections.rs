//! Section identification for rendered manual-page text.

/// A top-level section of a rendered manual page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManSection {
    /// Normalized section name (for example `NAME` or `OPTIONS`).
    pub name: String,
    /// Body lines, heading excluded.
    pub lines: Vec<String>,
}

/// Splits rendered man text into top-level sections.
///
/// A heading is an unindented line written in upper case (`NAME`,
/// `EXIT STATUS`, `SEE ALSO`). Text before the first heading (the running
/// title banner) is dropped. Sections are returned in input order.
pub fn identify_man_sections(text: &str) -> Vec<ManSection> {
    let mut sections = Vec::new();
    let mut current: Option<ManSection> = None;

    for line in text.lines() {
        if let Some(name) = normalize_section_name(line) {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(ManSection {
                name,
                lines: Vec::new(),
            });
            continue;
        }

        if let Some(section) = current.as_mut() {
            section.lines.push(line.to_string());
        }
    }

    if let Some(section) = current {
        sections.push(section);
    }

    sections
}

/// Normalizes a potential section heading into its canonical name.
///
/// Returns `None` for indented lines, lines with lowercase letters, and
/// running headers such as `LS(1)  User Commands  LS(1)`.
pub fn normalize_section_name(line: &str) -> Option<String> {
    if line.starts_with([' ', '\t']) {
        return None;
    }
    let trimmed = line.trim().trim_end_matches(':');
    if trimmed.is_empty() || trimmed.len() > 48 {
        return None;
    }
    if !trimmed.chars().next().is_some_and(|ch| ch.is_ascii_uppercase()) {
        return None;
    }
    if !trimmed
        .chars()
        .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || matches!(ch, ' ' | '-' | '_'))
    {
        return None;
    }

    Some(trimmed.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Returns the one-line description that follows the `NAME` heading.
///
/// # Examples
///
/// ```
/// use manly_extract::sections::page_title;
///
/// let page = "LS(1)    User Commands    LS(1)\n\nNAME\n       ls - list directory contents\n";
/// assert_eq!(page_title(page).as_deref(), Some("ls - list directory contents"));
/// ```
pub fn page_title(text: &str) -> Option<String> {
    identify_man_sections(text)
        .into_iter()
        .find(|section| section.name == "NAME")?
        .lines
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
