use regex::Regex;

/// Split a section body into list entries, one per non-blank line, in
/// source order with duplicates preserved. Leading `*`/`-` bullets and
/// `1.`/`1)` numbering are stripped; a line with no marker still counts.
pub fn extract_items(section: &str) -> Vec<String> {
    let marker = Regex::new(r"^\s*(?:[*\-]\s*|\d+[.)]\s+)").ok();

    section
        .lines()
        .filter_map(|line| {
            let stripped = match &marker {
                Some(re) => re.replace(line, ""),
                None => line.into(),
            };
            let item = stripped.trim();
            (!item.is_empty()).then(|| item.to_string())
        })
        .collect()
}

/// Red-flag entries with the boilerplate filter applied: any entry that
/// contains a "no warning signs" phrase is dropped entirely, so a report
/// with nothing concerning yields a genuinely empty list.
pub fn extract_red_flags(section: &str, denylist: &[String]) -> Vec<String> {
    extract_items(section)
        .into_iter()
        .filter(|item| {
            let lower = item.to_lowercase();
            !denylist.iter().any(|phrase| lower.contains(phrase))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::labels::LanguageTable;

    #[test]
    fn test_mixed_bullet_markers() {
        assert_eq!(
            extract_items("* Drink water\n- Rest"),
            vec!["Drink water", "Rest"]
        );
    }

    #[test]
    fn test_numbered_markers_and_bare_lines() {
        assert_eq!(
            extract_items("1. Monitor temperature\n2) Avoid exertion\nKeep hydrated"),
            vec!["Monitor temperature", "Avoid exertion", "Keep hydrated"]
        );
    }

    #[test]
    fn test_dosage_line_is_not_mistaken_for_numbering() {
        assert_eq!(extract_items("3.5 mg daily"), vec!["3.5 mg daily"]);
    }

    #[test]
    fn test_blank_lines_dropped_duplicates_kept() {
        assert_eq!(
            extract_items("- Rest\n\n- Rest\n   \n- Hydrate"),
            vec!["Rest", "Rest", "Hydrate"]
        );
    }

    #[test]
    fn test_empty_section() {
        assert!(extract_items("").is_empty());
    }

    #[test]
    fn test_red_flag_boilerplate_suppressed() {
        let table = LanguageTable::default();
        assert_eq!(
            extract_red_flags(
                "- No urgent warning signs identified.",
                table.red_flag_denylist()
            ),
            Vec::<String>::new()
        );
        assert_eq!(
            extract_red_flags("- Aucun signe d'alerte urgent.", table.red_flag_denylist()),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_real_red_flags_survive_the_filter() {
        let table = LanguageTable::default();
        assert_eq!(
            extract_red_flags(
                "- Difficulty breathing\n- None identified beyond the above\n- Blue lips",
                table.red_flag_denylist()
            ),
            vec!["Difficulty breathing", "Blue lips"]
        );
    }
}
