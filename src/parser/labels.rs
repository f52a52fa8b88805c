use regex::Regex;

use crate::config::LanguagePack;

/// Canonical sub-fields extracted from the detailed-analysis and reasoning
/// sections. Config language packs address these by their lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Text,
    Image,
    Audio,
    Document,
    Observations,
    Possibilities,
    Limitations,
}

impl Field {
    pub fn parse_key(key: &str) -> Option<Field> {
        match key.to_lowercase().as_str() {
            "text" => Some(Field::Text),
            "image" => Some(Field::Image),
            "audio" => Some(Field::Audio),
            "document" => Some(Field::Document),
            "observations" => Some(Field::Observations),
            "possibilities" => Some(Field::Possibilities),
            "limitations" => Some(Field::Limitations),
            _ => None,
        }
    }
}

/// The single place where language knowledge lives: label aliases per
/// canonical field, risk keywords, and boilerplate phrases. English and
/// French ship built in; further languages register through config packs
/// without touching the extraction logic.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    aliases: Vec<(Field, Vec<String>)>,
    high_keywords: Vec<String>,
    low_keywords: Vec<String>,
    boilerplate: Vec<String>,
    red_flag_denylist: Vec<String>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self {
            aliases: vec![
                (Field::Text, strings(&["Text Analysis", "Text", "Texte"])),
                (Field::Image, strings(&["Visual Analysis", "Image", "Visuel"])),
                (Field::Audio, strings(&["Audio Analysis", "Audio"])),
                (Field::Document, strings(&["Document Insights", "Document"])),
                (
                    Field::Observations,
                    strings(&["Key Observations", "Observations"]),
                ),
                (
                    Field::Possibilities,
                    strings(&["Possibilities", "Possibilités"]),
                ),
                (Field::Limitations, strings(&["Limitations"])),
            ],
            high_keywords: strings(&["high", "élevé"]),
            low_keywords: strings(&["low", "faible", "bas"]),
            boilerplate: strings(&[
                "n/a",
                "none",
                "not provided",
                "non fourni",
                "non fournie",
                "aucun",
                "aucune",
            ]),
            red_flag_denylist: strings(&[
                "no urgent warning",
                "none identified",
                "aucun signe",
                "aucune",
            ]),
        }
    }
}

impl LanguageTable {
    /// Merge a config language pack. Pack aliases, keywords, and phrases are
    /// appended after the built-in ones, so built-in behavior never changes.
    pub fn register(&mut self, pack: &LanguagePack) {
        for (key, aliases) in &pack.labels {
            if let Some(field) = Field::parse_key(key) {
                if let Some((_, known)) = self.aliases.iter_mut().find(|(f, _)| *f == field) {
                    known.extend(aliases.iter().cloned());
                }
            }
        }
        self.high_keywords
            .extend(pack.high_keywords.iter().map(|k| k.to_lowercase()));
        self.low_keywords
            .extend(pack.low_keywords.iter().map(|k| k.to_lowercase()));
        self.boilerplate
            .extend(pack.boilerplate.iter().map(|p| p.to_lowercase()));
        self.red_flag_denylist
            .extend(pack.red_flag_denylist.iter().map(|p| p.to_lowercase()));
    }

    pub fn high_keywords(&self) -> &[String] {
        &self.high_keywords
    }

    pub fn low_keywords(&self) -> &[String] {
        &self.low_keywords
    }

    pub fn red_flag_denylist(&self) -> &[String] {
        &self.red_flag_denylist
    }

    fn aliases(&self, field: Field) -> &[String] {
        self.aliases
            .iter()
            .find(|(f, _)| *f == field)
            .map_or(&[], |(_, aliases)| aliases.as_slice())
    }

    /// Extract one labeled sub-field from a section body.
    ///
    /// Matches a bullet marker followed by the bolded label, tolerating a
    /// colon inside or outside the bold markers and an optional space before
    /// it (French punctuation). The value runs until the next bullet+bold
    /// label or the end of the section. Aliases are tried in table order;
    /// boilerplate and empty captures fall through to the next alias.
    pub fn extract(&self, section: &str, field: Field) -> Option<String> {
        for alias in self.aliases(field) {
            let pattern = format!(
                r"(?i)[*\-]\s*\*\*{}\s*:?\s*\*\*\s*:?",
                regex::escape(alias)
            );
            let Ok(label) = Regex::new(&pattern) else {
                continue;
            };
            let Some(m) = label.find(section) else {
                continue;
            };

            let rest = &section[m.end()..];
            let end = Regex::new(r"[*\-]\s*\*\*")
                .ok()
                .and_then(|next| next.find(rest))
                .map_or(rest.len(), |n| n.start());

            let value = rest[..end].trim();
            if value.is_empty() || self.is_boilerplate(value) {
                continue;
            }
            return Some(value.to_string());
        }
        None
    }

    /// Whole-string "nothing to report" check. Keeps phrases like
    /// "No audio provided." from surfacing as clinical findings.
    pub fn is_boilerplate(&self, text: &str) -> bool {
        let t = text.trim().to_lowercase();
        if self.boilerplate.iter().any(|p| *p == t) {
            return true;
        }
        Regex::new(r"^no .* provided\.?$")
            .map(|re| re.is_match(&t))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic_label() {
        let table = LanguageTable::default();
        let section = "* **Image:** findings here\n* **Text:** reported sore throat";

        assert_eq!(
            table.extract(section, Field::Image).as_deref(),
            Some("findings here")
        );
        assert_eq!(
            table.extract(section, Field::Text).as_deref(),
            Some("reported sore throat")
        );
    }

    #[test]
    fn test_extract_french_spacing_and_alias() {
        let table = LanguageTable::default();
        let section = "* **Texte :** Douleur légère\n* **Possibilités :** Angine virale";

        assert_eq!(
            table.extract(section, Field::Text).as_deref(),
            Some("Douleur légère")
        );
        assert_eq!(
            table.extract(section, Field::Possibilities).as_deref(),
            Some("Angine virale")
        );
    }

    #[test]
    fn test_extract_colon_outside_bold() {
        let table = LanguageTable::default();
        let section = "- **Audio**: wheezing on exhale";

        assert_eq!(
            table.extract(section, Field::Audio).as_deref(),
            Some("wheezing on exhale")
        );
    }

    #[test]
    fn test_extract_prompt_style_long_label_wins() {
        let table = LanguageTable::default();
        let section = "* **Visual Analysis:** redness around the left eye\n* **Document Insights:** CBC within range";

        assert_eq!(
            table.extract(section, Field::Image).as_deref(),
            Some("redness around the left eye")
        );
        assert_eq!(
            table.extract(section, Field::Document).as_deref(),
            Some("CBC within range")
        );
    }

    #[test]
    fn test_extract_multiline_value_stops_at_next_label() {
        let table = LanguageTable::default();
        let section = "* **Text:** two day history of cough\nworse at night\n* **Image:** none visible";

        assert_eq!(
            table.extract(section, Field::Text).as_deref(),
            Some("two day history of cough\nworse at night")
        );
    }

    #[test]
    fn test_missing_label_is_absent() {
        let table = LanguageTable::default();
        assert_eq!(table.extract("* **Text:** something", Field::Audio), None);
        assert_eq!(table.extract("", Field::Text), None);
    }

    #[test]
    fn test_boilerplate_value_is_absent() {
        let table = LanguageTable::default();
        let section = "* **Image:** No image provided.\n* **Audio:** N/A\n* **Document:** Not provided";

        assert_eq!(table.extract(section, Field::Image), None);
        assert_eq!(table.extract(section, Field::Audio), None);
        assert_eq!(table.extract(section, Field::Document), None);
    }

    #[test]
    fn test_boilerplate_phrases() {
        let table = LanguageTable::default();
        assert!(table.is_boilerplate("N/A"));
        assert!(table.is_boilerplate("None"));
        assert!(table.is_boilerplate("Not provided"));
        assert!(table.is_boilerplate("No documents provided."));
        assert!(table.is_boilerplate("Aucun"));
        assert!(!table.is_boilerplate("No acute distress observed"));
        assert!(!table.is_boilerplate("Mild swelling"));
    }

    #[test]
    fn test_register_pack_adds_language() {
        let pack = LanguagePack {
            name: "spanish".to_string(),
            labels: [("image".to_string(), vec!["Imagen".to_string()])]
                .into_iter()
                .collect(),
            high_keywords: vec!["Alto".to_string()],
            low_keywords: vec!["bajo".to_string()],
            boilerplate: vec!["No proporcionado".to_string()],
            red_flag_denylist: vec!["ningún signo".to_string()],
        };

        let mut table = LanguageTable::default();
        table.register(&pack);

        assert_eq!(
            table
                .extract("* **Imagen:** erupción leve", Field::Image)
                .as_deref(),
            Some("erupción leve")
        );
        assert!(table.high_keywords().contains(&"alto".to_string()));
        assert!(table.is_boilerplate("no proporcionado"));
        // Built-in aliases still work after registration
        assert_eq!(
            table.extract("* **Image:** still fine", Field::Image).as_deref(),
            Some("still fine")
        );
    }
}
