use crate::entity::Entity;
use crate::field::NormalizedField;
use crate::speakers::NativeSpeakers;
use serde::{Deserialize, Serialize};

/// Detected document language with its reference codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageEntity {
    language: NormalizedField,
    iso_639_1: NormalizedField,
    iso_639_2: NormalizedField,
    iso_639_3: NormalizedField,
    ethnologue: NormalizedField,
    wikipedia: NormalizedField,
    native_speakers: NativeSpeakers,
}

impl LanguageEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.get()
    }

    pub fn set_language(&mut self, language: Option<&str>) {
        self.language.set(language);
    }

    pub fn iso_639_1(&self) -> Option<&str> {
        self.iso_639_1.get()
    }

    pub fn set_iso_639_1(&mut self, code: Option<&str>) {
        self.iso_639_1.set(code);
    }

    pub fn iso_639_2(&self) -> Option<&str> {
        self.iso_639_2.get()
    }

    pub fn set_iso_639_2(&mut self, code: Option<&str>) {
        self.iso_639_2.set(code);
    }

    pub fn iso_639_3(&self) -> Option<&str> {
        self.iso_639_3.get()
    }

    pub fn set_iso_639_3(&mut self, code: Option<&str>) {
        self.iso_639_3.set(code);
    }

    pub fn ethnologue(&self) -> Option<&str> {
        self.ethnologue.get()
    }

    pub fn set_ethnologue(&mut self, url: Option<&str>) {
        self.ethnologue.set(url);
    }

    pub fn wikipedia(&self) -> Option<&str> {
        self.wikipedia.get()
    }

    pub fn set_wikipedia(&mut self, url: Option<&str>) {
        self.wikipedia.set(url);
    }

    pub fn native_speakers(&self) -> Option<&str> {
        self.native_speakers.raw()
    }

    pub fn set_native_speakers(&mut self, raw: Option<&str>) {
        self.native_speakers.set(raw);
    }

    pub fn native_speakers_min(&self) -> i64 {
        self.native_speakers.minimum()
    }

    pub fn native_speakers_max(&self) -> i64 {
        self.native_speakers.maximum()
    }
}

impl Entity for LanguageEntity {
    const NAME: &'static str = "language";

    fn summary(&self) -> String {
        match (self.language(), self.iso_639_1()) {
            (Some(language), Some(code)) if !code.is_empty() => format!("{} ({})", language, code),
            (language, _) => language.unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_speakers_pass_through() {
        let mut language = LanguageEntity::new();
        language.set_language(Some("english"));
        language.set_iso_639_1(Some("en"));
        language.set_native_speakers(Some("309-400 million"));

        assert_eq!(language.native_speakers(), Some("309-400 million"));
        assert_eq!(language.native_speakers_min(), 309_000_000);
        assert_eq!(language.native_speakers_max(), 400_000_000);
        assert_eq!(language.summary(), "english (en)");
    }

    #[test]
    fn test_clone_independent() {
        let mut original = LanguageEntity::new();
        original.set_native_speakers(Some("9342"));
        let mut copy = original.clone();
        copy.set_native_speakers(Some("garbage"));

        assert_eq!(original.native_speakers_max(), 9342);
        assert_eq!(copy.native_speakers_max(), 0);
        assert_ne!(original, copy);
    }
}
