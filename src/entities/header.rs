use crate::entity::Entity;
use crate::field::NormalizedField;
use crate::vocab::{ResponseStatus, StringEnum};
use serde::{Deserialize, Serialize};

/// Response-level metadata reported alongside every entity collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeaderEntity {
    status: ResponseStatus,
    status_info: NormalizedField,
    language: NormalizedField,
    text: NormalizedField,
    url: NormalizedField,
    usage: NormalizedField,
}

impl HeaderEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    pub fn set_status(&mut self, status: Option<ResponseStatus>) {
        self.status = ResponseStatus::or_unset(status);
    }

    /// `"OK"`/`"ERROR"` in any case; blank keeps the current status.
    pub fn set_status_str(&mut self, raw: Option<&str>) {
        self.status = ResponseStatus::parse_or(raw, self.status);
    }

    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }

    pub fn status_info(&self) -> Option<&str> {
        self.status_info.get()
    }

    pub fn set_status_info(&mut self, info: Option<&str>) {
        self.status_info.set(info);
    }

    pub fn language(&self) -> Option<&str> {
        self.language.get()
    }

    pub fn set_language(&mut self, language: Option<&str>) {
        self.language.set(language);
    }

    pub fn text(&self) -> Option<&str> {
        self.text.get()
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        self.text.set(text);
    }

    pub fn url(&self) -> Option<&str> {
        self.url.get()
    }

    pub fn set_url(&mut self, url: Option<&str>) {
        self.url.set(url);
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.get()
    }

    pub fn set_usage(&mut self, usage: Option<&str>) {
        self.usage.set(usage);
    }
}

impl Entity for HeaderEntity {
    const NAME: &'static str = "header";

    fn summary(&self) -> String {
        match self.status_info().filter(|s| !s.is_empty()) {
            Some(info) => format!("{}: {}", self.status, info),
            None => self.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        let mut header = HeaderEntity::new();
        assert_eq!(header.status(), ResponseStatus::Unset);

        header.set_status_str(Some(" ok "));
        assert!(header.is_ok());

        header.set_status_str(Some(""));
        assert!(header.is_ok());

        header.set_status_str(Some("error"));
        header.set_status_info(Some(" invalid-api-key "));
        assert_eq!(header.status(), ResponseStatus::Error);
        assert_eq!(header.summary(), "ERROR: invalid-api-key");
    }
}
