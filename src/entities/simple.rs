//! Single-valued, unscored records.

use crate::entity::Entity;
use crate::field::NormalizedField;
use serde::{Deserialize, Serialize};

macro_rules! text_entity {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $field:ident / $setter:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name {
            $field: NormalizedField,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn with(value: &str) -> Self {
                let mut entity = Self::new();
                entity.$setter(Some(value));
                entity
            }

            pub fn $field(&self) -> Option<&str> {
                self.$field.get()
            }

            pub fn $setter(&mut self, value: Option<&str>) {
                self.$field.set(value);
            }
        }

        impl Entity for $name {
            const NAME: &'static str = $kind;

            fn summary(&self) -> String {
                self.$field().unwrap_or_default().to_string()
            }
        }
    };
}

text_entity! {
    /// Author extracted from a page.
    AuthorEntity, "author", author / set_author
}

text_entity! {
    /// Page title.
    TitleEntity, "title", title / set_title
}

text_entity! {
    /// URL of the main image of a page.
    ImageEntity, "image", image / set_image
}

text_entity! {
    /// A quotation attributed to a named entity.
    QuotationEntity, "quotation", quotation / set_quotation
}

/// A microformat field/data pair found in page markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MicroformatEntity {
    field: NormalizedField,
    data: NormalizedField,
}

impl MicroformatEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(field: &str, data: &str) -> Self {
        let mut entity = Self::new();
        entity.set_field(Some(field));
        entity.set_data(Some(data));
        entity
    }

    pub fn field(&self) -> Option<&str> {
        self.field.get()
    }

    pub fn set_field(&mut self, field: Option<&str>) {
        self.field.set(field);
    }

    pub fn data(&self) -> Option<&str> {
        self.data.get()
    }

    pub fn set_data(&mut self, data: Option<&str>) {
        self.data.set(data);
    }
}

impl Entity for MicroformatEntity {
    const NAME: &'static str = "microformat";

    fn summary(&self) -> String {
        format!(
            "{}: {}",
            self.field().unwrap_or_default(),
            self.data().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_entities_trim() {
        assert_eq!(AuthorEntity::with("  Jane Roe ").author(), Some("Jane Roe"));
        assert_eq!(TitleEntity::with("\tBreaking\n").title(), Some("Breaking"));
        assert_eq!(
            ImageEntity::with(" http://example.com/a.png ").image(),
            Some("http://example.com/a.png")
        );
    }

    #[test]
    fn test_quotation_equality() {
        let a = QuotationEntity::with("We shall overcome");
        let b = QuotationEntity::with(" We shall overcome ");
        let mut c = b.clone();
        c.set_quotation(None);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(c, QuotationEntity::with(""));
    }

    #[test]
    fn test_microformat_summary() {
        let m = MicroformatEntity::with("fn", "Jane Roe");
        assert_eq!(m.summary(), "fn: Jane Roe");
        assert_eq!(<MicroformatEntity as Entity>::score(&m), None);
    }
}
