//! Disambiguation record: linked-data references, a canonical name, a geo
//! point and an ordered set of subtype labels.
//!
//! Concepts and named entities each own one of these and forward accessors
//! to it through [`forward_disambiguation!`](crate::forward_disambiguation).

use crate::field::NormalizedField;
use crate::geo::GeoPoint;
use serde::{Deserialize, Deserializer, Serialize};

macro_rules! link_fields {
    ($($field:ident / $setter:ident),+ $(,)?) => {
        $(
            pub fn $field(&self) -> Option<&str> {
                self.$field.get()
            }

            pub fn $setter(&mut self, value: Option<&str>) {
                self.$field.set(value);
            }
        )+

        fn copy_links_from(&mut self, other: &Self) {
            $(self.$field = other.$field.clone();)+
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disambiguation {
    name: NormalizedField,
    census: NormalizedField,
    cia_factbook: NormalizedField,
    crunchbase: NormalizedField,
    dbpedia: NormalizedField,
    freebase: NormalizedField,
    geonames: NormalizedField,
    music_brainz: NormalizedField,
    opencyc: NormalizedField,
    semantic_crunchbase: NormalizedField,
    umbel: NormalizedField,
    website: NormalizedField,
    yago: NormalizedField,
    #[serde(default)]
    geo: GeoPoint,
    #[serde(default, deserialize_with = "unique_subtypes")]
    subtypes: Vec<String>,
}

/// Loaded subtype labels go through [`Disambiguation::add_subtype`].
fn unique_subtypes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let labels = Vec::<Option<String>>::deserialize(deserializer)?;
    let mut record = Disambiguation::new();
    for label in &labels {
        record.add_subtype(label.as_deref());
    }
    Ok(record.subtypes)
}

impl Disambiguation {
    pub fn new() -> Self {
        Self::default()
    }

    link_fields! {
        name / set_name,
        census / set_census,
        cia_factbook / set_cia_factbook,
        crunchbase / set_crunchbase,
        dbpedia / set_dbpedia,
        freebase / set_freebase,
        geonames / set_geonames,
        music_brainz / set_music_brainz,
        opencyc / set_opencyc,
        semantic_crunchbase / set_semantic_crunchbase,
        umbel / set_umbel,
        website / set_website,
        yago / set_yago,
    }

    pub fn geo_point(&self) -> &GeoPoint {
        &self.geo
    }

    pub fn geo_point_mut(&mut self) -> &mut GeoPoint {
        &mut self.geo
    }

    /// Append a subtype label. Absent labels and labels already present
    /// (after trimming) are ignored.
    pub fn add_subtype(&mut self, label: Option<&str>) -> bool {
        let Some(label) = label.map(str::trim) else {
            return false;
        };
        if self.subtypes.iter().any(|s| s == label) {
            return false;
        }
        self.subtypes.push(label.to_string());
        true
    }

    /// Subtype labels in insertion order.
    pub fn subtypes(&self) -> impl Iterator<Item = &str> + '_ {
        self.subtypes.iter().map(String::as_str)
    }

    pub fn subtype_count(&self) -> usize {
        self.subtypes.len()
    }

    /// Copy every scalar field from `other` and union its subtypes into
    /// ours, keeping our existing labels first.
    pub fn copy_from(&mut self, other: &Disambiguation) {
        self.copy_links_from(other);
        self.geo = other.geo.clone();
        for label in &other.subtypes {
            self.add_subtype(Some(label.as_str()));
        }
    }
}

/// Generate pass-through accessors on an entity that owns a
/// `disambiguation: Disambiguation` field.
#[macro_export]
macro_rules! forward_disambiguation {
    (@links $entity:ty; $($get:ident / $set:ident => $inner_get:ident / $inner_set:ident),+ $(,)?) => {
        impl $entity {
            $(
                pub fn $get(&self) -> Option<&str> {
                    self.disambiguation.$inner_get()
                }

                pub fn $set(&mut self, value: Option<&str>) {
                    self.disambiguation.$inner_set(value);
                }
            )+
        }
    };
    ($entity:ty) => {
        $crate::forward_disambiguation!(@links $entity;
            disambiguated_name / set_disambiguated_name => name / set_name,
            census / set_census => census / set_census,
            cia_factbook / set_cia_factbook => cia_factbook / set_cia_factbook,
            crunchbase / set_crunchbase => crunchbase / set_crunchbase,
            dbpedia / set_dbpedia => dbpedia / set_dbpedia,
            freebase / set_freebase => freebase / set_freebase,
            geonames / set_geonames => geonames / set_geonames,
            music_brainz / set_music_brainz => music_brainz / set_music_brainz,
            opencyc / set_opencyc => opencyc / set_opencyc,
            semantic_crunchbase / set_semantic_crunchbase => semantic_crunchbase / set_semantic_crunchbase,
            umbel / set_umbel => umbel / set_umbel,
            website / set_website => website / set_website,
            yago / set_yago => yago / set_yago,
        );

        impl $entity {
            pub fn disambiguation(&self) -> &$crate::disambiguation::Disambiguation {
                &self.disambiguation
            }

            pub fn disambiguation_mut(&mut self) -> &mut $crate::disambiguation::Disambiguation {
                &mut self.disambiguation
            }

            pub fn geo(&self) -> Option<&str> {
                self.disambiguation.geo_point().geo()
            }

            pub fn set_geo(&mut self, value: Option<&str>) {
                self.disambiguation.geo_point_mut().set_geo(value);
            }

            pub fn latitude(&self) -> f64 {
                self.disambiguation.geo_point().latitude()
            }

            pub fn set_latitude(&mut self, value: Option<&str>) {
                self.disambiguation.geo_point_mut().set_latitude(value);
            }

            pub fn longitude(&self) -> f64 {
                self.disambiguation.geo_point().longitude()
            }

            pub fn set_longitude(&mut self, value: Option<&str>) {
                self.disambiguation.geo_point_mut().set_longitude(value);
            }

            pub fn add_subtype(&mut self, label: Option<&str>) -> bool {
                self.disambiguation.add_subtype(label)
            }

            pub fn subtypes(&self) -> impl Iterator<Item = &str> + '_ {
                self.disambiguation.subtypes()
            }

            pub fn copy_disambiguation_from(&mut self, other: &$crate::disambiguation::Disambiguation) {
                self.disambiguation.copy_from(other);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtypes_dedup_and_order() {
        let mut d = Disambiguation::new();
        assert!(d.add_subtype(Some("Location")));
        assert!(!d.add_subtype(Some("Location")));
        assert!(!d.add_subtype(None));
        assert!(d.add_subtype(Some(" City ")));
        assert!(!d.add_subtype(Some("City")));
        assert!(d.add_subtype(Some("AdministrativeDivision")));

        let labels: Vec<&str> = d.subtypes().collect();
        assert_eq!(labels, vec!["Location", "City", "AdministrativeDivision"]);
        // restartable
        assert_eq!(d.subtypes().count(), 3);
    }

    #[test]
    fn test_link_fields_trim() {
        let mut d = Disambiguation::new();
        d.set_dbpedia(Some(" http://dbpedia.org/resource/Israel "));
        d.set_yago(Some("   "));
        assert_eq!(d.dbpedia(), Some("http://dbpedia.org/resource/Israel"));
        assert_eq!(d.yago(), Some(""));
        assert_eq!(d.freebase(), None);
    }

    #[test]
    fn test_copy_from_unions_subtypes() {
        let mut source = Disambiguation::new();
        source.set_name(Some("Israel"));
        source.set_geonames(Some("http://sws.geonames.org/294640/"));
        source.geo_point_mut().set_geo(Some("31.0 35.0"));
        source.add_subtype(Some("Country"));
        source.add_subtype(Some("Location"));

        let mut target = Disambiguation::new();
        target.set_name(Some("old"));
        target.add_subtype(Some("Location"));
        target.add_subtype(Some("Place"));

        target.copy_from(&source);

        assert_eq!(target.name(), Some("Israel"));
        assert_eq!(target.geonames(), Some("http://sws.geonames.org/294640/"));
        assert_eq!(target.geo_point().latitude(), 31.0);
        let labels: Vec<&str> = target.subtypes().collect();
        assert_eq!(labels, vec!["Location", "Place", "Country"]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Disambiguation::new();
        original.set_name(Some("Apple"));
        original.add_subtype(Some("Company"));

        let mut copy = original.clone();
        copy.set_name(Some("Pear"));
        copy.add_subtype(Some("Fruit"));

        assert_eq!(original.name(), Some("Apple"));
        assert_eq!(original.subtype_count(), 1);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_deserialize_applies_normalization() {
        let d: Disambiguation = serde_json::from_str(
            r#"{
                "name": "  Israel ",
                "dbpedia": null,
                "geo": {"geo": "not a pair at all", "latitude": 12.0, "longitude": 0.0},
                "subtypes": ["A", " A ", null, "B", "A"]
            }"#,
        )
        .unwrap();

        assert_eq!(d.name(), Some("Israel"));
        assert_eq!(d.dbpedia(), None);
        assert_eq!(d.geo_point().geo(), None);
        assert_eq!(d.geo_point().latitude(), 12.0);
        assert_eq!(d.subtypes().collect::<Vec<_>>(), vec!["A", "B"]);
    }
}
