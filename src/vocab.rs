//! String-backed enumerations.
//!
//! Each variant has exactly one canonical string. Parsing is
//! case-insensitive after trimming and never fails: input that matches no
//! variant leaves the caller's current value in place.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A closed set of variants with a bidirectional string mapping.
pub trait StringEnum: Copy + Eq + Sized + 'static {
    /// Every variant, in matching order.
    const VARIANTS: &'static [Self];

    /// The "no value" variant.
    const UNSET: Self;

    fn canonical(self) -> &'static str;

    /// Strict lookup: trimmed, case-insensitive, first match wins.
    fn lookup(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.canonical().eq_ignore_ascii_case(raw))
    }

    /// Tolerant parse against the current value.
    ///
    /// Blank, absent or unrecognized input returns `current`. A field that
    /// has never been set starts at [`StringEnum::UNSET`], so the same input
    /// yields `UNSET` there.
    fn parse_or(raw: Option<&str>, current: Self) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => current,
            Some(raw) => Self::lookup(raw).unwrap_or_else(|| {
                tracing::debug!(
                    value = raw,
                    current = current.canonical(),
                    "ignoring unrecognized enumeration value"
                );
                current
            }),
        }
    }

    /// Typed setter form: `None` means unset.
    fn or_unset(value: Option<Self>) -> Self {
        value.unwrap_or(Self::UNSET)
    }
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, unset = $unset:ident, {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl StringEnum for $name {
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];
            const UNSET: Self = $name::$unset;

            fn canonical(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$unset
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.canonical())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.canonical())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(Self::parse_or(raw.as_deref(), $name::$unset))
            }
        }
    };
}

string_enum! {
    /// Verb tense of a relation action.
    Tense, unset = Unset, {
        Future => "future",
        Past => "past",
        Present => "present",
        Unset => "unset",
    }
}

string_enum! {
    /// Sentiment polarity.
    SentimentPolarity, unset = Unset, {
        Positive => "positive",
        Negative => "negative",
        Neutral => "neutral",
        Unset => "unset",
    }
}

string_enum! {
    /// Status reported by the analysis service for a whole response.
    ResponseStatus, unset = Unset, {
        Ok => "OK",
        Error => "ERROR",
        Unset => "UNSET",
    }
}
