use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Value for the `dir` attribute.
    #[must_use]
    pub const fn attr(self) -> &'static str {
        match self {
            Self::LeftToRight => "ltr",
            Self::RightToLeft => "rtl",
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

/// Supported site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ar,
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LocaleMeta {
    pub locale: Locale,
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        locale: Locale::En,
        code: "en",
        name: "English",
        rtl: false,
    },
    LocaleMeta {
        locale: Locale::Ar,
        code: "ar",
        name: "العربية",
        rtl: true,
    },
];

/// Locale used when neither a stored preference nor an environment hint applies.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    #[must_use]
    pub fn meta(self) -> &'static LocaleMeta {
        LOCALE_META
            .iter()
            .find(|m| m.locale == self)
            .unwrap_or(&LOCALE_META[0])
    }

    /// Derived from the tag; there is no independent direction state.
    #[must_use]
    pub fn direction(self) -> Direction {
        if self.meta().rtl {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }

    /// The other supported locale.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Parse a bare tag (`ar`) or a qualified hint such as `ar-EG` or
    /// `ar_EG.UTF-8`. Matching is case-insensitive on the primary subtag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default();
        LOCALE_META
            .iter()
            .find(|m| m.code.eq_ignore_ascii_case(primary))
            .map(|m| m.locale)
    }
}

impl FromStr for Locale {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ContentError::UnknownLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_tag() {
        assert_eq!(Locale::En.direction(), Direction::LeftToRight);
        assert_eq!(Locale::Ar.direction(), Direction::RightToLeft);
        assert_eq!(Locale::Ar.direction().attr(), "rtl");
    }

    #[test]
    fn parses_qualified_hints() {
        assert_eq!(Locale::from_tag("ar"), Some(Locale::Ar));
        assert_eq!(Locale::from_tag("ar-EG"), Some(Locale::Ar));
        assert_eq!(Locale::from_tag("AR_eg.UTF-8"), Some(Locale::Ar));
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("de".parse::<Locale>().is_err());
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn other_flips() {
        assert_eq!(Locale::En.other(), Locale::Ar);
        assert_eq!(Locale::Ar.other().other(), Locale::Ar);
    }
}
