use crate::error::{CalcError, Result};
use std::fmt;
use std::str::FromStr;

/// How integer digits are split into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingStyle {
    /// Groups of three: `1,234,567`.
    Standard,
    /// Last group of three, then groups of two: `12,34,567`.
    Indian,
}

/// Number-rendering conventions of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    tag: &'static str,
    grouping_separator: &'static str,
    decimal_separator: &'static str,
    grouping: GroupingStyle,
}

impl Locale {
    pub const EN_US: Locale = Locale::new("en-US", ",", ".", GroupingStyle::Standard);
    pub const EN_GB: Locale = Locale::new("en-GB", ",", ".", GroupingStyle::Standard);
    pub const DE_DE: Locale = Locale::new("de-DE", ".", ",", GroupingStyle::Standard);
    pub const DE_CH: Locale = Locale::new("de-CH", "\u{2019}", ".", GroupingStyle::Standard);
    pub const FR_FR: Locale = Locale::new("fr-FR", "\u{202f}", ",", GroupingStyle::Standard);
    pub const HI_IN: Locale = Locale::new("hi-IN", ",", ".", GroupingStyle::Indian);
    pub const EN_IN: Locale = Locale::new("en-IN", ",", ".", GroupingStyle::Indian);

    /// Locales that can be resolved by tag, in lookup order.
    pub const BUILTIN: [Locale; 7] = [
        Locale::EN_US,
        Locale::EN_GB,
        Locale::DE_DE,
        Locale::DE_CH,
        Locale::FR_FR,
        Locale::HI_IN,
        Locale::EN_IN,
    ];

    const fn new(
        tag: &'static str,
        grouping_separator: &'static str,
        decimal_separator: &'static str,
        grouping: GroupingStyle,
    ) -> Self {
        Self {
            tag,
            grouping_separator,
            decimal_separator,
            grouping,
        }
    }

    /// Resolves a locale from a BCP-47 tag or a POSIX locale name.
    ///
    /// `de_DE.UTF-8`, `DE-de` and `de-DE` all resolve to the same locale. A
    /// bare language picks the first built-in region for it. `C` and `POSIX`
    /// resolve to `en-US`.
    pub fn resolve(tag: &str) -> Result<Self> {
        let normalized = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-");

        if normalized.eq_ignore_ascii_case("C") || normalized.eq_ignore_ascii_case("POSIX") {
            return Ok(Self::EN_US);
        }

        let exact = Self::BUILTIN
            .iter()
            .find(|locale| locale.tag.eq_ignore_ascii_case(&normalized));
        let by_language = || {
            Self::BUILTIN.iter().find(|locale| {
                !normalized.contains('-') && locale.language().eq_ignore_ascii_case(&normalized)
            })
        };

        match exact.or_else(by_language) {
            Some(locale) => {
                tracing::debug!(requested = tag, resolved = locale.tag, "resolved locale");
                Ok(*locale)
            }
            None => Err(CalcError::UnknownLocale(tag.to_string())),
        }
    }

    /// Host locale variables, in the order POSIX gives them precedence for
    /// number formatting.
    pub const HOST_VARIABLES: [&'static str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

    /// Picks the locale from the first non-empty host variable, read through
    /// `lookup`. Falls back to `en-US` when none is set or the value names no
    /// built-in locale.
    pub fn from_host<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = Self::HOST_VARIABLES
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty());

        match value.map(|value| (Self::resolve(&value), value)) {
            Some((Ok(locale), _)) => locale,
            Some((Err(_), value)) => {
                tracing::debug!(host = %value, "host locale not built in, using en-US");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }

    pub fn decimal_separator(&self) -> &'static str {
        self.decimal_separator
    }

    pub fn grouping_separator(&self) -> &'static str {
        self.grouping_separator
    }

    pub fn grouping(&self) -> GroupingStyle {
        self.grouping
    }

    /// Inserts grouping separators into a run of ASCII integer digits.
    pub fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 2 * self.grouping_separator.len());
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && self.starts_group(len - i) {
                out.push_str(self.grouping_separator);
            }
            out.push(c);
        }
        out
    }

    /// Whether a separator goes before a digit with `remaining` digits left,
    /// that digit included.
    fn starts_group(&self, remaining: usize) -> bool {
        match self.grouping {
            GroupingStyle::Standard => remaining % 3 == 0,
            GroupingStyle::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN_US
    }
}

impl FromStr for Locale {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)
    }
}
