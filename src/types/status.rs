//! Well operating status and message localization

use serde::{Deserialize, Serialize};

/// Three-state operating condition derived from wellhead pressure and velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WellStatus {
    /// Flowing within design limits
    Optimal,
    /// Tubing velocity above the erosional limit
    Erosion,
    /// Wellhead pressure at or below zero, no natural flow
    Dead,
}

/// Language for operator-facing strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl WellStatus {
    /// Diagnostic message shown next to the status badge.
    pub const fn message(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Dead, Locale::En) => "Well cannot lift to surface - artificial lift required",
            (Self::Dead, Locale::Ar) => "النظام غير قادر على الرفع - يحتاج رفع صناعي",
            (Self::Erosion, Locale::En) => "Critical velocity - equipment erosion risk",
            (Self::Erosion, Locale::Ar) => "سرعة حرجة - خطر تآكل المعدات",
            (Self::Optimal, Locale::En) => "Operating within design limits",
            (Self::Optimal, Locale::Ar) => "يعمل ضمن الحدود التصميمية",
        }
    }

    /// Short badge label.
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Optimal, Locale::En) => "Optimal",
            (Self::Optimal, Locale::Ar) => "مثالي",
            (Self::Erosion, Locale::En) => "Warning",
            (Self::Erosion, Locale::Ar) => "تحذير",
            (Self::Dead, Locale::En) => "Dead",
            (Self::Dead, Locale::Ar) => "توقف",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "OPTIMAL",
            Self::Erosion => "EROSION",
            Self::Dead => "DEAD",
        }
    }
}

impl std::fmt::Display for WellStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(format!("unknown locale '{other}' (expected 'en' or 'ar')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&WellStatus::Erosion).unwrap();
        assert_eq!(json, "\"EROSION\"");
        assert_eq!(WellStatus::Dead.to_string(), "DEAD");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("AR".parse::<Locale>(), Ok(Locale::Ar));
        assert!("fr".parse::<Locale>().is_err());
    }
}
