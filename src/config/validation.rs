//! Config validation: unknown-key detection with edit-distance suggestions
//! and physical range checks on the default scenario.
//!
//! The raw TOML is first walked as a `toml::Value` tree and every dotted key
//! is compared against the known layout of [`SimConfig`](super::SimConfig).
//! Unknown keys produce warnings only; serde deserialization runs afterwards.

use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " — did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

const BOUND_NAMES: [&str; 5] = [
    "reservoir_pressure",
    "water_cut",
    "oil_api",
    "tubing_id",
    "production_rate",
];

/// Returns the complete set of valid dotted key paths for `SimConfig`.
///
/// Must be kept in step with the structs in `well_config.rs` and
/// `types::params`.
pub fn known_config_keys() -> HashSet<String> {
    let fixed: &[&str] = &[
        // [well]
        "well",
        "well.name",
        "well.field",
        // [scenario]
        "scenario",
        "scenario.reservoirPressure",
        "scenario.waterCut",
        "scenario.oilAPI",
        "scenario.tubingID",
        "scenario.productionRate",
        "scenario.depth",
        "scenario.bubblePointPressure",
        "scenario.productivityIndex",
        // [bounds]
        "bounds",
        // [traverse]
        "traverse",
        "traverse.points",
        "traverse.locale",
        // [ipr]
        "ipr",
        "ipr.points",
        "ipr.fetkovich_n",
        // [server]
        "server",
        "server.addr",
    ];

    let mut keys: HashSet<String> = fixed.iter().map(|k| (*k).to_string()).collect();
    for name in BOUND_NAMES {
        keys.insert(format!("bounds.{name}"));
        keys.insert(format!("bounds.{name}.min"));
        keys.insert(format!("bounds.{name}.max"));
    }
    keys
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// A table `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Levenshtein edit distance, counted in chars.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties resolve to the lexicographically smallest key so output is stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<String>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(unknown, k), k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.clone())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// Never fails on unknown keys. Parse errors are left to serde.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Physical Range Validation
// ============================================================================

/// Validate the default scenario of a parsed config.
///
/// Returns (errors, warnings). Errors are values the engine would turn into
/// non-finite output; warnings are values outside the operator control ranges.
pub fn validate_physical_ranges(config: &super::SimConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let s = &config.scenario;

    if s.reservoir_pressure <= 0.0 {
        errors.push(format!(
            "scenario.reservoirPressure = {:.1} must be > 0 (used as divisor)",
            s.reservoir_pressure
        ));
    }
    if let Some(pi) = s.productivity_index {
        if pi <= 0.0 {
            errors.push(format!(
                "scenario.productivityIndex = {pi:.3} must be > 0 (used as divisor)"
            ));
        }
    }
    if let Some(depth) = s.depth {
        if depth <= 0.0 {
            errors.push(format!("scenario.depth = {depth:.1} must be > 0"));
        }
    }
    if !(0.0..=1.0).contains(&s.water_cut) {
        errors.push(format!(
            "scenario.waterCut = {:.3} is outside physical range (0-1)",
            s.water_cut
        ));
    }

    let warnings = s
        .check(&config.bounds)
        .into_iter()
        .map(|w| ValidationWarning {
            field: format!("scenario.{}", w.field),
            message: w.message,
            suggestion: None,
        })
        .collect();

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    #[test]
    fn test_levenshtein_identical() {
        assert_eq!(levenshtein("hello", "hello"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein("fetkovich_m", "fetkovich_n"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_walk_toml_keys_nested() {
        let toml: toml::Value = r#"
            [bounds.water_cut]
            min = 0.0
        "#
        .parse()
        .unwrap();
        let keys = walk_toml_keys(&toml, "");
        assert!(keys.contains(&"bounds".to_string()));
        assert!(keys.contains(&"bounds.water_cut".to_string()));
        assert!(keys.contains(&"bounds.water_cut.min".to_string()));
    }

    #[test]
    fn test_typo_key_produces_warning_with_suggestion() {
        let toml_str = r#"
[ipr]
fetkovitch_n = 0.7
"#;
        let warnings = validate_unknown_keys(toml_str);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "ipr.fetkovitch_n");
        assert_eq!(warnings[0].suggestion.as_deref(), Some("ipr.fetkovich_n"));
    }

    #[test]
    fn test_garbage_key_has_no_suggestion() {
        let known = known_config_keys();
        assert!(suggest_correction("completely_unrelated_garbage_key_xyz", &known).is_none());
    }

    #[test]
    fn test_default_serialization_has_only_known_keys() {
        let toml_str = SimConfig::default().to_toml().unwrap();
        let warnings = validate_unknown_keys(&toml_str);
        assert!(
            warnings.is_empty(),
            "Default config produced unknown keys: {:?}",
            warnings.iter().map(|w| &w.field).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_physical_range_defaults_clean() {
        let (errors, warnings) = validate_physical_ranges(&SimConfig::default());
        assert!(errors.is_empty(), "Defaults should produce no errors: {errors:?}");
        assert!(warnings.is_empty(), "Defaults should produce no warnings: {warnings:?}");
    }

    #[test]
    fn test_zero_productivity_index_is_error() {
        let mut config = SimConfig::default();
        config.scenario.productivity_index = Some(0.0);
        let (errors, _) = validate_physical_ranges(&config);
        assert!(errors.iter().any(|e| e.contains("productivityIndex")));
    }

    #[test]
    fn test_water_cut_above_one_is_error() {
        let mut config = SimConfig::default();
        config.scenario.water_cut = 1.2;
        let (errors, _) = validate_physical_ranges(&config);
        assert!(errors.iter().any(|e| e.contains("waterCut")));
    }

    #[test]
    fn test_scenario_outside_bounds_warns() {
        let mut config = SimConfig::default();
        config.scenario.oil_api = 60.0;
        let (errors, warnings) = validate_physical_ranges(&config);
        assert!(errors.is_empty());
        assert!(warnings.iter().any(|w| w.field == "scenario.oilAPI"));
    }
}
