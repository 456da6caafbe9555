//! Soil evaluation core.
//!
//! `evaluate` is a pure function from a set of measurements to a full
//! analysis: overall status, detected issues, textual recommendations,
//! fertilizer suggestions, and crop suggestions. No I/O, no DOM — this
//! module is fully testable on the host target.

use serde::{Deserialize, Serialize};

/// One soil measurement set, as entered in the dashboard form.
///
/// All values are required and assumed finite; the form rejects
/// non-numeric input before a sample is ever constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    /// Soil moisture (%)
    pub moisture: f64,
    /// pH value, neutral band is 5.5..=7.5
    pub ph: f64,
    /// Soil temperature (°C)
    pub temperature: f64,
    /// Nitrogen content (mg/kg)
    pub nitrogen: f64,
    /// Phosphorus content (mg/kg)
    pub phosphorus: f64,
    /// Potassium content (mg/kg)
    pub potassium: f64,
    /// Organic matter (%)
    pub organic_matter: f64,
}

/// Overall soil health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SoilStatus {
    Good,
    Moderate,
    Poor,
    Acidic,
    Alkaline,
}

impl SoilStatus {
    /// Display label, e.g. "GOOD".
    pub fn label(&self) -> &'static str {
        match self {
            SoilStatus::Good => "GOOD",
            SoilStatus::Moderate => "MODERATE",
            SoilStatus::Poor => "POOR",
            SoilStatus::Acidic => "ACIDIC",
            SoilStatus::Alkaline => "ALKALINE",
        }
    }

    /// CSS class suffix used by the results panel, e.g. "good".
    pub fn css_class(&self) -> &'static str {
        match self {
            SoilStatus::Good => "good",
            SoilStatus::Moderate => "moderate",
            SoilStatus::Poor => "poor",
            SoilStatus::Acidic => "acidic",
            SoilStatus::Alkaline => "alkaline",
        }
    }
}

/// A fertilizer suggestion. All entries come from a static table keyed
/// by threshold conditions, so the fields are static strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FertilizerRec {
    /// Fertilizer name, e.g. "Lime"
    pub kind: &'static str,
    /// What it does, e.g. "Raise soil pH"
    pub description: &'static str,
    /// Application rate, e.g. "5-10 lbs per 100 sq ft"
    pub rate: &'static str,
}

/// Complete analysis derived from one [`SoilSample`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_status: SoilStatus,
    /// Human-readable descriptions of out-of-range measurements,
    /// in rule order.
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub fertilizers: Vec<FertilizerRec>,
    pub crops: Vec<&'static str>,
}

/// Evaluate a soil sample against the fixed threshold rule set.
///
/// The rules run in a fixed order and the status updates are
/// order-sensitive: a low nitrogen reading always overwrites whatever
/// the pH rule decided, while low phosphorus/potassium/organic matter
/// only demote a `Good` status and never touch an existing
/// `Acidic`/`Alkaline`/`Poor`. This asymmetry is intentional behavior
/// of the rule set and is pinned by the tests below.
pub fn evaluate(sample: &SoilSample) -> AnalysisResult {
    let mut status = SoilStatus::Good;
    let mut issues: Vec<String> = Vec::new();

    if sample.ph < 5.5 {
        status = SoilStatus::Acidic;
        issues.push(format!("pH level ({}) is too acidic", sample.ph));
    } else if sample.ph > 7.5 {
        status = SoilStatus::Alkaline;
        issues.push(format!("pH level ({}) is too alkaline", sample.ph));
    }

    if sample.nitrogen / 10_000.0 < 0.2 {
        // Unconditional overwrite: nitrogen deficiency wins over a pH
        // abnormality.
        status = SoilStatus::Poor;
        issues.push(format!(
            "Nitrogen level ({} mg/kg) is too low",
            sample.nitrogen
        ));
    }
    if sample.phosphorus / 10_000.0 < 0.02 {
        if status == SoilStatus::Good {
            status = SoilStatus::Moderate;
        }
        issues.push(format!(
            "Phosphorus level ({} mg/kg) is too low",
            sample.phosphorus
        ));
    }
    if sample.potassium / 10_000.0 < 0.3 {
        if status == SoilStatus::Good {
            status = SoilStatus::Moderate;
        }
        issues.push(format!(
            "Potassium level ({} mg/kg) is too low",
            sample.potassium
        ));
    }
    if sample.organic_matter < 2.0 {
        if status == SoilStatus::Good {
            status = SoilStatus::Moderate;
        }
        issues.push(format!(
            "Organic matter ({}%) is too low",
            sample.organic_matter
        ));
    }

    let recommendations = if issues.is_empty() {
        vec!["Your soil is in good condition! Maintain with regular organic amendments.".to_string()]
    } else {
        vec![format!(
            "Your soil has the following issues: {}",
            issues.join(", ")
        )]
    };

    let fertilizers = fertilizer_recommendations(sample);
    let crops = crop_suggestions(status);

    AnalysisResult {
        overall_status: status,
        issues,
        recommendations,
        fertilizers,
        crops,
    }
}

/// Fertilizer suggestions from the static threshold table.
///
/// Independent of the overall status: each row is its own conditional
/// append, in table order.
fn fertilizer_recommendations(sample: &SoilSample) -> Vec<FertilizerRec> {
    let mut recs = Vec::new();

    if sample.ph < 5.5 {
        recs.push(FertilizerRec {
            kind: "Lime",
            description: "Raise soil pH",
            rate: "5-10 lbs per 100 sq ft",
        });
    }
    if sample.ph > 7.5 {
        recs.push(FertilizerRec {
            kind: "Sulfur",
            description: "Lower soil pH",
            rate: "1-2 lbs per 100 sq ft",
        });
    }
    if sample.nitrogen < 2000.0 {
        recs.push(FertilizerRec {
            kind: "Nitrogen Fertilizer",
            description: "Boost nitrogen levels",
            rate: "1 lb per 100 sq ft",
        });
    }
    if sample.phosphorus < 200.0 {
        recs.push(FertilizerRec {
            kind: "Phosphorus Fertilizer",
            description: "Boost phosphorus",
            rate: "1 lb per 100 sq ft",
        });
    }
    if sample.potassium < 3000.0 {
        recs.push(FertilizerRec {
            kind: "Potassium Fertilizer",
            description: "Boost potassium",
            rate: "1.5 lbs per 100 sq ft",
        });
    }
    if sample.organic_matter < 2.0 {
        recs.push(FertilizerRec {
            kind: "Compost",
            description: "Improve organic matter",
            rate: "2-3 inches layer",
        });
    }

    recs
}

/// Crop suggestions are a pure function of the final status.
fn crop_suggestions(status: SoilStatus) -> Vec<&'static str> {
    match status {
        SoilStatus::Good => vec!["Wheat", "Rice", "Corn"],
        SoilStatus::Acidic => vec!["Potato", "Blueberry"],
        SoilStatus::Alkaline => vec!["Beetroot", "Cabbage"],
        SoilStatus::Poor | SoilStatus::Moderate => vec!["Clover", "Sunflower"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A sample where every measurement is comfortably in range.
    fn healthy_sample() -> SoilSample {
        SoilSample {
            moisture: 40.0,
            ph: 6.5,
            temperature: 22.0,
            nitrogen: 3000.0,
            phosphorus: 250.0,
            potassium: 3500.0,
            organic_matter: 4.0,
        }
    }

    #[test]
    fn healthy_soil_is_good_with_no_issues() {
        let result = evaluate(&healthy_sample());

        assert_eq!(result.overall_status, SoilStatus::Good);
        assert!(result.issues.is_empty(), "Should detect no issues");
        assert!(result.fertilizers.is_empty(), "Should suggest no fertilizer");
        assert_eq!(result.crops, vec!["Wheat", "Rice", "Corn"]);
        assert_eq!(
            result.recommendations,
            vec!["Your soil is in good condition! Maintain with regular organic amendments."]
        );
    }

    #[test]
    fn boundary_values_still_count_as_good() {
        // 5.5 and 7.5 are inside the neutral pH band; the thresholds
        // themselves are not deficiencies.
        let sample = SoilSample {
            ph: 5.5,
            nitrogen: 2000.0,
            phosphorus: 200.0,
            potassium: 3000.0,
            organic_matter: 2.0,
            ..healthy_sample()
        };
        let result = evaluate(&sample);

        assert_eq!(result.overall_status, SoilStatus::Good);
        assert!(result.issues.is_empty());
        assert!(result.fertilizers.is_empty());
    }

    #[test]
    fn low_nitrogen_overrides_acidic_status() {
        let sample = SoilSample {
            ph: 5.0,
            nitrogen: 1000.0,
            ..healthy_sample()
        };
        let result = evaluate(&sample);

        // The nitrogen rule overwrites unconditionally, so POOR wins
        // over ACIDIC even though the pH rule fired first.
        assert_eq!(result.overall_status, SoilStatus::Poor);
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.issues[0], "pH level (5) is too acidic");
        assert_eq!(result.issues[1], "Nitrogen level (1000 mg/kg) is too low");
        assert_eq!(result.crops, vec!["Clover", "Sunflower"]);
    }

    #[test]
    fn low_organic_matter_does_not_override_acidic_status() {
        let sample = SoilSample {
            ph: 5.0,
            organic_matter: 1.0,
            ..healthy_sample()
        };
        let result = evaluate(&sample);

        // The organic matter rule only demotes GOOD, so the status
        // stays ACIDIC, but the issue and the Compost suggestion are
        // still produced.
        assert_eq!(result.overall_status, SoilStatus::Acidic);
        assert!(result
            .issues
            .iter()
            .any(|i| i == "Organic matter (1%) is too low"));
        assert!(result.fertilizers.iter().any(|f| f.kind == "Compost"));
        assert_eq!(result.crops, vec!["Potato", "Blueberry"]);
    }

    #[test]
    fn low_phosphorus_does_not_override_alkaline_status() {
        let sample = SoilSample {
            ph: 8.0,
            phosphorus: 100.0,
            ..healthy_sample()
        };
        let result = evaluate(&sample);

        assert_eq!(result.overall_status, SoilStatus::Alkaline);
        let kinds: Vec<_> = result.fertilizers.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec!["Sulfur", "Phosphorus Fertilizer"]);
        assert_eq!(result.crops, vec!["Beetroot", "Cabbage"]);
    }

    #[test]
    fn low_phosphorus_alone_demotes_to_moderate() {
        let sample = SoilSample {
            phosphorus: 100.0,
            ..healthy_sample()
        };
        let result = evaluate(&sample);

        assert_eq!(result.overall_status, SoilStatus::Moderate);
        assert_eq!(
            result.recommendations,
            vec!["Your soil has the following issues: Phosphorus level (100 mg/kg) is too low"]
        );
    }

    #[test]
    fn fertilizer_table_fires_independently_of_status() {
        // Lime fires on the pH condition even though the final status
        // is POOR from nitrogen, not ACIDIC.
        let sample = SoilSample {
            ph: 5.0,
            nitrogen: 1000.0,
            ..healthy_sample()
        };
        let result = evaluate(&sample);

        let kinds: Vec<_> = result.fertilizers.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec!["Lime", "Nitrogen Fertilizer"]);
    }

    #[test]
    fn all_deficiencies_produce_full_fertilizer_list_in_table_order() {
        let sample = SoilSample {
            moisture: 10.0,
            ph: 5.0,
            temperature: 22.0,
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 100.0,
            organic_matter: 0.5,
        };
        let result = evaluate(&sample);

        assert_eq!(result.overall_status, SoilStatus::Poor);
        let kinds: Vec<_> = result.fertilizers.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                "Lime",
                "Nitrogen Fertilizer",
                "Phosphorus Fertilizer",
                "Potassium Fertilizer",
                "Compost"
            ]
        );
        assert_eq!(result.issues.len(), 5);
    }

    #[test]
    fn evaluate_is_deterministic() {
        let sample = SoilSample {
            ph: 8.0,
            potassium: 500.0,
            organic_matter: 1.5,
            ..healthy_sample()
        };
        assert_eq!(evaluate(&sample), evaluate(&sample));
    }

    #[test]
    fn status_labels_match_css_classes() {
        for status in [
            SoilStatus::Good,
            SoilStatus::Moderate,
            SoilStatus::Poor,
            SoilStatus::Acidic,
            SoilStatus::Alkaline,
        ] {
            assert_eq!(status.label().to_lowercase(), status.css_class());
        }
    }
}
