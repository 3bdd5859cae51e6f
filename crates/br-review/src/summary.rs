//! Review progress counts.

use std::collections::BTreeMap;

use serde::Serialize;

use br_model::Session;

/// Human-readable labels for the feature types the analysis step emits.
const FEATURE_LABELS: &[(&str, &str)] = &[
    ("pii.txt", "Social Security Number (USA)"),
    ("sin.txt", "Social Insurance Number (Canada)"),
    ("ccn.txt", "Credit card number"),
    ("telephone.txt", "Phone number"),
    ("email.txt", "Email address"),
    ("find.txt", "Regular expression"),
    ("lightgrep.txt", "Regular expression"),
    ("url.txt", "URL"),
    ("domain.txt", "Domain"),
    ("rfc822.txt", "Email/HTTP header (RFC822)"),
    ("httplogs.txt", "HTTP log"),
    ("gps.txt", "GPS data"),
    ("exif.txt", "EXIF metadata"),
    ("vcard.txt", "vCard (Virtual Contact File)"),
];

/// Feature type used when a feature carries none.
pub const UNKNOWN_FEATURE_TYPE: &str = "unknown";

/// Label for a feature type, falling back to the raw type name.
pub fn feature_type_label(feature_type: &str) -> &str {
    FEATURE_LABELS
        .iter()
        .find(|(name, _)| *name == feature_type)
        .map_or(feature_type, |&(_, label)| label)
}

/// Open and dismissed counts for one feature type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureTypeCount {
    pub feature_type: String,
    pub open: usize,
    pub dismissed: usize,
}

impl FeatureTypeCount {
    pub fn total(&self) -> usize {
        self.open + self.dismissed
    }
}

/// Snapshot of how far a review has progressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub features_total: usize,
    pub features_dismissed: usize,
    pub features_open: usize,
    pub features_annotated: usize,
    pub files_total: usize,
    pub files_verified: usize,
    /// Per feature type, ordered by type name.
    pub by_type: Vec<FeatureTypeCount>,
}

impl ReviewSummary {
    pub fn from_session(session: &Session) -> Self {
        let mut by_type: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        let mut summary = Self {
            features_total: session.features().len(),
            files_total: session.files().len(),
            ..Self::default()
        };

        for feature in session.features() {
            let counts = by_type
                .entry(feature.feature_type().unwrap_or(UNKNOWN_FEATURE_TYPE))
                .or_default();
            if feature.is_dismissed() {
                summary.features_dismissed += 1;
                counts.1 += 1;
            } else {
                counts.0 += 1;
            }
            if feature.note().is_some() {
                summary.features_annotated += 1;
            }
        }
        summary.features_open = summary.features_total - summary.features_dismissed;
        summary.files_verified = session.files().iter().filter(|f| f.is_verified()).count();
        summary.by_type = by_type
            .into_iter()
            .map(|(feature_type, (open, dismissed))| FeatureTypeCount {
                feature_type: feature_type.to_string(),
                open,
                dismissed,
            })
            .collect();
        summary
    }

    /// True once every feature is dismissed and every file verified.
    pub fn is_complete(&self) -> bool {
        self.features_open == 0 && self.files_verified == self.files_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use br_model::{Feature, File};

    #[test]
    fn labels_known_types() {
        assert_eq!(feature_type_label("ccn.txt"), "Credit card number");
        assert_eq!(feature_type_label("custom.txt"), "custom.txt");
    }

    #[test]
    fn empty_session_summary_is_complete() {
        let summary = ReviewSummary::from_session(&Session::default());
        assert_eq!(summary, ReviewSummary::default());
        assert!(summary.is_complete());
    }

    #[test]
    fn features_without_type_group_as_unknown() {
        let session = Session::new(
            vec![Feature::new(1), Feature::new(2).with_dismissed(true)],
            vec![File::new(1)],
        )
        .unwrap();
        let summary = ReviewSummary::from_session(&session);
        assert_eq!(
            summary.by_type,
            vec![FeatureTypeCount {
                feature_type: UNKNOWN_FEATURE_TYPE.to_string(),
                open: 1,
                dismissed: 1,
            }]
        );
        assert!(!summary.is_complete());
    }
}
