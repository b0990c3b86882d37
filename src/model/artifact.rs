//! Loading and verification of the frozen classifier artifact.
//!
//! The artifact is a JSON document holding the forest, the training-time
//! scaler statistics, and the column names the model was fitted against. A
//! default copy is embedded in the binary; `CHURNSCOPE_MODEL_PATH` points at
//! an override file, optionally pinned with `CHURNSCOPE_MODEL_SHA256`. Any
//! load failure is fatal at startup: there is no fallback model.

use std::{env, fs, path::Path};

use ndarray::Array1;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::model::ChurnLabel;
use crate::model::encoding::{self, CustomerRecord, FEATURE_COUNT, FEATURE_NAMES};
use crate::model::forest::{self, DecisionTree, TreeNode};
use crate::model::scaler::{self, ScalerStats, ScalingMode};

const EMBEDDED_ARTIFACT: &str = include_str!("../../assets/churn_forest.json");
const SUPPORTED_FORMAT: u32 = 1;

/// Env var naming an artifact file that overrides the embedded default.
pub const MODEL_PATH_ENV: &str = "CHURNSCOPE_MODEL_PATH";
/// Env var carrying the expected SHA-256 (hex) of the override artifact.
pub const MODEL_SHA256_ENV: &str = "CHURNSCOPE_MODEL_SHA256";

/// Errors that may occur while loading or verifying the artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Failed to read the artifact file.
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        /// Path that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The artifact is not valid JSON for the expected schema.
    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    /// The artifact was written by an unsupported format revision.
    #[error("Unsupported artifact format version {found}; expected {SUPPORTED_FORMAT}")]
    FormatVersion {
        /// Version found in the artifact.
        found: u32,
    },
    /// The artifact's column list has the wrong length.
    #[error("Artifact lists {found} feature columns; the model consumes {FEATURE_COUNT}")]
    ColumnCount {
        /// Number of columns listed in the artifact.
        found: usize,
    },
    /// A column name disagrees with the fitted order.
    #[error("Artifact column {index} is '{found}'; the fitted order requires '{expected}'")]
    ColumnMismatch {
        /// Column position.
        index: usize,
        /// Name required at this position.
        expected: String,
        /// Name the artifact stored.
        found: String,
    },
    /// The artifact carries no trees.
    #[error("Artifact contains no decision trees")]
    NoTrees,
    /// A tree has no nodes.
    #[error("Tree {tree} in the artifact is empty")]
    EmptyTree {
        /// Index of the offending tree.
        tree: usize,
    },
    /// A split references a feature column outside the vector.
    #[error("Tree {tree} node {node} splits on feature {feature}, outside the {FEATURE_COUNT}-column vector")]
    FeatureOutOfRange {
        /// Index of the offending tree.
        tree: usize,
        /// Index of the offending node.
        node: usize,
        /// Feature column the split references.
        feature: usize,
    },
    /// A split's child index is out of bounds or does not point forward.
    #[error("Tree {tree} node {node} has an invalid child index {child}")]
    BadChild {
        /// Index of the offending tree.
        tree: usize,
        /// Index of the offending node.
        node: usize,
        /// Offending child index.
        child: usize,
    },
    /// A leaf votes for a label outside {0, 1}.
    #[error("Tree {tree} node {node} votes for unknown label {label}")]
    BadLabel {
        /// Index of the offending tree.
        tree: usize,
        /// Index of the offending node.
        node: usize,
        /// Label the leaf carries.
        label: u8,
    },
    /// The stored scaler statistics are unusable.
    #[error("Artifact scaler column {column} has non-finite or negative statistics")]
    BadScaler {
        /// Scaler column (0 = tenure, 1 = TotalCharges, 2 = MonthlyCharges).
        column: usize,
    },
    /// An expected digest is not 64 hex characters.
    #[error("Invalid SHA-256 value; expected 64 hex characters, got '{0}'")]
    InvalidDigest(String),
    /// The override artifact does not match its pinned digest.
    #[error("Model artifact SHA-256 mismatch: expected {expected}, got {actual}")]
    DigestMismatch {
        /// Digest the environment pinned.
        expected: String,
        /// Digest of the file actually read.
        actual: String,
    },
}

/// The frozen classifier: forest, scaler statistics, and fitted column
/// order, loaded once at startup and injected read-only into the UI.
#[derive(Debug, Deserialize)]
pub struct ChurnModel {
    format_version: u32,
    feature_names: Vec<String>,
    scaler: ScalerStats,
    trees: Vec<DecisionTree>,
}

impl ChurnModel {
    /// Load the artifact, honoring the `CHURNSCOPE_MODEL_PATH` override.
    pub fn load() -> Result<Self, ArtifactError> {
        match env::var(MODEL_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                let expected = env::var(MODEL_SHA256_ENV).ok();
                Self::load_from_path(Path::new(path.trim()), expected.as_deref())
            }
            _ => Self::load_embedded(),
        }
    }

    /// Parse and validate the artifact bundled into the binary.
    pub fn load_embedded() -> Result<Self, ArtifactError> {
        Self::from_json(EMBEDDED_ARTIFACT)
    }

    /// Load an artifact file, verifying its digest when one is pinned.
    pub fn load_from_path(
        path: &Path,
        expected_sha256: Option<&str>,
    ) -> Result<Self, ArtifactError> {
        let bytes = fs::read(path).map_err(|source| ArtifactError::Read {
            path: path.display().to_string(),
            source,
        })?;
        if let Some(expected) = expected_sha256 {
            let expected = normalize_sha256(expected)?;
            let actual = sha256_hex(&bytes);
            if actual != expected {
                return Err(ArtifactError::DigestMismatch { expected, actual });
            }
        }
        let text = String::from_utf8_lossy(&bytes);
        Self::from_json(&text)
    }

    fn from_json(text: &str) -> Result<Self, ArtifactError> {
        let model: Self = serde_json::from_str(text)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        if self.format_version != SUPPORTED_FORMAT {
            return Err(ArtifactError::FormatVersion {
                found: self.format_version,
            });
        }
        if self.feature_names.len() != FEATURE_COUNT {
            return Err(ArtifactError::ColumnCount {
                found: self.feature_names.len(),
            });
        }
        for (index, (found, expected)) in
            self.feature_names.iter().zip(FEATURE_NAMES).enumerate()
        {
            if found != expected {
                return Err(ArtifactError::ColumnMismatch {
                    index,
                    expected: expected.to_string(),
                    found: found.clone(),
                });
            }
        }
        for column in 0..3 {
            let mean = self.scaler.mean[column];
            let std = self.scaler.std[column];
            if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                return Err(ArtifactError::BadScaler { column });
            }
        }
        if self.trees.is_empty() {
            return Err(ArtifactError::NoTrees);
        }
        for (tree_index, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ArtifactError::EmptyTree { tree: tree_index });
            }
            for (node_index, node) in tree.nodes.iter().enumerate() {
                match node {
                    TreeNode::Leaf { label } => {
                        if *label > 1 {
                            return Err(ArtifactError::BadLabel {
                                tree: tree_index,
                                node: node_index,
                                label: *label,
                            });
                        }
                    }
                    TreeNode::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        if *feature >= FEATURE_COUNT {
                            return Err(ArtifactError::FeatureOutOfRange {
                                tree: tree_index,
                                node: node_index,
                                feature: *feature,
                            });
                        }
                        for child in [*left, *right] {
                            // Forward-only children keep every walk finite.
                            if child <= node_index || child >= tree.nodes.len() {
                                return Err(ArtifactError::BadChild {
                                    tree: tree_index,
                                    node: node_index,
                                    child,
                                });
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Number of trees voting in the forest.
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Training-time scaler statistics stored alongside the forest.
    pub fn scaler_stats(&self) -> &ScalerStats {
        &self.scaler
    }

    /// Classify a customer using the compatibility scaling path.
    pub fn predict(&self, record: &CustomerRecord) -> ChurnLabel {
        self.predict_with_scaling(record, ScalingMode::default())
    }

    /// Classify a customer with an explicit scaling mode.
    pub fn predict_with_scaling(
        &self,
        record: &CustomerRecord,
        mode: ScalingMode,
    ) -> ChurnLabel {
        let mut vector = encoding::encode(record);
        scaler::scale_in_place(&mut vector, &self.scaler, mode);
        forest::vote(&self.trees, vector.view())
    }

    /// Classify an already-encoded, already-scaled feature vector.
    pub fn predict_vector(&self, features: &Array1<f64>) -> ChurnLabel {
        forest::vote(&self.trees, features.view())
    }
}

/// Validate and lowercase a SHA-256 hex digest.
pub fn normalize_sha256(value: &str) -> Result<String, ArtifactError> {
    let trimmed = value.trim();
    if trimmed.len() != 64 || !trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ArtifactError::InvalidDigest(trimmed.to_string()));
    }
    Ok(trimmed.to_ascii_lowercase())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::{Contract, InternetService, PaymentMethod, YesNo};
    use sha2::{Digest, Sha256};
    use std::io::Write;

    fn sample_record() -> CustomerRecord {
        CustomerRecord {
            senior_citizen: YesNo::Yes,
            partner: YesNo::No,
            dependents: YesNo::No,
            tenure: 12,
            online_security: InternetService::NoInternetService,
            online_backup: InternetService::No,
            device_protection: InternetService::No,
            tech_support: InternetService::No,
            contract: Contract::OneYear,
            paperless_billing: YesNo::Yes,
            payment_method: PaymentMethod::CreditCard,
            monthly_charges: 70.5,
            total_charges: 840.0,
        }
    }

    #[test]
    fn embedded_artifact_loads_and_validates() {
        let model = ChurnModel::load_embedded().unwrap();
        assert!(model.tree_count() > 0);
        assert!(model.scaler_stats().std.iter().all(|std| *std > 0.0));
    }

    #[test]
    fn prediction_is_deterministic_for_identical_input() {
        let model = ChurnModel::load_embedded().unwrap();
        let record = sample_record();
        assert_eq!(model.predict(&record), model.predict(&record));
        assert_eq!(
            model.predict_with_scaling(&record, ScalingMode::FrozenStats),
            model.predict_with_scaling(&record, ScalingMode::FrozenStats),
        );
    }

    #[test]
    fn wrong_format_version_is_rejected() {
        let text = include_str!("../../assets/churn_forest.json")
            .replace("\"format_version\": 1", "\"format_version\": 2");
        let err = ChurnModel::from_json(&text).unwrap_err();
        assert!(matches!(err, ArtifactError::FormatVersion { found: 2 }));
    }

    #[test]
    fn reordered_columns_are_rejected() {
        let text = include_str!("../../assets/churn_forest.json")
            .replace("\"SeniorCitizen\"", "\"seniorcitizen\"");
        let err = ChurnModel::from_json(&text).unwrap_err();
        assert!(matches!(err, ArtifactError::ColumnMismatch { index: 0, .. }));
    }

    #[test]
    fn malformed_trees_are_rejected() {
        let no_trees = r#"{
            "format_version": 1,
            "feature_names": ["SeniorCitizen","Partner","Dependents","tenure",
                "OnlineSecurity","OnlineBackup","DeviceProtection","TechSupport",
                "Contract","PaperlessBilling","PaymentMethod","MonthlyCharges",
                "TotalCharges"],
            "scaler": {"mean": [0,0,0], "std": [1,1,1]},
            "trees": []
        }"#;
        assert!(matches!(
            ChurnModel::from_json(no_trees).unwrap_err(),
            ArtifactError::NoTrees
        ));

        let back_edge = no_trees.replace(
            "\"trees\": []",
            "\"trees\": [{\"nodes\": [\
                {\"kind\":\"split\",\"feature\":0,\"threshold\":0.5,\"left\":0,\"right\":1},\
                {\"kind\":\"leaf\",\"label\":0}]}]",
        );
        assert!(matches!(
            ChurnModel::from_json(&back_edge).unwrap_err(),
            ArtifactError::BadChild { child: 0, .. }
        ));

        let bad_label = no_trees.replace(
            "\"trees\": []",
            "\"trees\": [{\"nodes\": [{\"kind\":\"leaf\",\"label\":7}]}]",
        );
        assert!(matches!(
            ChurnModel::from_json(&bad_label).unwrap_err(),
            ArtifactError::BadLabel { label: 7, .. }
        ));
    }

    #[test]
    fn path_load_verifies_pinned_digest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../../assets/churn_forest.json").as_bytes())
            .unwrap();
        let bytes = std::fs::read(file.path()).unwrap();
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = format!("{:x}", hasher.finalize());

        let model = ChurnModel::load_from_path(file.path(), Some(&digest)).unwrap();
        assert!(model.tree_count() > 0);

        let wrong = "0".repeat(64);
        let err = ChurnModel::load_from_path(file.path(), Some(&wrong)).unwrap_err();
        assert!(matches!(err, ArtifactError::DigestMismatch { .. }));
    }

    #[test]
    fn normalize_sha256_requires_hex() {
        assert!(normalize_sha256("nope").is_err());
        let upper = "A".repeat(64);
        assert_eq!(normalize_sha256(&upper).unwrap(), "a".repeat(64));
    }
}
