//! Crop recommendation inference service
//!
//! Holds the trained classifier and label-encoder artifacts, loaded once at
//! process start and read-only afterwards. The classifier is a Gaussian
//! naive Bayes over the (temperature, humidity, rainfall) feature vector;
//! the encoder maps class ids back to crop label strings.

use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Number of features the classifier was trained on
pub const FEATURE_COUNT: usize = 3;

/// Trained Gaussian naive Bayes parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierArtifact {
    /// Per-class feature means, one row per class
    pub theta: Vec<[f64; FEATURE_COUNT]>,
    /// Per-class feature variances, one row per class
    pub var: Vec<[f64; FEATURE_COUNT]>,
    /// Per-class log prior probabilities
    pub class_log_prior: Vec<f64>,
}

/// Label encoder: class id -> crop label string
#[derive(Debug, Clone, Deserialize)]
pub struct LabelEncoderArtifact {
    pub classes: Vec<String>,
}

/// Immutable inference service shared by all requests
#[derive(Debug)]
pub struct InferenceService {
    model: ClassifierArtifact,
    labels: Vec<String>,
}

impl InferenceService {
    /// Load both artifacts from disk. Any missing or corrupt artifact is
    /// fatal: the caller must refuse to serve traffic.
    pub fn load(model_path: &Path, encoder_path: &Path) -> AppResult<Self> {
        let model = read_artifact::<ClassifierArtifact>(model_path)?;
        let encoder = read_artifact::<LabelEncoderArtifact>(encoder_path)?;
        Self::from_artifacts(model, encoder)
    }

    /// Build the service from already-decoded artifacts, validating that
    /// their shapes agree.
    pub fn from_artifacts(
        model: ClassifierArtifact,
        encoder: LabelEncoderArtifact,
    ) -> AppResult<Self> {
        let classes = encoder.classes.len();
        if classes == 0 {
            return Err(AppError::ModelArtifact(
                "label encoder has no classes".to_string(),
            ));
        }
        if model.theta.len() != classes
            || model.var.len() != classes
            || model.class_log_prior.len() != classes
        {
            return Err(AppError::ModelArtifact(format!(
                "classifier rows ({} means, {} variances, {} priors) do not match {} labels",
                model.theta.len(),
                model.var.len(),
                model.class_log_prior.len(),
                classes
            )));
        }
        if model.var.iter().flatten().any(|v| *v <= 0.0) {
            return Err(AppError::ModelArtifact(
                "classifier variances must be positive".to_string(),
            ));
        }

        Ok(Self {
            model,
            labels: encoder.classes,
        })
    }

    /// Predict the crop label for a feature vector. All three features are
    /// required; a missing one is a client input error.
    pub fn predict(
        &self,
        temperature: Option<f64>,
        humidity: Option<f64>,
        rainfall: Option<f64>,
    ) -> AppResult<String> {
        let features = [
            required(temperature, "temperature")?,
            required(humidity, "humidity")?,
            required(rainfall, "rainfall")?,
        ];

        let best = (0..self.labels.len())
            .map(|class| (class, self.log_likelihood(class, &features)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(class, _)| class)
            .ok_or_else(|| AppError::ModelArtifact("empty class set".to_string()))?;

        Ok(self.labels[best].clone())
    }

    /// Crop labels known to the decoder
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Joint log likelihood of the feature vector under one class
    fn log_likelihood(&self, class: usize, features: &[f64; FEATURE_COUNT]) -> f64 {
        let means = &self.model.theta[class];
        let vars = &self.model.var[class];
        let mut total = self.model.class_log_prior[class];
        for i in 0..FEATURE_COUNT {
            let diff = features[i] - means[i];
            total += -0.5 * (2.0 * std::f64::consts::PI * vars[i]).ln()
                - diff * diff / (2.0 * vars[i]);
        }
        total
    }
}

fn required(value: Option<f64>, name: &str) -> AppResult<f64> {
    value.ok_or_else(|| AppError::Input(format!("Missing required feature: {}", name)))
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::ModelArtifact(format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::ModelArtifact(format!("cannot decode {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three well-separated classes over (temperature, humidity, rainfall)
    fn test_service() -> InferenceService {
        let model = ClassifierArtifact {
            theta: vec![
                [25.0, 80.0, 200.0], // rice: hot, humid, heavy rain
                [20.0, 60.0, 80.0],  // wheat: mild, moderate
                [24.0, 50.0, 30.0],  // cotton: warm, dry
            ],
            var: vec![
                [4.0, 25.0, 400.0],
                [4.0, 25.0, 400.0],
                [4.0, 25.0, 400.0],
            ],
            class_log_prior: vec![-1.0986, -1.0986, -1.0986],
        };
        let encoder = LabelEncoderArtifact {
            classes: vec!["rice".to_string(), "wheat".to_string(), "cotton".to_string()],
        };
        InferenceService::from_artifacts(model, encoder).unwrap()
    }

    #[test]
    fn test_predict_returns_known_label() {
        let service = test_service();
        let label = service.predict(Some(25.0), Some(80.0), Some(200.0)).unwrap();
        assert!(service.labels().contains(&label));
        assert_eq!(label, "rice");
    }

    #[test]
    fn test_predict_separates_classes() {
        let service = test_service();
        assert_eq!(service.predict(Some(20.0), Some(60.0), Some(80.0)).unwrap(), "wheat");
        assert_eq!(service.predict(Some(24.0), Some(50.0), Some(30.0)).unwrap(), "cotton");
    }

    #[test]
    fn test_missing_feature_is_input_error() {
        let service = test_service();
        let err = service.predict(Some(25.0), None, Some(200.0)).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
        assert!(err.to_string().contains("humidity"));
    }

    #[test]
    fn test_mismatched_artifacts_rejected() {
        let model = ClassifierArtifact {
            theta: vec![[25.0, 80.0, 200.0]],
            var: vec![[4.0, 25.0, 400.0]],
            class_log_prior: vec![0.0],
        };
        let encoder = LabelEncoderArtifact {
            classes: vec!["rice".to_string(), "wheat".to_string()],
        };
        let err = InferenceService::from_artifacts(model, encoder).unwrap_err();
        assert!(matches!(err, AppError::ModelArtifact(_)));
    }

    #[test]
    fn test_empty_encoder_rejected() {
        let model = ClassifierArtifact {
            theta: vec![],
            var: vec![],
            class_log_prior: vec![],
        };
        let encoder = LabelEncoderArtifact { classes: vec![] };
        assert!(InferenceService::from_artifacts(model, encoder).is_err());
    }

    #[test]
    fn test_nonpositive_variance_rejected() {
        let model = ClassifierArtifact {
            theta: vec![[25.0, 80.0, 200.0]],
            var: vec![[4.0, 0.0, 400.0]],
            class_log_prior: vec![0.0],
        };
        let encoder = LabelEncoderArtifact {
            classes: vec!["rice".to_string()],
        };
        assert!(InferenceService::from_artifacts(model, encoder).is_err());
    }

    #[test]
    fn test_load_missing_file_is_artifact_error() {
        let err = InferenceService::load(
            Path::new("/nonexistent/model.json"),
            Path::new("/nonexistent/encoder.json"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::ModelArtifact(_)));
    }
}
