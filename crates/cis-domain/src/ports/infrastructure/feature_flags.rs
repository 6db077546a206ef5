//! Feature Flag Port

/// Answers which optional dashboard features are switched on
pub trait FeatureFlagProvider: Send + Sync {
    /// Whether paid/enterprise display columns should render
    fn paid_enterprise_features_enabled(&self) -> bool;
}
