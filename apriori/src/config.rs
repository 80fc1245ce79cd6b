use crate::error::{AprioriError, Result};

/// What rule generation does when an antecedent turns out to have zero support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroSupportPolicy {
    /// Abort with `AprioriError::ZeroSupportAntecedent`.
    #[default]
    Fail,
    /// Treat the confidence as undefined: no rule, no recursion.
    Skip,
}

/// Parameters for a mining run.
#[derive(Debug, Clone)]
pub struct MiningConfig {
    pub min_support: f64,
    pub min_confidence: f64,
    /// Evaluate candidate supports of one level on the rayon pool.
    pub parallel: bool,
    /// Keep every level's candidate list in the result.
    pub retain_candidates: bool,
    pub zero_support_policy: ZeroSupportPolicy,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.005,
            min_confidence: 0.6,
            parallel: true,
            retain_candidates: true,
            zero_support_policy: ZeroSupportPolicy::Fail,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_retain_candidates(mut self, retain: bool) -> Self {
        self.retain_candidates = retain;
        self
    }

    pub fn with_zero_support_policy(mut self, policy: ZeroSupportPolicy) -> Self {
        self.zero_support_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_threshold("min_support", self.min_support)?;
        check_threshold("min_confidence", self.min_confidence)
    }
}

pub(crate) fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    // NaN fails the range check as well
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AprioriError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_driver() {
        let config = MiningConfig::default();
        assert_eq!(config.min_support, 0.005);
        assert_eq!(config.min_confidence, 0.6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        let err = MiningConfig::new(1.5, 0.5).validate().unwrap_err();
        assert!(matches!(
            err,
            AprioriError::InvalidThreshold { name: "min_support", .. }
        ));

        let err = MiningConfig::new(0.5, -0.1).validate().unwrap_err();
        assert!(matches!(
            err,
            AprioriError::InvalidThreshold { name: "min_confidence", .. }
        ));

        assert!(MiningConfig::new(f64::NAN, 0.5).validate().is_err());
    }

    #[test]
    fn accepts_bounds() {
        assert!(MiningConfig::new(0.0, 1.0).validate().is_ok());
        assert!(MiningConfig::new(1.0, 0.0).validate().is_ok());
    }
}
