use super::error::{Result, SearchError};

/// Knobs for how a search runs. None of them change what it finds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Score the candidates of a phase on the rayon thread pool. Ignored
    /// when the crate is built without the `parallel` feature.
    pub parallel: bool,
    /// Phases with fewer candidates than this run on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
            parallel_threshold: 512,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Run everything on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Validate the search configuration
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(SearchError::InvalidConfig(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Should a phase with `candidates` candidates fan out.
    pub(crate) fn use_parallel(&self, candidates: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && candidates >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(cfg!(feature = "parallel"), config.parallel);
        assert_eq!(512, config.parallel_threshold);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sequential_never_fans_out() {
        let config = SearchConfig::sequential();
        assert!(!config.use_parallel(1_000_000));
    }

    #[test]
    fn test_threshold() {
        let config = SearchConfig {
            parallel: true,
            parallel_threshold: 10,
        };
        assert!(!config.use_parallel(9));
        assert_eq!(cfg!(feature = "parallel"), config.use_parallel(10));
    }

    #[test]
    fn test_zero_threshold_is_invalid() {
        let config = SearchConfig {
            parallel: true,
            parallel_threshold: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
