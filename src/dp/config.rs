//! DP configuration.

/// Configuration for the dynamic-programming engine.
///
/// # Examples
///
/// ```
/// use u_knapsack::dp::DpConfig;
///
/// let config = DpConfig::default().with_max_cells(1 << 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpConfig {
    /// Largest table (`items * (capacity + 1)` cells) the engine will build.
    pub max_cells: usize,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self { max_cells: 1 << 28 }
    }
}

impl DpConfig {
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_cells == 0 {
            return Err("max_cells must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(DpConfig::default().max_cells, 1 << 28);
        assert!(DpConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_cells() {
        assert!(DpConfig::default().with_max_cells(0).validate().is_err());
    }
}
