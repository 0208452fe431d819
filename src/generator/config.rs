//! Generator configuration.

/// Ranges for random instances. Every range is half-open: `min..max`.
///
/// # Examples
///
/// ```
/// use u_knapsack::generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_items(50, 100)
///     .with_weights(1, 1000)
///     .with_values(1, 1000)
///     .with_capacity_ratio(0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    pub min_items: usize,
    pub max_items: usize,

    /// Smallest weight; must be at least 1.
    pub min_weight: u64,
    pub max_weight: u64,

    pub min_value: u64,
    pub max_value: u64,

    /// Capacity as a fraction of the total item weight.
    pub capacity_ratio: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_items: 10,
            max_items: 50,
            min_weight: 1,
            max_weight: 100,
            min_value: 1,
            max_value: 100,
            capacity_ratio: 0.5,
        }
    }
}

impl GeneratorConfig {
    pub fn with_items(mut self, min: usize, max: usize) -> Self {
        self.min_items = min;
        self.max_items = max;
        self
    }

    pub fn with_weights(mut self, min: u64, max: u64) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    pub fn with_values(mut self, min: u64, max: u64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn with_capacity_ratio(mut self, ratio: f64) -> Self {
        self.capacity_ratio = ratio;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_items >= self.max_items {
            return Err(format!(
                "item range {}..{} is empty",
                self.min_items, self.max_items
            ));
        }
        if self.min_weight == 0 {
            return Err("min_weight must be at least 1".into());
        }
        if self.min_weight >= self.max_weight {
            return Err(format!(
                "weight range {}..{} is empty",
                self.min_weight, self.max_weight
            ));
        }
        if self.min_value >= self.max_value {
            return Err(format!(
                "value range {}..{} is empty",
                self.min_value, self.max_value
            ));
        }
        if !self.capacity_ratio.is_finite() || self.capacity_ratio < 0.0 {
            return Err(format!(
                "capacity_ratio must be finite and non-negative, got {}",
                self.capacity_ratio
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_ranges() {
        assert!(GeneratorConfig::default().with_items(5, 5).validate().is_err());
        assert!(GeneratorConfig::default().with_weights(9, 3).validate().is_err());
        assert!(GeneratorConfig::default().with_values(4, 4).validate().is_err());
    }

    #[test]
    fn test_validate_ratio() {
        let config = GeneratorConfig::default().with_capacity_ratio(f64::NAN);
        assert!(config.validate().is_err());
        let config = GeneratorConfig::default().with_capacity_ratio(-0.1);
        assert!(config.validate().is_err());
    }
}
