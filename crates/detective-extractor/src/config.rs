//! Configuration for the analyzer

use detective_domain::GenerationOptions;

/// Configuration for the feedback analyzer
///
/// Decoding is deterministic by default (temperature 0) with a 512-token
/// generation cap, matching the structured-extraction contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    /// Generation-length cap, in tokens
    pub max_gen_len: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl AnalyzerConfig {
    /// Decoding parameters for the completion capability
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            max_gen_len: self.max_gen_len,
            temperature: self.temperature,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_gen_len == 0 {
            return Err("max_gen_len must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!("temperature {} out of range [0.0, 2.0]", self.temperature));
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_gen_len: 512,
            temperature: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_gen_len, 512);
        assert_eq!(config.temperature, 0.0);
    }

    #[test]
    fn test_invalid_max_gen_len() {
        let config = AnalyzerConfig {
            max_gen_len: 0,
            ..AnalyzerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generation_options_mirror_config() {
        let config = AnalyzerConfig {
            max_gen_len: 256,
            temperature: 0.7,
        };
        let options = config.generation_options();
        assert_eq!(options.max_gen_len, 256);
        assert_eq!(options.temperature, 0.7);
    }
}
