//! Configuration types for the pbQL interpreter.

/// Configuration for the interpreter's output formatting.
///
/// # Example
///
/// ```rust
/// use pbql_executor::InterpreterConfig;
///
/// let config = InterpreterConfig::builder()
///     .with_country_code("375")
///     .with_field_separator(" | ")
///     .with_value_separator(", ")
///     .build();
/// assert_eq!(config.country_code, "375");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Country code prepended to formatted phone numbers (without `+`).
    pub country_code: String,
    /// Separator between requested fields of one output line.
    pub field_separator: String,
    /// Separator between values of a multi-valued field.
    pub value_separator: String,
}

impl InterpreterConfig {
    /// Creates a new builder for InterpreterConfig.
    pub fn builder() -> InterpreterConfigBuilder {
        InterpreterConfigBuilder::default()
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            country_code: "7".to_string(),
            field_separator: ";".to_string(),
            value_separator: ",".to_string(),
        }
    }
}

/// Builder for InterpreterConfig.
#[derive(Debug, Clone, Default)]
pub struct InterpreterConfigBuilder {
    config: InterpreterConfig,
}

impl InterpreterConfigBuilder {
    /// Sets the phone country code.
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.config.country_code = country_code.into();
        self
    }

    /// Sets the separator between fields.
    pub fn with_field_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.field_separator = separator.into();
        self
    }

    /// Sets the separator between values of one field.
    pub fn with_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.value_separator = separator.into();
        self
    }

    /// Builds the InterpreterConfig.
    pub fn build(self) -> InterpreterConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = InterpreterConfig::default();
        assert_eq!(config.country_code, "7");
        assert_eq!(config.field_separator, ";");
        assert_eq!(config.value_separator, ",");
    }

    #[test]
    fn test_builder_chaining() {
        let config = InterpreterConfig::builder()
            .with_country_code("1")
            .with_value_separator(" ")
            .build();

        assert_eq!(config.country_code, "1");
        assert_eq!(config.value_separator, " ");
        assert_eq!(config.field_separator, ";");
    }

    #[test]
    fn test_builder_default_matches_config_default() {
        assert_eq!(InterpreterConfig::builder().build(), InterpreterConfig::default());
    }
}
