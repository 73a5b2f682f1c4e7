use std::{fmt::Display, ops::Deref, path::PathBuf};

/// A configuration property that remembers where its value came from.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ParsedProperty<T> {
    /// Value from command line arguments (parsed_value, original_string)
    Cli(T, String),
    /// Value from environment variable (parsed_value, env_var_value)
    Env(T, String),
    /// Value from configuration file (parsed_value, file_path, toml_value_string)
    File(T, PathBuf, String),
    /// Built-in default
    Default(T),
}

impl<T> ParsedProperty<T> {
    /// Get the parsed value
    pub fn value(&self) -> &T {
        match self {
            ParsedProperty::Cli(value, _)
            | ParsedProperty::Env(value, _)
            | ParsedProperty::File(value, _, _)
            | ParsedProperty::Default(value) => value,
        }
    }

    /// Consume the property and return the parsed value
    pub fn into_value(self) -> T {
        match self {
            ParsedProperty::Cli(value, _)
            | ParsedProperty::Env(value, _)
            | ParsedProperty::File(value, _, _)
            | ParsedProperty::Default(value) => value,
        }
    }

    /// Get the source name as a string
    pub fn source_name(&self) -> &'static str {
        match self {
            ParsedProperty::Cli(_, _) => "cli",
            ParsedProperty::Env(_, _) => "env",
            ParsedProperty::File(_, _, _) => "file",
            ParsedProperty::Default(_) => "default",
        }
    }

    /// Get the original string value if available
    pub fn original(&self) -> Option<&str> {
        match self {
            ParsedProperty::Cli(_, original)
            | ParsedProperty::Env(_, original)
            | ParsedProperty::File(_, _, original) => Some(original),
            ParsedProperty::Default(_) => None,
        }
    }
}

impl<T> Deref for ParsedProperty<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value()
    }
}

impl<T: Display> Display for ParsedProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value().fmt(f)
    }
}

impl<T> From<T> for ParsedProperty<T> {
    fn from(value: T) -> Self {
        ParsedProperty::Default(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # ParsedProperty Value Access
    ///
    /// Tests accessing the parsed value from every source variant.
    ///
    /// ## Test Scenario
    /// - Creates one property per source
    /// - Reads the value through value(), Deref and into_value()
    ///
    /// ## Expected Outcome
    /// - All access paths agree on the parsed value
    #[test]
    fn test_parsed_property_value_access() {
        let props = vec![
            ParsedProperty::Cli(
                "data.json".to_string(),
                "--data data.json".to_string(),
            ),
            ParsedProperty::Env("data.json".to_string(), "data.json".to_string()),
            ParsedProperty::File(
                "data.json".to_string(),
                PathBuf::from("/home/user/.config/erd-picker/config.toml"),
                "data = \"data.json\"".to_string(),
            ),
            ParsedProperty::Default("data.json".to_string()),
        ];

        for prop in props {
            assert_eq!(prop.value(), "data.json");
            assert_eq!(prop.len(), 9);
            assert_eq!(prop.into_value(), "data.json");
        }
    }

    /// # ParsedProperty Source Tracking
    ///
    /// Tests the source name and original string of each variant.
    ///
    /// ## Test Scenario
    /// - Creates one property per source
    ///
    /// ## Expected Outcome
    /// - source_name() matches the variant
    /// - Only Default has no original string
    #[test]
    fn test_parsed_property_source_tracking() {
        let cli = ParsedProperty::Cli(1, "1".to_string());
        let env = ParsedProperty::Env(2, "2".to_string());
        let file = ParsedProperty::File(3, PathBuf::from("c.toml"), "3".to_string());
        let default = ParsedProperty::Default(4);

        assert_eq!(cli.source_name(), "cli");
        assert_eq!(env.source_name(), "env");
        assert_eq!(file.source_name(), "file");
        assert_eq!(default.source_name(), "default");

        assert_eq!(cli.original(), Some("1"));
        assert_eq!(file.original(), Some("3"));
        assert_eq!(default.original(), None);
        assert_eq!(format!("{}", env), "2");
    }

    #[test]
    fn test_from_value_is_default() {
        let prop: ParsedProperty<bool> = true.into();
        assert_eq!(prop, ParsedProperty::Default(true));
    }
}
