//! Configuration resolution.
//!
//! Resolution is fail-fast: the first unrecognized key aborts with
//! [`Error::UnknownOption`]. After all options are applied the lite/mutable
//! exclusivity rule is enforced, then the default variant policy.

use serde::Serialize;

use crate::{Error, GeneratorOption, Result, options::parse_parameter};

/// Settings supplied by the host rather than by the parameter string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Whether generated code targets the open-source runtime.
    pub opensource_runtime: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            opensource_runtime: true,
        }
    }
}

/// Fully resolved generator configuration.
///
/// Built once per invocation and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub generate_immutable: bool,
    pub generate_mutable: bool,
    /// Emit code shared between variants (descriptor accessors).
    pub generate_shared: bool,
    /// Restricted (lite) runtime API.
    pub enforce_lite: bool,
    pub annotate_code: bool,
    /// Where to list generated source paths, if anywhere.
    pub output_list_file: Option<String>,
    /// Where to list annotation file paths, if anywhere.
    pub annotation_list_file: Option<String>,
    /// Copied from [`GeneratorSettings`].
    pub opensource_runtime: bool,
}

impl Configuration {
    /// Resolve a parsed option list.
    pub fn resolve(options: &[GeneratorOption], settings: &GeneratorSettings) -> Result<Self> {
        let mut config = Self {
            opensource_runtime: settings.opensource_runtime,
            ..Self::default()
        };

        for option in options {
            config.apply(option)?;
        }

        if config.enforce_lite && config.generate_mutable {
            return Err(Error::IncompatibleOptions {
                message: "lite runtime generator option cannot be used with mutable API."
                    .to_string(),
            });
        }

        // Immutable plus shared code when nothing was requested.
        if !config.generate_immutable && !config.generate_mutable && !config.generate_shared {
            config.generate_immutable = true;
            config.generate_shared = true;
        }

        Ok(config)
    }

    /// Parse and resolve a raw parameter string.
    pub fn from_parameter(parameter: &str, settings: &GeneratorSettings) -> Result<Self> {
        Self::resolve(&parse_parameter(parameter), settings)
    }

    fn apply(&mut self, option: &GeneratorOption) -> Result<()> {
        match option.key.as_str() {
            "output_list_file" => self.output_list_file = non_empty(&option.value),
            "immutable" => self.generate_immutable = true,
            "mutable" => self.generate_mutable = true,
            "shared" => self.generate_shared = true,
            // Lite does not guarantee API/ABI stability across releases.
            "lite" => self.enforce_lite = true,
            "annotate_code" => self.annotate_code = true,
            "annotation_list_file" => self.annotation_list_file = non_empty(&option.value),
            _ => {
                return Err(Error::UnknownOption {
                    key: option.key.clone(),
                });
            }
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(parameter: &str) -> Result<Configuration> {
        Configuration::from_parameter(parameter, &GeneratorSettings::default())
    }

    #[test]
    fn test_default_policy_when_no_variant_flag() {
        let config = resolve("").unwrap();
        assert!(config.generate_immutable);
        assert!(config.generate_shared);
        assert!(!config.generate_mutable);
    }

    #[test]
    fn test_default_policy_ignores_non_variant_options() {
        let config = resolve("annotate_code,output_list_file=list.txt").unwrap();
        assert!(config.generate_immutable);
        assert!(config.generate_shared);
        assert!(config.annotate_code);
        assert_eq!(config.output_list_file.as_deref(), Some("list.txt"));
    }

    #[test]
    fn test_explicit_immutable_disables_default_shared() {
        let config = resolve("immutable").unwrap();
        assert!(config.generate_immutable);
        assert!(!config.generate_shared);
    }

    #[test]
    fn test_shared_only_is_respected() {
        let config = resolve("shared").unwrap();
        assert!(config.generate_shared);
        assert!(!config.generate_immutable);
        assert!(!config.generate_mutable);
    }

    #[test]
    fn test_all_recognized_keys() {
        let config = resolve(
            "output_list_file=o.txt,immutable,mutable,shared,annotate_code,annotation_list_file=a.txt",
        )
        .unwrap();
        assert_eq!(
            config,
            Configuration {
                generate_immutable: true,
                generate_mutable: true,
                generate_shared: true,
                enforce_lite: false,
                annotate_code: true,
                output_list_file: Some("o.txt".to_string()),
                annotation_list_file: Some("a.txt".to_string()),
                opensource_runtime: true,
            }
        );
    }

    #[test]
    fn test_unknown_key_is_named() {
        let err = resolve("immutable,java_lite").unwrap_err();
        assert!(matches!(&err, Error::UnknownOption { key } if key == "java_lite"));
        assert_eq!(err.to_string(), "Unknown generator option: java_lite");
    }

    #[test]
    fn test_unknown_key_wins_over_later_conflict() {
        let err = resolve("bogus,mutable,lite").unwrap_err();
        assert!(matches!(err, Error::UnknownOption { .. }));
    }

    #[test]
    fn test_lite_with_mutable_is_rejected() {
        for parameter in ["mutable,lite", "lite,mutable", "lite,immutable,mutable,shared"] {
            let err = resolve(parameter).unwrap_err();
            assert!(
                matches!(err, Error::IncompatibleOptions { .. }),
                "{parameter} should be rejected"
            );
        }
    }

    #[test]
    fn test_lite_alone_uses_default_variants() {
        let config = resolve("lite").unwrap();
        assert!(config.enforce_lite);
        assert!(config.generate_immutable);
        assert!(config.generate_shared);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let config = resolve("output_list_file=a.txt,output_list_file=b.txt").unwrap();
        assert_eq!(config.output_list_file.as_deref(), Some("b.txt"));
    }

    #[test]
    fn test_empty_list_path_is_unset() {
        let config = resolve("output_list_file=,annotation_list_file").unwrap();
        assert_eq!(config.output_list_file, None);
        assert_eq!(config.annotation_list_file, None);
    }

    #[test]
    fn test_runtime_setting_passes_through() {
        let settings = GeneratorSettings {
            opensource_runtime: false,
        };
        let config = Configuration::from_parameter("", &settings).unwrap();
        assert!(!config.opensource_runtime);
    }
}
