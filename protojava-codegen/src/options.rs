//! Generator parameter parsing.

/// One `key[=value]` entry from the generator parameter string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOption {
    pub key: String,
    /// Empty when the entry had no `=`.
    pub value: String,
}

impl GeneratorOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Split a comma-separated parameter string into options, in order.
///
/// Empty entries are skipped. Each entry is split at its first `=`; keys are
/// not checked here and duplicates are kept.
pub fn parse_parameter(parameter: &str) -> Vec<GeneratorOption> {
    parameter
        .split(',')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((key, value)) => GeneratorOption::new(key, value),
            None => GeneratorOption::new(part, ""),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags_and_values() {
        let options = parse_parameter("immutable,output_list_file=out/list.txt,annotate_code");
        assert_eq!(
            options,
            vec![
                GeneratorOption::new("immutable", ""),
                GeneratorOption::new("output_list_file", "out/list.txt"),
                GeneratorOption::new("annotate_code", ""),
            ]
        );
    }

    #[test]
    fn test_parse_empty_parameter() {
        assert!(parse_parameter("").is_empty());
    }

    #[test]
    fn test_parse_skips_empty_entries() {
        let options = parse_parameter(",lite,,shared,");
        let keys: Vec<_> = options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["lite", "shared"]);
    }

    #[test]
    fn test_parse_splits_at_first_equals() {
        let options = parse_parameter("output_list_file=a=b");
        assert_eq!(options[0].key, "output_list_file");
        assert_eq!(options[0].value, "a=b");
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let options = parse_parameter("output_list_file=a.txt,output_list_file=b.txt");
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].value, "b.txt");
    }

    #[test]
    fn test_parse_does_not_validate_keys() {
        let options = parse_parameter("bogus=1");
        assert_eq!(options, vec![GeneratorOption::new("bogus", "1")]);
    }
}
