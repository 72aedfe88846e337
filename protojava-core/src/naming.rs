//! Shared naming helpers for generated Java sources.

/// Convert an identifier with underscores (or other separators) to CamelCase.
///
/// Letters following a separator or a digit are upper-cased. The first letter
/// is upper-cased when `cap_first` is set, and lower-cased otherwise.
pub fn underscores_to_camel_case(input: &str, cap_first: bool) -> String {
    let mut result = String::with_capacity(input.len());
    let mut cap_next = cap_first;

    for (i, c) in input.chars().enumerate() {
        if c.is_ascii_lowercase() {
            if cap_next {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
            cap_next = false;
        } else if c.is_ascii_uppercase() {
            if i == 0 && !cap_first {
                result.push(c.to_ascii_lowercase());
            } else {
                result.push(c);
            }
            cap_next = false;
        } else if c.is_ascii_digit() {
            result.push(c);
            cap_next = true;
        } else {
            cap_next = true;
        }
    }

    result
}

/// Convert a dotted package name to a directory prefix.
///
/// Non-empty packages produce a trailing `/` so a file name can be appended
/// directly (e.g. "com.example" -> "com/example/").
pub fn package_to_dir(package: &str) -> String {
    if package.is_empty() {
        return String::new();
    }
    let mut dir = package.replace('.', "/");
    dir.push('/');
    dir
}

/// Strip the directory and `.proto` extension from a schema file name.
pub fn file_base_name(file_name: &str) -> &str {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);
    base.strip_suffix(".proto").unwrap_or(base)
}
