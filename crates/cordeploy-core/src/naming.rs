//! Naming convention utilities for command-line flags.
//!
//! Configuration keys are camelCase (`skipFrameworkBuild`); the packaging
//! tool expects kebab-case flags (`--skip-framework-build`).
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `camelCase` | [`to_kebab_case`] | `camel-case` |
//! | `snake_case` | [`to_kebab_case`] | `snake-case` |
//! | `key` | [`to_flag`] | `--key` |

/// Convert a camelCase, snake_case, or space separated key to kebab-case.
///
/// A hyphen is inserted only where a lowercase letter or digit is directly
/// followed by an uppercase letter, so runs of capitals stay together.
///
/// # Examples
///
/// ```
/// use cordeploy_core::naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("skipFrameworkBuild"), "skip-framework-build");
/// assert_eq!(to_kebab_case("build_config"), "build-config");
/// assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut previous: Option<char> = None;

    for c in s.chars() {
        if c.is_ascii_uppercase()
            && previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            result.push('-');
        }
        match c {
            '_' | ' ' => result.push('-'),
            _ => result.extend(c.to_lowercase()),
        }
        previous = Some(c);
    }

    result
}

/// Turn a configuration key into a long command-line flag.
///
/// # Examples
///
/// ```
/// use cordeploy_core::naming::to_flag;
///
/// assert_eq!(to_flag("someFlag"), "--some-flag");
/// ```
pub fn to_flag(key: &str) -> String {
    format!("--{}", to_kebab_case(key))
}
