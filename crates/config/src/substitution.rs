use regex::Regex;
use std::env;
use tracing::{debug, warn};

/// Expand `${VAR_NAME}` references against the process environment.
///
/// Unset variables leave the placeholder in place; the validator flags
/// them afterwards so the user sees which names were missing.
pub fn substitute_env_vars(content: &str) -> String {
    let re = Regex::new(r"\$\{(\w+)\}").expect("valid substitution pattern");
    let mut result = content.to_string();

    for caps in re.captures_iter(content) {
        let var_name = &caps[1];
        let placeholder = &caps[0];

        match env::var(var_name) {
            Ok(value) => {
                debug!(var = var_name, "substituting environment variable");
                result = result.replace(placeholder, &value);
            }
            Err(_) => {
                warn!(var = var_name, "environment variable not set");
            }
        }
    }

    result
}

/// True if the string still contains `${VAR}` placeholders.
pub fn has_unresolved_env_vars(content: &str) -> bool {
    let re = Regex::new(r"\$\{(\w+)\}").expect("valid substitution pattern");
    re.is_match(content)
}
