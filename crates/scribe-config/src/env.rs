use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in raw configuration text.
///
/// A fallback may be supplied as `{{ env.VAR | default("value") }}` and is
/// used when the variable is unset. An unset variable without a fallback is
/// an error, as is any placeholder outside the `env.` scope.
pub fn expand_env(input: &str) -> Result<String, String> {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let placeholder = PLACEHOLDER.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern is valid")
    });

    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;

    for captures in placeholder.captures_iter(input) {
        let overall = captures.get(0).unwrap();
        let key = captures.get(1).unwrap().as_str();
        let fallback = captures.get(2).map(|m| m.as_str());

        let var_name = match key.split_once('.') {
            Some(("env", name)) if !name.is_empty() && !name.contains('.') => name,
            _ => {
                return Err(format!(
                    "only variables scoped with `env.` are supported: `{key}`"
                ));
            }
        };

        output.push_str(&input[last_end..overall.start()]);
        match std::env::var(var_name) {
            Ok(value) => output.push_str(&value),
            Err(_) => match fallback {
                Some(value) => output.push_str(value),
                None => return Err(format!("environment variable not found: `{var_name}`")),
            },
        }
        last_end = overall.end();
    }

    output.push_str(&input[last_end..]);
    Ok(output)
}
