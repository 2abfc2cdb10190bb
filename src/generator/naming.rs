/// Upper-case the first character, leave the rest alone: `petStore` → `PetStore`
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Identifier shared by the runner, feature and step definitions of one scenario: `Pets3`
pub fn runner_name(api_name: &str, scenario_number: i64) -> String {
    format!("{}{scenario_number}", capitalize(api_name))
}

/// Class name of the integration-test runner for one scenario: `RunCukeITPets3`
pub fn runner_class(api_name: &str, scenario_number: i64) -> String {
    format!("{RUNNER_CLASS_PREFIX}{}", runner_name(api_name, scenario_number))
}

/// Prefix of every generated runner class. The `IT` suffix is what the
/// failsafe plugin of the generated project matches on.
pub const RUNNER_CLASS_PREFIX: &str = "RunCukeIT";

/// Package segment holding the always-regenerated step definitions of one scenario: `pets3`
pub fn core_package(api_name: &str, scenario_number: i64) -> String {
    format!("{}{scenario_number}", api_name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pets"), "Pets");
        assert_eq!(capitalize("petStore"), "PetStore");
        assert_eq!(capitalize("Already"), "Already");
        assert_eq!(capitalize("1api"), "1api");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_scenario_names() {
        assert_eq!(runner_name("orders", 12), "Orders12");
        assert_eq!(runner_class("orders", 12), "RunCukeITOrders12");
        assert_eq!(core_package("PetStore", 2), "petstore2");
    }
}
