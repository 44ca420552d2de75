//! Property-based tests for CLI name derivation

use proptest::prelude::*;
use unipage::argument::dest_for;
use unipage::model::to_kebab_case;

/// Kebab-casing is stable: applying it to its own output changes nothing
#[test]
fn test_kebab_case_idempotent_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[A-Za-z0-9_]{1,24}", |name| {
            let once = to_kebab_case(&name);
            let twice = to_kebab_case(&once);
            prop_assert_eq!(&once, &twice);

            prop_assert!(!once.chars().any(|c| c.is_uppercase() || c == '_'));
            prop_assert!(!once.starts_with('-') && !once.ends_with('-'));
            prop_assert!(!once.contains("--"));
            Ok(())
        })
        .unwrap();
}

/// Parsed-argument keys never contain hyphens and map back to the CLI name
#[test]
fn test_dest_for_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[a-z][a-z0-9]{0,8}(-[a-z0-9]{1,8}){0,3}", |cli_name| {
            let key = dest_for(&cli_name);
            prop_assert!(!key.contains('-'));
            prop_assert_eq!(key.replace('_', "-"), cli_name.clone());
            prop_assert_eq!(dest_for(&format!("--{}", cli_name)), key);
            Ok(())
        })
        .unwrap();
}
