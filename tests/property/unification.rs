//! Property-based tests for argument table unification

use proptest::collection::btree_set;
use proptest::prelude::*;
use unipage::argument::{ArgumentTable, ParsedArgs};
use unipage::model::{Operation, PaginatorConfig, ParamType, Parameter};
use unipage::pagination::{detect_override, unify, PaginationConfig};

/// Paginating operation whose first `token_count` params are input tokens and,
/// optionally, the next one is the limit key.
fn paginating_operation() -> impl Strategy<Value = (Operation, usize, bool)> {
    (btree_set("[A-Z][a-z]{2,8}", 2..8), 1usize..4, any::<bool>()).prop_map(
        |(names, token_count, with_limit)| {
            let names: Vec<String> = names.into_iter().collect();
            let token_count = token_count.min(names.len() - 1);

            let mut op = Operation::new("ListThings");
            for (i, name) in names.iter().enumerate() {
                let ty = if with_limit && i == token_count {
                    ParamType::Integer
                } else {
                    ParamType::String
                };
                op = op.with_param(Parameter::new(name.clone(), ty));
            }

            let tokens: Vec<&str> = names[..token_count].iter().map(String::as_str).collect();
            let mut pagination = PaginatorConfig::new(tokens);
            if with_limit {
                pagination = pagination.with_limit_key(names[token_count].clone());
            }
            (op.with_pagination(pagination), token_count, with_limit)
        },
    )
}

/// Unification hides exactly the paginator's arguments and adds two
#[test]
fn test_unify_shape_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&paginating_operation(), |(op, token_count, with_limit)| {
            let mut table = ArgumentTable::from_operation(&op);
            let declared = table.len();

            let check = unify(&mut table, &op).unwrap().unwrap();

            let expected_hidden = token_count + usize::from(with_limit);
            prop_assert_eq!(table.len(), declared + 2);
            prop_assert_eq!(table.hidden_names().len(), expected_hidden);
            prop_assert_eq!(check.hidden().len(), expected_hidden);
            prop_assert_eq!(table.visible().count(), declared - expected_hidden + 2);
            prop_assert!(table.contains("starting-token"));
            prop_assert!(table.contains("max-items"));
            Ok(())
        })
        .unwrap();
}

/// Pagination is disabled exactly when some hidden argument was supplied
#[test]
fn test_override_detection_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(paginating_operation(), any::<prop::sample::Index>(), any::<bool>()),
            |((op, _, _), pick, supply)| {
                let mut table = ArgumentTable::from_operation(&op);
                let check = unify(&mut table, &op).unwrap().unwrap();

                let mut parsed = ParsedArgs::new().with("starting_token", "tok");
                if supply {
                    let hidden = pick.get(check.hidden());
                    parsed.insert(hidden.key.clone(), "manual".into());
                }

                let config = detect_override(check.hidden(), &parsed, PaginationConfig::default());
                prop_assert_eq!(config.enabled, !supply);

                let again = detect_override(check.hidden(), &parsed, config);
                prop_assert_eq!(again, config);
                Ok(())
            },
        )
        .unwrap();
}
