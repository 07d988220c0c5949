use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn undefined_name_is_reported() {
    let table = SymbolTable::with_capacity(8);
    assert_eq!(
        table.lookup("x"),
        Err(SymbolError::Undefined("x".to_owned()))
    );
}

#[test]
fn assign_then_lookup() {
    let mut table = SymbolTable::with_capacity(8);
    table.assign("x", Value::Number(1.0)).unwrap();
    assert_eq!(table.lookup("x"), Ok(&Value::Number(1.0)));
    assert_eq!(table.len(), 1);
}

#[test]
fn reassignment_overwrites() {
    let mut table = SymbolTable::with_capacity(8);
    table.assign("x", Value::Number(1.0)).unwrap();
    table.assign("x", Value::string("two")).unwrap();
    assert_eq!(table.lookup("x"), Ok(&Value::string("two")));
    assert_eq!(table.len(), 1);
}

#[test]
fn colliding_names_probe_linearly() {
    // a full table: at least one name has to wrap around
    let mut table = SymbolTable::with_capacity(3);
    table.assign("a", Value::Number(1.0)).unwrap();
    table.assign("b", Value::Number(2.0)).unwrap();
    table.assign("c", Value::Number(3.0)).unwrap();
    assert_eq!(table.lookup("a"), Ok(&Value::Number(1.0)));
    assert_eq!(table.lookup("b"), Ok(&Value::Number(2.0)));
    assert_eq!(table.lookup("c"), Ok(&Value::Number(3.0)));
}

#[test]
fn full_table_is_fatal_for_new_names_only() {
    let mut table = SymbolTable::with_capacity(2);
    table.assign("a", Value::Nil).unwrap();
    table.assign("b", Value::Nil).unwrap();
    assert_eq!(
        table.assign("c", Value::Nil),
        Err(FatalError::TooManySymbols { capacity: 2 })
    );
    table.assign("a", Value::Boolean(true)).unwrap();
    assert_eq!(table.lookup("a"), Ok(&Value::Boolean(true)));
    assert!(table.lookup("c").is_err());
}

#[test]
fn zero_capacity_table() {
    let mut table = SymbolTable::with_capacity(0);
    assert!(table.lookup("a").is_err());
    assert!(table.assign("a", Value::Nil).is_err());
}

#[test]
fn assign_many_positionally() {
    let mut table = SymbolTable::with_capacity(8);
    let names = [Some("a".to_owned()), None, Some("c".to_owned())];
    let values = [Some(Value::Number(1.0)), Some(Value::Number(2.0)), None];
    table.assign_many(&names, &values).unwrap();
    assert_eq!(table.lookup("a"), Ok(&Value::Number(1.0)));
    assert_eq!(table.lookup("c"), Ok(&Value::Invalid));
    assert_eq!(table.len(), 2);
}

#[test]
fn assign_many_requires_equal_lengths() {
    let mut table = SymbolTable::with_capacity(8);
    let names = [Some("a".to_owned()), Some("b".to_owned())];
    let values = [Some(Value::Number(1.0))];
    assert_eq!(
        table.assign_many(&names, &values),
        Err(SymbolError::SizeMismatch {
            names: 2,
            values: 1
        })
    );
    assert!(table.is_empty());
}

#[test]
fn swap_uses_values_read_before_commit() {
    let mut table = SymbolTable::with_capacity(8);
    let names = [Some("a".to_owned()), Some("b".to_owned())];
    table
        .assign_many(
            &names,
            &[Some(Value::Number(1.0)), Some(Value::Number(2.0))],
        )
        .unwrap();

    let values = [
        Some(table.lookup("b").unwrap().clone()),
        Some(table.lookup("a").unwrap().clone()),
    ];
    table.assign_many(&names, &values).unwrap();

    assert_eq!(table.lookup("a"), Ok(&Value::Number(2.0)));
    assert_eq!(table.lookup("b"), Ok(&Value::Number(1.0)));
}

#[test]
fn iter_lists_defined_symbols() {
    let mut table = SymbolTable::with_capacity(8);
    table.assign("x", Value::Nil).unwrap();
    table.assign("y", Value::Nil).unwrap();
    let mut names: Vec<_> = table.iter().map(|(name, _)| name).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn hash_is_deterministic() {
    assert_eq!(hash("lunula"), hash("lunula"));
    assert_ne!(hash("ab"), hash("ba"));
    assert_eq!(hash(""), HASH_SEED);
}

proptest! {
    #[test]
    fn lookup_is_idempotent(name in "[a-z_][a-z0-9_]{0,12}", n in any::<i32>(), reads in 1usize..5) {
        let mut table = SymbolTable::with_capacity(16);
        table.assign(&name, Value::Number(f64::from(n))).unwrap();
        for _ in 0..reads {
            prop_assert_eq!(table.lookup(&name), Ok(&Value::Number(f64::from(n))));
        }
    }

    #[test]
    fn every_assigned_name_is_found(names in proptest::collection::hash_set("[a-z]{1,6}", 1..32)) {
        let mut table = SymbolTable::with_capacity(32);
        for (i, name) in names.iter().enumerate() {
            table.assign(name, Value::string(i.to_string())).unwrap();
        }
        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(table.lookup(name), Ok(&Value::string(i.to_string())));
        }
        prop_assert_eq!(table.len(), names.len());
    }
}
