use crate::{Lexicon, LexiconError, Value};

#[test]
fn empty_lexicon() {
    let lex = Lexicon::new();
    assert_eq!(lex.len(), 0);
    assert!(lex.is_empty());
    assert!(!lex.is_case_sensitive());
}

#[test]
fn add_one() {
    let mut lex = Lexicon::new();
    lex.add("hello".into(), 42.into()).unwrap();
    assert_eq!(lex.len(), 1);
    assert!(!lex.is_empty());
}

#[test]
fn add_and_get() {
    let mut lex = Lexicon::new();
    lex.add("key".into(), 100.into()).unwrap();
    assert_eq!(lex.get(&"key".into()).unwrap(), &Value::Int(100));
}

#[test]
fn get_missing_key() {
    let mut lex = Lexicon::new();
    lex.add("a".into(), 1.into()).unwrap();

    let err = lex.get(&"b".into()).unwrap_err();
    assert!(err.is_not_found());
    match err {
        LexiconError::KeyNotFound { key, mode } => {
            assert_eq!(key, Value::from("b"));
            assert_eq!(mode, lex.mode());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn try_get_never_fails() {
    let mut lex = Lexicon::new();
    assert_eq!(lex.try_get(&"a".into()), None);
    lex.set("a".into(), 1.into());
    assert_eq!(lex.try_get(&"A".into()), Some(&Value::Int(1)));
}

#[test]
fn get_mut_updates_in_place() {
    let mut lex = Lexicon::new();
    lex.set("count".into(), 1.into());
    if let Some(Value::Int(n)) = lex.get_mut(&"COUNT".into()) {
        *n += 1;
    }
    assert_eq!(lex.get(&"count".into()).unwrap(), &Value::Int(2));
    assert!(lex.get_mut(&"missing".into()).is_none());
}

#[test]
fn set_overwrites_value() {
    let mut lex = Lexicon::new();
    lex.set("k".into(), 1.into());
    lex.set("k".into(), 2.into());
    assert_eq!(lex.len(), 1);
    assert_eq!(lex.get(&"k".into()).unwrap(), &Value::Int(2));
}

/// Duplicate `add` fails and leaves every entry untouched.
#[test]
fn add_duplicate_is_rejected() {
    let mut lex = Lexicon::new();
    lex.add("A".into(), 1.into()).unwrap();
    lex.add("b".into(), 2.into()).unwrap();

    let err = lex.add("a".into(), 99.into()).unwrap_err();
    assert!(err.is_duplicate());
    match err {
        LexiconError::DuplicateKey { key, mode } => {
            assert_eq!(key, Value::from("a"));
            assert_eq!(mode, lex.mode());
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(lex.len(), 2);
    assert_eq!(lex.keys(), vec![Value::from("A"), Value::from("b")]);
    assert_eq!(lex.values(), vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn contains_key_true() {
    let mut lex = Lexicon::new();
    lex.add(42.into(), "val".into()).unwrap();
    assert!(lex.contains_key(&42.into()));
}

#[test]
fn contains_key_false() {
    let mut lex = Lexicon::new();
    lex.add(1.into(), "a".into()).unwrap();
    assert!(!lex.contains_key(&2.into()));
}

/// Value search ignores the comparison mode.
#[test]
fn contains_value_uses_plain_equality() {
    let mut lex = Lexicon::new();
    lex.add("k".into(), "Value".into()).unwrap();
    assert!(lex.contains_value(&"Value".into()));
    assert!(!lex.contains_value(&"value".into()));
    assert!(!lex.contains_value(&"k".into()));
}

#[test]
fn remove_existing() {
    let mut lex = Lexicon::new();
    lex.add("a".into(), 1.into()).unwrap();
    lex.add("b".into(), 2.into()).unwrap();
    assert!(lex.remove(&"A".into()));
    assert_eq!(lex.len(), 1);
    assert_eq!(lex.try_get(&"a".into()), None);
    assert_eq!(lex.try_get(&"b".into()), Some(&Value::Int(2)));
}

#[test]
fn remove_missing() {
    let mut lex = Lexicon::new();
    lex.add("a".into(), 1.into()).unwrap();
    assert!(!lex.remove(&"z".into()));
    assert_eq!(lex.len(), 1);
}

#[test]
fn clear_keeps_mode() {
    let mut lex = Lexicon::with_mode(crate::ComparisonMode::CaseSensitive);
    lex.add("a".into(), 1.into()).unwrap();
    lex.add("b".into(), 2.into()).unwrap();
    lex.clear();
    assert!(lex.is_empty());
    assert!(lex.is_case_sensitive());
}

#[test]
fn from_flat_pairs_arguments() {
    let lex = Lexicon::from_flat(vec!["a".into(), 1.into(), "b".into(), 2.into()]).unwrap();
    assert_eq!(lex.len(), 2);
    assert_eq!(lex.get(&"B".into()).unwrap(), &Value::Int(2));
}

#[test]
fn from_flat_odd_count() {
    let err = Lexicon::from_flat(vec!["a".into(), 1.into(), "b".into()]).unwrap_err();
    assert!(matches!(err, LexiconError::OddArgumentCount { count: 3 }));
}

#[test]
fn from_flat_duplicate_key() {
    let err = Lexicon::from_flat(vec!["a".into(), 1.into(), "A".into(), 2.into()]).unwrap_err();
    assert!(err.is_duplicate());
}
