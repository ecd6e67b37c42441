use std::collections::HashSet;

use crate::{ComparisonMode, Lexicon, Value};

#[test]
fn default_is_empty_and_insensitive() {
    let lex = Lexicon::default();
    assert!(lex.is_empty());
    assert_eq!(lex.mode(), ComparisonMode::CaseInsensitive);
}

#[test]
fn debug_format() {
    let mut lex = Lexicon::new();
    lex.add("k".into(), 1.into()).unwrap();
    let dbg = format!("{lex:?}");
    assert!(dbg.contains("Lexicon"));
    assert!(dbg.contains("CaseInsensitive"));
    assert!(dbg.contains("Text(\"k\")"));

    let cp = format!("{:?}", lex.checkpoint());
    assert!(cp.contains("LexiconCheckpoint"));
    assert!(cp.contains("len"));
}

#[test]
fn from_iterator() {
    let lex: Lexicon = vec![
        (Value::Int(1), Value::Int(10)),
        (Value::Int(2), Value::Int(20)),
        (Value::Int(3), Value::Int(30)),
    ]
    .into_iter()
    .collect();
    assert_eq!(lex.len(), 3);
    assert_eq!(lex.get(&1.into()).unwrap(), &Value::Int(10));
}

/// Extend upserts like `set`.
#[test]
fn extend_trait() {
    let mut lex = Lexicon::new();
    lex.add("a".into(), 1.into()).unwrap();
    lex.extend(vec![("A".into(), 2.into()), ("b".into(), 3.into())]);
    assert_eq!(lex.len(), 2);
    assert_eq!(lex[&Value::from("a")], Value::Int(2));
}

#[test]
fn index_existing() {
    let mut lex = Lexicon::new();
    lex.add("key".into(), 42.into()).unwrap();
    assert_eq!(lex[&Value::from("KEY")], Value::Int(42));
}

#[test]
#[should_panic(expected = "key not found")]
fn index_missing_panics() {
    let lex = Lexicon::new();
    let _ = &lex[&Value::Int(999)];
}

#[test]
fn into_iterator_for_ref() {
    let lex: Lexicon = vec![(Value::from("a"), Value::Int(1))].into_iter().collect();
    let mut seen = Vec::new();
    for (k, v) in &lex {
        seen.push((k.clone(), v.clone()));
    }
    assert_eq!(seen, vec![(Value::from("a"), Value::Int(1))]);
}

/// Equality depends on mode and order, not just content.
#[test]
fn equality_is_mode_and_order_aware() {
    let ab: Lexicon = vec![(Value::from("a"), Value::Int(1)), (Value::from("b"), Value::Int(2))]
        .into_iter()
        .collect();
    let ba: Lexicon = vec![(Value::from("b"), Value::Int(2)), (Value::from("a"), Value::Int(1))]
        .into_iter()
        .collect();
    assert_ne!(ab, ba);
    assert_eq!(ab, ab.copy());

    let mut sensitive = Lexicon::with_mode(ComparisonMode::CaseSensitive);
    sensitive.extend(ab.iter().map(|(k, v)| (k.clone(), v.clone())));
    assert_ne!(ab, sensitive);
}

#[test]
fn equal_lexicons_hash_equal() {
    let a: Lexicon = vec![(Value::from("x"), Value::Int(1))].into_iter().collect();
    let b = a.copy();
    let mut set = HashSet::new();
    set.insert(Value::Lexicon(a));
    assert!(!set.insert(Value::Lexicon(b)));
}
