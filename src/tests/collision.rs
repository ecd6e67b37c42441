use crate::{ComparisonMode, Lexicon, Value};

/// Spellings that fold to the same key share one entry.
#[test]
fn case_variants_share_entry() {
    let mut lex = Lexicon::new();
    lex.set("Key".into(), "first".into());
    lex.set("KEY".into(), "second".into());
    lex.set("key".into(), "third".into());

    assert_eq!(lex.len(), 1);
    assert_eq!(lex.get(&"kEy".into()).unwrap(), &Value::from("third"));
    assert_eq!(lex.keys(), vec![Value::from("Key")]);
}

/// The same spellings stay distinct when case-sensitive.
#[test]
fn case_variants_distinct_when_sensitive() {
    let mut lex = Lexicon::with_mode(ComparisonMode::CaseSensitive);
    lex.set("Key".into(), "first".into());
    lex.set("KEY".into(), "second".into());
    lex.set("key".into(), "third".into());

    assert_eq!(lex.len(), 3);
    assert_eq!(lex.get(&"KEY".into()).unwrap(), &Value::from("second"));
    assert!(lex.get(&"kEy".into()).is_err());
}

/// Folding is Unicode-aware, not ASCII-only.
#[test]
fn unicode_case_folding() {
    let mut lex = Lexicon::new();
    lex.add("ÄPFEL".into(), 1.into()).unwrap();
    assert!(lex.contains_key(&"äpfel".into()));
    assert!(lex.add("Äpfel".into(), 2.into()).is_err());
}

/// Keys of different variants never collide, even with equal text forms.
#[test]
fn cross_variant_keys_are_distinct() {
    let mut lex = Lexicon::new();
    lex.add("1".into(), "text".into()).unwrap();
    lex.add(1.into(), "int".into()).unwrap();
    lex.add(1.0.into(), "float".into()).unwrap();
    lex.add("true".into(), "text bool".into()).unwrap();
    lex.add(true.into(), "bool".into()).unwrap();

    assert_eq!(lex.len(), 5);
    assert_eq!(lex.get(&Value::Int(1)).unwrap(), &Value::from("int"));
    assert_eq!(lex.get(&Value::Float(1.0)).unwrap(), &Value::from("float"));
    assert_eq!(lex.get(&"1".into()).unwrap(), &Value::from("text"));
}

/// Signed zeros and NaNs each address a single float key.
#[test]
fn float_keys_use_canonical_bits() {
    let mut lex = Lexicon::new();
    lex.add(0.0.into(), "zero".into()).unwrap();
    assert!(lex.add((-0.0).into(), "negative zero".into()).is_err());

    lex.add(f64::NAN.into(), "nan".into()).unwrap();
    assert_eq!(lex.get(&Value::Float(-f64::NAN)).unwrap(), &Value::from("nan"));
    assert_eq!(lex.len(), 2);
}

/// Text inside a list key is compared exactly in either mode.
#[test]
fn list_keys_are_not_folded() {
    let mut lex = Lexicon::new();
    lex.add(Value::List(vec!["A".into()]), 1.into()).unwrap();
    lex.add(Value::List(vec!["a".into()]), 2.into()).unwrap();

    assert_eq!(lex.len(), 2);
    assert_eq!(
        lex.get(&Value::List(vec!["A".into()])).unwrap(),
        &Value::Int(1)
    );
}

/// Nested lexicons work as keys, compared structurally.
#[test]
fn lexicon_keys_compare_structurally() {
    let inner: Lexicon = vec![(Value::from("x"), Value::Int(1))].into_iter().collect();
    let same: Lexicon = vec![(Value::from("x"), Value::Int(1))].into_iter().collect();

    let mut lex = Lexicon::new();
    lex.add(inner.into(), "nested".into()).unwrap();
    assert!(lex.contains_key(&same.into()));
}
