use std::collections::HashMap;

use pvc_core::lang::operators;
use pvc_core::lang::types;

#[test]
fn operator_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        assert_eq!(
            info.id.as_str(),
            info.spelling,
            "operator as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn operator_ids_registered_once() {
    let mut counts: HashMap<operators::OperatorId, usize> = HashMap::new();
    for info in operators::OPERATORS {
        *counts.entry(info.id).or_default() += 1;
    }
    for (id, count) in counts {
        assert_eq!(count, 1, "operator {id:?} registered {count} times");
    }
}

#[test]
fn operator_precedence_table() {
    use operators::OperatorId::*;

    // Lowest first: `=` and `=>` split before arithmetic; `*` and `/` bind tighter than `+` and `-`.
    assert_eq!(operators::precedence(Eq), operators::precedence(Arrow));
    assert!(operators::precedence(Arrow) < operators::precedence(Plus));
    assert_eq!(operators::precedence(Plus), operators::precedence(Minus));
    assert!(operators::precedence(Minus) < operators::precedence(Star));
    assert_eq!(operators::precedence(Star), operators::precedence(Slash));
}

#[test]
fn type_name_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, types::TypeNameId> = HashMap::new();

    for info in types::TYPE_NAMES {
        assert_eq!(
            types::from_str(info.spelling),
            Some(info.id),
            "type name not resolvable: {}",
            info.spelling
        );
        assert_eq!(types::info_for(info.id).ir_keyword, info.ir_keyword);
        assert_ne!(info.ir_keyword, types::VOID_IR_KEYWORD);

        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate type spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}
