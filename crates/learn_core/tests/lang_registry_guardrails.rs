use std::collections::{HashMap, HashSet};

use learn_core::lang::constructors;
use learn_core::lang::declarations;
use learn_core::lang::reporter;

#[test]
fn declarations_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, declarations::DeclarationId> = HashMap::new();

    for decl in declarations::DECLARATIONS {
        let info = &decl.info;
        assert_eq!(
            declarations::from_str(info.canonical),
            Some(info.id),
            "declaration canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            declarations::as_str(info.id),
            info.canonical,
            "declaration as_str mismatch for {:?}",
            info.id
        );

        for spelling in info.spellings() {
            if let Some(prev) = seen.insert(spelling, info.id) {
                panic!(
                    "duplicate declaration spelling {:?}: {:?} and {:?}",
                    spelling, prev, info.id
                );
            }
        }
    }
}

#[test]
fn declarations_are_plain_identifiers() {
    for keyword in declarations::all_keywords() {
        assert!(
            keyword.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "declaration spelling {keyword:?} would need escaping in a call pattern"
        );
    }
    for modifier in declarations::MODIFIERS {
        assert!(
            modifier.chars().all(|c| c.is_ascii_lowercase()),
            "modifier spelling {modifier:?} is not a plain lowercase identifier"
        );
    }
}

#[test]
fn markers_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, reporter::MarkerId> = HashMap::new();

    for info in reporter::MARKERS {
        assert_eq!(
            reporter::from_str(info.canonical),
            Some(info.id),
            "marker canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            reporter::as_str(info.id),
            info.canonical,
            "marker as_str mismatch for {:?}",
            info.id
        );

        for spelling in info.spellings() {
            if let Some(prev) = seen.insert(spelling, info.id) {
                panic!("duplicate marker spelling {:?}: {:?} and {:?}", spelling, prev, info.id);
            }
        }
    }
}

#[test]
fn constructors_unique() {
    let mut seen: HashSet<&'static str> = HashSet::new();
    for name in constructors::names() {
        assert!(seen.insert(name), "duplicate builtin constructor {name:?}");
    }
}

#[test]
fn constructors_never_collide_with_declarations() {
    for keyword in declarations::all_keywords() {
        assert!(
            !constructors::is_builtin(keyword),
            "{keyword:?} is both a declaration and a builtin constructor"
        );
    }
}
