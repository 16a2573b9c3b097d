use letterpool::{LetterPool, PoolError};
use proptest::prelude::*;

fn letter() -> impl Strategy<Value = char> {
    prop::char::range('A', 'Z')
}

fn not_a_letter() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("outside A..Z", |c| !c.is_ascii_uppercase())
}

proptest! {
    #[test]
    fn unknown_symbols_leave_pool_untouched(
        hidden in prop::collection::vec(letter(), 0..26),
        junk in prop::collection::vec(not_a_letter(), 1..32),
    ) {
        let mut pool = LetterPool::new();
        for c in &hidden {
            pool.hide(*c);
        }
        let before = pool.clone();
        for c in &junk {
            pool.reveal(*c);
            pool.hide(*c);
        }
        prop_assert_eq!(&pool, &before);
        for c in &junk {
            prop_assert!(matches!(pool.is_visible(*c), Err(PoolError::UnknownLetter(x)) if x == *c));
        }
    }

    #[test]
    fn mutation_only_touches_its_letter(target in letter(), hide in any::<bool>()) {
        let mut pool = LetterPool::new();
        pool.hide('A');
        pool.hide('N');
        let before = pool.clone();
        if hide {
            pool.hide(target);
        } else {
            pool.reveal(target);
        }
        prop_assert_eq!(pool.is_visible(target).unwrap(), !hide);
        for c in ('A'..='Z').filter(|c| *c != target) {
            prop_assert_eq!(pool.is_visible(c).unwrap(), before.is_visible(c).unwrap());
        }
    }

    #[test]
    fn repeating_an_operation_changes_nothing(target in letter(), hide in any::<bool>()) {
        let mut once = LetterPool::new();
        let mut twice = LetterPool::new();
        if hide { once.hide(target) } else { once.reveal(target) }
        for _ in 0..2 {
            if hide { twice.hide(target) } else { twice.reveal(target) }
        }
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn dump_lists_every_letter_once() {
    let mut pool = LetterPool::new();
    pool.hide('C');
    pool.hide('F');
    let dump = pool.dump().unwrap();
    for c in 'A'..='Z' {
        assert_eq!(dump.matches(&format!("\"{c}\":")).count(), 1);
    }
    assert_eq!(dump.matches("false").count(), 2);
    assert_eq!(dump.matches("true").count(), 24);
}
