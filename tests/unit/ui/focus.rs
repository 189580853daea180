use super::*;
use slotmap::SlotMap;

fn ids(n: usize) -> Vec<WidgetId> {
    let mut arena: SlotMap<WidgetId, ()> = SlotMap::with_key();
    (0..n).map(|_| arena.insert(())).collect()
}

#[test]
fn register_is_idempotent() {
    let ids = ids(2);
    let mut chain = FocusChain::new();
    assert!(chain.register(ids[0]));
    assert!(chain.register(ids[1]));
    assert!(!chain.register(ids[0]));
    assert_eq!(chain.entries(), &[ids[0], ids[1]]);
    assert!(chain.contains(ids[1]));
}

#[test]
fn empty_chain_has_no_target() {
    let chain = FocusChain::new();
    assert!(chain.is_empty());
    assert_eq!(chain.next(None), None);
    assert_eq!(chain.prev(None), None);
}

#[test]
fn navigation_wraps_and_falls_back_to_first() {
    let ids = ids(4);
    let mut chain = FocusChain::new();
    for id in &ids[..3] {
        chain.register(*id);
    }
    assert_eq!(chain.next(None), Some(ids[0]));
    assert_eq!(chain.prev(None), Some(ids[0]));
    assert_eq!(chain.next(Some(ids[2])), Some(ids[0]));
    assert_eq!(chain.prev(Some(ids[0])), Some(ids[2]));
    assert_eq!(chain.next(Some(ids[0])), Some(ids[1]));
    // Unknown widget: start over.
    assert_eq!(chain.next(Some(ids[3])), Some(ids[0]));
}

#[test]
fn forget_drops_entry() {
    let ids = ids(2);
    let mut chain = FocusChain::new();
    chain.register(ids[0]);
    chain.register(ids[1]);
    chain.forget(ids[0]);
    assert_eq!(chain.entries(), &[ids[1]]);
    assert!(chain.register(ids[0]));
    assert_eq!(chain.len(), 2);
}
