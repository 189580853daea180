use super::*;
use slotmap::SlotMap;

#[test]
fn children_keep_insertion_order() {
    let mut ids: SlotMap<WidgetId, ()> = SlotMap::with_key();
    let a = ids.insert(());
    let b = ids.insert(());
    let mut c = Container::vertical();
    assert!(c.is_empty());
    c.push(a);
    c.push(b);
    assert_eq!(c.children(), &[a, b]);
    assert_eq!(c.axis(), Axis::Vertical);
}

#[test]
fn remove_drops_child() {
    let mut ids: SlotMap<WidgetId, ()> = SlotMap::with_key();
    let a = ids.insert(());
    let b = ids.insert(());
    let mut c = Container::horizontal();
    c.push(a);
    c.push(b);
    assert!(c.remove(a));
    assert!(!c.remove(a));
    assert_eq!(c.children(), &[b]);
}

#[test]
fn border_defaults_off() {
    let mut c = Container::default();
    assert!(!c.border());
    c.set_border(true);
    assert!(c.border());
}
