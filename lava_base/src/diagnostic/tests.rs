use super::{Counter, Dummy, Handler, Storage};

#[test]
fn test_storage_collects_in_order() {
    let storage: Storage<String> = Storage::new();

    storage.receive("first");
    storage.receive(String::from("second"));

    assert_eq!(storage.as_vec().len(), 2);

    storage.as_vec_mut().push("third".to_string());

    assert_eq!(storage.into_vec(), vec!["first", "second", "third"]);
}

#[test]
fn test_counter() {
    let counter = Counter::default();

    counter.receive(1);
    counter.receive("two");
    assert_eq!(counter.count(), 2);

    counter.reset();
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_dummy_accepts_anything() {
    let handler: &dyn Handler<&str> = &Dummy;
    handler.receive("ignored");
}
