use record_marshal::{Error, Value, field_setter, field_setters};

#[derive(Debug, Default, PartialEq)]
struct RootEntry {
    content_flags: u32,
    locale_flags: u32,
    file_data_id: i32,
    priority: u8,
    ratio: f32,
    name: String,
    tag: char,
    key: [u8; 4],
    alias: Option<String>,
}

#[test]
fn test_setter_assigns_in_place() {
    let setter = field_setter!(RootEntry, content_flags);
    let mut entry = RootEntry::default();
    setter.set(&mut entry, 0x80u32).unwrap();
    assert_eq!(entry.content_flags, 0x80);
    assert_eq!(setter.name(), "content_flags");
}

#[test]
fn test_setter_reusable_across_instances() {
    let setter = field_setter!(RootEntry, file_data_id);
    let mut entries: Vec<RootEntry> = (0..3).map(|_| RootEntry::default()).collect();
    for (i, entry) in entries.iter_mut().enumerate() {
        setter.set(entry, Value::I64(i as i64 * 100)).unwrap();
    }
    let ids: Vec<i32> = entries.iter().map(|e| e.file_data_id).collect();
    assert_eq!(ids, [0, 100, 200]);
}

#[test]
fn test_setter_integer_widening_and_sign_change() {
    let mut entry = RootEntry::default();
    field_setter!(RootEntry, locale_flags)
        .set(&mut entry, Value::I64(7))
        .unwrap();
    assert_eq!(entry.locale_flags, 7);

    field_setter!(RootEntry, file_data_id)
        .set(&mut entry, Value::U64(42))
        .unwrap();
    assert_eq!(entry.file_data_id, 42);
}

#[test]
fn test_setter_out_of_range() {
    let mut entry = RootEntry::default();
    let result = field_setter!(RootEntry, priority).set(&mut entry, Value::U64(300));
    assert!(matches!(
        result,
        Err(Error::IncompatibleValue { field: "priority", .. })
    ));
    assert_eq!(entry.priority, 0);

    let result = field_setter!(RootEntry, locale_flags).set(&mut entry, Value::I64(-1));
    assert!(matches!(result, Err(Error::IncompatibleValue { .. })));
}

#[test]
fn test_setter_wrong_kind() {
    let mut entry = RootEntry::default();
    let result = field_setter!(RootEntry, content_flags).set(&mut entry, "enabled");
    assert!(matches!(
        result,
        Err(Error::IncompatibleValue { field: "content_flags", .. })
    ));

    let result = field_setter!(RootEntry, name).set(&mut entry, true);
    assert!(matches!(result, Err(Error::IncompatibleValue { field: "name", .. })));
}

#[test]
fn test_setter_float_and_char_and_string() {
    let mut entry = RootEntry::default();
    field_setter!(RootEntry, ratio).set(&mut entry, 0.5f64).unwrap();
    field_setter!(RootEntry, ratio).set(&mut entry, 2u8).unwrap();
    field_setter!(RootEntry, tag).set(&mut entry, 'x').unwrap();
    field_setter!(RootEntry, name).set(&mut entry, "World\\Maps").unwrap();
    assert_eq!(entry.ratio, 2.0);
    assert_eq!(entry.tag, 'x');
    assert_eq!(entry.name, "World\\Maps");
}

#[test]
fn test_setter_option_field() {
    let mut entry = RootEntry::default();
    let setter = field_setter!(RootEntry, alias);
    setter.set(&mut entry, "alt").unwrap();
    assert_eq!(entry.alias.as_deref(), Some("alt"));
    setter.set(&mut entry, ()).unwrap();
    assert_eq!(entry.alias, None);
}

#[test]
fn test_setter_bytes_rejected_for_array() {
    let mut entry = RootEntry::default();
    let result = field_setter!(RootEntry, key).set(&mut entry, vec![1u8, 2, 3, 4]);
    assert!(matches!(result, Err(Error::IncompatibleValue { field: "key", .. })));
}

#[test]
fn test_setter_table_by_name() {
    let setters = field_setters!(RootEntry {
        content_flags,
        locale_flags,
        name,
    });
    assert_eq!(setters.len(), 3);
    assert_eq!(
        setters.names().collect::<Vec<_>>(),
        ["content_flags", "locale_flags", "name"]
    );
    assert!(setters.get("priority").is_none());

    let mut entry = RootEntry::default();
    let metadata = [
        ("locale_flags", Value::U64(2)),
        ("name", Value::Str("enUS".to_string())),
    ];
    for (field, value) in metadata {
        setters.get(field).unwrap().set(&mut entry, value).unwrap();
    }
    assert_eq!(entry.locale_flags, 2);
    assert_eq!(entry.name, "enUS");
}

#[test]
fn test_value_conversions() {
    assert_eq!(Value::from(-3i16), Value::I64(-3));
    assert_eq!(Value::from(3u16), Value::U64(3));
    assert_eq!(Value::from(1.5f32), Value::F64(1.5));
    assert_eq!(Value::from("x"), Value::Str("x".to_string()));
    assert_eq!(Value::from(&[9u8][..]), Value::Bytes(vec![9]));
}
