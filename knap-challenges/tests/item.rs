use knap_challenges::*;

#[test]
fn test_parse_items_preserves_order() {
    let fields = vec!["7", "5", "4", "10", "3", "1", "2", "8"];
    let items = parse_items(2, &fields, ItemLayout::WeightVolume).unwrap();
    assert_eq!(
        items,
        vec![
            Item {
                id: 7,
                weight: 5,
                volume: 4,
                value: 10
            },
            Item {
                id: 3,
                weight: 1,
                volume: 2,
                value: 8
            },
        ]
    );
}

#[test]
fn test_parse_items_weight_only_layout() {
    let fields = vec!["1", "4", "9", "2", "0", "3"];
    let items = parse_items(2, &fields, ItemLayout::WeightOnly).unwrap();
    assert_eq!(items[0].volume, 0);
    assert_eq!(items[1].weight, 0);
    assert_eq!(items[1].value, 3);
}

#[test]
fn test_parse_items_missing_fields() {
    let fields = vec!["1", "4", "4", "9", "2"];
    match parse_items(2, &fields, ItemLayout::WeightVolume) {
        Err(KnapsackError::InvalidInput(msg)) => assert!(msg.contains("expected 8")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_parse_items_ignores_surplus_fields() {
    let fields = vec!["1", "4", "4", "9", "extra"];
    let items = parse_items(1, &fields, ItemLayout::WeightVolume).unwrap();
    assert_eq!(items.len(), 1);
}

#[test]
fn test_parse_items_rejects_garbage() {
    let fields = vec!["1", "four", "4", "9"];
    assert!(matches!(
        parse_items(1, &fields, ItemLayout::WeightVolume),
        Err(KnapsackError::InvalidInput(_))
    ));
}

#[test]
fn test_negative_fields_rejected() {
    assert!(matches!(
        Item::new(1, -1, 0, 0),
        Err(KnapsackError::InvalidInput(_))
    ));
    assert!(matches!(
        Item::new(1, 0, -3, 0),
        Err(KnapsackError::InvalidInput(_))
    ));
    assert!(matches!(
        Item::new(1, 0, 0, -5),
        Err(KnapsackError::InvalidInput(_))
    ));
    // Negative ids are plain integers, not sizes.
    assert!(Item::new(-4, 0, 0, 0).is_ok());
}

#[test]
fn test_parse_non_negative() {
    assert_eq!(parse_non_negative("capacity", " 12 ").unwrap(), 12);
    assert!(parse_non_negative("capacity", "-1").is_err());
    assert!(parse_non_negative("capacity", "1.5").is_err());
}

#[test]
fn test_total_value_overflow() {
    let items = vec![
        Item::new(1, 0, 0, i64::MAX).unwrap(),
        Item::new(2, 0, 0, i64::MAX).unwrap(),
        Item::new(3, 0, 0, i64::MAX).unwrap(),
    ];
    assert!(total_value(&items[..2]).is_ok());
    assert!(total_value(&items).is_err());
}

#[test]
fn test_exit_codes() {
    assert_eq!(KnapsackError::invalid_input("x").exit_code(), 1);
    let err = KnapsackError::AllocationError {
        shape: "2 x 2 x 2".to_string(),
        reason: "too big".to_string(),
    };
    assert_eq!(err.exit_code(), 3);
    assert_eq!(err.to_string(), "cannot allocate a 2 x 2 x 2 table: too big");
}
