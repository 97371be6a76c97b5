use knap_utils::*;

#[test]
fn test_render_ids() {
    assert_eq!(render_ids(&[1, 2, 10]), "1 2 10");
    assert_eq!(render_ids(&[-3]), "-3");
    assert_eq!(render_ids(&[]), "");
}

#[test]
fn test_u8s_from_str() {
    assert_eq!(u8s_from_str("seed"), u8s_from_str("seed"));
    assert_ne!(u8s_from_str("seed"), u8s_from_str("seed2"));
}
