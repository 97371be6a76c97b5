use knap_utils::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Sample {
    zeta: u32,
    alpha: Vec<Inner>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Inner {
    b: i64,
    a: i64,
}

#[test]
fn test_jsonify_sorts_keys() {
    let sample = Sample {
        zeta: 1,
        alpha: vec![Inner { b: 2, a: 3 }],
    };
    assert_eq!(
        jsonify(&sample).unwrap(),
        r#"{"alpha":[{"a":3,"b":2}],"zeta":1}"#
    );
}

#[test]
fn test_dejsonify() {
    let sample: Sample = dejsonify(r#"{"zeta":4,"alpha":[]}"#).unwrap();
    assert_eq!(
        sample,
        Sample {
            zeta: 4,
            alpha: vec![]
        }
    );
    assert!(dejsonify::<Sample>(r#"{"zeta":"x"}"#).is_err());
}

#[test]
fn test_load_json_arg_inline_and_file() {
    let inline: Sample = load_json_arg(r#"{"zeta":7,"alpha":[]}"#).unwrap();
    assert_eq!(inline.zeta, 7);

    let path = std::env::temp_dir().join(format!("knap-utils-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"zeta":9,"alpha":[{"a":1,"b":2}]}"#).unwrap();
    let from_file: Sample = load_json_arg(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(from_file.alpha, vec![Inner { b: 2, a: 1 }]);

    assert!(load_json_arg::<Sample>("missing-file.json").is_err());
    assert!(load_json_arg::<Sample>("not json").is_err());
}
