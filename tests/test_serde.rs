//! Serialization tests for BitArray.

use packed_bits::BitArray;

#[test]
fn test_bincode_preserves_contents() {
    let mut ba = BitArray::new();
    ba.set(3, true);
    ba.set(70, true);
    ba.set(90, false);

    let bytes = bincode::serialize(&ba).unwrap();
    let restored: BitArray = bincode::deserialize(&bytes).unwrap();

    assert_eq!(restored, ba);
    assert_eq!(restored.max(), ba.max());
    assert_eq!(restored.set_bits().collect::<Vec<_>>(), vec![3, 70]);
}

#[test]
fn test_json_shape() {
    let mut ba = BitArray::new();
    ba.set(0, true);
    ba.set(33, true);

    let json = serde_json::to_string(&ba).unwrap();
    assert_eq!(json, r#"{"words":[1,2],"num_bits":34}"#);
}

#[test]
fn test_json_rejects_length_past_capacity() {
    let err = serde_json::from_str::<BitArray>(r#"{"words":[0],"num_bits":33}"#).unwrap_err();
    assert!(err.to_string().contains("Invalid layout"));
}

#[test]
fn test_json_accepts_empty() {
    let ba: BitArray = serde_json::from_str(r#"{"words":[],"num_bits":0}"#).unwrap();
    assert_eq!(ba.num(), 0);
    assert_eq!(ba.max(), 0);
}
