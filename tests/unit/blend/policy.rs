use super::*;

#[test]
fn additive_is_identity() {
    assert_eq!(<AdditivePolicy as BlendingPolicy<u8>>::to_additive(77), 77);
    assert_eq!(<AdditivePolicy as BlendingPolicy<f32>>::from_additive(0.3), 0.3);
}

#[test]
fn subtractive_inverts_and_round_trips() {
    assert_eq!(<SubtractivePolicy as BlendingPolicy<u8>>::to_additive(0), 255);
    for v in [0u16, 1, 999, u16::MAX] {
        let there = <SubtractivePolicy as BlendingPolicy<u16>>::to_additive(v);
        assert_eq!(
            <SubtractivePolicy as BlendingPolicy<u16>>::from_additive(there),
            v
        );
    }
}
