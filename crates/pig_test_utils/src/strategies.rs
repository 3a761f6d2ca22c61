//! Proptest strategies for simulation inputs.

use pig_core::strategy::{HoldThreshold, ThresholdRange};
use proptest::prelude::*;

/// Any valid hold threshold.
pub fn arb_threshold() -> impl Strategy<Value = HoldThreshold> {
    (1u32..=100).prop_map(|v| HoldThreshold::new(v).expect("generated in bounds"))
}

/// Any parseable range, `start < end`.
pub fn arb_range() -> impl Strategy<Value = ThresholdRange> {
    (1u32..100)
        .prop_flat_map(|start| (Just(start), (start + 1)..=100))
        .prop_map(|(start, end)| {
            ThresholdRange::parse(&format!("{start}-{end}")).expect("generated in bounds")
        })
}

/// Narrow range, so sweeps over it stay cheap.
pub fn arb_small_range() -> impl Strategy<Value = ThresholdRange> {
    (1u32..=95)
        .prop_flat_map(|start| (Just(start), (start + 1)..=(start + 5)))
        .prop_map(|(start, end)| {
            ThresholdRange::parse(&format!("{start}-{end}")).expect("generated in bounds")
        })
}

/// Short sequences of die faces.
pub fn arb_faces(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(1u8..=6, 1..max_len)
}
