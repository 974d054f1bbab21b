//! Workload generators for Slotkit benchmarks and examples.
//!
//! [`churn_workload`] produces a deterministic mix of adds and removals
//! from a seed, so benchmark runs are comparable across machines and
//! commits. [`apply`] replays such a workload against a [`SlotArray`].

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slotkit_array::SlotArray;

/// One step of a churn workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnOp {
    /// Insert a value.
    Add(u32),
    /// Free a slot by index (may be free or out of range).
    RemoveAt(usize),
    /// Free the first slot holding a value.
    RemoveValue(u32),
}

/// Build `len` operations from `seed`.
///
/// Roughly half the operations are adds, so an array replaying the
/// workload grows to a steady state instead of draining. Indices and
/// values are drawn from `0..span`.
pub fn churn_workload(seed: u64, len: usize, span: u32) -> Vec<ChurnOp> {
    let span = span.max(1);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let pick = rng.next_u32() % 4;
            let operand = rng.next_u32() % span;
            match pick {
                0 | 1 => ChurnOp::Add(operand),
                2 => ChurnOp::RemoveAt(operand as usize),
                _ => ChurnOp::RemoveValue(operand),
            }
        })
        .collect()
}

/// Replay `ops` against `array`, returning how many adds were rejected.
pub fn apply(array: &mut SlotArray<u32>, ops: &[ChurnOp]) -> usize {
    let mut rejected = 0;
    for op in ops {
        match *op {
            ChurnOp::Add(value) => {
                if array.add(value).is_err() {
                    rejected += 1;
                }
            }
            ChurnOp::RemoveAt(index) => {
                array.remove_at(index);
            }
            ChurnOp::RemoveValue(value) => {
                array.remove_by_value(&value);
            }
        }
    }
    rejected
}
