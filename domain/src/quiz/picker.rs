//! Random selection capability
//!
//! The quiz selector never reaches for an ambient RNG. It is handed a
//! [`Picker`]; the infrastructure layer provides rand-backed
//! implementations, and tests substitute deterministic ones.

/// Chooses one position out of a non-empty sequence.
pub trait Picker: Send + Sync {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    ///
    /// A fair implementation gives every index probability `1 / len`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Pick one element of `items`, or `None` if it is empty.
///
/// Out-of-range indices from a misbehaving picker are clamped to the last
/// element.
pub fn pick_one<'a, T>(picker: &dyn Picker, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = picker.pick_index(items.len()).min(items.len() - 1);
    items.get(index)
}

/// Deterministic picker that always chooses `index % len`.
///
/// Useful for tests and for reproducing a particular draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIndexPicker(pub usize);

impl Picker for FixedIndexPicker {
    fn pick_index(&self, len: usize) -> usize {
        self.0 % len
    }
}
