use rand::Rng;

/// Source of randomness for flavor text selection. Tests replace it with a mock so that message
/// choice is deterministic.
#[cfg_attr(test, mockall::automock)]
pub trait MessagePicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Picks uniformly using the thread local generator.
#[derive(Debug, Default)]
pub struct RandomPicker;

impl MessagePicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Picks one entry of `items` through `picker`. Out of range indices are clamped to the last entry.
pub fn pick_from<'a>(picker: &mut dyn MessagePicker, items: &[&'a str]) -> &'a str {
    let index = picker.pick(items.len());
    items[index.min(items.len() - 1)]
}
