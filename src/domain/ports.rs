/// Source of randomness for reel draws and lucky-coin rolls.
///
/// Each engine owns its source exclusively; sources are not shared between
/// sessions without external synchronization.
pub trait RandomSource: Send {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f32;
}

pub type RandomSourceBox = Box<dyn RandomSource>;
