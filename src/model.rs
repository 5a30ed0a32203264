use crate::error::Result;
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Action-value approximator trained by the agent.
///
/// The agent treats the model as opaque: it only asks for per-action values,
/// hands over `(x, y)` batches for a single gradient update, and takes frozen
/// snapshots to use as a target network.
pub trait Model {
    /// Per-action values for one state. The result has one entry per action.
    fn predict(&self, state: ArrayView1<f32>) -> Result<Array1<f32>>;

    /// Performs one update on a batch and returns the mean batch loss.
    ///
    /// Row `i` of `x` is a state, row `i` of `y` the desired action values.
    fn train_on_batch(&mut self, x: ArrayView2<f32>, y: ArrayView2<f32>) -> Result<f32>;

    /// Independent deep copy; later updates to either side do not affect the other.
    fn snapshot(&self) -> Self
    where
        Self: Sized;
}
