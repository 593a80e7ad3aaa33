pub mod dijkstra;
pub mod heap_dijkstra;
pub mod kind;
pub mod table;
pub mod traits;

pub use kind::SolverKind;
pub use table::{Distance, DistanceTable};
pub use traits::ShortestPathAlgorithm;

use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// Edge weight and cumulative distance type
///
/// Implemented for the primitive integers, `f32`/`f64` and their
/// `OrderedFloat` wrappers. Floating weights work with the linear solver;
/// the heap solver also needs `Ord`, so wrap them in `OrderedFloat`.
pub trait Weight: Copy + Zero + PartialOrd + Debug {
    /// `self + weight`, or None when the sum is not representable
    /// (integer overflow, or a float sum that is no longer finite).
    /// A path whose length does not fit is treated as no path at all.
    fn checked_sum(self, weight: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, weight: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &weight)
                }
            }
        )*
    };
}

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, weight: Self) -> Option<Self> {
                    let sum = self + weight;
                    sum.is_finite().then_some(sum)
                }
            }

            impl Weight for OrderedFloat<$t> {
                fn checked_sum(self, weight: Self) -> Option<Self> {
                    self.0.checked_sum(weight.0).map(OrderedFloat)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_weight!(f32, f64);
