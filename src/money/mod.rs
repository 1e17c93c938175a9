// ============================================================================
// Money Module
// The Money value type, its operation trace and canonical snapshot
// ============================================================================

mod canonical;
#[allow(clippy::module_inception)]
mod money;
mod trace;

pub use canonical::CanonicalMoney;
pub use money::Money;
pub use trace::{Trace, TraceStep, TraceValue};
