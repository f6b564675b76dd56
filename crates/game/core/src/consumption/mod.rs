//! Hunger/voracity consumption model.
//!
//! Every predator carries two counters:
//!
//! - **hunger**: remaining nutritional need. `hunger <= 0` means satisfied.
//! - **voracity**: the most nutrition a predator may extract in one unforced
//!   encounter, clamped to `[0, species cap]`.
//!
//! Consumption only ever lowers hunger; [`PredatorState::regurgitate`] is the
//! single operation that raises it again, bounded by the species hunger cap.
//! Prey expose injurable health through [`PreyState::injure`], whose return
//! value is the nutrition handed to the predator.
//!
//! The module depends on nothing but the species oracle, so it can be driven
//! directly in tests without a board or a turn engine.

mod predator;
mod prey;

pub use predator::{AppetiteCaps, PredatorState};
pub use prey::PreyState;
