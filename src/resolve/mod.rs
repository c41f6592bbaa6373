//! Style directive resolution.
//!
//! This module turns explicit props and an optional layout template into a
//! complete, validated, per-breakpoint style set:
//!
//! - [`StyleProps`]: explicit per-dimension input
//! - [`Resolver`]: the per-dimension precedence merge
//! - [`ResolvedStyleSet`]: the immutable result handed to rendering
//!
//! Resolution is a pure function of its arguments; calling it twice with the
//! same input yields equal output.

mod props;
mod resolver;
mod set;

pub use props::StyleProps;
pub use resolver::{resolve, resolve_named, Resolver};
pub use set::ResolvedStyleSet;
