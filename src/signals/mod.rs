//! Signal evaluation: synthetic window, oscillator and trade policy.

pub mod engine;
pub mod policy;
pub mod synthetic;

pub use engine::*;
pub use policy::*;
pub use synthetic::*;
