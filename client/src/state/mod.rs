//! Client-side state.
//!
//! DESIGN
//! ======
//! Screen flow is plain data with pure transitions so it can be tested
//! without a browser; components read and write it through signals owned by
//! the root component.

pub mod game;
