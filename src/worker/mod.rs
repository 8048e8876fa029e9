//! Worker thread implementations
//!
//! Workers are the units a coordinator spawns onto their own OS threads.
//!
//! - [`prime::PrimeWorker`]: searches one subrange and emits primes into a sink
//! - [`player::Player`]: plays tic-tac-toe moves whenever it holds the turn token
//!
//! # Thread Safety
//!
//! Workers own everything they mutate except the single shared resource of
//! their ensemble (the prime sink or the turn token), and they touch that
//! resource only through its synchronized API. Nothing a worker does can
//! fail: the primality predicate and move choosers are total, so worker
//! threads never return errors to their coordinator.

pub mod player;
pub mod prime;

pub use player::Player;
pub use prime::PrimeWorker;
