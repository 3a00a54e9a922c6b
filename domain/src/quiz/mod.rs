//! Quiz subdomain: rounds, outcomes and the session state machine.
//!
//! - [`pool::CountryPool`] — validated set of countries rounds are drawn from
//! - [`round::Round`] — three distinct flags plus the correct one
//! - [`outcome::Outcome`] — result of tapping a flag
//! - [`session::QuizSession`] — owns game state, enforces answer/acknowledge phases

pub mod outcome;
pub mod pool;
pub mod round;
pub mod rules;
pub mod session;
pub mod summary;
