//! Movement legality and structural validity.
//!
//! The rule checker never mutates anything. The game manager consults it
//! before every placement; drivers may also use it to list legal moves.

pub mod checker;

pub use checker::RuleChecker;
