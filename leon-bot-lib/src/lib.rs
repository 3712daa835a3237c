//! Leon, a conversational assistant for chat platforms.
//!
//! The crate splits into two halves: [`calculator`], the arithmetic
//! expression evaluator behind the `/calc` command, and [`bot`], the command
//! dispatch layer with its in-memory karma/poll/preference stores. The
//! calculator is pure and self-contained; the bot layer talks to the hosting
//! chat platform only through the plain types in [`bot::update`].

pub mod bot;
pub mod calculator;
