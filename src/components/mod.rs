//! Reusable UI component modules.

pub mod ad_card;
pub mod guard;
pub mod nav_bar;
