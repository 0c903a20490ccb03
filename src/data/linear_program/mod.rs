//! # Representing systems of linear inequalities
//!
//! A system consists of rows `<a_i, x> <= b_i`. There are two variants with the same behavior: an
//! ordinary one and a special one that announces what it is doing.
pub mod elements;
pub mod error;
pub mod special;
pub mod system;
