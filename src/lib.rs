//! Classic container data structures. The centerpiece is `red_black_tree::RedBlackSet`, an
//! ordered set with guaranteed `O(log n)` insertion, removal and lookup.

#[macro_use]
extern crate log;

pub mod arena;
pub mod red_black_tree;
