// Job Listing Query Engine
// normalizer -> predicates -> filter pipeline -> pagination window, driven by
// URL hydration and filter updates. Everything here is synchronous and pure
// apart from `JobBoard`, which owns one listing session's state.

pub mod board;
pub mod filter;
pub mod handlers;
pub mod hydrator;
pub mod normalizer;
pub mod pagination;
pub mod predicates;
pub mod saved;
