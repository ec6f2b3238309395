#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use pg_cfg as cfg;
pub use pg_guard as guard;
pub use pg_utils as utils;

pub use pg_guard::{
    GuardError, PtrGuard, invoke, invoke_or, make_guarded_atomic, make_guarded_shared,
    make_guarded_unique, try_invoke,
};
