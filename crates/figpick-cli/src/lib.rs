//! figpick CLI library.
//!
//! The thin caller around figpick-core: supplies candidate figure labels to
//! the platform selector and acts on the normalized `(key, index, selected)`
//! result.

pub mod edit_cmd;
pub mod figures;
pub mod pick_cmd;
