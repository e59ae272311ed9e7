//! Arena allocation for one compilation unit.
//!
//! All objects allocated on an arena share its lifetime: references handed
//! out by [`DroplessArena`] stay valid until the arena itself is dropped,
//! and nothing is ever freed individually. This makes it cheap to link
//! nodes of a tree together and to reclaim a whole parsed unit at once.

mod chunk;
mod dropless;

pub use dropless::DroplessArena;

const PAGE_SIZE: usize = 4096;
const HUGE_PAGE: usize = 2 * 1024 * 1024;
