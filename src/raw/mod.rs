mod arena;
mod handle;
mod node;
mod raw_ordered_map;

pub(crate) use raw_ordered_map::RawOrderedMap;
