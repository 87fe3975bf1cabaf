mod arena;
mod index;
mod recency_list;

pub(crate) use {index::Index, recency_list::RecencyList};
