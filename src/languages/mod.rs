//! Built-in vocabularies, statically tabled in source. Further languages load
//! as packs through the registry.

pub mod en;
pub mod hi;
