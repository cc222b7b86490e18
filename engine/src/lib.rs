#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! The deployable binary, wiring the ais consumer, the freshness sweep and
//! the HTTP api around one shared fleet state.

pub mod settings;
pub mod startup;
