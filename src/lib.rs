//! clipqueue: a FIFO queue of clipboard snapshots driven by global hotkeys.
//!
//! This crate is the composition root. Domain types live in `cq-core`,
//! handlers and the runtime in `cq-app`, OS adapters in `cq-platform`.

pub mod bootstrap;
