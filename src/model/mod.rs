// src/model/mod.rs
//! Domain types shared by the statistics engine, the data source and the
//! frontends. Everything here is plain data; parsing from the REST API is
//! tolerant so one odd record never sinks a whole chamber.

pub mod chamber;
pub mod member;
pub mod party;
pub mod serde_helpers;
pub mod states;

pub use chamber::Chamber;
pub use member::MemberRecord;
pub use party::Party;
pub use states::StateLookup;
