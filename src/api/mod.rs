pub mod cell;
pub mod codec;
pub mod location;

pub use cell::CodeCell;
pub use codec::{decode, encode, encode_default, recover_nearest, shorten, try_shorten};
pub use location::{LocationFields, LocationOutcome, enrich_location};
