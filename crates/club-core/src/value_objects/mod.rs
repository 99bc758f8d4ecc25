//! Value objects - immutable types that represent domain concepts

mod guild_id;
mod power;

pub use guild_id::{GuildId, GuildIdParseError};
pub use power::{Power, PowerParseError, PowerRangeError};
