use crate::{call::Call, session::UsageError, wire};

use doomstack::{here, Doom, ResultExt, Top};

/// Prepares `call` for the wire. String shards are coerced into numbers.
pub(in crate::session) fn normalize(mut call: Call) -> Result<Call, Top<UsageError>> {
    if let Some(args) = call.args.as_mut() {
        wire::coerce_shard(args)
            .map_err(|source| UsageError::InvalidShard { source }.into_top())
            .spot(here!())?;
    }

    Ok(call)
}
