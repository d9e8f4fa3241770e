use serde_json::Value;

/// Builds the address of a call: `path`, then its JSON-encoded `args`
/// (for reads) and its `region` as query parameters.
pub(crate) fn address(path: &str, args: Option<&Value>, region: Option<&str>) -> String {
    let mut query = Vec::new();

    if let Some(args) = args.filter(|args| args.is_object() || args.is_array()) {
        query.push(format!(
            "args={}",
            urlencoding::encode(args.to_string().as_str())
        ));
    }

    if let Some(region) = region {
        query.push(format!("region={}", urlencoding::encode(region)));
    }

    if query.is_empty() {
        path.to_string()
    } else {
        let separator = if path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", path, separator, query.join("&"))
    }
}

/// Coerces a string-valued `"shard"` member of `args` into a number.
/// Returns `Err` with the offending value if it is not numeric.
pub(crate) fn coerce_shard(args: &mut Value) -> Result<(), String> {
    let shard = match args.get_mut("shard") {
        Some(shard) => shard,
        None => return Ok(()),
    };

    if let Value::String(raw) = shard {
        let number = raw.trim().parse::<u64>().map_err(|_| raw.clone())?;
        *shard = Value::from(number);
    }

    Ok(())
}
