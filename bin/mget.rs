use futures::future::join_all;
use log::{info, warn};
use mdo::{Call, Direct, EnvelopeForm, HttpTransport, HttpTransportSettings, SessionSettings};
use std::{sync::Arc, time::Duration};

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = lapp::parse_args(
        "
        Welcome to `mdo`'s `mget` tool: fetches several paths in one exchange.

        Required arguments:
          <base_url> (string) origin of the API server (e.g., http://localhost:8787)
          <paths> (string...) paths to read

        Options:
          --region (default '') region of every path (central if empty)
          --minimum (default 2) smallest batch that may be sent
          --timeout (default 30) seconds to wait for the exchange
          --address-form send the batch as a single `GET` address
        ",
    );

    let base_url = args.get_string("base_url");
    let paths = args.get_strings("paths");
    let region = Some(args.get_string("region")).filter(|region| !region.is_empty());
    let address_form = args.get_bool("address-form");

    let minimum = positive(args.get_integer("minimum"))
        .unwrap_or_else(|| args.quit("--minimum must be at least 1")) as usize;

    let timeout = positive(args.get_integer("timeout"))
        .unwrap_or_else(|| args.quit("--timeout must be at least 1 second"));

    // Setup `Transport`

    info!("Setting up `HttpTransport` towards {}..", base_url);

    let transport = HttpTransport::new(
        base_url,
        HttpTransportSettings {
            timeout: Duration::from_secs(timeout),
            ..Default::default()
        },
    )
    .unwrap();

    let settings = SessionSettings {
        minimum_batch_size: minimum,
        form: if address_form {
            EnvelopeForm::Address
        } else {
            EnvelopeForm::Structured
        },
        ..Default::default()
    };

    let direct = Direct::new(Arc::new(transport), settings);
    let batch = direct.batch(region.clone());

    // Register calls

    let replies = paths
        .iter()
        .map(|path| {
            let call = match &region {
                Some(region) => Call::get(path.as_str()).region(region.as_str()),
                None => Call::get(path.as_str()),
            };

            batch.register(call).unwrap()
        })
        .collect::<Vec<_>>();

    // Send

    info!("Sending {} calls..", batch.len());

    let tally = batch.send().unwrap().await;

    if tally.is_none() {
        warn!("Dispatch was lost before the batch settled.");
    }

    let outcomes = join_all(replies).await;

    for (index, (path, outcome)) in paths.iter().zip(outcomes).enumerate() {
        match outcome {
            Ok(body) => println!("[{}] ok {}: {}", index, path, body),
            Err(error) => match error.top().rejection() {
                Some(rejection) => println!(
                    "[{}] rejected {} ({}): {}",
                    index, path, rejection.code, rejection.body
                ),
                None => println!("[{}] failed {}: {:?}", index, path, error),
            },
        }
    }

    if let Some(tally) = tally {
        println!(
            "{} fulfilled, {} rejected ({} total)",
            tally.fulfilled,
            tally.rejected,
            tally.total()
        );
    }
}

/// `value` if it is at least 1.
fn positive(value: i32) -> Option<u64> {
    u64::try_from(value).ok().filter(|value| *value >= 1)
}
