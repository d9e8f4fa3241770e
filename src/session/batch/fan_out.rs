use crate::{
    call::{CallError, Rejection},
    debug,
    session::{
        batch::{Batch, Descriptor},
        SessionSettings, Tally,
    },
    transport::{Response, Transport, TransportError},
    warn,
    wire::{BatchResponse, Envelope, ItemResponse},
};

use doomstack::{here, Doom, ResultExt, Top};

use serde_json::Value;

use std::sync::Arc;

impl<T> Batch<T>
where
    T: Transport,
{
    /// Settles every descriptor, in positional order, from its own
    /// item of `response`.
    pub(in crate::session::batch) fn fan_out(
        descriptors: &mut [Descriptor],
        response: Response,
        settings: &SessionSettings,
    ) -> Tally {
        if response.code != settings.success_code {
            warn!("Batch rejected with code {}.", response.code);

            let rejection = Rejection {
                code: response.code,
                body: response.body,
            };

            return Batch::<T>::settle_all(descriptors, |_| {
                CallError::BatchRejected {
                    source: rejection.clone(),
                }
                .fail()
                .spot(here!())
            });
        }

        let mut items = match BatchResponse::from_value(response.body) {
            Ok(items) => items,
            Err(error) => {
                warn!("Malformed batch response: {:?}", error);

                let error = Arc::new(error);

                return Batch::<T>::settle_all(descriptors, |_| {
                    CallError::MalformedBatch {
                        source: error.clone(),
                    }
                    .fail()
                    .spot(here!())
                });
            }
        };

        Batch::<T>::settle_all(descriptors, |index| {
            match items.take(Envelope::key(index).as_str()) {
                Some(Ok(ItemResponse { code, body })) if code == settings.success_code => Ok(body),
                Some(Ok(ItemResponse { code, body })) => {
                    debug!("Call {} rejected with code {}.", index, code);

                    CallError::Rejected {
                        source: Rejection { code, body },
                    }
                    .fail()
                    .spot(here!())
                }
                Some(Err(error)) => {
                    debug!("Call {} has a malformed item: {:?}", index, error);

                    CallError::MalformedItem { source: error }
                        .fail()
                        .spot(here!())
                }
                None => CallError::MissingResponse.fail().spot(here!()),
            }
        })
    }

    /// Rejects every descriptor with the same transport `error`.
    pub(in crate::session::batch) fn fail_all(
        descriptors: &mut [Descriptor],
        error: Top<TransportError>,
    ) -> Tally {
        warn!("Batch exchange failed: {:?}", error);

        let error = Arc::new(error);

        Batch::<T>::settle_all(descriptors, |_| {
            CallError::TransportFailed {
                source: error.clone(),
            }
            .fail()
            .spot(here!())
        })
    }

    fn settle_all<F>(descriptors: &mut [Descriptor], mut outcome: F) -> Tally
    where
        F: FnMut(usize) -> Result<Value, Top<CallError>>,
    {
        let mut tally = Tally::default();

        for (index, descriptor) in descriptors.iter_mut().enumerate() {
            let outcome = outcome(index);

            tally.record(&outcome);
            descriptor.settle(outcome);
        }

        tally
    }
}
