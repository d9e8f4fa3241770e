use crate::{
    info,
    session::{
        batch::{Batch, BatchStatus, Descriptor, Registry},
        EnvelopeForm, SessionSettings, Tally,
    },
    transport::{Exchange, Method, Transport},
    wire::{self, Envelope, EnvelopeEntry},
};

use std::{
    mem,
    sync::{Arc, Mutex},
};

use tokio::sync::{oneshot::Sender as OneshotSender, Notify};

type TallyInlet = OneshotSender<Tally>;

impl<T> Batch<T>
where
    T: Transport,
{
    pub(in crate::session::batch) async fn dispatch(
        transport: Arc<T>,
        registry: Arc<Mutex<Registry>>,
        readiness: Arc<Notify>,
        region: Option<String>,
        settings: SessionSettings,
        tally_inlet: TallyInlet,
    ) {
        // Wait for every registered call to be wired to its `Reply`

        Batch::<T>::wait_ready(registry.as_ref(), readiness.as_ref()).await;

        // Snapshot the registry: `register` already refuses new calls,
        // so the descriptors can be moved out

        let mut descriptors = mem::take(&mut registry.lock().unwrap().descriptors);

        let exchange = Batch::<T>::exchange(descriptors.as_slice(), region.as_deref(), &settings);

        info!("Dispatching batch ({} calls).", descriptors.len());

        let outcome = transport.exchange(exchange).await;

        registry.lock().unwrap().status = BatchStatus::Sent;

        // Fan out the outcome to every caller

        let tally = match outcome {
            Ok(response) => Batch::<T>::fan_out(descriptors.as_mut_slice(), response, &settings),
            Err(error) => Batch::<T>::fail_all(descriptors.as_mut_slice(), error),
        };

        info!(
            "Batch settled ({} fulfilled, {} rejected).",
            tally.fulfilled, tally.rejected
        );

        let _ = tally_inlet.send(tally);
    }

    fn exchange(
        descriptors: &[Descriptor],
        region: Option<&str>,
        settings: &SessionSettings,
    ) -> Exchange {
        let mut envelope = Envelope::new();

        for descriptor in descriptors {
            let call = &descriptor.call;

            let entry = match settings.form {
                EnvelopeForm::Address => EnvelopeEntry::Address(wire::address(
                    call.path.as_str(),
                    call.args.as_ref(),
                    call.region.as_deref(),
                )),
                EnvelopeForm::Structured => EnvelopeEntry::Structured {
                    region: call.region.clone(),
                    path: call.path.clone(),
                    args: call.args.clone(),
                },
            };

            envelope.push(entry);
        }

        match settings.form {
            EnvelopeForm::Address => Exchange {
                method: Method::Get,
                address: wire::address(
                    settings.mget_path.as_str(),
                    Some(&envelope.to_value()),
                    region,
                ),
                payload: None,
                headers: settings.headers(),
            },
            EnvelopeForm::Structured => Exchange {
                method: Method::Post,
                address: wire::address(settings.mdo_path.as_str(), None, region),
                payload: Some(envelope.to_value()),
                headers: settings.headers(),
            },
        }
    }
}
