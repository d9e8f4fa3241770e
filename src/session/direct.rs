use crate::{
    call::{Call, CallError, Rejection, Reply},
    debug,
    session::{normalize, Batch, Caller, SessionSettings, UsageError},
    transport::{Exchange, Method, Transport},
    wire,
};

use doomstack::{here, Doom, ResultExt, Top};

use std::sync::Arc;

/// Single-call session: every `Call` is its own exchange.
pub struct Direct<T: Transport> {
    transport: Arc<T>,
    settings: SessionSettings,
}

impl<T> Direct<T>
where
    T: Transport,
{
    pub fn new(transport: Arc<T>, settings: SessionSettings) -> Self {
        Direct {
            transport,
            settings,
        }
    }

    /// Creates a fresh `Batch` over the same transport and settings.
    /// Every call registered on it must belong to `region`.
    pub fn batch(&self, region: Option<String>) -> Batch<T> {
        Batch::new(self.transport.clone(), region, self.settings.clone())
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    fn exchange(call: Call, settings: &SessionSettings) -> Exchange {
        let Call {
            method,
            path,
            args,
            region,
        } = call;

        match method {
            Method::Get => Exchange {
                method,
                address: wire::address(path.as_str(), args.as_ref(), region.as_deref()),
                payload: None,
                headers: settings.headers(),
            },
            Method::Post => Exchange {
                method,
                address: wire::address(path.as_str(), None, region.as_deref()),
                payload: args,
                headers: settings.headers(),
            },
        }
    }
}

impl<T> Caller for Direct<T>
where
    T: Transport,
{
    fn call(&self, call: Call) -> Result<Reply, Top<UsageError>> {
        let call = normalize(call)?;
        let exchange = Direct::<T>::exchange(call, &self.settings);

        let transport = self.transport.clone();
        let success_code = self.settings.success_code;

        Ok(Reply::direct(async move {
            debug!("Direct call: {:?} {}", exchange.method, exchange.address);

            let response = transport
                .exchange(exchange)
                .await
                .map_err(|error| {
                    CallError::TransportFailed {
                        source: Arc::new(error),
                    }
                    .into_top()
                })
                .spot(here!())?;

            if response.code == success_code {
                Ok(response.body)
            } else {
                CallError::Rejected {
                    source: Rejection {
                        code: response.code,
                        body: response.body,
                    },
                }
                .fail()
                .spot(here!())
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::transport::{test::MockTransport, Response};

    use serde_json::{json, Value};

    #[tokio::test]
    async fn get_goes_out_immediately_with_query_args() {
        let transport = MockTransport::new(|_| Some(Response::new(200, json!({"id": "p"}))));
        let direct = Direct::new(transport.clone(), Default::default());

        let reply = direct
            .call(
                Call::get("/api/v1/project/get")
                    .args(json!({"shard": "2"}))
                    .region("use"),
            )
            .unwrap();

        assert_eq!(reply.await.unwrap(), json!({"id": "p"}));

        let exchanges = transport.exchanges();
        assert_eq!(exchanges.len(), 1);

        let exchange = &exchanges[0];
        assert_eq!(exchange.method, Method::Get);
        assert_eq!(
            exchange.address,
            "/api/v1/project/get?args=%7B%22shard%22%3A2%7D&region=use"
        );
        assert_eq!(exchange.payload, None);
        assert_eq!(exchange.header("x-client"), Some("web"));
    }

    #[tokio::test]
    async fn post_carries_args_as_payload() {
        let transport = MockTransport::new(|_| Some(Response::new(200, Value::Null)));
        let direct = Direct::new(transport.clone(), Default::default());

        direct
            .call(Call::post("/api/v1/project/delete").args(json!({"project": "p"})))
            .unwrap()
            .await
            .unwrap();

        let exchange = transport.exchanges().remove(0);
        assert_eq!(exchange.method, Method::Post);
        assert_eq!(exchange.address, "/api/v1/project/delete");
        assert_eq!(exchange.payload, Some(json!({"project": "p"})));
    }

    #[tokio::test]
    async fn non_success_code_rejects_with_body() {
        let transport = MockTransport::new(|_| Some(Response::new(403, json!("forbidden"))));
        let direct = Direct::new(transport, Default::default());

        let error = direct
            .call(Call::get("/api/v1/account/getMe"))
            .unwrap()
            .await
            .unwrap_err();

        assert_eq!(
            error.top().rejection(),
            Some(&Rejection {
                code: 403,
                body: json!("forbidden")
            })
        );
    }

    #[tokio::test]
    async fn transport_failure_rejects() {
        let direct = Direct::new(MockTransport::failing(), Default::default());

        let error = direct
            .call(Call::get("/api/v1/account/getMe"))
            .unwrap()
            .await
            .unwrap_err();

        assert!(matches!(error.top(), CallError::TransportFailed { .. }));
    }

    #[test]
    fn invalid_shard_fails_fast() {
        let direct = Direct::new(MockTransport::failing(), Default::default());

        let result = direct.call(Call::get("/api/v1/task/get").args(json!({"shard": "x"})));

        assert!(matches!(
            result.err().unwrap().top(),
            UsageError::InvalidShard { .. }
        ));
    }
}
