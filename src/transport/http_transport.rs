use crate::{
    debug,
    transport::{Exchange, HttpTransportSettings, Method, Response, Transport, TransportError},
};

use async_trait::async_trait;

use doomstack::{here, Doom, ResultExt, Top};

use reqwest::Client;

use serde_json::Value;

/// `Transport` over HTTP. Addresses are resolved against `base`
/// (e.g., `http://localhost:8787`).
pub struct HttpTransport {
    client: Client,
    base: String,
}

impl HttpTransport {
    pub fn new<B>(base: B, settings: HttpTransportSettings) -> Result<Self, Top<TransportError>>
    where
        B: Into<String>,
    {
        let client = Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|source| TransportError::BuildFailed { source }.into_top())
            .spot(here!())?;

        let base = base.into().trim_end_matches('/').to_string();

        Ok(HttpTransport { client, base })
    }

    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    fn parse_body(bytes: &[u8]) -> Value {
        if bytes.is_empty() {
            return Value::Null;
        }

        // Error pages are not always JSON: keep their text as a string body
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn exchange(&self, exchange: Exchange) -> Result<Response, Top<TransportError>> {
        let Exchange {
            method,
            address,
            payload,
            headers,
        } = exchange;

        let url = format!("{}{}", self.base, address);

        debug!("Exchanging {:?} {}", method, url);

        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };

        for (name, value) in headers {
            request = request.header(name, value);
        }

        if let Some(payload) = payload {
            request = request.json(&payload);
        }

        let response = request
            .send()
            .await
            .map_err(|source| TransportError::RequestFailed { source }.into_top())
            .spot(here!())?;

        let code = response.status().as_u16();

        let bytes = response
            .bytes()
            .await
            .map_err(|source| TransportError::ReadFailed { source }.into_top())
            .spot(here!())?;

        Ok(Response {
            code,
            body: HttpTransport::parse_body(bytes.as_ref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        sync::oneshot,
    };

    async fn respond_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let (request_inlet, request_outlet) = oneshot::channel();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();

            let mut buffer = vec![0u8; 8192];
            let mut read = 0;

            // Read until the end of the headers (plus any declared body)
            loop {
                let n = stream.read(&mut buffer[read..]).await.unwrap();
                read += n;

                let text = String::from_utf8_lossy(&buffer[..read]).to_string();

                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text
                        .lines()
                        .find_map(|line| {
                            line.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(|value| value.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);

                    if read >= end + 4 + length {
                        break;
                    }
                }

                if n == 0 {
                    break;
                }
            }

            let _ = request_inlet.send(String::from_utf8_lossy(&buffer[..read]).to_string());

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );

            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        (address, request_outlet)
    }

    #[tokio::test]
    async fn get_forwards_address_and_headers() {
        let (base, request) = respond_once("200 OK", r#"{"name":"ali"}"#).await;

        let transport = HttpTransport::new(base, Default::default()).unwrap();

        let response = transport
            .exchange(Exchange {
                method: Method::Get,
                address: "/api/v1/centralAccount/getMe?region=use".to_string(),
                payload: None,
                headers: vec![("X-Client".to_string(), "web".to_string())],
            })
            .await
            .unwrap();

        assert_eq!(response, Response::new(200, json!({"name": "ali"})));

        let request = request.await.unwrap();

        assert!(request.starts_with("GET /api/v1/centralAccount/getMe?region=use HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("x-client: web"));
    }

    #[tokio::test]
    async fn post_sends_json_payload() {
        let (base, request) = respond_once("200 OK", "").await;

        let transport = HttpTransport::new(format!("{}/", base), Default::default()).unwrap();

        let response = transport
            .exchange(Exchange {
                method: Method::Post,
                address: "/api/mdo".to_string(),
                payload: Some(json!({"0": {"path": "/a"}})),
                headers: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(response, Response::new(200, Value::Null));

        let request = request.await.unwrap();

        assert!(request.starts_with("POST /api/mdo HTTP/1.1"));
        assert!(request.ends_with(r#"{"0":{"path":"/a"}}"#));
    }

    #[tokio::test]
    async fn non_json_error_body_is_kept_as_text() {
        let (base, _request) = respond_once("404 Not Found", "404 page not found").await;

        let transport = HttpTransport::new(base, Default::default()).unwrap();

        let response = transport
            .exchange(Exchange {
                method: Method::Get,
                address: "/api/v1/nope".to_string(),
                payload: None,
                headers: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(response.code, 404);
        assert_eq!(response.body, json!("404 page not found"));
    }

    #[tokio::test]
    async fn unreachable_host_fails_exchange() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let transport = HttpTransport::new(base, Default::default()).unwrap();

        let result = transport
            .exchange(Exchange {
                method: Method::Get,
                address: "/api/v1/centralAccount/getRegions".to_string(),
                payload: None,
                headers: Vec::new(),
            })
            .await;

        assert!(result.is_err());
    }
}
