mod exchange;
mod http_transport;
mod http_transport_settings;
mod response;
mod transport;

#[cfg(test)]
pub(crate) mod test;

pub use exchange::{Exchange, Method};
pub use http_transport::HttpTransport;
pub use http_transport_settings::HttpTransportSettings;
pub use response::Response;
pub use transport::{Transport, TransportError};
