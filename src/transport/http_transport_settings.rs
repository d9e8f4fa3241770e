use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpTransportSettings {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for HttpTransportSettings {
    fn default() -> Self {
        HttpTransportSettings {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}
