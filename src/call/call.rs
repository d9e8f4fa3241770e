use crate::transport::Method;

use serde_json::Value;

/// One logical request against the remote API: a path, optional
/// arguments and the region (if any) that serves it.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub args: Option<Value>,
    pub region: Option<String>,
}

impl Call {
    pub fn get<P>(path: P) -> Self
    where
        P: Into<String>,
    {
        Call::new(Method::Get, path)
    }

    pub fn post<P>(path: P) -> Self
    where
        P: Into<String>,
    {
        Call::new(Method::Post, path)
    }

    fn new<P>(method: Method, path: P) -> Self
    where
        P: Into<String>,
    {
        Call {
            method,
            path: path.into(),
            args: None,
            region: None,
        }
    }

    pub fn args(mut self, args: Value) -> Self {
        self.args = Some(args);
        self
    }

    pub fn region<R>(mut self, region: R) -> Self
    where
        R: Into<String>,
    {
        self.region = Some(region.into());
        self
    }

    pub fn is_read(&self) -> bool {
        self.method == Method::Get
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn builder() {
        let call = Call::get("/api/v1/project/get")
            .args(json!({"account": "a", "project": "p"}))
            .region("use");

        assert_eq!(call.method, Method::Get);
        assert_eq!(call.path, "/api/v1/project/get");
        assert_eq!(call.args, Some(json!({"account": "a", "project": "p"})));
        assert_eq!(call.region.as_deref(), Some("use"));
        assert!(call.is_read());

        assert!(!Call::post("/api/v1/project/delete").is_read());
    }
}
