/// Wire form used for the items of a combined request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeForm {
    /// Bare addresses sent to `mget_path`. Reads only.
    Address,
    /// `{region, path, args}` records posted to `mdo_path`.
    Structured,
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub client_header: (String, String),
    pub mget_path: String,
    pub mdo_path: String,
    pub success_code: u16,
    pub minimum_batch_size: usize,
    pub form: EnvelopeForm,
}

impl SessionSettings {
    pub(crate) fn headers(&self) -> Vec<(String, String)> {
        vec![self.client_header.clone()]
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            client_header: ("X-Client".to_string(), "web".to_string()),
            mget_path: "/api/mget".to_string(),
            mdo_path: "/api/mdo".to_string(),
            success_code: 200,
            minimum_batch_size: 2,
            form: EnvelopeForm::Structured,
        }
    }
}
