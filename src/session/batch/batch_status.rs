#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Collecting,
    Sending,
    Sent,
}
