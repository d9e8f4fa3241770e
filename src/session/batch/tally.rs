/// How the replies of a sent `Batch` were settled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub fulfilled: usize,
    pub rejected: usize,
}

impl Tally {
    pub(in crate::session::batch) fn record<T, E>(&mut self, outcome: &Result<T, E>) {
        if outcome.is_ok() {
            self.fulfilled += 1;
        } else {
            self.rejected += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.fulfilled + self.rejected
    }
}
