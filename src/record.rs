/// One decoded FASTA record: the header line (without `>`) and the
/// concatenated sequence lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub header: String,
    pub body: String,
}

impl Record {
    pub fn new(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
        }
    }

    /// Empty both fields, keeping their allocations for reuse
    pub fn clear(&mut self) {
        self.header.clear();
        self.body.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }
}
