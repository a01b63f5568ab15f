/// A single record pulled from a sequence file.
#[derive(Debug, Clone)]
pub struct Sequence {
    pub data: Vec<u8>,
    pub id: String,
}

impl Sequence {
    /// Build a record with its bases uppercased, so soft-masked regions hash
    /// like the rest of the sequence.
    pub fn normalized(id: impl Into<String>, data: &[u8]) -> Self {
        Self {
            data: data.to_ascii_uppercase(),
            id: id.into(),
        }
    }
}
