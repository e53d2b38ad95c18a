use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeformError {
    #[error("mesh has no vertices")]
    EmptyMesh,
    #[error("non-finite rest vertex at index {0}")]
    NonFiniteVertex(usize),
}
