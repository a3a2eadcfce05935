#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square out of bounds: rank {rank}, file {file} (both must be below 8)")]
    OutOfBounds { rank: usize, file: usize },
}
