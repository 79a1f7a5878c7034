use crate::surface::GroupId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown group {0:?}: the id does not belong to this document")]
    UnknownGroup(GroupId),
    #[error("Node {0:?} is a shape, not a group")]
    NotAGroup(GroupId),
    #[error("Invalid document size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}
