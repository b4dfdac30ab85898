use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid outer rectangle: x={x}, y={y}, width={width}, height={height}")]
    InvalidRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}
