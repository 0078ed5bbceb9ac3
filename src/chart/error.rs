use thiserror::Error;
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("sample rate must be greater than zero")]
    InvalidSampleRate,
    #[error("chart needs at least one channel")]
    NoChannels,
    #[error("visible window {window} must be a non-zero multiple of the sample rate {sample_rate}")]
    WindowNotAligned { window: usize, sample_rate: usize },
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ChartError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ChartError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for ChartError {
    fn from(value: image::ImageError) -> Self {
        ChartError::Plot(value.to_string())
    }
}
