use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Margins leave no room for the plot rectangle.
    #[error("degenerate layout: plot_width={plot_width}, plot_height={plot_height}")]
    DegenerateLayout { plot_width: f64, plot_height: f64 },

    #[error("market data unavailable: {0}")]
    SourceUnavailable(String),

    #[error("export failed: {0}")]
    Export(String),
}
