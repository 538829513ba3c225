//! Defines the decile lift chart.
use polars::prelude::*;
use plotters::coord::Shift;
use plotters::prelude::*;

use std::path::Path;

use crate::error::Error;
use super::chart_err;


/// Number of groups the ranked predictions are split into.
pub const N_DECILES: usize = 10;

/// Default caption of the lift chart.
pub const DEFAULT_TITLE: &str = "Decile Lift Chart";


/// Compute the mean response per decile.
///
/// `predicted` must already be sorted by probability.
/// The records are split into [`N_DECILES`] near-equal groups
/// (the first `n % 10` groups take one extra record) and each group mean
/// is divided by the overall mean.
///
/// # Errors
///
/// Fails if the series is empty, shorter than [`N_DECILES`],
/// or has a zero mean.
pub fn decile_means(predicted: &Series) -> Result<Vec<f64>, Error> {
    let name = predicted.name().to_string();
    let casted = predicted.cast(&DataType::Float64)?;
    let values = casted.f64()?
        .into_iter()
        .flatten()
        .collect::<Vec<f64>>();

    let n_records = values.len();
    if n_records == 0 {
        return Err(Error::EmptySeries { name });
    }
    if n_records < N_DECILES {
        return Err(Error::Chart(format!(
            "the series `{name}` has {n_records} records; \
             a lift chart needs at least {N_DECILES}"
        )));
    }

    let mean = values.iter().sum::<f64>() / n_records as f64;
    if mean == 0.0 {
        return Err(Error::Chart(format!(
            "the series `{name}` has a zero mean; lift is undefined"
        )));
    }

    let base = n_records / N_DECILES;
    let extra = n_records % N_DECILES;

    let mut lift = Vec::with_capacity(N_DECILES);
    let mut start = 0;
    for decile in 0..N_DECILES {
        let size = if decile < extra { base + 1 } else { base };
        let group = &values[start..start + size];
        let group_mean = group.iter().sum::<f64>() / size as f64;
        lift.push(group_mean / mean);
        start += size;
    }
    Ok(lift)
}


/// A decile lift chart of ranked predictions, drawn with plotters.
///
/// # Example
///
/// ```no_run
/// use polars::prelude::*;
/// use minicharts::LiftChart;
///
/// // predictions, sorted by probability
/// let predicted = Series::new(
///     "probability",
///     &[0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1, 0.05],
/// );
/// LiftChart::new(&predicted)
///     .save("lift.png", (640, 480))
///     .unwrap();
/// ```
pub struct LiftChart<'a> {
    predicted: &'a Series,
    title: Option<String>,
    label_bars: bool,
}


impl<'a> LiftChart<'a> {
    /// Construct a new `LiftChart` from predictions
    /// sorted by probability.
    /// By default the caption is [`DEFAULT_TITLE`] and each bar is
    /// labelled with its mean response.
    #[inline]
    pub fn new(predicted: &'a Series) -> Self {
        Self {
            predicted,
            title: Some(String::from(DEFAULT_TITLE)),
            label_bars: true,
        }
    }


    /// Replace the caption of the chart.
    #[inline]
    pub fn title<T: ToString>(mut self, title: T) -> Self {
        self.title = Some(title.to_string());
        self
    }


    /// Suppress the caption.
    #[inline]
    pub fn no_title(mut self) -> Self {
        self.title = None;
        self
    }


    /// Print the mean response above each bar.
    /// Default value is `true`.
    #[inline]
    pub fn label_bars(mut self, label_bars: bool) -> Self {
        self.label_bars = label_bars;
        self
    }


    /// Draw the chart onto a prepared drawing area.
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>)
        -> Result<(), Error>
    {
        let lift = decile_means(self.predicted)?;

        let y_max = lift.iter().copied().fold(f64::MIN, f64::max);
        // Reserve headroom for the labels above the bars.
        let y_max = if self.label_bars { 1.12 * y_max } else { y_max };

        let mut builder = ChartBuilder::on(root);
        builder.margin(10)
            .x_label_area_size(40)
            .y_label_area_size(40);
        if let Some(title) = &self.title {
            builder.caption(title, ("sans-serif", 20));
        }
        let mut chart = builder
            .build_cartesian_2d(0f64..N_DECILES as f64, 0f64..y_max)
            .map_err(chart_err)?;

        chart.configure_mesh()
            .disable_x_mesh()
            .x_labels(N_DECILES + 1)
            .x_label_formatter(&|x| format!("{:.0}", x * 10.0))
            .x_desc("Percentile")
            .y_desc("Lift")
            .draw()
            .map_err(chart_err)?;

        chart.draw_series(
            lift.iter()
                .enumerate()
                .map(|(decile, &response)| {
                    let x = decile as f64;
                    Rectangle::new(
                        [(x + 0.1, 0.0), (x + 0.9, response)],
                        BLUE.filled(),
                    )
                })
        ).map_err(chart_err)?;

        if self.label_bars {
            chart.draw_series(
                lift.iter()
                    .enumerate()
                    .map(|(decile, &response)| {
                        Text::new(
                            format!("{response:.1}"),
                            (decile as f64 + 0.1, response + 0.02 * y_max),
                            ("sans-serif", 14),
                        )
                    })
            ).map_err(chart_err)?;
        }

        Ok(())
    }


    /// Render the chart to a bitmap file of the given pixel size.
    pub fn save<P: AsRef<Path>>(&self, path: P, size: (u32, u32))
        -> Result<(), Error>
    {
        let root = BitMapBackend::new(path.as_ref(), size)
            .into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;
        self.draw(&root)?;
        root.present().map_err(chart_err)?;
        Ok(())
    }
}
