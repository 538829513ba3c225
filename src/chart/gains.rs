//! Defines the cumulative gains chart.
use polars::prelude::*;
use plotters::coord::Shift;
use plotters::prelude::*;

use std::path::Path;

use crate::error::Error;
use super::chart_err;


/// Compute the cumulative gains of ranked outcomes,
/// with a leading `0` so that the curve starts at the origin.
/// The result has `n + 1` entries for `n` records.
///
/// `gains` must already be sorted by the predicted probability.
pub fn cumulative_gains(gains: &Series) -> Result<Vec<f64>, Error> {
    let casted = gains.cast(&DataType::Float64)?;
    let values = casted.f64()?;

    if values.is_empty() {
        return Err(Error::EmptySeries {
            name: gains.name().to_string(),
        });
    }

    let mut cumulative = Vec::with_capacity(values.len() + 1);
    cumulative.push(0.0);

    let mut acc = 0.0;
    for value in values.into_iter().flatten() {
        acc += value;
        cumulative.push(acc);
    }
    Ok(cumulative)
}


/// A cumulative gains chart, drawn with plotters.
/// The chart shows the cumulative gains curve together with the dashed
/// diagonal a random ranking would achieve.
///
/// # Example
///
/// ```no_run
/// use polars::prelude::*;
/// use minicharts::GainsChart;
///
/// // actual outcomes, sorted by predicted probability
/// let gains = Series::new("gains", &[1.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
/// GainsChart::new(&gains)
///     .label("validation")
///     .save("gains.png", (640, 480))
///     .unwrap();
/// ```
pub struct GainsChart<'a> {
    gains: &'a Series,
    color: RGBColor,
    label: Option<String>,
}


impl<'a> GainsChart<'a> {
    /// Construct a new `GainsChart` from outcomes
    /// sorted by predicted probability.
    #[inline]
    pub fn new(gains: &'a Series) -> Self {
        Self {
            gains,
            color: BLUE,
            label: None,
        }
    }


    /// Set the color of the gains curve.
    /// Default color is blue.
    #[inline]
    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = color;
        self
    }


    /// Attach a legend entry to the gains curve.
    #[inline]
    pub fn label<T: ToString>(mut self, label: T) -> Self {
        self.label = Some(label.to_string());
        self
    }


    /// Draw the chart onto a prepared drawing area.
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>)
        -> Result<(), Error>
    {
        let cumulative = cumulative_gains(self.gains)?;

        let n_total = (cumulative.len() - 1) as f64;
        let n_actual = *cumulative.last()
            .expect("cumulative gains always has a leading 0");
        let y_max = n_actual.max(1.0);

        let mut chart = ChartBuilder::on(root)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(40)
            .build_cartesian_2d(0f64..n_total, 0f64..y_max)
            .map_err(chart_err)?;

        chart.configure_mesh()
            .x_desc("# records")
            .y_desc("# cumulative gains")
            .draw()
            .map_err(chart_err)?;

        let color = self.color;
        let curve = chart.draw_series(LineSeries::new(
            cumulative.iter()
                .enumerate()
                .map(|(i, &gain)| (i as f64, gain)),
            &color,
        )).map_err(chart_err)?;

        if let Some(label) = &self.label {
            curve.label(label)
                .legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        color.stroke_width(2),
                    )
                });
        }

        // Random-ranking baseline.
        chart.draw_series(DashedLineSeries::new(
            [(0.0, 0.0), (n_total, n_actual)],
            5,
            5,
            BLACK.stroke_width(1),
        )).map_err(chart_err)?;

        if self.label.is_some() {
            chart.configure_series_labels()
                .border_style(&BLACK)
                .draw()
                .map_err(chart_err)?;
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
