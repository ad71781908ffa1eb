use ndarray::{Array1, Array2, Zip};
use plotly::common::{Line, Mode};
use plotly::layout::{Axis, GridPattern, Layout, LayoutGrid};
use plotly::{Contour, Plot, Scatter, Surface};

use mplot_core::math::meshgrid;

fn rows_to_vec(z: &Array2<f64>) -> Vec<Vec<f64>> {
    z.rows().into_iter().map(|row| row.to_vec()).collect()
}

/// A single red curve of `x^2`.
pub fn simple_plot(x: &Array1<f64>, title: &str) -> Plot {
    let y = x.mapv(|v| v * v);

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(x.to_vec(), y.to_vec())
            .mode(Mode::Lines)
            .line(Line::new().color("red")),
    );
    plot.set_layout(Layout::new().title(title));
    plot
}

/// Linear, quadratic and cubic curves on one set of axes with a legend.
pub fn multiple_plot(x: &Array1<f64>, title: &str) -> Plot {
    let mut plot = Plot::new();
    for (name, power) in [("linear", 1), ("quadratic", 2), ("cubic", 3)] {
        let y = x.mapv(|v| v.powi(power));
        plot.add_trace(
            Scatter::new(x.to_vec(), y.to_vec())
                .name(name)
                .mode(Mode::Lines),
        );
    }

    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title("x label"))
            .y_axis(Axis::new().title("y label")),
    );
    plot
}

/// `x`, `x^2`, `x^3` and `x^4` on a 2x2 grid of independent axes.
pub fn subplots_plot(x: &Array1<f64>, title: &str) -> Plot {
    let panels = [
        ("x", "x", "y"),
        ("x^2", "x2", "y2"),
        ("x^3", "x3", "y3"),
        ("x^4", "x4", "y4"),
    ];

    let mut plot = Plot::new();
    for (power, (name, x_axis, y_axis)) in (1..).zip(panels) {
        let y = x.mapv(|v| v.powi(power));
        plot.add_trace(
            Scatter::new(x.to_vec(), y.to_vec())
                .name(name)
                .mode(Mode::Lines)
                .x_axis(x_axis)
                .y_axis(y_axis),
        );
    }

    // Only the bottom row and left column are labelled.
    let layout = Layout::new()
        .title(title)
        .grid(
            LayoutGrid::new()
                .rows(2)
                .columns(2)
                .pattern(GridPattern::Independent),
        )
        .y_axis(Axis::new().title("f(x)"))
        .x_axis3(Axis::new().title("x"))
        .y_axis3(Axis::new().title("f(x)"))
        .x_axis4(Axis::new().title("x"));
    plot.set_layout(layout);
    plot
}

/// Height field of the difference of two Gaussians on the `meshgrid` of `x` and `y`.
pub fn contour_heights(x: &Array1<f64>, y: &Array1<f64>) -> Array2<f64> {
    let (xx, yy) = meshgrid(x, y);
    Zip::from(&xx).and(&yy).map_collect(|&x, &y| {
        let z1 = (-x * x - y * y).exp();
        let z2 = (-(x - 1.0).powi(2) - (y - 1.0).powi(2)).exp();
        (z1 - z2) * 2.0
    })
}

/// Filled contours of [`contour_heights`].
pub fn contour_plot(x: &Array1<f64>, y: &Array1<f64>, title: &str) -> Plot {
    let z = contour_heights(x, y);

    let mut plot = Plot::new();
    plot.add_trace(Contour::new(x.to_vec(), y.to_vec(), rows_to_vec(&z)));
    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title("x"))
            .y_axis(Axis::new().title("y")),
    );
    plot
}

/// `sin(sqrt(x^2 + y^2))` on the `meshgrid` of `x` and `y`.
pub fn surface_heights(x: &Array1<f64>, y: &Array1<f64>) -> Array2<f64> {
    let (xx, yy) = meshgrid(x, y);
    Zip::from(&xx)
        .and(&yy)
        .map_collect(|&x, &y| (x * x + y * y).sqrt().sin())
}

pub fn surface_plot(x: &Array1<f64>, y: &Array1<f64>, title: &str) -> Plot {
    let z = surface_heights(x, y);

    let mut plot = Plot::new();
    plot.add_trace(
        Surface::new(rows_to_vec(&z))
            .x(x.to_vec())
            .y(y.to_vec()),
    );
    plot.set_layout(Layout::new().title(title));
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use mplot_core::math::arange;

    #[test]
    fn test_contour_heights_shape_and_extremes() {
        let x = arange(-3.0, 3.0001, 0.5).unwrap();
        let y = arange(-2.0, 2.0001, 0.5).unwrap();
        let z = contour_heights(&x, &y);
        assert_eq!(z.dim(), (y.len(), x.len()));

        // (0, 0) sits on the positive peak.
        let origin = z[(4, 6)];
        let expected = 2.0 * (1.0 - (-2.0f64).exp());
        assert!((origin - expected).abs() < 1e-12);
    }

    #[test]
    fn test_surface_heights_origin_is_zero() {
        let x = arange(-1.0, 1.01, 1.0).unwrap();
        let z = surface_heights(&x, &x);
        assert_eq!(z[(1, 1)], 0.0);
        assert_eq!(z[(0, 1)], 1.0f64.sin());
    }

    #[test]
    fn test_demo_plots_have_expected_traces() {
        let x = arange(0.0, 2.01, 0.02).unwrap();
        let html = multiple_plot(&x, "Multiple curves").to_html();
        assert!(html.contains("quadratic"));
        assert!(html.contains("cubic"));

        let html = subplots_plot(&x, "Subplots").to_html();
        assert!(html.contains("x^4"));
    }
}
