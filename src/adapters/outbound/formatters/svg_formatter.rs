use crate::application::dto::ReportMetadata;
use crate::ports::outbound::ReportFormatter;
use crate::scoring::domain::HealthScore;
use crate::shared::Result;

/// Canvas size of the generated plot, in SVG user units
const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 560.0;

/// Margins around the plot area (left holds the y tick labels and title)
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;

/// Number of tick divisions per axis
const TICKS: usize = 5;

/// SvgPlotFormatter adapter for rendering the health report as a
/// standalone SVG scatter plot
///
/// This adapter implements the ReportFormatter port for SVG output: one
/// point per dependency with ecosystem staleness on the x axis and
/// version currency on the y axis. Points past the label threshold get
/// an artifact label so the worst offenders are readable at a glance.
pub struct SvgPlotFormatter {
    label_threshold_days: i64,
}

impl SvgPlotFormatter {
    pub fn new(label_threshold_days: i64) -> Self {
        Self {
            label_threshold_days,
        }
    }

    /// Escapes characters with special meaning in XML text and attributes
    fn escape_xml(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }

    /// Axis upper bound: a little headroom past the largest value so no
    /// point sits on the plot border. Degenerates to 1 for empty input.
    fn axis_max(values: impl Iterator<Item = i64>) -> f64 {
        let max = values.max().unwrap_or(0).max(1);
        (max as f64) * 1.05
    }

    fn plot_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    /// Maps a data value to an x pixel coordinate
    fn x_pixel(value: f64, max_x: f64) -> f64 {
        MARGIN_LEFT + value / max_x * Self::plot_width()
    }

    /// Maps a data value to a y pixel coordinate (SVG y grows downward)
    fn y_pixel(value: f64, max_y: f64) -> f64 {
        MARGIN_TOP + Self::plot_height() - value / max_y * Self::plot_height()
    }

    fn render_axes(&self, svg: &mut String, max_x: f64, max_y: f64) {
        let x0 = MARGIN_LEFT;
        let y0 = MARGIN_TOP + Self::plot_height();
        let x1 = MARGIN_LEFT + Self::plot_width();
        let y1 = MARGIN_TOP;

        svg.push_str(&format!(
            "  <line x1=\"{x0}\" y1=\"{y0}\" x2=\"{x1}\" y2=\"{y0}\" stroke=\"#333\"/>\n"
        ));
        svg.push_str(&format!(
            "  <line x1=\"{x0}\" y1=\"{y0}\" x2=\"{x0}\" y2=\"{y1}\" stroke=\"#333\"/>\n"
        ));

        for i in 0..=TICKS {
            let fraction = i as f64 / TICKS as f64;

            let x_value = (max_x * fraction).round() as i64;
            let x = Self::x_pixel(x_value as f64, max_x);
            svg.push_str(&format!(
                "  <line x1=\"{x:.1}\" y1=\"{y0}\" x2=\"{x:.1}\" y2=\"{}\" stroke=\"#333\"/>\n",
                y0 + 5.0
            ));
            svg.push_str(&format!(
                "  <text x=\"{x:.1}\" y=\"{}\" font-size=\"11\" text-anchor=\"middle\">{x_value}</text>\n",
                y0 + 18.0
            ));

            let y_value = (max_y * fraction).round() as i64;
            let y = Self::y_pixel(y_value as f64, max_y);
            svg.push_str(&format!(
                "  <line x1=\"{}\" y1=\"{y:.1}\" x2=\"{x0}\" y2=\"{y:.1}\" stroke=\"#333\"/>\n",
                x0 - 5.0
            ));
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"end\">{y_value}</text>\n",
                x0 - 9.0,
                y + 4.0
            ));
        }
    }

    fn render_titles(&self, svg: &mut String) {
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"28\" font-size=\"16\" text-anchor=\"middle\" font-weight=\"bold\">Technical debt of application</text>\n",
            WIDTH / 2.0
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\">Days since latest release (ecosystem)</text>\n",
            MARGIN_LEFT + Self::plot_width() / 2.0,
            HEIGHT - 20.0
        ));
        svg.push_str(&format!(
            "  <text x=\"20\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\" transform=\"rotate(-90 20 {:.1})\">Days behind latest version (currency)</text>\n",
            MARGIN_TOP + Self::plot_height() / 2.0,
            MARGIN_TOP + Self::plot_height() / 2.0
        ));
    }

    /// Dashed guide lines marking the label threshold on both axes
    fn render_threshold_guides(&self, svg: &mut String, max_x: f64, max_y: f64) {
        let threshold = self.label_threshold_days as f64;

        if threshold < max_x {
            let x = Self::x_pixel(threshold, max_x);
            svg.push_str(&format!(
                "  <line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" stroke=\"#bbb\" stroke-dasharray=\"4 3\"/>\n",
                MARGIN_TOP,
                MARGIN_TOP + Self::plot_height()
            ));
        }

        if threshold < max_y {
            let y = Self::y_pixel(threshold, max_y);
            svg.push_str(&format!(
                "  <line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#bbb\" stroke-dasharray=\"4 3\"/>\n",
                MARGIN_LEFT,
                MARGIN_LEFT + Self::plot_width()
            ));
        }
    }

    fn render_points(&self, svg: &mut String, scores: &[HealthScore], max_x: f64, max_y: f64) {
        for score in scores {
            let x = Self::x_pixel(score.ecosystem as f64, max_x);
            let y = Self::y_pixel(score.currency as f64, max_y);

            svg.push_str(&format!(
                "  <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"4\" fill=\"#1f77b4\" fill-opacity=\"0.8\"/>\n"
            ));

            // Label only the offenders, so a healthy plot stays readable
            if score.exceeds(self.label_threshold_days) {
                svg.push_str(&format!(
                    "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\">{}</text>\n",
                    x + 6.0,
                    y + 4.0,
                    Self::escape_xml(&score.artifact_id)
                ));
            }
        }
    }
}

impl ReportFormatter for SvgPlotFormatter {
    fn format(&self, scores: &[HealthScore], _metadata: &ReportMetadata) -> Result<String> {
        let max_x = Self::axis_max(scores.iter().map(|s| s.ecosystem));
        let max_y = Self::axis_max(scores.iter().map(|s| s.currency));

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" font-family=\"sans-serif\">\n"
        ));
        svg.push_str(&format!(
            "  <rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"white\"/>\n"
        ));

        self.render_titles(&mut svg);
        self.render_axes(&mut svg, max_x, max_y);
        self.render_threshold_guides(&mut svg, max_x, max_y);
        self.render_points(&mut svg, scores, max_x, max_y);

        svg.push_str("</svg>\n");
        Ok(svg)
    }
}
