use anyhow::Context;
use plotters::coord::types::RangedCoordf64;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use std::fs;
use std::path::Path;
use wsncore::render::{Marker, MarkerShape, MarkerStyle, RenderedFigure, Rgb, Segment};

type SvgChart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const FONT: &str = "sans-serif";
const CAPTION_SIZE: u32 = 24;
const PLOT_MARGIN: u32 = 20;
const DASH_LENGTH: i32 = 6;
const DASH_GAP: i32 = 4;

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn point(marker: &Marker) -> (f64, f64) {
    (marker.position.x, marker.position.y)
}

fn fill_style(style: &MarkerStyle) -> ShapeStyle {
    rgb(style.color).mix(f64::from(style.alpha)).filled()
}

fn radius(style: &MarkerStyle) -> i32 {
    style.radius.round() as i32
}

fn series_label(figure: &RenderedFigure, markers: &[Marker]) -> Option<String> {
    let style = markers.first()?.style;
    figure
        .legend
        .iter()
        .find(|entry| entry.style == style)
        .map(|entry| entry.label.clone())
}

fn draw_markers(
    chart: &mut SvgChart<'_, '_>,
    markers: &[Marker],
    label: Option<String>,
) -> anyhow::Result<()> {
    let Some(first) = markers.first() else {
        return Ok(());
    };
    let style = first.style;
    let size = radius(&style);
    let shape_style = fill_style(&style);

    let series = match style.shape {
        MarkerShape::Circle => chart.draw_series(
            markers
                .iter()
                .map(|marker| Circle::new(point(marker), size, shape_style)),
        )?,
        MarkerShape::Cross => chart.draw_series(markers.iter().map(|marker| {
            Cross::new(point(marker), size, rgb(style.color).stroke_width(3))
        }))?,
    };

    if let Some(label) = label {
        let legend_color = rgb(style.color);
        let glyph = size.min(5);
        let series = series.label(label);
        match style.shape {
            MarkerShape::Circle => {
                series.legend(move |(x, y)| Circle::new((x, y), glyph, legend_color.filled()));
            }
            MarkerShape::Cross => {
                series.legend(move |(x, y)| {
                    Cross::new((x, y), glyph, legend_color.stroke_width(2))
                });
            }
        }
    }

    if let Some(outline) = style.outline {
        let outline_style = rgb(outline).stroke_width(1);
        chart.draw_series(
            markers
                .iter()
                .map(|marker| Circle::new(point(marker), size, outline_style)),
        )?;
    }

    Ok(())
}

fn connector_style(segment: &Segment) -> ShapeStyle {
    rgb(segment.style.color).stroke_width(segment.style.width.round().max(1.0) as u32)
}

fn connector_points(segment: &Segment) -> Vec<(f64, f64)> {
    vec![(segment.from.x, segment.from.y), (segment.to.x, segment.to.y)]
}

fn draw_connectors(chart: &mut SvgChart<'_, '_>, connectors: &[Segment]) -> anyhow::Result<()> {
    chart.draw_series(
        connectors
            .iter()
            .filter(|segment| !segment.style.dashed)
            .map(|segment| PathElement::new(connector_points(segment), connector_style(segment))),
    )?;
    chart.draw_series(
        connectors
            .iter()
            .filter(|segment| segment.style.dashed)
            .map(|segment| {
                DashedPathElement::new(
                    connector_points(segment),
                    DASH_LENGTH,
                    DASH_GAP,
                    connector_style(segment),
                )
            }),
    )?;
    Ok(())
}

/// Paints the figure into an SVG document held in memory.
pub fn render_svg(figure: &RenderedFigure, width: u32, height: u32) -> anyhow::Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let extent = figure.extent;
        let mut chart = ChartBuilder::on(&root)
            .caption(&figure.title, (FONT, CAPTION_SIZE))
            .margin(PLOT_MARGIN)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(extent.x_min..extent.x_max, extent.y_min..extent.y_max)?;

        {
            let mut mesh = chart.configure_mesh();
            mesh.x_desc(figure.x_label.as_str())
                .y_desc(figure.y_label.as_str());
            if !figure.grid {
                mesh.disable_mesh();
            }
            mesh.draw()?;
        }

        draw_markers(&mut chart, &figure.sensors, series_label(figure, &figure.sensors))?;
        draw_markers(
            &mut chart,
            &figure.cluster_heads,
            series_label(figure, &figure.cluster_heads),
        )?;

        draw_connectors(&mut chart, &figure.connectors)?;

        let base_station = std::slice::from_ref(&figure.base_station);
        draw_markers(&mut chart, base_station, series_label(figure, base_station))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
    }
    Ok(buffer)
}

pub fn write_svg<P: AsRef<Path>>(
    figure: &RenderedFigure,
    path: P,
    width: u32,
    height: u32,
) -> anyhow::Result<()> {
    let path_ref = path.as_ref();
    let svg = render_svg(figure, width, height).context("drawing figure")?;
    fs::write(path_ref, svg).with_context(|| format!("writing svg {}", path_ref.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsncore::render::LineStyle;
    use wsncore::{
        render, run_scenario, BaseStation, ClusterHeadAssignment, GeneratorConfig, Sensor,
        SensorNetwork,
    };

    fn single_head_figure() -> RenderedFigure {
        let network = SensorNetwork::new(vec![Sensor::new(20.0, 80.0, 70.0)]);
        render(
            &network,
            &BaseStation::default(),
            &ClusterHeadAssignment::from(vec![0]),
        )
    }

    fn line_marks(svg: &str) -> usize {
        svg.matches("<line").count() + svg.matches("<polyline").count()
    }

    #[test]
    fn dashed_connectors_are_drawn_in_pieces() {
        let dashed = single_head_figure();
        assert!(dashed.connectors[0].style.dashed);

        let mut solid = dashed.clone();
        solid.connectors[0].style = LineStyle {
            dashed: false,
            ..solid.connectors[0].style
        };

        let dashed_svg = render_svg(&dashed, 400, 300).unwrap();
        let solid_svg = render_svg(&solid, 400, 300).unwrap();
        assert!(
            dashed_svg.contains("stroke-dasharray")
                || line_marks(&dashed_svg) > line_marks(&solid_svg) + 1
        );
    }

    #[test]
    fn base_station_legend_uses_a_cross() {
        let figure = single_head_figure();
        let mut unlabelled = figure.clone();
        unlabelled.legend.retain(|entry| entry.label != "Base Station");

        let labelled_svg = render_svg(&figure, 400, 300).unwrap();
        let unlabelled_svg = render_svg(&unlabelled, 400, 300).unwrap();
        assert_eq!(
            labelled_svg.matches("<circle").count(),
            unlabelled_svg.matches("<circle").count()
        );
        assert_eq!(
            labelled_svg.matches("<line").count(),
            unlabelled_svg.matches("<line").count() + 2
        );
    }

    #[test]
    fn svg_contains_every_sensor_marker() {
        let scenario = run_scenario(15, &GeneratorConfig::seeded(4), |_| {}).unwrap();
        let svg = render_svg(&scenario.figure, 640, 480).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.matches("<circle").count() >= scenario.figure.sensors.len());
    }

    #[test]
    fn write_svg_creates_file() {
        let scenario = run_scenario(3, &GeneratorConfig::seeded(4), |_| {}).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("network.svg");
        write_svg(&scenario.figure, &path, 400, 300).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
    }
}
