use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke, Text};
use iced::{mouse, Color, Pixels, Point, Rectangle, Renderer, Size, Theme};
use wsncore::render::{MarkerShape, MarkerStyle, PlotExtent, RenderedFigure, Rgb};
use wsncore::Position;

const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 24.0;
const MARGIN_TOP: f32 = 44.0;
const MARGIN_BOTTOM: f32 = 56.0;
const GRID_STEPS: usize = 5;
const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 13.0;
const DASH: [f32; 2] = [6.0, 4.0];

fn color(rgb: Rgb, alpha: f32) -> Color {
    let [r, g, b] = rgb.to_unit();
    Color::from_rgba(r, g, b, alpha)
}

/// Rough advance width for centring text without a layout pass.
fn text_width(content: &str, size: f32) -> f32 {
    content.chars().count() as f32 * size * 0.55
}

/// Maps data coordinates onto the plot rectangle inside the canvas.
struct Viewport {
    origin: Point,
    size: Size,
    extent: PlotExtent,
}

impl Viewport {
    fn new(bounds: Size, extent: PlotExtent) -> Self {
        Self {
            origin: Point::new(MARGIN_LEFT, MARGIN_TOP),
            size: Size::new(
                (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
                (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
            ),
            extent,
        }
    }

    fn project(&self, position: Position) -> Point {
        let (u, v) = self.extent.normalize(position);
        Point::new(
            self.origin.x + u as f32 * self.size.width,
            self.origin.y + v as f32 * self.size.height,
        )
    }

    fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }
}

/// Paints a [`RenderedFigure`] onto an iced canvas.
pub struct FigureCanvas<'a> {
    figure: &'a RenderedFigure,
}

impl<'a> FigureCanvas<'a> {
    pub fn new(figure: &'a RenderedFigure) -> Self {
        Self { figure }
    }

    fn draw_axes(&self, frame: &mut Frame, viewport: &Viewport) {
        let extent = self.figure.extent;
        let grid_color = Color::from_rgb(0.85, 0.85, 0.85);
        let axis_color = Color::from_rgb(0.2, 0.2, 0.2);

        let x_ticks = PlotExtent::ticks(extent.x_min, extent.x_max, GRID_STEPS);
        let y_ticks = PlotExtent::ticks(extent.y_min, extent.y_max, GRID_STEPS);

        for &x in &x_ticks {
            let top = viewport.project(Position::new(x, extent.y_max));
            let bottom = viewport.project(Position::new(x, extent.y_min));
            if self.figure.grid {
                frame.stroke(
                    &Path::line(top, bottom),
                    Stroke::default().with_color(grid_color).with_width(1.0),
                );
            }
            let label = format!("{x:.0}");
            frame.fill_text(Text {
                position: Point::new(bottom.x - text_width(&label, LABEL_SIZE) / 2.0, bottom.y + 6.0),
                content: label,
                color: axis_color,
                size: Pixels(LABEL_SIZE),
                ..Text::default()
            });
        }

        for &y in &y_ticks {
            let left = viewport.project(Position::new(extent.x_min, y));
            let right = viewport.project(Position::new(extent.x_max, y));
            if self.figure.grid {
                frame.stroke(
                    &Path::line(left, right),
                    Stroke::default().with_color(grid_color).with_width(1.0),
                );
            }
            let label = format!("{y:.0}");
            frame.fill_text(Text {
                position: Point::new(
                    left.x - text_width(&label, LABEL_SIZE) - 8.0,
                    left.y - LABEL_SIZE / 2.0,
                ),
                content: label,
                color: axis_color,
                size: Pixels(LABEL_SIZE),
                ..Text::default()
            });
        }

        frame.stroke(
            &Path::rectangle(viewport.origin, viewport.size),
            Stroke::default().with_color(axis_color).with_width(1.0),
        );

        let center_x = viewport.origin.x + viewport.size.width / 2.0;
        frame.fill_text(Text {
            content: self.figure.title.clone(),
            position: Point::new(
                center_x - text_width(&self.figure.title, TITLE_SIZE) / 2.0,
                12.0,
            ),
            color: axis_color,
            size: Pixels(TITLE_SIZE),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: self.figure.x_label.clone(),
            position: Point::new(
                center_x - text_width(&self.figure.x_label, LABEL_SIZE) / 2.0,
                viewport.bottom() + 28.0,
            ),
            color: axis_color,
            size: Pixels(LABEL_SIZE),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: self.figure.y_label.clone(),
            position: Point::new(6.0, viewport.origin.y - 20.0),
            color: axis_color,
            size: Pixels(LABEL_SIZE),
            ..Text::default()
        });
    }

    fn draw_connectors(&self, frame: &mut Frame, viewport: &Viewport) {
        for segment in &self.figure.connectors {
            let base = Stroke::default()
                .with_color(color(segment.style.color, 1.0))
                .with_width(segment.style.width);
            let stroke = if segment.style.dashed {
                Stroke {
                    line_dash: LineDash {
                        segments: &DASH,
                        offset: 0,
                    },
                    ..base
                }
            } else {
                base
            };
            frame.stroke(
                &Path::line(viewport.project(segment.from), viewport.project(segment.to)),
                stroke,
            );
        }
    }

    fn draw_legend(&self, frame: &mut Frame, viewport: &Viewport) {
        let row_height = 20.0;
        let width = 140.0;
        let height = row_height * self.figure.legend.len() as f32 + 8.0;
        let top_left = Point::new(viewport.right() - width - 8.0, viewport.origin.y + 8.0);

        let panel = Path::rectangle(top_left, Size::new(width, height));
        frame.fill(&panel, Color::from_rgba(1.0, 1.0, 1.0, 0.85));
        frame.stroke(
            &panel,
            Stroke::default()
                .with_color(Color::from_rgb(0.6, 0.6, 0.6))
                .with_width(1.0),
        );

        for (idx, entry) in self.figure.legend.iter().enumerate() {
            let row_center = top_left.y + 4.0 + row_height * (idx as f32 + 0.5);
            let mut sample = entry.style;
            sample.radius = sample.radius.min(6.0);
            draw_marker(frame, Point::new(top_left.x + 16.0, row_center), &sample);
            frame.fill_text(Text {
                content: entry.label.clone(),
                position: Point::new(top_left.x + 32.0, row_center - LABEL_SIZE / 2.0),
                color: Color::BLACK,
                size: Pixels(LABEL_SIZE),
                ..Text::default()
            });
        }
    }
}

fn draw_marker(frame: &mut Frame, center: Point, style: &MarkerStyle) {
    match style.shape {
        MarkerShape::Circle => {
            let circle = Path::circle(center, style.radius);
            frame.fill(&circle, color(style.color, style.alpha));
            if let Some(outline) = style.outline {
                frame.stroke(
                    &circle,
                    Stroke::default()
                        .with_color(color(outline, 1.0))
                        .with_width(1.0),
                );
            }
        }
        MarkerShape::Cross => {
            let r = style.radius;
            let cross = Path::new(|builder| {
                builder.move_to(Point::new(center.x - r, center.y - r));
                builder.line_to(Point::new(center.x + r, center.y + r));
                builder.move_to(Point::new(center.x - r, center.y + r));
                builder.line_to(Point::new(center.x + r, center.y - r));
            });
            frame.stroke(
                &cross,
                Stroke::default()
                    .with_color(color(style.color, style.alpha))
                    .with_width(3.0),
            );
        }
    }
}

impl<Message> canvas::Program<Message> for FigureCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::WHITE);

        let viewport = Viewport::new(bounds.size(), self.figure.extent);
        self.draw_axes(&mut frame, &viewport);

        for marker in &self.figure.sensors {
            draw_marker(&mut frame, viewport.project(marker.position), &marker.style);
        }
        for marker in &self.figure.cluster_heads {
            draw_marker(&mut frame, viewport.project(marker.position), &marker.style);
        }
        self.draw_connectors(&mut frame, &viewport);

        let station = &self.figure.base_station;
        draw_marker(&mut frame, viewport.project(station.position), &station.style);

        self.draw_legend(&mut frame, &viewport);

        vec![frame.into_geometry()]
    }
}
