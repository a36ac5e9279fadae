// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Fraction of the full circle covered by the rotating arc.
const SWEEP: f32 = 1.5 * PI;

/// Animated spinner shown inside the submit button while a request is in
/// flight. The caller advances `rotation` on each tick.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 2.0;

                // Faint full-circle track under the arc
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(2.5).with_color(Color {
                        a: 0.2,
                        ..self.color
                    }),
                );

                // Rotating arc, approximated with short line segments
                let start_angle = self.rotation - PI / 2.0;
                let end_angle = start_angle + SWEEP;

                let mut arc_path = canvas::path::Builder::new();
                let start_x = center.x + radius * start_angle.cos();
                let start_y = center.y + radius * start_angle.sin();
                arc_path.move_to(Point::new(start_x, start_y));

                let segments = 24;
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    let x = center.x + radius * angle.cos();
                    let y = center.y + radius * angle.sin();
                    arc_path.line_to(Point::new(x, y));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(2.5)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
