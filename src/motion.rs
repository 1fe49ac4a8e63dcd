//! Pointer and scroll driven transforms.
//!
//! Everything here is a pure function of the latest pointer or scroll
//! position. Components keep that position in state and render the result
//! as an inline style on each re-render.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

const FLOAT_TRAVEL_PX: f64 = 40.0;
const FLOAT_FACTOR_STEP: f64 = 0.01;
const CIRCLE_SPEED_STEP: f64 = 0.1;
const TILT_DAMPING: f64 = 20.0;
const ORBIT_DAMPING: f64 = 50.0;
const TILT_LIFT_PX: f64 = 40.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translate {
    pub x: f64,
    pub y: f64,
}

impl Translate {
    pub fn to_css(&self) -> String {
        format!("transform: translate({}px, {}px);", self.x, self.y)
    }
}

/// Drift of the floating hero icon at `index`. Icons later in the list
/// travel further so the layer reads as having depth.
pub fn floating_icon_offset(pointer: Point, viewport: Size, index: usize) -> Translate {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Translate::default();
    }
    let factor = (index + 1) as f64 * FLOAT_FACTOR_STEP;
    Translate {
        x: pointer.x / viewport.width * FLOAT_TRAVEL_PX * factor,
        y: pointer.y / viewport.height * FLOAT_TRAVEL_PX * factor,
    }
}

/// Rotation in degrees of the dashed hero circle at `index`.
pub fn tech_circle_rotation(scroll_y: f64, index: usize) -> f64 {
    scroll_y * (index + 1) as f64 * CIRCLE_SPEED_STEP
}

pub fn rotation_css(degrees: f64) -> String {
    format!("transform: rotate({}deg);", degrees)
}

/// 3D tilt of a hovered card plus the pointer position used by its shine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub pointer: Option<Point>,
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        pointer: None,
    };

    pub fn is_active(&self) -> bool {
        self.pointer.is_some()
    }

    pub fn card_style(&self) -> String {
        let mut style = format!(
            "transform: perspective(1000px) rotateX({}deg) rotateY({}deg);",
            self.rotate_x, self.rotate_y
        );
        if let Some(p) = self.pointer {
            style.push_str(&format!(" --mouse-x: {}px; --mouse-y: {}px;", p.x, p.y));
        }
        style
    }

    pub fn content_style(&self) -> String {
        let lift = if self.is_active() { TILT_LIFT_PX } else { 0.0 };
        format!("transform: translateZ({}px);", lift)
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Tilt::REST
    }
}

/// `local` is the pointer relative to the card's top-left corner.
pub fn card_tilt(local: Point, size: Size) -> Tilt {
    let center_x = size.width / 2.0;
    let center_y = size.height / 2.0;
    Tilt {
        rotate_x: (local.y - center_y) / TILT_DAMPING,
        rotate_y: (center_x - local.x) / TILT_DAMPING,
        pointer: Some(local),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitRotation {
    pub angle_x: f64,
    pub angle_y: f64,
}

impl OrbitRotation {
    pub fn to_css(&self) -> String {
        format!(
            "transform: rotateY({}deg) rotateX({}deg); transform-style: preserve-3d;",
            self.angle_x, self.angle_y
        )
    }
}

/// Rotation of the orbit layer around the founder portrait, following the
/// pointer relative to the layer's center.
pub fn orbit_rotation(pointer: Point, rect: Rect) -> OrbitRotation {
    let center = rect.center();
    OrbitRotation {
        angle_x: (pointer.x - center.x) / ORBIT_DAMPING,
        angle_y: (center.y - pointer.y) / ORBIT_DAMPING,
    }
}

/// Custom properties positioning the glow under a footer social icon.
pub fn icon_glow(local: Point) -> String {
    format!("--icon-mouse-x: {}px; --icon-mouse-y: {}px;", local.x, local.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn floating_icons_move_proportionally_to_index() {
        let viewport = Size::new(1000.0, 500.0);
        let pointer = Point::new(500.0, 500.0);

        let first = floating_icon_offset(pointer, viewport, 0);
        assert!(approx(first.x, 0.2));
        assert!(approx(first.y, 0.4));

        let third = floating_icon_offset(pointer, viewport, 2);
        assert!(approx(third.x, first.x * 3.0));
        assert!(approx(third.y, first.y * 3.0));
    }

    #[test]
    fn floating_icons_stay_put_without_viewport() {
        let offset = floating_icon_offset(Point::new(10.0, 10.0), Size::default(), 4);
        assert_eq!(offset, Translate::default());
    }

    #[test]
    fn tech_circles_spin_at_distinct_speeds() {
        assert!(approx(tech_circle_rotation(100.0, 0), 10.0));
        assert!(approx(tech_circle_rotation(100.0, 1), 20.0));
        assert!(approx(tech_circle_rotation(100.0, 2), 30.0));
        assert!(approx(tech_circle_rotation(0.0, 2), 0.0));
    }

    #[test]
    fn tilt_is_flat_at_card_center() {
        let tilt = card_tilt(Point::new(100.0, 50.0), Size::new(200.0, 100.0));
        assert!(approx(tilt.rotate_x, 0.0));
        assert!(approx(tilt.rotate_y, 0.0));
        assert!(tilt.is_active());
    }

    #[test]
    fn tilt_leans_toward_pointer_corner() {
        let tilt = card_tilt(Point::new(0.0, 100.0), Size::new(200.0, 100.0));
        assert!(approx(tilt.rotate_x, 2.5));
        assert!(approx(tilt.rotate_y, 5.0));
        assert_eq!(
            tilt.card_style(),
            "transform: perspective(1000px) rotateX(2.5deg) rotateY(5deg); --mouse-x: 0px; --mouse-y: 100px;"
        );
        assert_eq!(tilt.content_style(), "transform: translateZ(40px);");
    }

    #[test]
    fn resting_tilt_has_no_lift() {
        assert_eq!(
            Tilt::REST.card_style(),
            "transform: perspective(1000px) rotateX(0deg) rotateY(0deg);"
        );
        assert_eq!(Tilt::REST.content_style(), "transform: translateZ(0px);");
    }

    #[test]
    fn orbit_follows_pointer_around_center() {
        let rect = Rect { left: 100.0, top: 100.0, width: 200.0, height: 200.0 };
        let rotation = orbit_rotation(Point::new(300.0, 150.0), rect);
        assert!(approx(rotation.angle_x, 2.0));
        assert!(approx(rotation.angle_y, 1.0));
        assert_eq!(orbit_rotation(rect.center(), rect), OrbitRotation::default());
    }

    #[test]
    fn glow_exposes_pointer_as_custom_properties() {
        assert_eq!(icon_glow(Point::new(3.0, 7.5)), "--icon-mouse-x: 3px; --icon-mouse-y: 7.5px;");
    }
}
