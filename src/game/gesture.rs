#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which way the finger travelled, used to bias the tab transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
        }
    }

    /// Tab delta for horizontal swipes; vertical swipes only close the menu.
    pub fn tab_delta(self) -> Option<i32> {
        match self {
            SwipeDirection::Left => Some(1),
            SwipeDirection::Right => Some(-1),
            SwipeDirection::Up | SwipeDirection::Down => None,
        }
    }
}

/// Classify a touch from `start` to `end`, or `None` if it never got past
/// `threshold` along its dominant axis.
pub fn interpret(start: Point, end: Point, threshold: f64) -> Option<SwipeDirection> {
    let dx = start.x - end.x;
    let dy = start.y - end.y;
    if dx.abs() > dy.abs() {
        if dx > threshold {
            Some(SwipeDirection::Left)
        } else if dx < -threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    } else if dy > threshold {
        Some(SwipeDirection::Up)
    } else if dy < -threshold {
        Some(SwipeDirection::Down)
    } else {
        None
    }
}
