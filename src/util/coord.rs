use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord<const X: u8, const Y: u8> {
    index: u8,
}

pub type Coord8 = Coord<8, 8>;

pub type CoordAllIter<C> = std::iter::Map<std::ops::Range<u8>, fn(u8) -> C>;

/// The 8 compass directions as `(dx, dy)` steps.
pub const DIRECTIONS: [(i8, i8); 8] = [(0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1)];

impl<const X: u8, const Y: u8> Coord<X, Y> {
    pub const CORNERS: [Self; 4] = [
        Coord { index: 0 },
        Coord { index: X - 1 },
        Coord { index: X * (Y - 1) },
        Coord { index: X * Y - 1 },
    ];

    pub fn from_index(index: u8) -> Self {
        assert!(index < X * Y);
        Coord { index }
    }

    pub fn from_xy(x: u8, y: u8) -> Self {
        assert!(x < X);
        assert!(y < Y);
        Coord { index: x + X * y }
    }

    /// Like [Coord::from_xy], but returns `None` instead of panicking for coordinates outside the board.
    pub fn try_from_xy(x: i16, y: i16) -> Option<Self> {
        if (0..X as i16).contains(&x) && (0..Y as i16).contains(&y) {
            Some(Self::from_xy(x as u8, y as u8))
        } else {
            None
        }
    }

    /// All coordinates in row-major order.
    pub fn all() -> CoordAllIter<Self> {
        (0..X * Y).map(|index| Coord::from_index(index))
    }

    pub fn index(self) -> u8 {
        self.index
    }

    pub fn x(self) -> u8 {
        self.index % X
    }

    pub fn y(self) -> u8 {
        self.index / X
    }

    /// Step once in direction `(dx, dy)`, `None` if that leaves the board.
    pub fn step(self, (dx, dy): (i8, i8)) -> Option<Self> {
        Self::try_from_xy(self.x() as i16 + dx as i16, self.y() as i16 + dy as i16)
    }

    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }
}

impl<const X: u8, const Y: u8> Display for Coord<X, Y> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
