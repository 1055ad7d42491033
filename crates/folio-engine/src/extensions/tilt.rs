// extensions/tilt.rs
//
// 3D hover tilt for project cards. The page writes the result as
// `perspective(1000px) rotateX(..deg) rotateY(..deg) scale(..)`.

/// Pixels of pointer offset per degree of rotation.
const TILT_DIVISOR: f32 = 20.0;

/// Scale while hovered.
pub const HOVER_SCALE: f32 = 1.02;

/// Perspective distance the transform is written with, in pixels.
pub const TILT_PERSPECTIVE: f32 = 1000.0;

/// Card transform: rotations in degrees plus a uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
}

impl CardTilt {
    /// Transform after the pointer leaves the card.
    pub const REST: CardTilt = CardTilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    /// Tilt for a pointer at (`x`, `y`) relative to the card's top-left
    /// corner. The card leans away from the pointer.
    pub fn hover(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rotate_x: (y - height / 2.0) / TILT_DIVISOR,
            rotate_y: (width / 2.0 - x) / TILT_DIVISOR,
            scale: HOVER_SCALE,
        }
    }

    pub fn as_array(&self) -> [f32; 3] {
        [self.rotate_x, self.rotate_y, self.scale]
    }
}

impl Default for CardTilt {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_only_scales() {
        let t = CardTilt::hover(150.0, 100.0, 300.0, 200.0);
        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
        assert_eq!(t.scale, HOVER_SCALE);
    }

    #[test]
    fn corner_pointer_leans_away() {
        // Top-left corner of a 300x200 card.
        let t = CardTilt::hover(0.0, 0.0, 300.0, 200.0);
        assert_eq!(t.rotate_x, -5.0);
        assert_eq!(t.rotate_y, 7.5);

        let t = CardTilt::hover(300.0, 200.0, 300.0, 200.0);
        assert_eq!(t.rotate_x, 5.0);
        assert_eq!(t.rotate_y, -7.5);
    }

    #[test]
    fn leave_resets() {
        assert_eq!(CardTilt::default(), CardTilt::REST);
        assert_eq!(CardTilt::REST.as_array(), [0.0, 0.0, 1.0]);
    }
}
