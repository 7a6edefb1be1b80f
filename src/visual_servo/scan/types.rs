//! Detection result types

/// Horizontal third of a frame row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Left,
    Center,
    Right,
}

impl Zone {
    /// Classifies a byte column within a row of `row_stride` bytes.
    ///
    /// Integer thirds: `[0, S/3)` is Left, `[S/3, 2S/3]` is Center and the
    /// rest is Right. Center is closed on both ends.
    pub fn classify(column: usize, row_stride: usize) -> Self {
        let left_edge = row_stride / 3;
        let right_edge = 2 * row_stride / 3;

        if column < left_edge {
            Zone::Left
        } else if column <= right_edge {
            Zone::Center
        } else {
            Zone::Right
        }
    }
}

/// Outcome of scanning one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionResult {
    Found { zone: Zone },
    NotFound,
}

impl DetectionResult {
    pub fn zone(&self) -> Option<Zone> {
        match self {
            DetectionResult::Found { zone } => Some(*zone),
            DetectionResult::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_with_stride_divisible_by_three() {
        // S = 12: S/3 = 4, 2S/3 = 8
        assert_eq!(Zone::classify(0, 12), Zone::Left);
        assert_eq!(Zone::classify(3, 12), Zone::Left);
        assert_eq!(Zone::classify(4, 12), Zone::Center);
        assert_eq!(Zone::classify(8, 12), Zone::Center);
        assert_eq!(Zone::classify(9, 12), Zone::Right);
        assert_eq!(Zone::classify(11, 12), Zone::Right);
    }

    #[test]
    fn test_boundaries_with_stride_not_divisible_by_three() {
        // S = 10: S/3 = 3, 2S/3 = 6
        assert_eq!(Zone::classify(2, 10), Zone::Left);
        assert_eq!(Zone::classify(3, 10), Zone::Center);
        assert_eq!(Zone::classify(6, 10), Zone::Center);
        assert_eq!(Zone::classify(7, 10), Zone::Right);

        // S = 11: S/3 = 3, 2S/3 = 7
        assert_eq!(Zone::classify(2, 11), Zone::Left);
        assert_eq!(Zone::classify(3, 11), Zone::Center);
        assert_eq!(Zone::classify(7, 11), Zone::Center);
        assert_eq!(Zone::classify(8, 11), Zone::Right);
    }

    #[test]
    fn test_zone_accessor() {
        assert_eq!(
            DetectionResult::Found { zone: Zone::Right }.zone(),
            Some(Zone::Right)
        );
        assert_eq!(DetectionResult::NotFound.zone(), None);
    }
}
