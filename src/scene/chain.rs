//! Line-strip segment assembly shared by poly-lines and mesh wireframes.

use log::trace;

use crate::math::{vec3_finite, Vec3};

#[derive(Debug, Clone, Copy)]
enum ChainState {
    /// No usable previous point; the next finite point starts a new run
    Broken,
    /// Previous point available for pairing
    Connected(Vec3),
}

/// Two-state machine turning a stream of transformed strip points into
/// drawable segments.
///
/// A non-finite point breaks the strip: the segments on either side of it
/// are dropped and the next finite point starts a fresh run, with no
/// placeholder marking the gap. This mirrors how upstream domain errors
/// (log of a negative value, etc.) should truncate a curve rather than
/// abort the plot.
#[derive(Debug)]
pub struct SegmentChain {
    state: ChainState,
}

impl SegmentChain {
    pub fn new() -> Self {
        Self {
            state: ChainState::Broken,
        }
    }

    /// Forgets the previous point, e.g. at the start of each grid sweep line
    pub fn reset(&mut self) {
        self.state = ChainState::Broken;
    }

    /// Feeds the next transformed point, returning the completed
    /// `[previous, current]` segment when the pair can be joined.
    pub fn advance(&mut self, point: Vec3) -> Option<[Vec3; 2]> {
        if !vec3_finite(point) {
            trace!("non-finite strip point, breaking line run");
            self.state = ChainState::Broken;
            return None;
        }
        match self.state {
            ChainState::Connected(prev) => {
                self.state = ChainState::Connected(point);
                // both endpoints finite, but their sum can still overflow
                if vec3_finite(prev + point) {
                    Some([prev, point])
                } else {
                    None
                }
            }
            ChainState::Broken => {
                self.state = ChainState::Connected(point);
                None
            }
        }
    }
}

impl Default for SegmentChain {
    fn default() -> Self {
        Self::new()
    }
}
