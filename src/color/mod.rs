mod phase;
mod utils;

use smart_leds::RGB8;

pub use phase::{
    MAX_PHASE, PHASE_ARC, offset_phase, phase_to_color, phase_to_intensity, wrap_phase,
};
pub use utils::{BLACK, rgb_from_u32, rgb_to_u32, scale_color};

pub type Rgb = RGB8;
