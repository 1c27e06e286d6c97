//! Score normalization and periodic interpolation

mod interp;
mod scale;

pub(crate) use interp::periodic_interpolate;
pub(crate) use scale::rescale;

#[cfg(test)]
pub(crate) use interp::{close_loop, sample_angles};
