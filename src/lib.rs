//! Bullseye — a minimal desktop aim-training game built with Bevy.
//!
//! Circular targets spawn at a fixed interval at random positions and sizes
//! on the play surface.  Clicking inside a target scores a point; a click on
//! empty surface or a target that ages out costs one (floored at zero).
//!
//! ## Module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`target`] | Target geometry, hit testing, and the Active → Hit/Missed lifecycle |
//! | [`spawner`] | Timer-driven spawning, target expiry, surface bounds, shared RNG |
//! | [`score`] | Score accounting and session counters |
//! | [`input`] | Click intent capture and first-match hit routing |
//! | [`session`] | [`session::TrainerPlugin`]: resources + the chained core schedule |
//! | [`rendering`] | Retained `Mesh2d` target visuals and the score HUD |
//! | [`graphics`] | Camera setup |
//! | [`config`] / [`constants`] | Runtime tuning over compiled defaults |
//! | [`error`] | Error types for the fallible seams |

pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod input;
pub mod rendering;
pub mod score;
pub mod session;
pub mod spawner;
pub mod target;
