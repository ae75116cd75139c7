//! Every numeric constant the engine uses, in one immutable table.
//!
//! Distances are in reference pixels (1080 px wide output) and get multiplied by
//! the base unit at evaluation time. Angles are degrees.

/// Scene and envelope timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingTuning {
    /// Length of one caption's window.
    pub scene_secs: f64,
    /// Period shared by all cyclic effects.
    pub repeat_period_secs: f64,
    /// Local time at which cyclic amplitudes start to settle.
    pub fade_start_secs: f64,
    /// Local time at which cyclic amplitudes reach zero.
    pub fade_end_secs: f64,
    /// Opacity ramp-in length.
    pub entrance_secs: f64,
    /// Opacity ramp-out length, ending on the window's last frame.
    pub exit_secs: f64,
    /// Springy scale-in length.
    pub entrance_scale_secs: f64,
    /// Typewriter reveal length.
    pub typewriter_secs: f64,
    /// Caret visibility toggles every this many frames.
    pub caret_blink_frames: u64,
    /// Scene seed = scene index × stride.
    pub seed_stride: f64,
}

/// Vertical anchor bands as fractions of frame height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandTuning {
    pub top: f64,
    pub center: f64,
    pub bottom: f64,
}

/// Allowed travel from the anchor: `up` above it, `down` below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YEnvelope {
    pub up: f64,
    pub down: f64,
}

/// Offset clamp envelopes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampTuning {
    /// Symmetric horizontal limit for every band.
    pub x: f64,
    pub top: YEnvelope,
    pub center: YEnvelope,
    pub bottom: YEnvelope,
}

/// Per-effect amplitudes and rates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectTuning {
    pub drift_x: f64,
    pub drift_y: f64,
    /// Noise lattice steps per frame.
    pub drift_rate: f64,

    pub rotate3d_x_deg: f64,
    pub rotate3d_y_deg: f64,

    pub glitch_rate: f64,
    pub glitch_threshold: f64,
    pub glitch_jitter: f64,
    pub glitch_ghost_offset: f64,
    pub glitch_ghost_opacity: f64,

    pub strobe_chance: f64,
    pub strobe_opacity: f64,

    pub glow_radii: [f64; 5],
    pub pulse_radius: f64,
    /// Fraction of `pulse_radius` the halo swings by.
    pub pulse_depth: f64,

    pub wave_y: f64,
    pub wave_cycles: f64,
    pub zoom_depth: f64,
    pub blur_max_px: f64,
    pub chromatic_min: f64,
    pub chromatic_swing: f64,
    pub chromatic_ghost_opacity: f64,

    pub hologram_rate: f64,
    /// Opacity floor of the hologram dip.
    pub hologram_floor: f64,
    pub hologram_hue_deg: f64,

    pub pixelate_min_px: f64,
    pub pixelate_steps: f64,
    pub pixelate_contrast: f64,

    pub bounce_y: f64,
    pub bounce_cycles: f64,
    pub spiral_radius: f64,
    pub spiral_turns: f64,
    pub spiral_tilt_deg: f64,
    pub swing_deg: f64,
    pub swing_x: f64,
    pub slide_x: f64,
    pub orbit_x: f64,
    pub orbit_y: f64,

    pub zoom_in_depth: f64,
    pub zoom_in_secs: f64,
    pub flip_up_deg: f64,
    pub flip_up_depth: f64,
    pub flip_up_secs: f64,
    pub spiral3d_depth: f64,
    pub spiral3d_tilt_deg: f64,
    pub wave3d_x_deg: f64,
    pub wave3d_y_deg: f64,
    pub wave3d_depth: f64,
    pub tumble_deg: f64,
    pub tumble_roll_deg: f64,
    pub tumble_depth: f64,

    pub extrude_steps: u32,
    pub extrude_step_px: f64,
    pub extrude_angle_deg: f64,
    pub extrude_max_darken: f64,

    /// Drop-shadow offset/blur per unit of summed |Z|.
    pub depth_shadow_per_z: f64,
    pub depth_shadow_alpha_per_z: f64,
    pub depth_shadow_max_alpha: f64,
    pub perspective_px: f64,

    pub shake: f64,
    pub shake_rate: f64,
    pub neon_radii: [f64; 4],
    pub neon_rate: f64,
    pub neon_flicker_threshold: f64,
    pub neon_flicker_opacity: f64,
    pub float_y: f64,
    pub float_tilt_deg: f64,
    pub elastic_depth: f64,
    pub elastic_cycles: f64,
}

/// The whole table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub timing: TimingTuning,
    pub bands: BandTuning,
    pub clamp: ClampTuning,
    pub effects: EffectTuning,
}

impl Tuning {
    /// Production values.
    pub const DEFAULT: Tuning = Tuning {
        timing: TimingTuning {
            scene_secs: 5.0,
            repeat_period_secs: 4.0,
            fade_start_secs: 3.5,
            fade_end_secs: 4.0,
            entrance_secs: 0.8,
            exit_secs: 0.5,
            entrance_scale_secs: 0.8,
            typewriter_secs: 2.0,
            caret_blink_frames: 8,
            seed_stride: 50.0,
        },
        bands: BandTuning {
            top: 0.30,
            center: 0.50,
            bottom: 0.68,
        },
        clamp: ClampTuning {
            x: 150.0,
            top: YEnvelope {
                up: 60.0,
                down: 200.0,
            },
            center: YEnvelope {
                up: 150.0,
                down: 150.0,
            },
            bottom: YEnvelope {
                up: 200.0,
                down: 60.0,
            },
        },
        effects: EffectTuning {
            drift_x: 40.0,
            drift_y: 25.0,
            drift_rate: 0.02,

            rotate3d_x_deg: 15.0,
            rotate3d_y_deg: 25.0,

            glitch_rate: 0.3,
            glitch_threshold: 0.6,
            glitch_jitter: 8.0,
            glitch_ghost_offset: 4.0,
            glitch_ghost_opacity: 0.7,

            strobe_chance: 0.15,
            strobe_opacity: 0.3,

            glow_radii: [15.0, 30.0, 60.0, 100.0, 150.0],
            pulse_radius: 20.0,
            pulse_depth: 0.5,

            wave_y: 20.0,
            wave_cycles: 2.0,
            zoom_depth: 0.08,
            blur_max_px: 4.0,
            chromatic_min: 3.0,
            chromatic_swing: 3.0,
            chromatic_ghost_opacity: 0.6,

            hologram_rate: 0.25,
            hologram_floor: 0.7,
            hologram_hue_deg: 180.0,

            pixelate_min_px: 1.0,
            pixelate_steps: 4.0,
            pixelate_contrast: 1.8,

            bounce_y: 30.0,
            bounce_cycles: 2.0,
            spiral_radius: 30.0,
            spiral_turns: 2.0,
            spiral_tilt_deg: 15.0,
            swing_deg: 12.0,
            swing_x: 10.0,
            slide_x: 60.0,
            orbit_x: 40.0,
            orbit_y: 20.0,

            zoom_in_depth: 300.0,
            zoom_in_secs: 1.0,
            flip_up_deg: 90.0,
            flip_up_depth: 100.0,
            flip_up_secs: 0.8,
            spiral3d_depth: 80.0,
            spiral3d_tilt_deg: 20.0,
            wave3d_x_deg: 20.0,
            wave3d_y_deg: 15.0,
            wave3d_depth: 50.0,
            tumble_deg: 25.0,
            tumble_roll_deg: 10.0,
            tumble_depth: 40.0,

            extrude_steps: 10,
            extrude_step_px: 1.0,
            extrude_angle_deg: 135.0,
            extrude_max_darken: 0.85,

            depth_shadow_per_z: 0.1,
            depth_shadow_alpha_per_z: 0.004,
            depth_shadow_max_alpha: 0.6,
            perspective_px: 800.0,

            shake: 6.0,
            shake_rate: 0.8,
            neon_radii: [5.0, 10.0, 20.0, 40.0],
            neon_rate: 0.35,
            neon_flicker_threshold: 0.85,
            neon_flicker_opacity: 0.4,
            float_y: 12.0,
            float_tilt_deg: 2.0,
            elastic_depth: 0.12,
            elastic_cycles: 3.0,
        },
    };
}

impl Default for Tuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}
