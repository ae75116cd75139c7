//! The closed effect catalog and the token → flag resolver.

bitflags::bitflags! {
    /// One bit per catalog effect.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct EffectFlags: u32 {
        const DRIFT = 1 << 0;
        const ROTATE3D = 1 << 1;
        const GLITCH = 1 << 2;
        const STROBE = 1 << 3;
        const GLOW = 1 << 4;
        const PULSE = 1 << 5;
        const WAVE = 1 << 6;
        const ZOOM = 1 << 7;
        const BLUR = 1 << 8;
        const CHROMATIC = 1 << 9;
        const HOLOGRAM = 1 << 10;
        const PIXELATE = 1 << 11;
        const RAINBOW = 1 << 12;
        const BOUNCE = 1 << 13;
        const SPIN = 1 << 14;
        const SPIRAL = 1 << 15;
        const SWING = 1 << 16;
        const SLIDE = 1 << 17;
        const ORBIT = 1 << 18;
        const ZOOM_IN = 1 << 19;
        const FLIP_UP = 1 << 20;
        const SPIRAL3D = 1 << 21;
        const WAVE3D = 1 << 22;
        const TUMBLE = 1 << 23;
        const EXTRUDE = 1 << 24;
        const TYPEWRITER = 1 << 25;
        const SHAKE = 1 << 26;
        const NEON = 1 << 27;
        const FLOAT = 1 << 28;
        const ELASTIC = 1 << 29;
    }
}

/// A single catalog entry. Declaration order is the fold order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum EffectKind {
    Drift,
    Rotate3d,
    Glitch,
    Strobe,
    Glow,
    Pulse,
    Wave,
    Zoom,
    Blur,
    Chromatic,
    Hologram,
    Pixelate,
    Rainbow,
    Bounce,
    Spin,
    Spiral,
    Swing,
    Slide,
    Orbit,
    ZoomIn,
    FlipUp,
    Spiral3d,
    Wave3d,
    Tumble,
    Extrude,
    Typewriter,
    Shake,
    Neon,
    Float,
    Elastic,
}

impl EffectKind {
    /// Every catalog entry, in fold order.
    pub const ALL: [EffectKind; 30] = [
        Self::Drift,
        Self::Rotate3d,
        Self::Glitch,
        Self::Strobe,
        Self::Glow,
        Self::Pulse,
        Self::Wave,
        Self::Zoom,
        Self::Blur,
        Self::Chromatic,
        Self::Hologram,
        Self::Pixelate,
        Self::Rainbow,
        Self::Bounce,
        Self::Spin,
        Self::Spiral,
        Self::Swing,
        Self::Slide,
        Self::Orbit,
        Self::ZoomIn,
        Self::FlipUp,
        Self::Spiral3d,
        Self::Wave3d,
        Self::Tumble,
        Self::Extrude,
        Self::Typewriter,
        Self::Shake,
        Self::Neon,
        Self::Float,
        Self::Elastic,
    ];

    /// Canonical token, as authored.
    pub fn name(self) -> &'static str {
        match self {
            Self::Drift => "drift",
            Self::Rotate3d => "rotate3d",
            Self::Glitch => "glitch",
            Self::Strobe => "strobe",
            Self::Glow => "glow",
            Self::Pulse => "pulse",
            Self::Wave => "wave",
            Self::Zoom => "zoom",
            Self::Blur => "blur",
            Self::Chromatic => "chromatic",
            Self::Hologram => "hologram",
            Self::Pixelate => "pixelate",
            Self::Rainbow => "rainbow",
            Self::Bounce => "bounce",
            Self::Spin => "spin",
            Self::Spiral => "spiral",
            Self::Swing => "swing",
            Self::Slide => "slide",
            Self::Orbit => "orbit",
            Self::ZoomIn => "zoomIn",
            Self::FlipUp => "flipUp",
            Self::Spiral3d => "spiral3d",
            Self::Wave3d => "wave3d",
            Self::Tumble => "tumble",
            Self::Extrude => "extrude",
            Self::Typewriter => "typewriter",
            Self::Shake => "shake",
            Self::Neon => "neon",
            Self::Float => "float",
            Self::Elastic => "elastic",
        }
    }

    /// Match a token ignoring case, surrounding whitespace, `_` and `-`.
    pub fn from_token(token: &str) -> Option<Self> {
        let key: String = token
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        if key.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(&key))
    }

    /// The flag bit for this entry.
    pub fn flag(self) -> EffectFlags {
        EffectFlags::from_bits_retain(1 << (self as u32))
    }

    /// Whether this entry moves the text in the plane.
    pub fn is_positional(self) -> bool {
        matches!(
            self,
            Self::Drift
                | Self::Wave
                | Self::Bounce
                | Self::Spiral
                | Self::Swing
                | Self::Slide
                | Self::Orbit
                | Self::Float
                | Self::Shake
        )
    }

    /// Whether this entry rotates or pushes the text in depth.
    pub fn is_3d(self) -> bool {
        matches!(
            self,
            Self::Rotate3d | Self::ZoomIn | Self::FlipUp | Self::Spiral3d | Self::Wave3d | Self::Tumble
        )
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl EffectFlags {
    /// Active entries in fold order.
    pub fn kinds(self) -> impl Iterator<Item = EffectKind> {
        EffectKind::ALL
            .into_iter()
            .filter(move |k| self.contains(k.flag()))
    }

    /// Whether `kind` is active.
    pub fn has(self, kind: EffectKind) -> bool {
        self.contains(kind.flag())
    }

    /// Whether any 3D entry is active.
    pub fn any_3d(self) -> bool {
        self.kinds().any(EffectKind::is_3d)
    }
}

/// Unordered effect-name tokens as supplied by the caller.
///
/// Unknown tokens are kept verbatim but resolve to nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EffectSet(pub Vec<String>);

impl EffectSet {
    /// Collect tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// Resolve tokens to flags. Order and duplicates do not matter.
    pub fn flags(&self) -> EffectFlags {
        resolve_flags(self.0.iter().map(String::as_str))
    }
}

/// Fold tokens into flags; unrecognized tokens are dropped.
pub fn resolve_flags<'a, I>(tokens: I) -> EffectFlags
where
    I: IntoIterator<Item = &'a str>,
{
    let mut flags = EffectFlags::empty();
    for token in tokens {
        match EffectKind::from_token(token) {
            Some(kind) => flags |= kind.flag(),
            None => tracing::debug!(token, "ignoring unknown effect token"),
        }
    }
    flags
}

#[cfg(test)]
#[path = "../../tests/unit/effects/catalog.rs"]
mod tests;
