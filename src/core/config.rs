use crate::constants::{DEFAULT_PARTICLE_COUNT, FALLBACK_COLOR, MAX_PARTICLE_COUNT};
use crate::error::FxError;
use serde::Deserialize;

/// Which effect the instance draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    #[default]
    None,
    ParticleField,
    Wave,
}

impl RenderMode {
    /// Modes that need the frame loop.
    #[inline]
    pub fn is_animated(self) -> bool {
        matches!(self, RenderMode::ParticleField | RenderMode::Wave)
    }
}

/// Ordered, non-empty list of color tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, FxError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors: Vec<String> = colors
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if colors.is_empty() {
            return Err(FxError::ConfigInvalid("palette is empty".into()));
        }
        Ok(Self { colors })
    }

    /// Parse a comma-delimited list. Commas nested in parentheses, as in
    /// `rgba(0, 0, 0, 0.5)`, do not split.
    pub fn parse(delimited: &str) -> Result<Self, FxError> {
        let mut tokens = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;
        for (i, ch) in delimited.char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    tokens.push(&delimited[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        tokens.push(&delimited[start..]);
        Self::new(tokens)
    }

    pub fn fallback() -> Self {
        Self {
            colors: vec![FALLBACK_COLOR.to_string()],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color token at `index`, wrapping around the palette.
    #[inline]
    pub fn get(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

/// Palette as supplied by the host: a list or a single delimited string.
/// Anything else is kept so resolution can report it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    List(Vec<String>),
    Delimited(String),
    Invalid(serde_json::Value),
}

impl Default for PaletteSpec {
    fn default() -> Self {
        PaletteSpec::List(vec![FALLBACK_COLOR.to_string()])
    }
}

/// `renderMode` as supplied. Unrecognized values resolve to `None`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ModeSpec {
    Known(RenderMode),
    Unknown(serde_json::Value),
}

impl Default for ModeSpec {
    fn default() -> Self {
        ModeSpec::Known(RenderMode::None)
    }
}

impl From<RenderMode> for ModeSpec {
    fn from(mode: RenderMode) -> Self {
        ModeSpec::Known(mode)
    }
}

impl PartialEq<RenderMode> for ModeSpec {
    fn eq(&self, other: &RenderMode) -> bool {
        matches!(self, ModeSpec::Known(mode) if mode == other)
    }
}

/// `particleCount` as supplied. Declarative hosts hand numbers over as
/// strings, and JS numbers may carry a fraction.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CountSpec {
    Int(i64),
    Float(f64),
    Text(String),
    Invalid(serde_json::Value),
}

impl Default for CountSpec {
    fn default() -> Self {
        CountSpec::Int(DEFAULT_PARTICLE_COUNT as i64)
    }
}

impl From<i64> for CountSpec {
    fn from(count: i64) -> Self {
        CountSpec::Int(count)
    }
}

impl CountSpec {
    /// Whole particle count, or an issue when the value had to be truncated
    /// or replaced by the default.
    fn to_count(&self) -> (i64, Option<FxError>) {
        match self {
            CountSpec::Int(n) => (*n, None),
            CountSpec::Float(f) => Self::truncate(*f, f.to_string()),
            CountSpec::Text(text) => {
                let trimmed = text.trim();
                if let Ok(n) = trimmed.parse::<i64>() {
                    (n, None)
                } else if let Ok(f) = trimmed.parse::<f64>() {
                    Self::truncate(f, format!("{text:?}"))
                } else {
                    Self::unusable(format!("{text:?}"))
                }
            }
            CountSpec::Invalid(value) => Self::unusable(value.to_string()),
        }
    }

    fn truncate(f: f64, shown: String) -> (i64, Option<FxError>) {
        if !f.is_finite() {
            return Self::unusable(shown);
        }
        // float-to-int `as` saturates
        let n = f.trunc() as i64;
        let issue = (f.fract() != 0.0).then(|| {
            FxError::ConfigInvalid(format!("particleCount {shown} is not whole, using {n}"))
        });
        (n, issue)
    }

    fn unusable(shown: String) -> (i64, Option<FxError>) {
        (
            DEFAULT_PARTICLE_COUNT as i64,
            Some(FxError::ConfigInvalid(format!(
                "particleCount {shown} is not a number, using {DEFAULT_PARTICLE_COUNT}"
            ))),
        )
    }
}

/// Configuration object handed to `mount` / `setConfig`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FxConfig {
    pub render_mode: ModeSpec,
    pub particle_count: CountSpec,
    pub palette: PaletteSpec,
    pub interactive: bool,
    pub mouse_responsive: bool,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            render_mode: ModeSpec::default(),
            particle_count: CountSpec::default(),
            palette: PaletteSpec::default(),
            interactive: false,
            mouse_responsive: false,
        }
    }
}

impl FxConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Clamp every field to something the engine can run with. Each clamped
    /// value is reported as a `ConfigInvalid` issue; resolution never fails.
    pub fn resolve(&self) -> (ResolvedConfig, Vec<FxError>) {
        let mut issues = Vec::new();

        let render_mode = match &self.render_mode {
            ModeSpec::Known(mode) => *mode,
            ModeSpec::Unknown(value) => {
                issues.push(FxError::ConfigInvalid(format!(
                    "renderMode {value} is not recognized, using none"
                )));
                RenderMode::None
            }
        };

        let (requested, count_issue) = self.particle_count.to_count();
        issues.extend(count_issue);
        let particle_count = if requested < 0 {
            issues.push(FxError::ConfigInvalid(format!(
                "particleCount {requested} is negative, using 0"
            )));
            0
        } else if requested as u64 > MAX_PARTICLE_COUNT as u64 {
            issues.push(FxError::ConfigInvalid(format!(
                "particleCount {requested} exceeds {MAX_PARTICLE_COUNT}, clamping"
            )));
            MAX_PARTICLE_COUNT
        } else {
            requested as usize
        };

        let palette = match &self.palette {
            PaletteSpec::List(colors) => Palette::new(colors).ok(),
            PaletteSpec::Delimited(s) => Palette::parse(s).ok(),
            PaletteSpec::Invalid(_) => None,
        };
        let palette = palette.unwrap_or_else(|| {
            let reason = match &self.palette {
                PaletteSpec::Invalid(value) => format!("palette {value} is not a color list"),
                _ => "palette is empty".to_string(),
            };
            issues.push(FxError::ConfigInvalid(format!(
                "{reason}, using {FALLBACK_COLOR}"
            )));
            Palette::fallback()
        });

        (
            ResolvedConfig {
                render_mode,
                particle_count,
                palette,
                interactive: self.interactive,
                mouse_responsive: self.mouse_responsive,
            },
            issues,
        )
    }
}

/// Configuration after clamping; what the frame context runs on.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub render_mode: RenderMode,
    pub particle_count: usize,
    pub palette: Palette,
    pub interactive: bool,
    pub mouse_responsive: bool,
}

impl ResolvedConfig {
    /// Whether pointer moves are tracked and fed to the physics step.
    #[inline]
    pub fn tracks_pointer(&self) -> bool {
        self.interactive || self.mouse_responsive
    }

    /// Whether switching from `self` to `next` requires new particles.
    #[inline]
    pub fn needs_reseed(&self, next: &ResolvedConfig) -> bool {
        self.particle_count != next.particle_count || self.palette != next.palette
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        FxConfig::default().resolve().0
    }
}
