//! RGB colour values with a distinguishable unset state.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Pygments ANSI colour names and their RGB equivalents.
const ANSI_COLOURS: &[(&str, (u8, u8, u8))] = &[
    // Dark
    ("#ansiblack", (0x00, 0x00, 0x00)),
    ("#ansidarkred", (0x7f, 0x00, 0x00)),
    ("#ansidarkgreen", (0x00, 0x7f, 0x00)),
    ("#ansibrown", (0x7f, 0x7f, 0xe0)),
    ("#ansidarkblue", (0x00, 0x00, 0x7f)),
    ("#ansipurple", (0x7f, 0x00, 0x7f)),
    ("#ansiteal", (0x00, 0x7f, 0x7f)),
    ("#ansilightgray", (0xe5, 0xe5, 0xe5)),
    // Normal
    ("#ansidarkgray", (0x55, 0x55, 0x55)),
    ("#ansired", (0xff, 0x00, 0x00)),
    ("#ansigreen", (0x00, 0xff, 0x00)),
    ("#ansiyellow", (0xff, 0xff, 0x00)),
    ("#ansiblue", (0x00, 0x00, 0xff)),
    ("#ansifuchsia", (0xff, 0x00, 0xff)),
    ("#ansiturquoise", (0x00, 0xff, 0xff)),
    ("#ansiwhite", (0xff, 0xff, 0xff)),
];

/// A 24-bit RGB colour, or unset.
///
/// The unset colour is the [`Default`] and means "no opinion": it is
/// transparent to inheritance and never rendered.
///
/// # Example
///
/// ```rust
/// use tokenstyle::Colour;
///
/// let red = Colour::parse("#f00").unwrap();
/// assert_eq!(red, Colour::new(0xff, 0x00, 0x00));
/// assert_eq!(red.to_string(), "#ff0000");
/// assert!(!Colour::UNSET.is_set());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Colour(Option<(u8, u8, u8)>);

impl Colour {
    /// The unset colour.
    pub const UNSET: Colour = Colour(None);

    /// Creates a set colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Colour(Some((r, g, b)))
    }

    /// Parses `#rgb`, `#rrggbb` or a Pygments `#ansi*` colour name.
    ///
    /// Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Colour> {
        if let Some((_, (r, g, b))) = ANSI_COLOURS.iter().find(|(name, _)| *name == text) {
            return Some(Colour::new(*r, *g, *b));
        }
        let hex = text.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
                Some(Colour::new(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Colour::new(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => None,
        }
    }

    /// Returns true unless this is the unset colour.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Channels of a set colour.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        self.0
    }

    /// Red channel; zero when unset.
    pub fn red(&self) -> u8 {
        self.0.map_or(0, |(r, _, _)| r)
    }

    /// Green channel; zero when unset.
    pub fn green(&self) -> u8 {
        self.0.map_or(0, |(_, g, _)| g)
    }

    /// Blue channel; zero when unset.
    pub fn blue(&self) -> u8 {
        self.0.map_or(0, |(_, _, b)| b)
    }

    /// Perceived brightness in `0.0..=1.0`, the mean of the three channels.
    pub fn brightness(&self) -> f64 {
        (f64::from(self.red()) + f64::from(self.green()) + f64::from(self.blue())) / 255.0 / 3.0
    }

    /// Brightens the colour by `factor`, or darkens it when `factor` is negative.
    ///
    /// Brightening moves each channel toward 255 by `factor` of the remaining
    /// distance; darkening scales each channel by `1 + factor`. An unset
    /// colour stays unset.
    pub fn brighten(&self, factor: f64) -> Colour {
        let Some((r, g, b)) = self.0 else {
            return Colour::UNSET;
        };
        let adjust = |c: u8| -> u8 {
            let c = f64::from(c);
            let out = if factor < 0.0 {
                c * (factor + 1.0)
            } else {
                (255.0 - c) * factor + c
            };
            out.clamp(0.0, 255.0) as u8
        };
        Colour::new(adjust(r), adjust(g), adjust(b))
    }

    /// Brightens dark colours and darkens light ones by the same `factor`.
    pub fn brighten_or_darken(&self, factor: f64) -> Colour {
        if self.brightness() < 0.5 {
            self.brighten(factor)
        } else {
            self.brighten(-factor)
        }
    }

    /// Moves the colour's brightness into `[min, max]`.
    ///
    /// Intended for [`StyleBuilder::transform`](crate::StyleBuilder::transform)
    /// to keep a whole palette readable.
    pub fn clamp_brightness(&self, min: f64, max: f64) -> Colour {
        if !self.is_set() {
            return *self;
        }
        let brightness = self.brightness();
        if brightness > max {
            self.brighten(max - brightness)
        } else if brightness < min {
            self.brighten(min - brightness)
        } else {
            *self
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some((r, g, b)) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            None => Ok(()),
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(Colour::UNSET);
        }
        Colour::parse(&text).ok_or_else(|| de::Error::custom(format!("invalid colour {:?}", text)))
    }
}
