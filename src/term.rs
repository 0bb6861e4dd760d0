//! Projection of resolved entries onto terminal styles.

use crate::colour::Colour;
use crate::style::{StyleEntry, Trilean};
use crate::theme::Style;
use crate::token::TokenType;

/// Channel values of the 6x6x6 colour cube at palette indices 16..=231.
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

impl Colour {
    /// The closest entry of the xterm 256-colour palette, or `None` when unset.
    ///
    /// Each colour is matched against both the 6x6x6 cube and the 24-step
    /// grey ramp (indices 232..=255); the candidate with the smaller squared
    /// RGB distance wins. The 16 system colours are never chosen since
    /// terminals remap them freely.
    ///
    /// ```rust
    /// use tokenstyle::Colour;
    ///
    /// assert_eq!(Colour::new(0xff, 0x00, 0x00).ansi256(), Some(196));
    /// assert_eq!(Colour::new(0x80, 0x80, 0x80).ansi256(), Some(244));
    /// assert_eq!(Colour::UNSET.ansi256(), None);
    /// ```
    pub fn ansi256(&self) -> Option<u8> {
        let (r, g, b) = self.rgb()?;

        let (ri, gi, bi) = (cube_level(r), cube_level(g), cube_level(b));
        let cube = (CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);
        let cube_index = 16 + 36 * ri + 6 * gi + bi;

        let mean = (u32::from(r) + u32::from(g) + u32::from(b)) / 3;
        let step = (mean.saturating_sub(3) / 10).min(23);
        let grey = (8 + 10 * step) as u8;
        let grey_index = 232 + step as usize;

        let index = if distance((r, g, b), (grey, grey, grey)) < distance((r, g, b), cube) {
            grey_index
        } else {
            cube_index
        };
        u8::try_from(index).ok()
    }
}

/// Index of the cube level nearest to `channel`.
fn cube_level(channel: u8) -> usize {
    match channel {
        0..=47 => 0,
        48..=114 => 1,
        c => usize::from((c - 35) / 40),
    }
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| u32::from(x.abs_diff(y)).pow(2);
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

impl StyleEntry {
    /// Converts this entry into a [`console::Style`].
    ///
    /// Colours map to the nearest 256-color index. Only explicit `Yes`
    /// attributes are applied; the border has no terminal equivalent.
    pub fn to_console_style(&self) -> console::Style {
        let mut style = console::Style::new();
        if let Some(index) = self.colour.ansi256() {
            style = style.color256(index);
        }
        if let Some(index) = self.background.ansi256() {
            style = style.on_color256(index);
        }
        if self.bold == Trilean::Yes {
            style = style.bold();
        }
        if self.italic == Trilean::Yes {
            style = style.italic();
        }
        if self.underline == Trilean::Yes {
            style = style.underlined();
        }
        style
    }
}

impl Style {
    /// The terminal style for `token`, fully resolved.
    pub fn console_style(&self, token: TokenType) -> console::Style {
        self.get(token).to_console_style()
    }
}
