use crate::error::{Error, Result};

/// Maps visit counts to glyphs. Tilesets are plain values and can be shared
/// between any number of boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSet {
    id: &'static str,
    glyphs: &'static [&'static str],
    start: Option<&'static str>,
    end: Option<&'static str>,
    clamp_overflow: bool,
}

/// Classic OpenSSH randomart, plain ASCII.
pub const SSH_TILES: TileSet = TileSet {
    id: "openssh",
    glyphs: &[
        " ", ".", "o", "+", "=", "*", "B", "O", "X", "@", "%", "&", "#", "/", "^",
    ],
    start: Some("S"),
    end: Some("E"),
    clamp_overflow: false,
};

/// Moon phases and a planet. Every glyph is two columns wide.
pub const GALAXY_TILES: TileSet = TileSet {
    id: "galaxy",
    glyphs: &[
        "\u{1F311}", "\u{1F312}", "\u{1F313}", "\u{1F314}", "\u{1F315}", "\u{1FA90}", "\u{1F316}",
        "\u{1F317}", "\u{1F318}",
    ],
    start: Some("\u{1F31D}"),
    end: Some("\u{1F31A}"),
    clamp_overflow: false,
};

/// Every tileset shipped with the crate.
pub const BUNDLED: &[TileSet] = &[SSH_TILES, GALAXY_TILES];

impl TileSet {
    /// Builds a custom tileset. Fails if `glyphs` is empty.
    ///
    /// A glyph may span several code points, e.g. an emoji with a variation
    /// selector, as long as every glyph occupies the same display width.
    pub fn new(id: &'static str, glyphs: &'static [&'static str]) -> Result<Self> {
        if glyphs.is_empty() {
            return Err(Error::EmptyTileSet);
        }
        Ok(Self {
            id,
            glyphs,
            start: None,
            end: None,
            clamp_overflow: false,
        })
    }

    pub fn with_start(mut self, glyph: &'static str) -> Self {
        self.start = Some(glyph);
        self
    }

    pub fn with_end(mut self, glyph: &'static str) -> Self {
        self.end = Some(glyph);
        self
    }

    /// Counts past the last glyph stick to it instead of wrapping around.
    pub fn clamp_overflow(mut self, clamp: bool) -> Self {
        self.clamp_overflow = clamp;
        self
    }

    /// Looks up a bundled tileset by id.
    pub fn by_id(id: &str) -> Result<Self> {
        BUNDLED
            .iter()
            .find(|t| t.id == id)
            .copied()
            .ok_or_else(|| Error::UnknownTileSet(id.to_string()))
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn glyphs(&self) -> &'static [&'static str] {
        self.glyphs
    }

    pub fn start(&self) -> Option<&'static str> {
        self.start
    }

    pub fn end(&self) -> Option<&'static str> {
        self.end
    }

    pub fn glyph(&self, count: u32) -> &'static str {
        let n = count as usize;
        let len = self.glyphs.len();
        if self.clamp_overflow && n >= len {
            return self.glyphs[len - 1];
        }
        self.glyphs[n % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &[&str] = &["a", "b", "c"];

    #[test]
    fn wraps_counts_by_default() {
        let tiles = TileSet::new("abc", ABC).unwrap();
        assert_eq!(tiles.glyph(0), "a");
        assert_eq!(tiles.glyph(2), "c");
        assert_eq!(tiles.glyph(3), "a");
        assert_eq!(tiles.glyph(4), "b");
    }

    #[test]
    fn clamps_counts_when_asked() {
        let tiles = TileSet::new("abc", ABC).unwrap().clamp_overflow(true);
        assert_eq!(tiles.glyph(1), "b");
        assert_eq!(tiles.glyph(3), "c");
        assert_eq!(tiles.glyph(4), "c");
        assert_eq!(tiles.glyph(u32::MAX), "c");
    }

    #[test]
    fn rejects_empty_glyphs() {
        assert!(matches!(TileSet::new("none", &[]), Err(Error::EmptyTileSet)));
    }

    #[test]
    fn markers_are_optional() {
        let tiles = TileSet::new("abc", ABC).unwrap();
        assert_eq!(tiles.start(), None);
        assert_eq!(tiles.end(), None);

        let tiles = tiles.with_start("S").with_end("E");
        assert_eq!(tiles.start(), Some("S"));
        assert_eq!(tiles.end(), Some("E"));
    }

    #[test]
    fn finds_bundled_tilesets() {
        assert_eq!(TileSet::by_id("openssh").unwrap(), SSH_TILES);
        assert_eq!(TileSet::by_id("galaxy").unwrap(), GALAXY_TILES);
        assert!(matches!(
            TileSet::by_id("nope"),
            Err(Error::UnknownTileSet(id)) if id == "nope"
        ));
    }

    #[test]
    fn bundled_ids_are_unique() {
        for (i, a) in BUNDLED.iter().enumerate() {
            assert!(!a.glyphs().is_empty());
            for b in &BUNDLED[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }
}
