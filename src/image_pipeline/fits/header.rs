//! FITS header card synthesis.
//!
//! A FITS header is a sequence of 80-character ASCII "cards" packed into
//! 2880-byte blocks, space-padded. Fixed-format value cards put the keyword
//! in columns 1-8, `= ` in columns 9-10 and a right-justified value ending
//! at column 30; character strings are left-justified from column 12.

/// FITS logical record (block) length in bytes.
pub const BLOCK_LEN: usize = 2880;

/// Length of a single header card in bytes.
pub const CARD_LEN: usize = 80;

/// Accumulates header cards and renders them as space-padded 2880-byte blocks.
pub struct FitsHeader {
    cards: Vec<String>,
}

impl FitsHeader {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a fixed-format logical value card (`T` or `F` at column 30).
    pub fn logical(&mut self, keyword: &str, value: bool) {
        let v = if value { "T" } else { "F" };
        self.push_card(format!("{keyword:<8}= {v:>20}"));
    }

    /// Appends a fixed-format integer value card.
    pub fn integer(&mut self, keyword: &str, value: i64) {
        self.push_card(format!("{keyword:<8}= {value:>20}"));
    }

    /// Appends a character string card. Embedded single quotes are doubled
    /// per the FITS quoting rule; strings shorter than 8 characters are
    /// space-padded inside the quotes as the standard requires.
    pub fn string(&mut self, keyword: &str, value: &str) {
        let escaped = value.replace('\'', "''");
        self.push_card(format!("{keyword:<8}= '{escaped:<8}'"));
    }

    /// Appends a COMMENT commentary card.
    pub fn comment(&mut self, text: &str) {
        self.push_card(format!("{:<8}{}", "COMMENT", text));
    }

    /// Appends a HISTORY commentary card.
    pub fn history(&mut self, text: &str) {
        self.push_card(format!("{:<8}{}", "HISTORY", text));
    }

    /// Renders all cards plus the END card, space-padded to a whole number
    /// of 2880-byte blocks.
    pub fn into_blocks(mut self) -> Vec<u8> {
        self.push_card("END".to_string());

        let mut out = Vec::with_capacity(BLOCK_LEN);
        for card in &self.cards {
            out.extend_from_slice(card.as_bytes());
        }
        while out.len() % BLOCK_LEN != 0 {
            out.push(b' ');
        }
        out
    }

    fn push_card(&mut self, mut card: String) {
        // Non-ASCII has no representation in a FITS header; cards are also
        // hard-capped at 80 characters.
        card.retain(|c| (' '..='~').contains(&c));
        card.truncate(CARD_LEN);
        while card.len() < CARD_LEN {
            card.push(' ');
        }
        self.cards.push(card);
    }
}
