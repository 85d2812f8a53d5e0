//! Splits deed text into per-transaction blocks.

use std::mem;
use std::str::SplitInclusive;

use regex::Regex;

use super::rules::patterns::default_anchors;
use crate::error::ExtractionError;
use crate::models::record::RawBlock;

/// Line-based block segmenter.
///
/// A line matching any anchor starts a new block. Text before the first
/// anchor forms its own block.
#[derive(Debug, Clone)]
pub struct Segmenter {
    anchors: Vec<Regex>,
}

impl Segmenter {
    /// Create a segmenter with the built-in document-number anchors.
    pub fn new() -> Self {
        Self {
            anchors: default_anchors().into_iter().cloned().collect(),
        }
    }

    /// Create a segmenter from configured anchor patterns.
    ///
    /// Patterns are matched case-insensitively.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ExtractionError> {
        let anchors = patterns
            .iter()
            .map(|p| {
                let pattern = p.as_ref();
                Regex::new(&format!("(?i){pattern}")).map_err(|e| {
                    ExtractionError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { anchors })
    }

    /// Check whether a line starts a new block.
    pub fn is_anchor(&self, line: &str) -> bool {
        self.anchors.iter().any(|a| a.is_match(line))
    }

    /// Lazily split `text` into blocks, in document order.
    pub fn segment<'a>(&'a self, text: &'a str) -> Blocks<'a> {
        Blocks {
            segmenter: self,
            lines: text.split_inclusive('\n'),
            current: String::new(),
            next_ordinal: 0,
            finished: false,
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the blocks of one document.
pub struct Blocks<'a> {
    segmenter: &'a Segmenter,
    lines: SplitInclusive<'a, char>,
    current: String,
    next_ordinal: usize,
    finished: bool,
}

impl Blocks<'_> {
    fn emit(&mut self, text: String) -> Option<RawBlock> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let block = RawBlock {
            ordinal: self.next_ordinal,
            text: trimmed.to_string(),
        };
        self.next_ordinal += 1;
        Some(block)
    }
}

impl Iterator for Blocks<'_> {
    type Item = RawBlock;

    fn next(&mut self) -> Option<RawBlock> {
        if self.finished {
            return None;
        }

        while let Some(line) = self.lines.next() {
            if self.segmenter.is_anchor(line) {
                let done = mem::replace(&mut self.current, line.to_string());
                if let Some(block) = self.emit(done) {
                    return Some(block);
                }
            } else {
                self.current.push_str(line);
            }
        }

        self.finished = true;
        let rest = mem::take(&mut self.current);
        self.emit(rest)
    }
}

impl std::iter::FusedIterator for Blocks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(segmenter: &Segmenter, text: &str) -> Vec<String> {
        segmenter.segment(text).map(|b| b.text).collect()
    }

    #[test]
    fn test_no_anchor_yields_trimmed_document() {
        let segmenter = Segmenter::new();
        let text = "\n  Buyer: Ravi\nSeller: Meena  \n\n";
        assert_eq!(texts(&segmenter, text), vec!["Buyer: Ravi\nSeller: Meena"]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let segmenter = Segmenter::new();
        assert_eq!(segmenter.segment("").count(), 0);
        assert_eq!(segmenter.segment(" \n\t\n ").count(), 0);
    }

    #[test]
    fn test_one_block_per_anchor() {
        let segmenter = Segmenter::new();
        let text = "Document No: 1/2020\nBuyer: A\n\
                    வ.எண். 2/2020\nவாங்குபவர்: ஆ\n\
                    ஆவணம் 3/2020\nBuyer: C\n\
                    document no 4/2020\nBuyer: D";

        let blocks: Vec<RawBlock> = segmenter.segment(text).collect();
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].text, "Document No: 1/2020\nBuyer: A");
        assert_eq!(blocks[1].text, "வ.எண். 2/2020\nவாங்குபவர்: ஆ");
        assert_eq!(blocks[3].text, "document no 4/2020\nBuyer: D");

        let ordinals: Vec<usize> = blocks.iter().map(|b| b.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_preamble_becomes_block_and_blank_blocks_drop() {
        let segmenter = Segmenter::new();
        let text = "Sub-Registrar Office\n\nDocument No: 1\n\nDocument No: 2\n";
        assert_eq!(
            texts(&segmenter, text),
            vec!["Sub-Registrar Office", "Document No: 1", "Document No: 2"]
        );

        let leading_anchor = "Document No: 1\nDocument No: 2";
        assert_eq!(texts(&segmenter, leading_anchor).len(), 2);
    }

    #[test]
    fn test_line_breaks_preserved() {
        let segmenter = Segmenter::new();
        let text = "Document No: 9\r\nBuyer: X\r\n";
        assert_eq!(texts(&segmenter, text), vec!["Document No: 9\r\nBuyer: X"]);
    }

    #[test]
    fn test_custom_anchors() {
        let segmenter = Segmenter::from_patterns(&["^entry"]).unwrap();
        let text = "ENTRY 1\nfoo\nEntry 2\nbar";
        assert_eq!(texts(&segmenter, text), vec!["ENTRY 1\nfoo", "Entry 2\nbar"]);
    }

    #[test]
    fn test_invalid_anchor_rejected() {
        let err = Segmenter::from_patterns(&["(unclosed"]).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidPattern { .. }));
    }

    #[test]
    fn test_exhausted_iterator_stays_empty() {
        let segmenter = Segmenter::new();
        let mut blocks = segmenter.segment("Document No: 1");
        assert!(blocks.next().is_some());
        assert!(blocks.next().is_none());
        assert!(blocks.next().is_none());
    }
}
