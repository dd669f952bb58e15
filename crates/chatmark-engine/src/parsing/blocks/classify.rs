use log::trace;

use crate::parsing::{lines::LineRef, options::FormatOptions};

use super::{
    rules::{Context, RULES, plain_block},
    types::Block,
};

/// Classifies individual lines against the rule table.
///
/// Each line is classified on its own; there is no state carried from one
/// line to the next.
pub struct LineClassifier<'a> {
    options: &'a FormatOptions,
}

impl<'a> LineClassifier<'a> {
    pub fn new(options: &'a FormatOptions) -> Self {
        Self { options }
    }

    /// Classifies one line into a [`Block`]. The first rule that accepts the
    /// trimmed text wins.
    pub fn classify(&self, line: &LineRef<'_>) -> Block {
        let cx = Context {
            options: self.options,
        };

        RULES
            .iter()
            .find_map(|rule| {
                let block = (rule.apply)(line.text, &cx)?;
                trace!("line {}: {}", line.index, rule.name);
                Some(block)
            })
            .unwrap_or_else(|| plain_block(line.text, &cx))
    }
}
