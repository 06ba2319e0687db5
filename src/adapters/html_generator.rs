use crate::adapters::random_source::RandomSource;
use crate::adapters::ranged_text::RangedTextGenerator;
use crate::domain::{FormatError, LengthConstraint};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

const FORMAT: &str = "html";

const TAGS: &[&str] = &[
    "a", "b", "i", "p", "em", "h1", "h2", "li", "ul", "div", "span", "strong", "section",
    "article", "blockquote",
];

const ATTRIBUTES: &[&str] = &["id", "lang", "class", "title"];

const MAX_ATTRIBUTE_VALUE: usize = 12;

/// `<a></a>`
pub const MIN_ELEMENT: usize = 7;

pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Serialized length of `<tag></tag>`
fn element_overhead(tag: &str) -> usize {
    2 * tag.len() + 5
}

/// Serialized length of ` name=""` without the value
fn attribute_overhead(name: &str) -> usize {
    name.len() + 4
}

enum Task {
    /// One element serializing to exactly `size` characters
    Element { size: usize, depth: usize },
    /// Sibling content serializing to exactly `budget` characters
    Fill { budget: usize, depth: usize },
    Close(&'static str),
}

/// Nested markup whose serialized length lands in the requested window.
///
/// A target length is drawn from the window first and the tree is then carved
/// to hit it exactly: each element takes its tag and attribute overhead out of
/// its budget and hands the rest to children or text. Construction runs on an
/// explicit work-list, and nesting never exceeds `max_depth` elements; once the
/// cap is reached the remaining budget becomes text and open tags are closed.
#[derive(Debug, Clone)]
pub struct HtmlGenerator {
    random: Arc<RandomSource>,
    max_depth: usize,
}

impl HtmlGenerator {
    pub fn new(random: Arc<RandomSource>) -> Self {
        Self::with_max_depth(random, DEFAULT_MAX_DEPTH)
    }

    /// A `max_depth` of zero is treated as one: the root element always exists.
    pub fn with_max_depth(random: Arc<RandomSource>, max_depth: usize) -> Self {
        Self {
            random,
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn generate(&self, min_length: i64, max_length: i64) -> Result<String, FormatError> {
        let constraint = LengthConstraint::new(min_length, max_length)?;
        self.generate_within(constraint)
    }

    pub fn generate_within(&self, constraint: LengthConstraint) -> Result<String, FormatError> {
        self.random
            .with_rng(|rng| Self::markup(rng, constraint, self.max_depth))
    }

    pub fn markup<R: Rng + ?Sized>(
        rng: &mut R,
        constraint: LengthConstraint,
        max_depth: usize,
    ) -> Result<String, FormatError> {
        if constraint.max() < MIN_ELEMENT {
            return Err(FormatError::UnsatisfiableLength {
                format: FORMAT,
                min: constraint.min(),
                max: constraint.max(),
                minimum: MIN_ELEMENT,
            });
        }

        let target = rng.gen_range(constraint.min().max(MIN_ELEMENT)..=constraint.max());
        let mut out = String::with_capacity(target);
        let mut tasks = vec![Task::Element {
            size: target,
            depth: 0,
        }];

        while let Some(task) = tasks.pop() {
            match task {
                Task::Element { size, depth } => {
                    let (tag, content) = Self::open_element(rng, &mut out, size);
                    tasks.push(Task::Close(tag));
                    tasks.push(Task::Fill {
                        budget: content,
                        depth: depth + 1,
                    });
                }
                Task::Fill { budget: 0, .. } => {}
                Task::Fill { budget, depth } => {
                    if budget < MIN_ELEMENT || depth >= max_depth || rng.gen_ratio(1, 4) {
                        out.push_str(&RangedTextGenerator::exact(rng, budget));
                        continue;
                    }
                    let size = rng.gen_range(MIN_ELEMENT..=budget);
                    tasks.push(Task::Fill {
                        budget: budget - size,
                        depth,
                    });
                    tasks.push(Task::Element { size, depth });
                }
                Task::Close(tag) => {
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
            }
        }

        debug_assert_eq!(out.len(), target);
        Ok(out)
    }

    /// Writes the opening tag of an element of `size` characters and returns
    /// the tag with the budget left for its content.
    fn open_element<R: Rng + ?Sized>(
        rng: &mut R,
        out: &mut String,
        size: usize,
    ) -> (&'static str, usize) {
        let fitting: Vec<&'static str> = TAGS
            .iter()
            .copied()
            .filter(|tag| element_overhead(tag) <= size)
            .collect();
        let tag = fitting.choose(rng).copied().unwrap_or("a");
        let mut content = size - element_overhead(tag);

        out.push('<');
        out.push_str(tag);

        if rng.gen_bool(0.5) {
            let name = ATTRIBUTES[rng.gen_range(0..ATTRIBUTES.len())];
            let overhead = attribute_overhead(name);
            if content > overhead {
                let value_len = rng.gen_range(1..=MAX_ATTRIBUTE_VALUE.min(content - overhead));
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&RangedTextGenerator::exact(rng, value_len));
                out.push('"');
                content -= overhead + value_len;
            }
        }

        out.push('>');
        (tag, content)
    }
}
