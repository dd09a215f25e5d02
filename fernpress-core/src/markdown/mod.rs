//! Markdown rendering built on pulldown-cmark.

pub mod links;

pub use links::LinkRewriter;

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Markdown renderer with link rewriting and leading-heading removal
///
/// Templates render `metadata.title` themselves, so the first top-level
/// heading is dropped from the parsed event stream before HTML output.
/// Working on the syntax tree avoids re-parsing the rendered HTML.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        Self { options }
    }

    /// Convert markdown to HTML with links resolved against `directory`
    pub fn render(&self, markdown: &str, directory: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let events: Vec<Event> = parser.collect();

        let rewriter = LinkRewriter::new(directory);
        let events = rewriter.transform(events);
        let events = drop_first_h1(events);

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the first top-level heading and its inline content
///
/// Subsequent `<h1>` elements are preserved. Applying this twice to a
/// stream yields the same result as applying it once with the first
/// heading already gone.
pub fn drop_first_h1(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut result = Vec::with_capacity(events.len());
    let mut dropped = false;
    let mut skipping = false;

    for event in events {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if !dropped && !skipping => {
                skipping = true;
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if skipping => {
                skipping = false;
                dropped = true;
            }
            _ if skipping => {}
            other => result.push(other),
        }
    }

    result
}
